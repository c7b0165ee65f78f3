//! Ports
//!
//! Hexagonal architecture seams: inbound use-case traits and outbound
//! collaborator interfaces.

pub mod inbound;
pub mod outbound;
