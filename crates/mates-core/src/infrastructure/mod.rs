//! Infrastructure layer
//!
//! Concrete implementations of the outbound ports plus the sequence
//! allocator.

pub mod auth;
pub mod persistence;
pub mod sequence;
