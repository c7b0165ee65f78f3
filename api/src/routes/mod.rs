//! Route handlers

pub mod assistant;
pub mod auth;
pub mod campaigns;
pub mod donors;
pub mod health;
pub mod requests;
