//! Application layer
//!
//! Orchestrates the submission pipeline and the directory queries.

pub mod commands;
pub mod dto;
pub mod queries;

pub use commands::SubmissionService;
pub use queries::DirectoryService;
