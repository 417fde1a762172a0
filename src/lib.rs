//! keeporg - Google Keep Takeout to org-mode converter
//!
//! Converts a Takeout of Google Keep notes in .html format into .org files
//! grouped by label, formatting checklists and note metadata along the way.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::KeeporgError;
