//! Infrastructure layer - External I/O

pub mod repository;

pub use repository::{FileSystemRepository, NoteFile};
