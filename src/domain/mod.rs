//! Domain layer - Extraction, rendering, and grouping logic

pub mod extract;
pub mod grouping;
pub mod note;
pub mod org;

pub use extract::NoteExtractor;
pub use grouping::{group_by_label, LabelGroup};
pub use note::Note;
pub use org::{OrgRenderer, RenderedNote};
