//! Archive conversion use case
//!
//! Orchestrates the full workflow of turning an export directory into
//! per-label org files.

use crate::domain::extract::NoteExtractor;
use crate::domain::grouping::group_by_label;
use crate::domain::org::OrgRenderer;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use std::path::PathBuf;

/// Result of one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertSummary {
    /// Number of note files found and converted.
    pub note_count: usize,
    /// Paths of the org files written, in label order.
    pub written_files: Vec<PathBuf>,
}

/// Service for converting an export directory
pub struct ConvertService {
    repository: FileSystemRepository,
}

impl ConvertService {
    /// Create new convert service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConvertService { repository }
    }

    /// Execute the conversion.
    ///
    /// All notes are extracted and rendered before any output file is
    /// written; grouping happens on the full set.
    ///
    /// # Errors
    ///
    /// Returns an error if an input file cannot be read or an output
    /// file cannot be written. Unparseable timestamps are not errors;
    /// the affected notes keep the sentinel creation time.
    pub fn execute(&self) -> Result<ConvertSummary> {
        let note_files = self.repository.list_note_files()?;

        let mut rendered = Vec::with_capacity(note_files.len());
        for note_file in &note_files {
            let markup = self.repository.read_note_file(note_file)?;
            let note = NoteExtractor::extract(&markup);
            rendered.push(OrgRenderer::render(&note));
        }

        let mut written_files = Vec::new();
        for group in group_by_label(rendered) {
            let path = self
                .repository
                .write_group_file(&group.file_name(), &group.to_org_file_content())?;
            written_files.push(path);
        }

        Ok(ConvertSummary {
            note_count: note_files.len(),
            written_files,
        })
    }
}
