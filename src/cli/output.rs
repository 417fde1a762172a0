//! Output formatting utilities

use crate::application::ConvertSummary;

/// Format a conversion summary for display
pub fn format_summary(summary: &ConvertSummary) -> String {
    let mut output = format!("Found {} notes\n", summary.note_count);

    for path in &summary.written_files {
        output.push_str(&format!("Wrote {}\n", path.display()));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_empty_summary() {
        let summary = ConvertSummary {
            note_count: 0,
            written_files: vec![],
        };
        assert_eq!(format_summary(&summary), "Found 0 notes\n");
    }

    #[test]
    fn test_format_summary_lists_written_files() {
        let summary = ConvertSummary {
            note_count: 3,
            written_files: vec![PathBuf::from("out/work.org"), PathBuf::from("out/Untagged.org")],
        };

        let output = format_summary(&summary);
        assert!(output.contains("Found 3 notes"));
        assert!(output.contains("Wrote out/work.org"));
        assert!(output.contains("Wrote out/Untagged.org"));
    }
}
