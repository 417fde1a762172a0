//! Note extraction from Keep export markup
//!
//! The export schema is fixed, so this is deliberately not an HTML parser:
//! a two-state scan over the lines of one note file, matching literal tag
//! fragments. Arbitrary nested markup is out of scope.

use crate::domain::note::Note;
use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::OnceLock;

const ARCHIVED_MARKER: &str = r#"<span class="archived" title="Note archived">"#;
const TITLE_OPEN: &str = r#"<div class="title">"#;
const CONTENT_OPEN: &str = r#"<div class="content">"#;
const LABEL_OPEN: &str = r#"<span class="label-name">"#;
const DIV_OPEN: &str = "<div";
const DIV_CLOSE: &str = "</div>";
const SPAN_CLOSE: &str = "</span>";
const LINE_BREAK: &str = "<br>";

/// Timestamp format used by the export, e.g. "Apr 21, 2018, 10:30:58 PM".
const CREATED_FORMAT: &str = "%b %d, %Y, %I:%M:%S %p";

/// Regex for the date-bearing line: div text ending in AM or PM right
/// before the closing tag.
fn date_line_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)>([^<>]+[AP]M)</div>\s*$").unwrap())
}

/// Scanner state. Metadata fields can appear before and after the body
/// container, so the scan flips between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    ScanningMetadata,
    ScanningBody,
}

pub struct NoteExtractor;

impl NoteExtractor {
    /// Extract one note from the markup of a single export file.
    ///
    /// The returned note is raw: title, body, and labels are still
    /// entity-escaped and the body is untrimmed. The renderer finishes
    /// the normalization.
    pub fn extract(markup: &str) -> Note {
        let mut note = Note::new();
        let mut state = ScanState::ScanningMetadata;
        let mut open_divs: i64 = 0;

        for raw_line in markup.lines() {
            open_divs += raw_line.matches(DIV_OPEN).count() as i64;
            open_divs -= raw_line.matches(DIV_CLOSE).count() as i64;

            let mut line = raw_line.to_string();

            if state == ScanState::ScanningMetadata {
                if line.contains(ARCHIVED_MARKER) {
                    note.archived = true;
                }

                if let Some(title) = value_between(&line, TITLE_OPEN, DIV_CLOSE) {
                    note.title = title.to_string();
                    continue;
                }

                // Creation timestamp, recognizable only by its trailing
                // AM/PM marker. Text that fails to parse keeps the
                // sentinel default. Checked after the title so a title
                // ending in "AM" is not mistaken for a date.
                if let Some(captures) = date_line_regex().captures(&line) {
                    if let Ok(created) =
                        NaiveDateTime::parse_from_str(captures[1].trim(), CREATED_FORMAT)
                    {
                        note.created = created;
                    }
                }

                if line.contains(CONTENT_OPEN) {
                    state = ScanState::ScanningBody;
                    // Same-line bodies start right after the opening tag.
                    line = line.replace(CONTENT_OPEN, "");
                } else if let Some(label) = value_between(&line, LABEL_OPEN, SPAN_CLOSE) {
                    note.labels.push(label.to_string());
                    continue;
                }
            }

            if state == ScanState::ScanningBody {
                if line.trim().eq_ignore_ascii_case(LINE_BREAK) {
                    note.body.push('\n');
                    continue;
                }

                let trimmed = line.trim_end();
                if trimmed.to_ascii_lowercase().ends_with(DIV_CLOSE) && open_divs == 1 {
                    // Only the body container itself is left open, so this
                    // closing tag ends it.
                    let inner = &trimmed[..trimmed.len() - DIV_CLOSE.len()];
                    note.body.push_str(&inner.replace(LINE_BREAK, "\n"));
                    state = ScanState::ScanningMetadata;
                } else {
                    note.body.push_str(&line.replace(LINE_BREAK, "\n"));
                    note.body.push('\n');
                }
            }
        }

        note
    }
}

/// Capture the text between two literal tag fragments on one line.
///
/// Tag matching ignores ASCII case; the captured text keeps its case.
fn value_between<'a>(line: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let haystack = line.to_ascii_lowercase();
    let start = haystack.find(&open.to_ascii_lowercase())? + open.len();
    let end = haystack[start..].find(&close.to_ascii_lowercase())? + start;
    Some(&line[start..end])
}
