//! Keep note entity

use chrono::{NaiveDate, NaiveDateTime};

/// Creation timestamp assigned when the export carries no parseable date.
pub fn default_created() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2000, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// One note extracted from a single export file.
///
/// Fields hold the raw, still-escaped markup fragments captured by the
/// extractor; the renderer decodes and rewrites them.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub title: String,
    pub body: String,
    /// Labels in order of appearance; duplicates are kept.
    pub labels: Vec<String>,
    pub archived: bool,
    pub created: NaiveDateTime,
}

impl Note {
    pub fn new() -> Self {
        Note {
            title: String::new(),
            body: String::new(),
            labels: Vec::new(),
            archived: false,
            created: default_created(),
        }
    }
}

impl Default for Note {
    fn default() -> Self {
        Self::new()
    }
}
