//! Label grouping and per-file content assembly

use crate::domain::org::{org_file_name, RenderedNote};
use std::collections::BTreeMap;

/// Synthetic group for notes that carry no labels.
pub const UNTAGGED_GROUP: &str = "Untagged";

const ARCHIVED_HEADING: &str = "* *Archived*";

/// Notes bucketed under one label, in input order.
#[derive(Debug, Clone)]
pub struct LabelGroup {
    pub label: String,
    pub notes: Vec<RenderedNote>,
}

impl LabelGroup {
    /// Name of this group's output file.
    pub fn file_name(&self) -> String {
        org_file_name(&self.label)
    }

    /// Assemble the group's file content.
    ///
    /// Notes are sorted ascending by creation time (the sort is stable,
    /// so equal timestamps keep input order). Archived notes come first
    /// under a shared heading. Entries are blank-line separated and the
    /// file ends with a newline.
    pub fn to_org_file_content(&self) -> String {
        let mut notes = self.notes.clone();
        notes.sort_by_key(|note| note.created);

        let mut parts: Vec<&str> = Vec::new();
        if notes.iter().any(|note| note.archived) {
            parts.push(ARCHIVED_HEADING);
            parts.extend(
                notes
                    .iter()
                    .filter(|note| note.archived)
                    .map(|note| note.text.as_str()),
            );
        }
        parts.extend(
            notes
                .iter()
                .filter(|note| !note.archived)
                .map(|note| note.text.as_str()),
        );

        let mut content = parts.join("\n\n");
        content.push('\n');
        content
    }
}

/// Partition rendered notes into label groups.
///
/// A note with N label occurrences lands in N buckets (duplicate labels
/// included); a note without labels goes into the synthetic Untagged
/// group. Groups come back in label order.
pub fn group_by_label(notes: Vec<RenderedNote>) -> Vec<LabelGroup> {
    let mut groups: BTreeMap<String, Vec<RenderedNote>> = BTreeMap::new();

    for note in notes {
        if note.labels.is_empty() {
            groups
                .entry(UNTAGGED_GROUP.to_string())
                .or_default()
                .push(note);
        } else {
            for label in note.labels.clone() {
                groups.entry(label).or_default().push(note.clone());
            }
        }
    }

    groups
        .into_iter()
        .map(|(label, notes)| LabelGroup { label, notes })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::note::default_created;
    use chrono::NaiveDate;

    fn rendered(text: &str, labels: &[&str]) -> RenderedNote {
        RenderedNote {
            text: text.to_string(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
            archived: false,
            created: default_created(),
        }
    }

    fn rendered_at(text: &str, year: i32) -> RenderedNote {
        let mut note = rendered(text, &[]);
        note.created = NaiveDate::from_ymd_opt(year, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        note
    }

    #[test]
    fn test_note_with_two_labels_lands_in_two_groups() {
        let groups = group_by_label(vec![rendered("* A", &["work", "idea"])]);
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["idea", "work"]);
        assert_eq!(groups[0].notes.len(), 1);
        assert_eq!(groups[1].notes.len(), 1);
    }

    #[test]
    fn test_unlabeled_note_goes_to_untagged_only() {
        let groups = group_by_label(vec![rendered("* A", &[])]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, UNTAGGED_GROUP);
    }

    #[test]
    fn test_duplicate_label_keeps_both_occurrences() {
        let groups = group_by_label(vec![rendered("* A", &["work", "work"])]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].notes.len(), 2);
    }

    #[test]
    fn test_group_file_name() {
        let group = LabelGroup {
            label: "a.b/c".to_string(),
            notes: vec![],
        };
        assert_eq!(group.file_name(), "abc.org");
    }

    #[test]
    fn test_content_sorted_by_creation_time() {
        let group = LabelGroup {
            label: "work".to_string(),
            notes: vec![rendered_at("* Newer", 2019), rendered_at("* Older", 2017)],
        };
        let content = group.to_org_file_content();
        assert_eq!(content, "* Older\n\n* Newer\n");
    }

    #[test]
    fn test_content_ties_keep_input_order() {
        let group = LabelGroup {
            label: "work".to_string(),
            notes: vec![rendered("* First", &[]), rendered("* Second", &[])],
        };
        let content = group.to_org_file_content();
        assert_eq!(content, "* First\n\n* Second\n");
    }

    #[test]
    fn test_archived_notes_come_first_under_shared_heading() {
        let mut archived = rendered_at("** Old", 2019);
        archived.archived = true;
        let group = LabelGroup {
            label: "work".to_string(),
            notes: vec![rendered_at("* Current", 2017), archived],
        };
        let content = group.to_org_file_content();
        assert_eq!(content, "* *Archived*\n\n** Old\n\n* Current\n");
    }

    #[test]
    fn test_no_archived_heading_without_archived_notes() {
        let group = LabelGroup {
            label: "work".to_string(),
            notes: vec![rendered("* A", &[])],
        };
        assert_eq!(group.to_org_file_content(), "* A\n");
    }
}
