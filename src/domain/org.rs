//! Org-mode rendering of extracted notes

use crate::domain::note::Note;
use chrono::NaiveDateTime;

const UNCHECKED_ITEM: &str = "<li class=\"listitem\"><span class=\"bullet\">&#9744;</span>\n";
const CHECKED_ITEM: &str = "<li class=\"listitem checked\"><span class=\"bullet\">&#9745;</span>";
const UNCHECKED_PREFIX: &str = "- [ ] ";
const CHECKED_PREFIX: &str = "- [X] ";

/// Wrapper tags that carry no meaning once list items are rewritten.
const ERASED_TAGS: [&str; 5] = [
    "<span class=\"text\">",
    "</span>",
    "</li>",
    "<ul class=\"list\">",
    "</ul>",
];

/// A note rendered to org text, with the metadata grouping still needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedNote {
    pub text: String,
    /// Entity-decoded labels, order and duplicates preserved.
    pub labels: Vec<String>,
    pub archived: bool,
    pub created: NaiveDateTime,
}

/// Convert labels to an org tag string, e.g. `["a","b"]` -> `:a:b:`.
pub fn labels_to_tag_string(labels: &[String]) -> String {
    if labels.is_empty() {
        return String::new();
    }

    let mut tag_string = String::from(":");
    for label in labels {
        tag_string.push_str(label);
        tag_string.push(':');
    }

    tag_string
}

/// Output file name for a label, with filesystem-unsafe characters removed.
pub fn org_file_name(label: &str) -> String {
    let safe: String = label.chars().filter(|c| *c != '/' && *c != '.').collect();
    format!("{}.org", safe)
}

fn properties_block(created: NaiveDateTime) -> String {
    format!(
        ":PROPERTIES:\n:CREATED: {}\n:END:",
        created.format("[%Y-%m-%d %a %H:%M]")
    )
}

pub struct OrgRenderer;

impl OrgRenderer {
    /// Render one note to its org representation.
    ///
    /// Pure with respect to the input: title, body, and labels are copied
    /// and normalized here, so rendering distinct notes is independent.
    pub fn render(note: &Note) -> RenderedNote {
        let mut body = note.body.clone();

        // Convert Keep checklists to org checkbox items. The unchecked
        // pattern carries the newline the export places after the bullet.
        body = body.replace(UNCHECKED_ITEM, UNCHECKED_PREFIX);
        body = body.replace(CHECKED_ITEM, CHECKED_PREFIX);
        for tag in ERASED_TAGS {
            body = body.replace(tag, "");
        }
        // Export quirk: some list entries put a line break before the
        // entry's actual text.
        for prefix in [UNCHECKED_PREFIX, CHECKED_PREFIX] {
            body = body.replace(&format!("{}\n", prefix), prefix);
        }

        // Unescape entities before label stripping: labels are compared
        // in decoded form.
        let title = html_escape::decode_html_entities(&note.title).to_string();
        body = html_escape::decode_html_entities(&body).to_string();
        let labels: Vec<String> = note
            .labels
            .iter()
            .map(|label| html_escape::decode_html_entities(label).to_string())
            .collect();

        // Notes commonly repeat their labels as inline hashtags.
        for label in &labels {
            body = body.replace(&format!("#{}", label), "");
        }

        let mut body = body.trim().to_string();

        // Derive a display title from the body when the export has none.
        let title = if title.is_empty() {
            match body.find('\n') {
                Some(newline) => {
                    let derived = body[..newline].to_string();
                    body = body[newline + 1..].to_string();
                    derived
                }
                None => std::mem::take(&mut body),
            }
        } else {
            title
        };

        let text = assemble(&title, &body, &labels, note.archived, note.created);

        RenderedNote {
            text,
            labels,
            archived: note.archived,
            created: note.created,
        }
    }
}

/// Assemble the final org entry.
///
/// Archived notes nest one level deeper, under the per-file
/// `* *Archived*` heading. With both body and labels present the layout
/// is heading / properties / body / tag line, one per line; with labels
/// only, the tag string stays on the heading line.
fn assemble(
    title: &str,
    body: &str,
    labels: &[String],
    archived: bool,
    created: NaiveDateTime,
) -> String {
    let stars = if archived { "**" } else { "*" };
    let properties = properties_block(created);
    let tag_string = labels_to_tag_string(labels);

    match (body.is_empty(), labels.is_empty()) {
        (true, true) => format!("{} {}\n{}", stars, title, properties),
        (false, true) => format!("{} {}\n{}\n{}", stars, title, properties, body),
        (true, false) => format!("{} {} {}\n{}", stars, title, tag_string, properties),
        (false, false) => format!(
            "{} {}\n{}\n{}\n{}",
            stars, title, properties, body, tag_string
        ),
    }
}
