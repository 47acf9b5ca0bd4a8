//! Rich text → flat HTML paragraphs.

use super::document::{Document, RichText};
use crate::utils::html::escape_into;

/// Reduce a long-description field to HTML.
///
/// - absent → `""`
/// - recognizable tree (object or JSON string) → one `<p>` per block that
///   has children, inline text escaped
/// - string that is not a recognizable tree → returned unchanged, as
///   pre-formatted content
/// - any other value → `""`
///
/// Never fails.
pub fn reduce(input: Option<&RichText>) -> String {
    match input {
        None => String::new(),
        Some(RichText::Serialized(s)) => match Document::from_json_str(s) {
            Some(doc) => to_html(&doc),
            None => s.clone(),
        },
        Some(RichText::Tree(value)) => Document::from_value(value)
            .map(|doc| to_html(&doc))
            .unwrap_or_default(),
    }
}

/// Render a normalized document.
pub fn to_html(doc: &Document) -> String {
    let mut html = String::new();
    for inlines in doc.blocks.iter().filter_map(|b| b.inlines.as_ref()) {
        html.push_str("<p>");
        for text in inlines {
            escape_into(&mut html, text);
        }
        html.push_str("</p>");
    }
    html
}
