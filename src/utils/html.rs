//! HTML utility functions.
//!
//! - `escape()`, `escape_attr()` - HTML entity escaping
//! - `Attrs` - attribute list builder for rendered tags

use std::borrow::Cow;
use std::fmt::Write;

// =============================================================================
// HTML Escaping
// =============================================================================

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters in text content.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
///
/// # Example
/// ```ignore
/// assert_eq!(escape("<script>"), "&lt;script&gt;");
/// assert_eq!(escape("hello"), "hello"); // No allocation
/// ```
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

/// Escape HTML attribute values.
///
/// Identical to `escape()` but semantically indicates attribute context.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

/// Escape `s` directly into `out`, skipping the intermediate `Cow`.
#[inline]
pub fn escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => out.push_str(entity),
            None => out.push(c),
        }
    }
}

/// Internal: escape with specified character set.
#[inline]
fn escape_with<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    escape_into(&mut result, s);
    Cow::Owned(result)
}

// =============================================================================
// Attribute Rendering
// =============================================================================

/// Ordered attribute list, rendered as ` name="value"` pairs.
///
/// Boolean attributes (`autoplay`, `muted`, ...) render without a value.
#[derive(Debug, Default)]
pub struct Attrs<'a> {
    items: Vec<(&'static str, Option<Cow<'a, str>>)>,
}

impl<'a> Attrs<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: &'static str, value: impl Into<Cow<'a, str>>) -> Self {
        self.items.push((name, Some(value.into())));
        self
    }

    pub fn flag(mut self, name: &'static str) -> Self {
        self.items.push((name, None));
        self
    }

    /// Render `<tag attrs>` (no closing tag).
    pub fn open(&self, tag: &str) -> String {
        let mut out = String::with_capacity(tag.len() + 2 + self.items.len() * 16);
        out.push('<');
        out.push_str(tag);
        for (name, value) in &self.items {
            match value {
                Some(v) => {
                    let _ = write!(out, " {name}=\"{}\"", escape_attr(v));
                }
                None => {
                    out.push(' ');
                    out.push_str(name);
                }
            }
        }
        out.push('>');
        out
    }
}

/// Wrap already-rendered `inner` HTML in `<tag attrs>...</tag>`.
pub fn element(tag: &str, attrs: &Attrs<'_>, inner: &str) -> String {
    let mut out = attrs.open(tag);
    out.push_str(inner);
    let _ = write!(out, "</{tag}>");
    out
}

// =============================================================================
// Tests
// =============================================================================
