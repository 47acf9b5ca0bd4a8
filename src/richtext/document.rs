//! Rich-text input and its normalized tree.
//!
//! The CMS stores long descriptions as an editor state tree:
//!
//! ```json
//! { "root": { "children": [
//!     { "type": "paragraph", "children": [ { "text": "hello " }, { "text": "world" } ] }
//! ] } }
//! ```
//!
//! Depending on how a record was exported the same tree arrives either as a
//! JSON object or as a JSON-encoded string of it. [`RichText`] keeps both
//! shapes apart at the boundary; [`Document`] is the single shape the
//! reducer works on.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Long-description field as it arrives from the CMS.
///
/// Deserialized untagged: a JSON string becomes `Serialized`, any other
/// JSON value becomes `Tree`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RichText {
    Serialized(String),
    Tree(JsonValue),
}

impl From<&str> for RichText {
    fn from(s: &str) -> Self {
        Self::Serialized(s.to_owned())
    }
}

impl From<JsonValue> for RichText {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::String(s) => Self::Serialized(s),
            other => Self::Tree(other),
        }
    }
}

/// Normalized document: block nodes in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

/// A block-level node.
///
/// `inlines` is `None` for blocks without a `children` array; those are
/// not paragraph-like and produce no output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub inlines: Option<Vec<String>>,
}

impl Document {
    /// Normalize an editor-state tree.
    ///
    /// Returns `None` unless the value is an object with a `root` object
    /// whose `children` is an array. Inside that, anything goes: odd blocks
    /// are skipped and inline nodes without a string `text` count as empty.
    pub fn from_value(value: &JsonValue) -> Option<Self> {
        let children = value.get("root")?.as_object()?.get("children")?.as_array()?;
        let blocks = children.iter().map(Block::from_value).collect();
        Some(Self { blocks })
    }

    /// Parse a JSON-encoded tree.
    ///
    /// A string that decodes to another JSON string is decoded once more,
    /// for fields that were encoded twice on export.
    pub fn from_json_str(s: &str) -> Option<Self> {
        match serde_json::from_str::<JsonValue>(s).ok()? {
            JsonValue::String(inner) => {
                let value = serde_json::from_str::<JsonValue>(&inner).ok()?;
                Self::from_value(&value)
            }
            value => Self::from_value(&value),
        }
    }
}

impl Block {
    fn from_value(value: &JsonValue) -> Self {
        let inlines = value
            .get("children")
            .and_then(JsonValue::as_array)
            .map(|children| children.iter().map(inline_text).collect());
        Self { inlines }
    }
}

/// Text of an inline node; empty when absent or not a string.
fn inline_text(node: &JsonValue) -> String {
    node.get("text")
        .and_then(JsonValue::as_str)
        .unwrap_or_default()
        .to_owned()
}
