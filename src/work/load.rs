//! Reading works exports from disk.
//!
//! Two shapes are accepted: a bare JSON array of works, or a CMS "find"
//! response (`{ "docs": [...], "totalDocs": ..., ... }`).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::{Status, Work};

#[derive(Debug, Error)]
pub enum WorkError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid works JSON")]
    Json(#[from] serde_json::Error),

    #[error("expected an array of works or an object with a `docs` array, found {0}")]
    Shape(&'static str),
}

/// Parse a works export.
pub fn parse_works(content: &str) -> Result<Vec<Work>, WorkError> {
    let value: JsonValue = serde_json::from_str(content)?;
    let list = match value {
        list @ JsonValue::Array(_) => list,
        JsonValue::Object(mut map) => match map.remove("docs") {
            Some(docs @ JsonValue::Array(_)) => docs,
            Some(other) => return Err(WorkError::Shape(kind_of(&other))),
            None => return Err(WorkError::Shape("an object without `docs`")),
        },
        other => return Err(WorkError::Shape(kind_of(&other))),
    };
    Ok(serde_json::from_value(list)?)
}

/// Read and parse a works export file.
pub fn load_works(path: &Path) -> Result<Vec<Work>> {
    let content =
        fs::read_to_string(path).map_err(|err| WorkError::Io(path.to_path_buf(), err))?;
    parse_works(&content).with_context(|| format!("failed to load works from `{}`", path.display()))
}

/// Keep works whose status is selected, preserving order.
pub fn filter_by_status(works: Vec<Work>, statuses: &[Status]) -> Vec<Work> {
    works
        .into_iter()
        .filter(|work| statuses.contains(&work.status))
        .collect()
}

fn kind_of(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
