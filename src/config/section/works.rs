//! `[works]` section: where works come from and where pages go.
//!
//! # Example
//!
//! ```toml
//! [works]
//! source = "works.json"
//! output = "public/works"
//! base = "/works"
//! statuses = ["published"]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::work::Status;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorksConfig {
    /// CMS export: a JSON list of works or a `{ "docs": [...] }` response.
    pub source: PathBuf,

    /// Directory receiving rendered pages.
    pub output: PathBuf,

    /// URL path the works pages are served under.
    pub base: String,

    /// Statuses that get rendered.
    pub statuses: Vec<Status>,
}

impl Default for WorksConfig {
    fn default() -> Self {
        Self {
            source: "works.json".into(),
            output: "public/works".into(),
            base: "/works".into(),
            statuses: vec![Status::Published],
        }
    }
}

impl WorksConfig {
    pub const BASE: FieldPath = FieldPath::new("works.base");
    pub const STATUSES: FieldPath = FieldPath::new("works.statuses");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.base.starts_with('/') {
            diag.error_with_hint(
                Self::BASE,
                format!("base `{}` must be an absolute URL path", self.base),
                "use a path like \"/works\"",
            );
        }
        if self.statuses.is_empty() {
            diag.error_with_hint(
                Self::STATUSES,
                "no statuses selected, nothing would be rendered",
                "use e.g. statuses = [\"published\"]",
            );
        }
    }

    /// Base path without trailing slash ("/" becomes "").
    pub fn base_path(&self) -> &str {
        self.base.trim_end_matches('/')
    }

    pub fn includes(&self, status: Status) -> bool {
        self.statuses.contains(&status)
    }
}
