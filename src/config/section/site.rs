//! `[site]` section: basic site information used in rendered pages.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Site metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title, appended to page titles.
    pub title: String,

    /// Public site URL (e.g., "https://example.com").
    pub url: Option<String>,

    /// Language code for `<html lang>` (e.g., "en", "id").
    pub language: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            url: None,
            language: "en".into(),
        }
    }
}

impl SiteConfig {
    pub const URL: FieldPath = FieldPath::new("site.url");
    pub const LANGUAGE: FieldPath = FieldPath::new("site.language");

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be an http(s) URL with a host
    /// - `language` must not be empty
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.language.trim().is_empty() {
            diag.error_with_hint(Self::LANGUAGE, "language is empty", "use a code like \"en\"");
        }

        let Some(url_str) = &self.url else {
            return;
        };

        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::URL,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::URL,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }
    }
}
