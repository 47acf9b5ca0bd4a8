//! Field constraints of the works collection.
//!
//! The CMS enforces most of these on save, but exports can come from older
//! records or hand-edited files. Every problem is collected so a single
//! run reports all of them.

use std::fmt;

use owo_colors::OwoColorize;
use rustc_hash::FxHashMap;

use super::Work;
use super::slug::is_slug;
use crate::config::SlugConfig;
use crate::utils::plural_count;

/// Longest title the collection accepts, in characters.
pub const TITLE_MAX_CHARS: usize = 32;

/// Longest short description the collection accepts, in characters.
pub const SHORT_DESC_MAX_CHARS: usize = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// One problem with one record.
#[derive(Debug, Clone)]
pub struct WorkDiagnostic {
    /// Position of the record in the export.
    pub index: usize,
    pub id: String,
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for WorkDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = format!("[#{} {}]", self.index, self.id);
        match self.severity {
            Severity::Error => write!(f, "{} {} {}", tag.cyan(), "→".red(), self.message),
            Severity::Warning => write!(f, "{} {} {}", tag.cyan(), "→".yellow(), self.message),
        }
    }
}

#[derive(Debug, Default)]
pub struct WorkDiagnostics {
    items: Vec<WorkDiagnostic>,
}

impl WorkDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, severity: Severity, index: usize, work: &Work, message: String) {
        self.items.push(WorkDiagnostic {
            index,
            id: work.id.to_string(),
            severity,
            message,
        });
    }

    pub fn error(&mut self, index: usize, work: &Work, message: impl Into<String>) {
        self.push(Severity::Error, index, work, message.into());
    }

    pub fn warning(&mut self, index: usize, work: &Work, message: impl Into<String>) {
        self.push(Severity::Warning, index, work, message.into());
    }

    pub fn errors(&self) -> impl Iterator<Item = &WorkDiagnostic> {
        self.items.iter().filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &WorkDiagnostic> {
        self.items.iter().filter(|d| d.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Err if any error was recorded; warnings alone pass.
    pub fn into_result(self) -> Result<Self, Self> {
        if self.has_errors() { Err(self) } else { Ok(self) }
    }
}

impl fmt::Display for WorkDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{item}")?;
        }
        let (errors, warnings) = (self.error_count(), self.warning_count());
        if errors + warnings > 0 {
            write!(
                f,
                "\n\n{} {}, {}",
                "found".dimmed(),
                plural_count(errors, "error").red().bold(),
                plural_count(warnings, "warning").yellow()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for WorkDiagnostics {}

/// Check every record and the collection-wide slug uniqueness.
pub fn validate_works(works: &[Work], slug_config: &SlugConfig) -> WorkDiagnostics {
    let mut diag = WorkDiagnostics::new();
    let mut seen: FxHashMap<String, usize> = FxHashMap::default();

    for (index, work) in works.iter().enumerate() {
        validate_fields(index, work, &mut diag);

        let slug = work.slug_with(slug_config);
        if slug.is_empty() {
            diag.error(index, work, "slug is empty; the title has no usable characters");
            continue;
        }
        if !is_slug(&slug) {
            diag.error(
                index,
                work,
                format!("slug `{slug}` may only contain a-z, 0-9, `-` and `_`"),
            );
            continue;
        }
        if let Some(&first) = seen.get(slug.as_ref()) {
            diag.error(
                index,
                work,
                format!(
                    "slug `{slug}` already used by #{first} ({})",
                    works[first].id
                ),
            );
        } else {
            seen.insert(slug.into_owned(), index);
        }
    }

    diag
}

fn validate_fields(index: usize, work: &Work, diag: &mut WorkDiagnostics) {
    let title_len = work.title.chars().count();
    if work.title.trim().is_empty() {
        diag.error(index, work, "title is required");
    } else if title_len > TITLE_MAX_CHARS {
        diag.error(
            index,
            work,
            format!("title is {title_len} characters, at most {TITLE_MAX_CHARS} allowed"),
        );
    }

    if let Some(desc) = &work.short_desc {
        let len = desc.chars().count();
        if len > SHORT_DESC_MAX_CHARS {
            diag.error(
                index,
                work,
                format!("short_desc is {len} characters, at most {SHORT_DESC_MAX_CHARS} allowed"),
            );
        }
    }

    for link in work.social_links() {
        if link.url.trim().is_empty() {
            diag.error(
                index,
                work,
                format!("social link `{}` has no url", link.display_label()),
            );
        } else if link.safe_url().is_none() {
            diag.error(
                index,
                work,
                format!(
                    "social link `{}` url `{}` must be an absolute http(s) or mailto link",
                    link.display_label(),
                    link.url
                ),
            );
        }
    }

    if work.status == super::Status::Published && work.media().and_then(|m| m.url()).is_none() {
        diag.warning(index, work, "published without media");
    }
}
