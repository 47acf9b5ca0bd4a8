//! Config field path used to point diagnostics at a `folio.toml` key.

use owo_colors::OwoColorize;
use std::fmt;

/// Dotted path of a config key, e.g. `scroll.index_offset`.
///
/// Sections expose their paths as associated constants:
///
/// ```ignore
/// impl ScrollConfig {
///     pub const INDEX_OFFSET: FieldPath = FieldPath::new("scroll.index_offset");
/// }
///
/// diag.error(ScrollConfig::INDEX_OFFSET, "must be finite");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

