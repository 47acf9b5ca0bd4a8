//! `[slug]` section: how work slugs are derived from titles.

use serde::{Deserialize, Serialize};

/// Slug derivation mode.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugMode {
    /// Lowercase, spaces → separator, drop everything outside `[A-Za-z0-9_-]` (default).
    ///
    /// Matches the slugs the CMS generates, so existing URLs stay valid.
    #[default]
    Strict,
    /// Transliterate Unicode → ASCII first, then apply `strict`.
    Ascii,
}

/// Separator character for slugs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugSeparator {
    /// Dash separator (`-`) (default).
    #[default]
    Dash,
    /// Underscore separator (`_`).
    Underscore,
}

impl SlugSeparator {
    /// Get the character representation.
    pub const fn as_char(&self) -> char {
        match self {
            Self::Dash => '-',
            Self::Underscore => '_',
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SlugConfig {
    pub mode: SlugMode,
    /// Replacement for spaces.
    pub separator: SlugSeparator,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.slug.mode, SlugMode::Strict);
        assert_eq!(config.slug.separator, SlugSeparator::Dash);
    }

    #[test]
    fn test_mode_parsing() {
        for (input, expected) in [("strict", SlugMode::Strict), ("ascii", SlugMode::Ascii)] {
            let config = test_parse_config(&format!("[slug]\nmode = \"{input}\""));
            assert_eq!(config.slug.mode, expected, "mode failed for {input}");
        }
    }

    #[test]
    fn test_separator_parsing() {
        let config = test_parse_config("[slug]\nseparator = \"underscore\"");
        assert_eq!(config.slug.separator, SlugSeparator::Underscore);
        assert_eq!(config.slug.separator.as_char(), '_');

        let config = test_parse_config("[slug]\nseparator = \"dash\"");
        assert_eq!(config.slug.separator.as_char(), '-');
    }
}
