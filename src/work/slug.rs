//! Slug derivation from work titles.

use crate::config::{SlugConfig, SlugMode};

/// Derive a URL slug from a title.
///
/// `strict` lowercases, turns every space into the separator and drops
/// everything outside `[A-Za-z0-9_-]`. Runs of spaces are not collapsed and
/// nothing is trimmed, so slugs match the ones the CMS already stored.
/// `ascii` transliterates first (`"Café"` → `"cafe"` instead of `"caf"`).
pub fn slugify(title: &str, config: &SlugConfig) -> String {
    let separator = config.separator.as_char();
    match config.mode {
        SlugMode::Strict => strict(title, separator),
        SlugMode::Ascii => strict(&deunicode::deunicode(title), separator),
    }
}

/// Whether `slug` is something strict derivation could have produced:
/// non-empty, only `[a-z0-9_-]`. Such a slug is always a single path
/// segment.
pub fn is_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-')
}

fn strict(title: &str, separator: char) -> String {
    title
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some(separator),
            c if c.is_ascii_alphanumeric() || c == '_' || c == '-' => Some(c),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SlugSeparator;

    fn strict_dash(title: &str) -> String {
        slugify(title, &SlugConfig::default())
    }

    #[test]
    fn test_basic() {
        assert_eq!(strict_dash("Parallax Network"), "parallax-network");
        assert_eq!(strict_dash("Hello, World!"), "hello-world");
        assert_eq!(strict_dash("snake_case-and-dash"), "snake_case-and-dash");
        assert_eq!(strict_dash("Épik 2024"), "pik-2024");
    }

    #[test]
    fn test_spaces_not_collapsed() {
        assert_eq!(strict_dash("  a  b "), "--a--b-");
        assert_eq!(strict_dash("a - b"), "a---b");
    }

    #[test]
    fn test_is_slug() {
        assert!(is_slug("parallax-network"));
        assert!(is_slug("snake_case-2024"));
        assert!(!is_slug(""));
        assert!(!is_slug("../../escaped"));
        assert!(!is_slug("/etc"));
        assert!(!is_slug("a\\b"));
        assert!(!is_slug("Upper"));
        assert!(!is_slug("dot.ted"));
        assert!(is_slug(&strict_dash("Hello, World!")));
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(strict_dash(""), "");
        assert_eq!(strict_dash("!!!"), "");
        assert_eq!(strict_dash("日本語"), "");
    }

    #[test]
    fn test_ascii_mode() {
        let config = SlugConfig {
            mode: SlugMode::Ascii,
            separator: SlugSeparator::Dash,
        };
        assert_eq!(slugify("Café Olé", &config), "cafe-ole");
        assert_eq!(slugify("Ärger über Öl", &config), "arger-uber-ol");
    }

    #[test]
    fn test_underscore_separator() {
        let config = SlugConfig {
            mode: SlugMode::Strict,
            separator: SlugSeparator::Underscore,
        };
        assert_eq!(slugify("Hello World", &config), "hello_world");
        // dashes typed into the title survive
        assert_eq!(slugify("A-B C", &config), "a-b_c");
    }

    #[test]
    fn test_idempotent_on_slugs() {
        let once = strict_dash("Some Title: Part 2");
        assert_eq!(strict_dash(&once), once);
    }
}
