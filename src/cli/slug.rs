//! `folio slug`: print the slug derived from each title.

use anyhow::Result;

use crate::config::{FolioConfig, SlugConfig};
use crate::log;
use crate::work::slugify;

/// Slugs for `titles`, in order.
pub fn derive_slugs<'a>(
    titles: impl IntoIterator<Item = &'a str>,
    config: &SlugConfig,
) -> Vec<String> {
    titles.into_iter().map(|t| slugify(t, config)).collect()
}

/// Entry point of the `slug` command.
pub fn print_slugs(titles: &[String], config: &FolioConfig) -> Result<()> {
    for (title, slug) in titles
        .iter()
        .zip(derive_slugs(titles.iter().map(String::as_str), &config.slug))
    {
        if slug.is_empty() {
            log!("warning"; "`{}` has no usable characters", title);
        }
        println!("{slug}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_derive_slugs_uses_config() {
        let config = test_parse_config("[slug]\nmode = \"ascii\"\nseparator = \"underscore\"");
        assert_eq!(
            derive_slugs(["Café Olé", "Hello World"], &config.slug),
            ["cafe_ole", "hello_world"]
        );
    }

    #[test]
    fn test_derive_slugs_default() {
        let config = SlugConfig::default();
        assert_eq!(derive_slugs(["Café Olé", "???"], &config), ["caf-ol", ""]);
    }
}
