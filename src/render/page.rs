//! Full HTML document around a rendered fragment.

use super::RenderContext;
use crate::utils::html::{Attrs, escape};

/// Wrap `body` in an HTML5 document.
///
/// The document title is `"{title} | {site title}"`, or just one of them
/// when the other is empty. When `site.url` is set a canonical link is
/// emitted for `path`.
pub fn wrap_page(title: &str, body: &str, path: &str, ctx: &RenderContext<'_>) -> String {
    let site_title = ctx.site.title.trim();
    let full_title = match (title.is_empty(), site_title.is_empty()) {
        (false, false) => format!("{title} | {site_title}"),
        (false, true) => title.to_owned(),
        (true, _) => site_title.to_owned(),
    };

    let mut html = String::with_capacity(body.len() + 512);
    html.push_str("<!DOCTYPE html>\n");
    html.push_str(&Attrs::new().set("lang", ctx.site.language.as_str()).open("html"));
    html.push_str("\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(&full_title)));

    if let Some(url) = ctx.site.url.as_deref() {
        let href = format!("{}{}", url.trim_end_matches('/'), path);
        html.push_str(&Attrs::new().set("rel", "canonical").set("href", href).open("link"));
        html.push('\n');
    }

    html.push_str("</head>\n");
    html.push_str(&Attrs::new().set("style", ctx.theme.body_style()).open("body"));
    html.push('\n');
    html.push_str(body);
    html.push_str("\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_wrap_page() {
        let config = test_parse_config("url = \"https://example.com/\"\nlanguage = \"id\"");
        let ctx = RenderContext::new(&config);
        let html = wrap_page("A <b>", "<main>x</main>", "/works/a/", &ctx);

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"id\">"));
        assert!(html.contains("<title>A &lt;b&gt; | Test</title>"));
        assert!(html.contains(r#"<link rel="canonical" href="https://example.com/works/a/">"#));
        assert!(html.contains("\n<main>x</main>\n"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_title_fallbacks() {
        let config = test_parse_config("");
        let ctx = RenderContext::new(&config);
        assert!(wrap_page("", "", "/", &ctx).contains("<title>Test</title>"));
        assert!(!wrap_page("", "", "/", &ctx).contains("canonical"));

        let mut config = config.clone();
        config.site.title.clear();
        let ctx = RenderContext::new(&config);
        assert!(wrap_page("Only", "", "/", &ctx).contains("<title>Only</title>"));
    }
}
