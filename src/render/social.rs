//! Outbound social links of a work.

use crate::utils::html::{Attrs, element, escape};
use crate::work::SocialLink;

/// Render links as `<ul class="social-links">`; empty when there are none.
///
/// Links without an http(s) or mailto url are left out.
pub fn render_social_links<'a>(links: impl IntoIterator<Item = &'a SocialLink>) -> String {
    let items: String = links
        .into_iter()
        .filter_map(|link| Some((link, link.safe_url()?)))
        .map(|(link, href)| {
            let class = format!("social social-{}", link.kind.as_str());
            let attrs = Attrs::new()
                .set("class", class)
                .set("href", href)
                .set("rel", "noopener noreferrer")
                .set("target", "_blank");
            let anchor = element("a", &attrs, &escape(link.display_label()));
            format!("<li>{anchor}</li>")
        })
        .collect();

    if items.is_empty() {
        return items;
    }
    element("ul", &Attrs::new().set("class", "social-links"), &items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::work::SocialKind;

    fn link(kind: SocialKind, url: &str, label: Option<&str>) -> SocialLink {
        SocialLink {
            kind,
            url: url.into(),
            label: label.map(Into::into),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_links_in_order() {
        let links = [
            link(SocialKind::Github, "https://github.com/x", Some("Repo")),
            link(SocialKind::Instagram, "https://instagram.com/x", None),
        ];
        assert_eq!(
            render_social_links(&links),
            concat!(
                r#"<ul class="social-links">"#,
                r#"<li><a class="social social-github" href="https://github.com/x" rel="noopener noreferrer" target="_blank">Repo</a></li>"#,
                r#"<li><a class="social social-instagram" href="https://instagram.com/x" rel="noopener noreferrer" target="_blank">Instagram</a></li>"#,
                "</ul>"
            )
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(render_social_links(std::iter::empty()), "");
        let blank = [link(SocialKind::Website, "  ", Some("x"))];
        assert_eq!(render_social_links(&blank), "");
    }

    #[test]
    fn test_unsafe_schemes_dropped() {
        let links = [
            link(SocialKind::Website, "javascript:alert(1)", Some("x")),
            link(SocialKind::Website, "data:text/html,hi", None),
            link(SocialKind::Website, "github.com/x", None),
            link(SocialKind::Other, "mailto:me@example.com", Some("Mail")),
        ];
        let html = render_social_links(&links);
        assert!(!html.contains("javascript:"));
        assert!(!html.contains("data:"));
        assert_eq!(html.matches("<li>").count(), 1);
        assert!(html.contains(r#"href="mailto:me@example.com""#));

        assert_eq!(render_social_links(&links[..3]), "");
    }

    #[test]
    fn test_label_escaped() {
        let links = [link(SocialKind::Other, "https://e.x/?a=1&b=2", Some("<b>Me</b>"))];
        let html = render_social_links(&links);
        assert!(html.contains("&lt;b&gt;Me&lt;/b&gt;"));
        assert!(html.contains("a=1&amp;b=2"));
    }
}
