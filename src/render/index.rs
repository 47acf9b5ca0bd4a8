//! Index of all works.

use super::{RenderContext, media::render_media};
use crate::utils::html::{Attrs, element, escape};
use crate::work::Work;

/// Render the works list.
///
/// Each item carries `data-index` (its position, the value the scroll
/// tracker selects) and links to `{base}/{slug}/`. An empty list renders a
/// placeholder instead.
pub fn render_index(works: &[Work], ctx: &RenderContext<'_>) -> String {
    let body_style = ctx.theme.body_style();
    if works.is_empty() {
        let attrs = Attrs::new().set("class", "works-empty").set("style", body_style);
        return element("p", &attrs, "No works available yet.");
    }

    let heading_style = ctx.theme.heading_style();
    let items: String = works
        .iter()
        .enumerate()
        .map(|(index, work)| item(index, work, ctx, &heading_style, &body_style))
        .collect();

    element("ol", &Attrs::new().set("class", "works-index"), &items)
}

fn item(
    index: usize,
    work: &Work,
    ctx: &RenderContext<'_>,
    heading_style: &str,
    body_style: &str,
) -> String {
    let slug = work.slug_with(ctx.slug);

    let mut inner = work
        .media()
        .map(|media| render_media(media, &work.title))
        .filter(|html| !html.is_empty())
        .unwrap_or_else(|| {
            let attrs = Attrs::new().set("class", "work-media-missing").set("style", body_style);
            element("div", &attrs, "No media available")
        });

    let title = element(
        "span",
        &Attrs::new().set("class", "work-item-title").set("style", heading_style),
        &escape(&work.title),
    );
    let link = Attrs::new().set("href", ctx.work_href(&slug));
    inner.push_str(&element("a", &link, &title));

    if let Some(desc) = work.short_desc.as_deref().filter(|d| !d.is_empty()) {
        let attrs = Attrs::new().set("class", "work-item-desc").set("style", body_style);
        inner.push_str(&element("p", &attrs, &escape(desc)));
    }

    let attrs = Attrs::new()
        .set("class", "work-item")
        .set("data-index", index.to_string())
        .set("data-slug", slug.as_ref());
    element("li", &attrs, &inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FolioConfig;
    use crate::work::parse_works;

    #[test]
    fn test_index_items() {
        let config = FolioConfig::default();
        let works = parse_works(
            r#"[
                {"id": "1", "title": "Parallax Network", "media": {"url": "/m/a.png"}},
                {"id": "2", "title": "B & C", "slug": "bc", "short_desc": "desc"}
            ]"#,
        )
        .unwrap();

        let html = render_index(&works, &RenderContext::new(&config));
        assert!(html.starts_with(r#"<ol class="works-index"><li class="work-item" data-index="0" data-slug="parallax-network">"#));
        assert!(html.contains(r#"<a href="/works/parallax-network/">"#));
        assert!(html.contains(r#"data-index="1" data-slug="bc""#));
        assert!(html.contains(r#"<a href="/works/bc/">"#));
        assert!(html.contains(">B &amp; C</span>"));
        assert!(html.contains(">desc</p>"));
        assert!(html.contains("No media available"));
        assert!(html.ends_with("</li></ol>"));
    }

    #[test]
    fn test_empty_index() {
        let config = FolioConfig::default();
        let html = render_index(&[], &RenderContext::new(&config));
        assert!(html.contains("No works available yet."));
        assert!(!html.contains("<ol"));
    }
}
