//! Detail fragment for a single work.
//!
//! Layout, top to bottom:
//!
//! ```text
//! header   media (image or looping video), when the work has one
//! labels   "Client", plus "Overview" when there is a description
//! content  title, short description paragraphs, long description
//! meta     status, creation date
//! links    social links
//! footer   link back to the works index
//! ```

use super::{RenderContext, media::render_media, social::render_social_links};
use crate::utils::html::{Attrs, element, escape, escape_into};
use crate::work::Work;

/// Render the detail fragment of `work`.
pub fn render_detail(work: &Work, ctx: &RenderContext<'_>) -> String {
    let body_style = ctx.theme.body_style();
    let heading_style = ctx.theme.heading_style();
    let mut html = String::with_capacity(1024);

    html.push_str(&Attrs::new().set("class", "work-detail").open("article"));

    if let Some(media) = work.media() {
        let hero = render_media(media, &work.title);
        if !hero.is_empty() {
            html.push_str(&element("header", &Attrs::new().set("class", "work-hero"), &hero));
        }
    }

    html.push_str(r#"<div class="work-body">"#);
    html.push_str(&labels(work, &body_style));
    html.push_str(&content(work, &heading_style, &body_style));
    html.push_str(&meta(work, &body_style));
    html.push_str(&render_social_links(work.social_links()));
    html.push_str("</div>");

    let back = Attrs::new()
        .set("class", "work-back")
        .set("href", ctx.index_href())
        .set("style", body_style.as_str());
    let footer = element("a", &back, "← All Works");
    html.push_str(&element("footer", &Attrs::new().set("class", "work-footer"), &footer));

    html.push_str("</article>");
    html
}

fn labels(work: &Work, style: &str) -> String {
    let label = Attrs::new().set("class", "work-label").set("style", style);
    let mut inner = element("h3", &label, "Client");
    if work.has_overview() {
        inner.push_str(&element("h3", &label, "Overview"));
    }
    element("div", &Attrs::new().set("class", "work-labels"), &inner)
}

fn content(work: &Work, heading_style: &str, body_style: &str) -> String {
    let mut inner = element(
        "h1",
        &Attrs::new().set("class", "work-title").set("style", heading_style),
        &escape(&work.title),
    );

    let mut paragraphs = String::new();
    for line in work.short_desc_paragraphs() {
        paragraphs.push_str("<p>");
        escape_into(&mut paragraphs, line);
        paragraphs.push_str("</p>");
    }
    if !paragraphs.is_empty() {
        let attrs = Attrs::new().set("class", "work-short").set("style", body_style);
        inner.push_str(&element("div", &attrs, &paragraphs));
    }

    if work.long_desc.is_some() {
        let attrs = Attrs::new().set("class", "work-long prose").set("style", body_style);
        inner.push_str(&element("div", &attrs, &work.long_desc_html()));
    }

    element("div", &Attrs::new().set("class", "work-content"), &inner)
}

fn meta(work: &Work, style: &str) -> String {
    let mut inner = String::new();
    inner.push_str("<dt>Status</dt>");
    inner.push_str(&element(
        "dd",
        &Attrs::new().set("class", "work-status"),
        work.status.label(),
    ));

    if let Some(created) = work.created() {
        let time = element(
            "time",
            &Attrs::new().set("datetime", created.to_rfc3339()),
            &created.to_long_date(),
        );
        inner.push_str("<dt>Created</dt>");
        inner.push_str(&element("dd", &Attrs::new(), &time));
    }

    element(
        "dl",
        &Attrs::new().set("class", "work-meta").set("style", style),
        &inner,
    )
}
