//! Media header: image or looping video.

use crate::utils::html::{Attrs, element};
use crate::work::Media;

const VIDEO_EXTENSIONS: [&str; 3] = ["mp4", "webm", "ogg"];

/// Whether a media URL points at a video, judged by its extension.
///
/// Query strings and fragments are ignored, so signed storage URLs
/// (`clip.mp4?token=...`) still count.
pub fn is_video(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    path.rsplit_once('.').is_some_and(|(_, ext)| {
        !ext.contains('/')
            && VIDEO_EXTENSIONS
                .iter()
                .any(|video| ext.eq_ignore_ascii_case(video))
    })
}

/// Render a media document, or nothing when it has no URL.
///
/// Images fall back to `fallback_alt` (the work title) for their alt text.
pub fn render_media(media: &Media, fallback_alt: &str) -> String {
    let Some(url) = media.url() else {
        return String::new();
    };

    if is_video(url) {
        let source = Attrs::new().set("src", url).open("source");
        let attrs = Attrs::new()
            .set("class", "work-media")
            .flag("autoplay")
            .flag("muted")
            .flag("loop")
            .flag("playsinline")
            .flag("controls");
        element("video", &attrs, &source)
    } else {
        let alt = media
            .alt
            .as_deref()
            .filter(|a| !a.is_empty())
            .unwrap_or(fallback_alt);
        Attrs::new()
            .set("class", "work-media")
            .set("src", url)
            .set("alt", alt)
            .open("img")
    }
}
