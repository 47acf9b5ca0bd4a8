//! HTML rendering of works.
//!
//! Every renderer is a pure function of its inputs plus a [`RenderContext`];
//! there is no module-level state, so works render in parallel.
//!
//! | Module    | Output                                         |
//! |-----------|------------------------------------------------|
//! | `media`   | `<img>` / `<video>` for a media document        |
//! | `social`  | list of outbound social links                   |
//! | `detail`  | detail fragment for one work                    |
//! | `index`   | list of all works linking to their details      |
//! | `page`    | full HTML document around a fragment            |

pub mod detail;
pub mod index;
pub mod media;
pub mod page;
pub mod social;

pub use detail::render_detail;
pub use index::render_index;
pub use media::{is_video, render_media};
pub use page::wrap_page;
pub use social::render_social_links;

use crate::config::{FolioConfig, SiteConfig, SlugConfig, ThemeConfig};

/// Site-wide settings a renderer may read.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub site: &'a SiteConfig,
    pub theme: &'a ThemeConfig,
    pub slug: &'a SlugConfig,
    /// URL path of the works index, without trailing slash.
    pub base: &'a str,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a FolioConfig) -> Self {
        Self {
            site: &config.site,
            theme: &config.theme,
            slug: &config.slug,
            base: config.works.base_path(),
        }
    }

    /// Link to a work's detail page.
    pub fn work_href(&self, slug: &str) -> String {
        format!("{}/{}/", self.base, slug)
    }

    /// Link to the works index.
    pub fn index_href(&self) -> String {
        format!("{}/", self.base)
    }
}
