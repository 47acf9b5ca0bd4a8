//! Configuration section definitions.
//!
//! Each module corresponds to a section in `folio.toml`:
//!
//! | Module   | TOML Section | Purpose                              |
//! |----------|--------------|--------------------------------------|
//! | `site`   | `[site]`     | Site title, URL, language            |
//! | `works`  | `[works]`    | Works source, output, statuses       |
//! | `scroll` | `[scroll]`   | Active-work bucketing policy         |
//! | `slug`   | `[slug]`     | Slug derivation                      |
//! | `theme`  | `[theme]`    | Fonts injected into rendered markup  |

mod scroll;
mod site;
mod slug;
mod theme;
mod works;

pub use scroll::ScrollConfig;
pub use site::SiteConfig;
pub use slug::{SlugConfig, SlugMode, SlugSeparator};
pub use theme::ThemeConfig;
pub use works::WorksConfig;
