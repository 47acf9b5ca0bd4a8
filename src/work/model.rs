//! Work records as the CMS exports them.
//!
//! Field names follow the REST shape (`short_desc`, `createdAt`, ...).
//! Relationships arrive populated (`{ "url": ..., "alt": ... }`) or, at
//! depth 0, as bare document ids; both are accepted and bare ids are
//! skipped when rendering.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::slug::slugify;
use crate::config::SlugConfig;
use crate::richtext::{Document, RichText, reduce};
use crate::utils::html::escape_into;
use crate::utils::date::DateTimeUtc;

// ============================================================================
// Document ids
// ============================================================================

/// Opaque document id. Numeric ids (SQL adapters) are kept as their
/// decimal text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DocId(String);

impl DocId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DocId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self(s),
            Raw::Number(n) => Self(n.to_string()),
        })
    }
}

// ============================================================================
// Status
// ============================================================================

/// Publication status of a work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Draft,
    Published,
    Archived,
}

impl Status {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }

    /// Capitalized form shown on detail pages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Published => "Published",
            Self::Archived => "Archived",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Media
// ============================================================================

/// Uploaded media document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Media {
    #[serde(default)]
    pub id: Option<DocId>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default, rename = "mimeType")]
    pub mime_type: Option<String>,
}

impl Media {
    /// Non-empty URL, if any.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MediaRef {
    Populated(Media),
    Id(DocId),
}

// ============================================================================
// Social links
// ============================================================================

/// Platform of a social link. Unknown values map to `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Website,
    Instagram,
    Tiktok,
    Github,
    Linkedin,
    Twitter,
    #[default]
    #[serde(other)]
    Other,
}

impl SocialKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Instagram => "instagram",
            Self::Tiktok => "tiktok",
            Self::Github => "github",
            Self::Linkedin => "linkedin",
            Self::Twitter => "twitter",
            Self::Other => "other",
        }
    }

    /// Display name used when a link has no label.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Website => "Website",
            Self::Instagram => "Instagram",
            Self::Tiktok => "TikTok",
            Self::Github => "GitHub",
            Self::Linkedin => "LinkedIn",
            Self::Twitter => "Twitter",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(default)]
    pub id: Option<DocId>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: SocialKind,
    #[serde(default)]
    pub url: String,
}

impl SocialLink {
    /// Label, falling back to the platform name.
    pub fn display_label(&self) -> &str {
        self.label
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or(self.kind.display_name())
    }

    /// The url when it is an absolute `http`, `https` or `mailto` link.
    pub fn safe_url(&self) -> Option<&str> {
        let url = self.url.trim();
        let parsed = url::Url::parse(url).ok()?;
        matches!(parsed.scheme(), "http" | "https" | "mailto").then_some(url)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SocialLinkRef {
    Populated(SocialLink),
    Id(DocId),
}

// ============================================================================
// Work
// ============================================================================

/// A portfolio work.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Work {
    #[serde(default)]
    pub id: DocId,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub short_desc: Option<String>,

    #[serde(default)]
    pub long_desc: Option<RichText>,

    #[serde(default)]
    pub media: Option<MediaRef>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub social_links: Vec<SocialLinkRef>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub status: Status,

    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,

    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<String>,
}

impl Work {
    /// Stored slug when present, otherwise derived from the title.
    pub fn slug_with(&self, config: &SlugConfig) -> Cow<'_, str> {
        match self.slug.as_deref() {
            Some(slug) if !slug.is_empty() => Cow::Borrowed(slug),
            _ => Cow::Owned(slugify(&self.title, config)),
        }
    }

    /// Populated media, if any.
    pub fn media(&self) -> Option<&Media> {
        match &self.media {
            Some(MediaRef::Populated(media)) => Some(media),
            _ => None,
        }
    }

    /// Populated social links in order; bare ids are skipped.
    pub fn social_links(&self) -> impl Iterator<Item = &SocialLink> {
        self.social_links.iter().filter_map(|link| match link {
            SocialLinkRef::Populated(link) => Some(link),
            SocialLinkRef::Id(_) => None,
        })
    }

    pub fn created(&self) -> Option<DateTimeUtc> {
        self.created_at.as_deref().and_then(DateTimeUtc::parse)
    }

    pub fn updated(&self) -> Option<DateTimeUtc> {
        self.updated_at.as_deref().and_then(DateTimeUtc::parse)
    }

    /// Long description as HTML paragraphs.
    ///
    /// Editor trees go through the reducer. Plain text that is not a tree
    /// is escaped and split into one paragraph per non-empty line.
    pub fn long_desc_html(&self) -> String {
        match &self.long_desc {
            Some(RichText::Serialized(text)) if Document::from_json_str(text).is_none() => {
                let mut html = String::with_capacity(text.len() + 16);
                for line in text.lines().filter(|l| !l.trim().is_empty()) {
                    html.push_str("<p>");
                    escape_into(&mut html, line);
                    html.push_str("</p>");
                }
                html
            }
            other => reduce(other.as_ref()),
        }
    }

    /// Short description split into lines, one paragraph each.
    pub fn short_desc_paragraphs(&self) -> impl Iterator<Item = &str> {
        self.short_desc
            .as_deref()
            .filter(|s| !s.is_empty())
            .into_iter()
            .flat_map(|s| s.split('\n'))
    }

    /// Whether the work has any description to show.
    pub fn has_overview(&self) -> bool {
        self.short_desc.as_deref().is_some_and(|s| !s.is_empty()) || self.long_desc.is_some()
    }
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SlugMode, SlugSeparator};
    use serde_json::json;

    fn work(value: serde_json::Value) -> Work {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_minimal_record() {
        let w = work(json!({"id": "abc", "title": "Parallax"}));
        assert_eq!(w.id.as_str(), "abc");
        assert_eq!(w.status, Status::Draft);
        assert!(w.media().is_none());
        assert_eq!(w.social_links().count(), 0);
        assert!(!w.has_overview());
    }

    #[test]
    fn test_numeric_id() {
        let w = work(json!({"id": 42, "title": "x"}));
        assert_eq!(w.id.to_string(), "42");
    }

    #[test]
    fn test_nulls_accepted() {
        let w = work(json!({
            "id": "1", "title": "x", "slug": null, "media": null,
            "long_desc": null, "social_links": null, "status": null
        }));
        assert_eq!(w.slug, None);
        assert!(w.social_links.is_empty());
        assert_eq!(w.status, Status::Draft);
    }

    #[test]
    fn test_full_record() {
        let w = work(json!({
            "id": "66f1",
            "title": "Parallax Network",
            "slug": "parallax-network",
            "short_desc": "line one\nline two",
            "long_desc": {"root": {"children": [{"children": [{"text": "body"}]}]}},
            "media": {"id": "m1", "url": "/media/hero.mp4", "alt": "Hero", "mimeType": "video/mp4"},
            "social_links": [
                {"id": "s1", "label": "Repo", "type": "github", "url": "https://github.com/x"},
                "s2",
                {"id": "s3", "type": "mastodon", "url": "https://m.example"}
            ],
            "status": "published",
            "createdAt": "2024-06-15T14:30:45.123Z",
            "updatedAt": "2024-06-16T00:00:00.000Z"
        }));

        assert_eq!(w.status, Status::Published);
        assert_eq!(w.media().and_then(Media::url), Some("/media/hero.mp4"));
        assert_eq!(w.media().and_then(|m| m.mime_type.as_deref()), Some("video/mp4"));

        let links: Vec<_> = w.social_links().collect();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].kind, SocialKind::Github);
        assert_eq!(links[0].display_label(), "Repo");
        assert_eq!(links[1].kind, SocialKind::Other);
        assert_eq!(links[1].display_label(), "Other");

        assert_eq!(w.short_desc_paragraphs().collect::<Vec<_>>(), ["line one", "line two"]);
        assert_eq!(w.long_desc_html(), "<p>body</p>");
        assert_eq!(w.created(), Some(DateTimeUtc::new(2024, 6, 15, 14, 30, 45)));
        assert_eq!(w.updated().map(|d| d.day), Some(16));
    }

    #[test]
    fn test_media_as_bare_id() {
        let w = work(json!({"id": "1", "title": "x", "media": "m1"}));
        assert_eq!(w.media, Some(MediaRef::Id(DocId::new("m1"))));
        assert!(w.media().is_none());

        let w = work(json!({"id": "1", "title": "x", "media": 7}));
        assert_eq!(w.media, Some(MediaRef::Id(DocId::new("7"))));
    }

    #[test]
    fn test_long_desc_as_string() {
        let w = work(json!({
            "id": "1", "title": "x",
            "long_desc": "{\"root\":{\"children\":[{\"children\":[{\"text\":\"a\"}]}]}}"
        }));
        assert!(matches!(w.long_desc, Some(RichText::Serialized(_))));
        assert_eq!(w.long_desc_html(), "<p>a</p>");
    }

    #[test]
    fn test_long_desc_plain_text_escaped() {
        let w = work(json!({
            "title": "x",
            "long_desc": "<script>alert(1)</script>\n\nsecond & last"
        }));
        assert_eq!(
            w.long_desc_html(),
            "<p>&lt;script&gt;alert(1)&lt;/script&gt;</p><p>second &amp; last</p>"
        );
    }

    #[test]
    fn test_slug_with() {
        let config = SlugConfig::default();
        let stored = work(json!({"title": "Hello World", "slug": "custom"}));
        assert!(matches!(stored.slug_with(&config), Cow::Borrowed("custom")));

        let derived = work(json!({"title": "Hello World", "slug": ""}));
        assert_eq!(derived.slug_with(&config), "hello-world");

        let underscore = SlugConfig {
            mode: SlugMode::Strict,
            separator: SlugSeparator::Underscore,
        };
        let missing = work(json!({"title": "Hello World"}));
        assert_eq!(missing.slug_with(&underscore), "hello_world");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(Status::Archived.label(), "Archived");
        assert_eq!(Status::Published.to_string(), "published");
    }

    #[test]
    fn test_unparseable_date_is_none() {
        let w = work(json!({"title": "x", "createdAt": "yesterday"}));
        assert_eq!(w.created(), None);
    }
}
