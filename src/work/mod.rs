//! Portfolio works: the record model, slug derivation, loading and
//! validation of CMS exports.

mod load;
mod model;
mod slug;
mod validate;

pub use load::{WorkError, filter_by_status, load_works, parse_works};
pub use model::{DocId, Media, MediaRef, SocialKind, SocialLink, SocialLinkRef, Status, Work};
pub use slug::{is_slug, slugify};
pub use validate::{
    SHORT_DESC_MAX_CHARS, Severity, TITLE_MAX_CHARS, WorkDiagnostic, WorkDiagnostics,
    validate_works,
};
