//! Long-description rich text.
//!
//! | Module     | Purpose                                     |
//! |------------|---------------------------------------------|
//! | `document` | Input variants and the normalized tree      |
//! | `reduce`   | Tree → `<p>` paragraphs with escaped text   |

mod document;
mod reduce;

pub use document::{Block, Document, RichText};
pub use reduce::{reduce, to_html};
