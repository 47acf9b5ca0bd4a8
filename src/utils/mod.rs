//! Shared helpers: HTML escaping, timestamps, pluralization.

pub mod date;
pub mod html;
mod plural;

pub use plural::{plural_count, plural_s};
