//! Command-line interface module.

mod args;
pub mod init;
pub mod render;
pub mod scroll;
pub mod slug;
pub mod validate;

pub use args::{Cli, Commands, RangePreset, RenderArgs, ScrollArgs, ValidateArgs};
