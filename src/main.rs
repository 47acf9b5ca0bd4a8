//! Folio - presentation tooling for a CMS-backed portfolio site.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;
mod render;
mod richtext;
mod scroll;
mod utils;
mod work;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::FolioConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = FolioConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { force } => cli::init::init_site(&config, *force),
        Commands::Render { args } => cli::render::render_works(args, &config),
        Commands::Scroll { args } => cli::scroll::run_scroll(args, &config),
        Commands::Slug { titles } => cli::slug::print_slugs(titles, &config),
        Commands::Validate { args } => cli::validate::validate_site(args, &config),
    }
}
