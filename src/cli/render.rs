//! `folio render`: works export → static pages.
//!
//! Writes `<output>/<slug>/index.html` for each selected work plus
//! `<output>/index.html` listing them. With `--json` nothing is written;
//! the rendered fragments are printed instead.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use serde::Serialize;

use crate::cli::RenderArgs;
use crate::config::FolioConfig;
use crate::logger::ProgressLine;
use crate::render::{RenderContext, render_detail, render_index, wrap_page};
use crate::utils::plural_count;
use crate::work::{Work, filter_by_status, is_slug, load_works, validate_works};
use crate::{debug, log};

/// One rendered work, as printed by `--json`.
#[derive(Debug, Serialize)]
pub struct RenderedWork {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub html: String,
}

impl RenderedWork {
    pub fn new(work: &Work, ctx: &RenderContext<'_>) -> Self {
        Self {
            id: work.id.to_string(),
            slug: work.slug_with(ctx.slug).into_owned(),
            title: work.title.clone(),
            html: render_detail(work, ctx),
        }
    }
}

/// Entry point of the `render` command.
pub fn render_works(args: &RenderArgs, config: &FolioConfig) -> Result<()> {
    let works = select_works(load_works(&config.works.source)?, args, config)?;
    let ctx = RenderContext::new(config);

    if args.json {
        let rendered: Vec<_> = works.par_iter().map(|w| RenderedWork::new(w, &ctx)).collect();
        let json = if args.pretty {
            serde_json::to_string_pretty(&rendered)?
        } else {
            serde_json::to_string(&rendered)?
        };
        println!("{json}");
        return Ok(());
    }

    let written = write_site(&works, &config.works.output, &ctx)?;
    log!("render"; "wrote {} to {}", plural_count(written, "page"), config.works.output.display());
    Ok(())
}

/// Filter by status and refuse collections that would produce broken pages.
fn select_works(works: Vec<Work>, args: &RenderArgs, config: &FolioConfig) -> Result<Vec<Work>> {
    let total = works.len();
    let works = if args.all {
        works
    } else {
        filter_by_status(works, &config.works.statuses)
    };
    log!("render"; "rendering {} of {}", plural_count(works.len(), "work"), total);

    let diag = validate_works(&works, &config.slug);
    if diag.has_errors() {
        eprintln!("{diag}");
        bail!("works failed validation, nothing was rendered");
    }
    for warning in diag.warnings() {
        debug!("render"; "{}", warning);
    }
    Ok(works)
}

/// Render and write every page. Returns the number of files written.
pub fn write_site(works: &[Work], output: &Path, ctx: &RenderContext<'_>) -> Result<usize> {
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory '{}'", output.display()))?;

    let progress = ProgressLine::new("render", &[("pages", works.len())]);
    works.par_iter().try_for_each(|work| -> Result<()> {
        let page = RenderedWork::new(work, ctx);
        if !is_slug(&page.slug) {
            bail!(
                "refusing to write `{}`: slug `{}` is not a single path segment",
                page.title,
                page.slug
            );
        }
        let path = output.join(&page.slug).join("index.html");
        let document = wrap_page(&page.title, &page.html, &ctx.work_href(&page.slug), ctx);
        write_file(&path, &document)?;
        progress.inc("pages");
        Ok(())
    })?;
    progress.finish();

    let index = wrap_page("Works", &render_index(works, ctx), &ctx.index_href(), ctx);
    write_file(&output.join("index.html"), &index)?;

    Ok(works.len() + 1)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write '{}'", path.display()))
}
