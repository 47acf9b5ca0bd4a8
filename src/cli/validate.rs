//! `folio validate`: check a works export against the collection rules.

use anyhow::{Result, bail};

use crate::cli::ValidateArgs;
use crate::config::FolioConfig;
use crate::log;
use crate::utils::plural_count;
use crate::work::{WorkDiagnostics, load_works, validate_works};

/// Entry point of the `validate` command.
pub fn validate_site(args: &ValidateArgs, config: &FolioConfig) -> Result<()> {
    let works = load_works(&config.works.source)?;
    log!("validate"; "checking {}", plural_count(works.len(), "work"));

    let diag = validate_works(&works, &config.slug);
    report(&diag, args.warn_only)
}

fn report(diag: &WorkDiagnostics, warn_only: bool) -> Result<()> {
    if diag.is_empty() {
        log!("validate"; "all works valid");
        return Ok(());
    }

    eprintln!("{diag}");
    if diag.has_errors() && !warn_only {
        bail!(
            "validation failed: {}",
            plural_count(diag.error_count(), "error")
        );
    }
    Ok(())
}
