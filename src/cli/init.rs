//! `folio init`: write a default configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::config::FolioConfig;
use crate::log;

/// Default config filename
pub const CONFIG_FILE: &str = "folio.toml";

/// Generate `folio.toml` content: a short header plus every section with
/// its default values.
pub fn generate_config_template() -> Result<String> {
    let mut out = format!(
        "# folio configuration file (v{})\n\
         # Paths are relative to this file.\n\n",
        env!("CARGO_PKG_VERSION")
    );
    out.push_str(&FolioConfig::default().to_toml()?);
    Ok(out)
}

/// Write the default config into `root`, refusing to overwrite an
/// existing one unless `force` is set.
pub fn write_config(root: &Path, force: bool) -> Result<PathBuf> {
    let path = root.join(CONFIG_FILE);
    if path.exists() && !force {
        bail!(
            "`{}` already exists.\nUse `folio init --force` to overwrite it.",
            path.display()
        );
    }

    let content = generate_config_template()?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(path)
}

/// Entry point of the `init` command.
pub fn init_site(config: &FolioConfig, force: bool) -> Result<()> {
    let path = write_config(config.get_root(), force)?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}
