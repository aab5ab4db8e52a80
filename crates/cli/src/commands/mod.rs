pub mod build;
pub mod init;
pub mod preview;
pub mod routes;
pub mod validate;

use anyhow::{Context, Result};
use chrono::Datelike;
use folio_core::{Portfolio, SiteConfig, parse_portfolio_toml};
use std::path::{Path, PathBuf};

/// Content file expected in every portfolio directory
pub const CONTENT_FILE: &str = "portfolio.toml";

/// Locate portfolio.toml inside `dir`, with a hint when it is missing
pub fn content_path(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        anyhow::bail!("Portfolio directory does not exist: {}", dir.display());
    }

    let path = dir.join(CONTENT_FILE);
    if !path.exists() {
        anyhow::bail!(
            "{} not found in {}\nRun 'folio init {}' first",
            CONTENT_FILE,
            dir.display(),
            dir.display()
        );
    }

    Ok(path)
}

pub fn load_portfolio(dir: &Path) -> Result<Portfolio> {
    let path = content_path(dir)?;
    parse_portfolio_toml(&path).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Default the footer year to the current year when the content leaves it unset
pub fn fill_copyright_year(site: &mut SiteConfig) {
    if site.copyright_year.is_none() {
        site.copyright_year = Some(chrono::Local::now().year());
    }
}
