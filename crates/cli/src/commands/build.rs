use anyhow::{Context, Result};
use folio_generator::{Generator, routes::PROJECTS_SEGMENT};
use folio_validator::validate_portfolio;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::{fill_copyright_year, load_portfolio};

/// Build static site for deployment
pub async fn run(path: PathBuf, output: PathBuf) -> Result<()> {
    println!("🔨 Building static site...");
    println!("   Source: {}", path.display());
    println!("   Output: {}", output.display());
    println!();

    let portfolio = load_portfolio(&path)?;

    // Refuse to build on content errors; warnings are reported and skipped
    let report = validate_portfolio(&portfolio.site, &portfolio.projects);
    for warning in &report.warnings {
        warn!("{}", warning);
        println!("   ⚠ {}", warning);
    }
    if !report.is_ok() {
        for error in &report.errors {
            eprintln!("   ✗ {}", error);
        }
        anyhow::bail!("Validation failed with {} error(s)", report.errors.len());
    }

    let (mut site, repository) = portfolio
        .into_parts()
        .context("Invalid portfolio content")?;
    fill_copyright_year(&mut site);

    println!("✓ Loaded: {}", site.owner);
    println!("  Projects: {}", repository.len());
    println!();

    println!("📄 Rendering pages...");
    let generator = Generator::new(&repository, &site);
    let generated = generator
        .generate_site()
        .context("Failed to generate site")?;

    fs::create_dir_all(&output).context("Failed to create output directory")?;
    remove_stale_projects(&output)?;

    for page in &generated.pages {
        write_file(&output, &page.output_path, page.html.as_bytes())?;
    }
    println!("   ✓ Wrote {} pages", generated.pages.len());

    for (asset_path, data) in &generated.assets {
        write_file(&output, asset_path, data)?;
    }
    println!("   ✓ Wrote {} assets", generated.assets.len());

    info!(
        pages = generated.pages.len(),
        output = %output.display(),
        "build complete"
    );

    println!();
    println!("✅ Build complete!");
    println!("   Output: {}", output.display());
    println!();
    println!("To test locally:");
    println!("   cd {} && python3 -m http.server 8000", output.display());
    println!();

    Ok(())
}

/// Detail pages from a previous build may belong to records that no longer
/// exist; clear them so the output matches the current route set exactly.
fn remove_stale_projects(output: &Path) -> Result<()> {
    let projects_dir = output.join(PROJECTS_SEGMENT);
    if projects_dir.is_dir() {
        fs::remove_dir_all(&projects_dir)
            .with_context(|| format!("Failed to clear {}", projects_dir.display()))?;
    }
    Ok(())
}

fn write_file(output: &Path, relative: &str, data: &[u8]) -> Result<()> {
    let dest = output.join(relative);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&dest, data).with_context(|| format!("Failed to write {}", dest.display()))
}
