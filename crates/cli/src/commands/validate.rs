use folio_validator::validate_portfolio;
use std::path::PathBuf;

use super::load_portfolio;

pub async fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Validating portfolio at: {}", path.display());

    let portfolio = load_portfolio(&path)?;
    println!("✓ portfolio.toml parsed");
    println!("  Owner: {}", portfolio.site.owner);
    println!("  Projects: {}", portfolio.projects.len());

    let report = validate_portfolio(&portfolio.site, &portfolio.projects);

    for info in &report.info {
        println!("  ℹ {}", info);
    }
    for warning in &report.warnings {
        println!("  ⚠ {}", warning);
    }
    for error in &report.errors {
        println!("  ✗ {}", error);
    }

    if !report.is_ok() {
        anyhow::bail!("Validation failed with {} error(s)", report.errors.len());
    }

    // Same checks the build relies on
    portfolio.into_parts()?;

    println!("\n✓ Portfolio is valid");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CONTENT_FILE;

    #[tokio::test]
    async fn test_bundled_site_is_valid() {
        let site_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../site");
        run(site_dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_validate_fails_on_bad_link() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONTENT_FILE),
            r##"
[[project]]
id = "p"
number = "01"
title = "P"
tagline = "t"
description = "d"
status = "planned"
demo = "ftp://example.com"
"##,
        )
        .unwrap();

        let err = run(dir.path().to_path_buf()).await.unwrap_err();
        assert!(err.to_string().contains("1 error(s)"));
    }
}
