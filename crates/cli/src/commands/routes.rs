use anyhow::Result;
use folio_generator::{Generator, RouteManifest};
use std::path::PathBuf;

use super::load_portfolio;

/// Print the route set derived from the current content
pub async fn run(path: PathBuf, json: bool) -> Result<()> {
    let (site, repository) = load_portfolio(&path)?.into_parts()?;
    let routes = Generator::new(&repository, &site).enumerate_routes();

    if json {
        println!("{}", serde_json::to_string_pretty(&RouteManifest::new(&routes))?);
        return Ok(());
    }

    for route in &routes {
        println!("{:<40} -> {}", route.path(), route.output_path());
    }
    println!("\n{} route(s)", routes.len());

    Ok(())
}
