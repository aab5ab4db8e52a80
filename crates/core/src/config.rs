use crate::error::{Error, Result};
use crate::repository::ContentRepository;
use crate::types::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Raw TOML configuration structure
/// This matches the portfolio.toml file structure exactly
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    site: Option<RawSite>,
    #[serde(default)]
    project: Vec<RawProject>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSite {
    owner: Option<String>,
    initials: Option<String>,
    subtitle: Option<String>,
    headline: Option<String>,
    intro: Option<String>,
    footer_note: Option<String>,
    copyright_year: Option<i32>,
    #[serde(default)]
    social: Vec<SocialLink>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProject {
    id: String,
    number: String,
    title: String,
    tagline: String,
    description: String,
    status: String, // Checked against the closed Status set
    github: Option<String>,
    demo: Option<String>,
    #[serde(default)]
    tech_stack: Vec<String>,
    #[serde(default)]
    ai_concepts: Vec<String>,
    #[serde(default)]
    llms: Vec<String>,
    #[serde(default)]
    architecture: String,
    #[serde(default)]
    highlights: Vec<String>,
}

/// Parsed portfolio.toml: site chrome plus the ordered project list
#[derive(Debug, Clone)]
pub struct Portfolio {
    pub site: SiteConfig,
    pub projects: Vec<ProjectRecord>,
}

impl Portfolio {
    /// Hand the projects to a repository, enforcing identifier invariants
    pub fn into_parts(self) -> Result<(SiteConfig, ContentRepository)> {
        let repository = ContentRepository::new(self.projects)?;
        Ok((self.site, repository))
    }
}

/// Parse portfolio.toml from a file path
pub fn parse_portfolio_toml<P: AsRef<Path>>(path: P) -> Result<Portfolio> {
    let content = fs::read_to_string(path)?;
    parse_portfolio_toml_str(&content)
}

/// Parse portfolio.toml from a string (useful for testing)
pub fn parse_portfolio_toml_str(content: &str) -> Result<Portfolio> {
    let raw: RawConfig = toml::from_str(content)?;

    let site = match raw.site {
        Some(site) => convert_site(site),
        None => SiteConfig::default(),
    };

    let projects = raw
        .project
        .into_iter()
        .map(convert_project)
        .collect::<Result<Vec<_>>>()?;

    Ok(Portfolio { site, projects })
}

fn convert_site(raw: RawSite) -> SiteConfig {
    let defaults = SiteConfig::default();
    SiteConfig {
        owner: raw.owner.unwrap_or(defaults.owner),
        initials: raw.initials.unwrap_or(defaults.initials),
        subtitle: raw.subtitle.unwrap_or(defaults.subtitle),
        headline: raw.headline.unwrap_or(defaults.headline),
        intro: raw.intro.unwrap_or(defaults.intro),
        footer_note: non_empty(raw.footer_note),
        copyright_year: raw.copyright_year,
        social: raw.social,
    }
}

fn convert_project(raw: RawProject) -> Result<ProjectRecord> {
    let status = raw
        .status
        .parse::<Status>()
        .map_err(|value| Error::UnknownStatus {
            id: raw.id.clone(),
            value,
        })?;

    Ok(ProjectRecord {
        id: raw.id,
        number: raw.number,
        title: raw.title,
        tagline: raw.tagline,
        description: raw.description,
        status,
        repository: non_empty(raw.github),
        demo: non_empty(raw.demo),
        technologies: raw.tech_stack,
        concepts: raw.ai_concepts,
        models: raw.llms,
        architecture: raw.architecture,
        highlights: raw.highlights,
    })
}

/// Treat blank optional strings as absent so they never render an empty link
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
