use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::CONTENT_FILE;

/// Escape a string for safe inclusion in a TOML basic string
///
/// The starter file is written as text so it can keep its comments,
/// which rules out serializing it with the toml crate.
fn toml_escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\x08', "\\b")
        .replace('\x0C', "\\f")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Up to three initials for the header badge, e.g. "Hiren Purabiya" → "HP"
fn initials(owner: &str) -> String {
    let initials: String = owner
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(3)
        .collect();

    if initials.is_empty() {
        "P".to_string()
    } else {
        initials
    }
}

/// Create a starter portfolio.toml in an existing directory.
///
/// # Errors
///
/// Returns an error if:
/// - The directory doesn't exist
/// - portfolio.toml already exists in the directory
/// - Writing the file fails
pub async fn run(path: PathBuf, owner: Option<String>) -> Result<()> {
    println!("Initializing portfolio directory: {}", path.display());

    if !path.exists() {
        anyhow::bail!(
            "Directory '{}' does not exist. Create it first: mkdir {}",
            path.display(),
            path.display()
        );
    }

    let content_path = path.join(CONTENT_FILE);
    if content_path.exists() {
        anyhow::bail!(
            "{} already exists at {}\nHint: Delete it first or use a different directory",
            CONTENT_FILE,
            content_path.display()
        );
    }

    let owner = owner.unwrap_or_else(|| "Your Name".to_string());
    write_starter(&path, &owner)?;

    println!("\n✓ Initialization complete!");
    println!("\nGenerated structure:");
    println!("  {}/", path.display());
    println!("  └── {}       ← Edit this to add your projects", CONTENT_FILE);

    println!("\nNext steps:");
    println!("  1. Edit {} (site details, one [[project]] per project)", CONTENT_FILE);
    println!("  2. Check it: folio validate {}", path.display());
    println!("  3. Preview: folio preview {}", path.display());

    Ok(())
}

fn write_starter(dir: &Path, owner: &str) -> Result<()> {
    let content = format!(
        r##"# Portfolio content. Projects appear on the home page in the order listed.

[site]
owner = "{owner}"
initials = "{initials}"
subtitle = "AI/ML Portfolio"
headline = "Building With AI"
intro = "A portfolio of hands-on projects exploring the latest GenAI technologies."
# footer_note = "Hosted on GitHub Pages"
# copyright_year = 2026      # defaults to the current year

# [[site.social]]
# label = "GitHub"
# url = "https://github.com/your-handle"

[[project]]
id = "arxiv-paper-finder"     # URL segment: lowercase letters, digits, '-' and '_'
number = "01"
title = "ArXiv Paper Finder"
tagline = "AI-powered chatbot that searches and summarizes research papers from arXiv."
description = "Ask natural language questions and instantly discover relevant arXiv papers with AI-generated summaries."
status = "in-progress"        # live | in-progress | planned
github = "https://github.com/your-handle/arxiv-paper-finder"
# demo = "https://your-handle.github.io/arxiv-paper-finder"
tech_stack = ["Python 3.11+", "Gradio"]
ai_concepts = ["Retrieval-Augmented Generation (RAG)", "Tool Use / Function Calling", "Prompt Engineering"]
llms = ["OpenAI GPT-4o"]
architecture = """flowchart LR
    U[User Query] --> CB[Chatbot UI]
    CB --> API[API Layer]
    API --> AX[arXiv Search API]
    AX --> LLM[LLM - Summarize & Answer]
    LLM --> CB"""
highlights = [
    "Natural language paper search across arXiv",
    "AI-generated summaries of paper abstracts",
    "Multi-turn conversation for follow-up questions",
]
"##,
        owner = toml_escape_string(owner),
        initials = toml_escape_string(&initials(owner)),
    );

    let content_path = dir.join(CONTENT_FILE);
    fs::write(&content_path, content)
        .with_context(|| format!("Failed to write {}", content_path.display()))?;
    println!("✓ Created {}", content_path.display());

    Ok(())
}
