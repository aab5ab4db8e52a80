use crate::components::{
    chips, document, external_link, html_escape, site_footer, site_header, status_badge,
};
use crate::routes::Route;
use folio_core::{CARD_CONCEPT_LIMIT, ProjectRecord, SiteConfig};

/// Home page: hero plus one card per record, in collection order
pub fn index_page(site: &SiteConfig, records: &[ProjectRecord], is_preview: bool) -> String {
    let cards: String = records.iter().map(project_card).collect();

    let grid = if records.is_empty() {
        r#"<p class="empty-state">No projects yet.</p>"#.to_string()
    } else {
        format!(r#"<div class="project-grid">{}</div>"#, cards)
    };

    let body = format!(
        r##"{}
<section class="hero">
    <h2>{}</h2>
    <p class="intro">{}</p>
    <a class="hero-cta" href="#projects">View Projects</a>
</section>
<section id="projects" class="projects">
    <h3>Projects</h3>
    {}
</section>
{}"##,
        site_header(site),
        html_escape(&site.headline),
        html_escape(&site.intro),
        grid,
        site_footer(site, false)
    );

    let title = format!("{} | {}", html_escape(&site.owner), html_escape(&site.subtitle));
    document(&title, Some(&html_escape(&site.intro)), &body, is_preview)
}

/// Summary card linking to the record's detail route
fn project_card(record: &ProjectRecord) -> String {
    let route = Route::Project {
        id: record.id.clone(),
    };

    let concepts = &record.concepts[..record.concepts.len().min(CARD_CONCEPT_LIMIT)];

    // Affordances only; the whole card is already a link
    let mut affordances = String::new();
    if record.repository.is_some() {
        affordances.push_str(r#"<span class="affordance affordance-github">GitHub</span>"#);
    }
    if record.demo.is_some() {
        affordances.push_str(r#"<span class="affordance affordance-demo">Live Demo</span>"#);
    }

    format!(
        r#"<a class="project-card" data-project="{}" href="{}">
    <div class="card-header"><span class="card-number">#{}</span>{}</div>
    <h3 class="card-title">{}</h3>
    <p class="card-tagline">{}</p>
    <div class="card-tags">{}{}{}</div>
    <div class="card-footer"><div class="card-links">{}</div><span class="card-cta">View Details &rarr;</span></div>
</a>"#,
        html_escape(&record.id),
        html_escape(&route.path()),
        html_escape(&record.number),
        status_badge(record.status),
        html_escape(&record.title),
        html_escape(&record.tagline),
        chips(&record.technologies, "tech"),
        chips(&record.models, "model"),
        chips(concepts, "concept"),
        affordances
    )
}

/// Full page for a single record
pub fn detail_page(site: &SiteConfig, record: &ProjectRecord, is_preview: bool) -> String {
    let mut links = String::new();
    if let Some(repository) = &record.repository {
        links.push_str(&external_link(
            repository,
            "affordance affordance-github",
            "GitHub",
        ));
    }
    if let Some(demo) = &record.demo {
        links.push_str(&external_link(demo, "affordance affordance-demo", "Live Demo"));
    }

    let highlights: String = record
        .highlights
        .iter()
        .map(|h| format!(r#"<li class="highlight">{}</li>"#, html_escape(h)))
        .collect();

    let body = format!(
        r#"<header class="detail-header">
    <a class="back-link" href="/">Back to Portfolio</a>
    <div class="detail-links">{}</div>
</header>
<main class="detail">
    <div class="detail-meta"><span class="card-number">#{}</span>{}</div>
    <h1>{}</h1>
    <p class="detail-description">{}</p>
    <section class="detail-section">
        <h2>Architecture</h2>
        <pre class="architecture"><code class="language-mermaid">{}</code></pre>
        <p class="note">Rendered as a Mermaid diagram when viewed on GitHub.</p>
    </section>
    <div class="detail-grid">
        <section class="detail-section"><h2>Tech Stack</h2><div class="chips">{}</div></section>
        <section class="detail-section"><h2>AI Concepts</h2><div class="chips">{}</div></section>
        <section class="detail-section"><h2>LLMs / Models</h2><div class="chips">{}</div></section>
    </div>
    <section class="detail-section">
        <h2>Key Features</h2>
        <ul class="highlights">{}</ul>
    </section>
</main>
{}"#,
        links,
        html_escape(&record.number),
        status_badge(record.status),
        html_escape(&record.title),
        html_escape(&record.description),
        html_escape(&record.architecture),
        chips(&record.technologies, "tech"),
        chips(&record.concepts, "concept"),
        chips(&record.models, "model"),
        highlights,
        site_footer(site, true)
    );

    let title = format!("{} | {}", html_escape(&record.title), html_escape(&site.owner));
    document(&title, Some(&html_escape(&record.tagline)), &body, is_preview)
}

/// Empty-state page for any unknown route
pub fn not_found_page(site: &SiteConfig, is_preview: bool) -> String {
    let body = format!(
        r#"<main class="not-found">
    <h1>Project Not Found</h1>
    <p>There is no project at this address.</p>
    <a class="back-link" href="/">&larr; Back to Portfolio</a>
</main>
{}"#,
        site_footer(site, false)
    );

    document("Project Not Found", None, &body, is_preview)
}
