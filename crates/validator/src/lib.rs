// Content lints beyond the fatal checks done while loading.
// Reports every problem at once instead of stopping at the first.

use folio_core::repository::validate_identifier;
use folio_core::{CARD_CONCEPT_LIMIT, ProjectRecord, SiteConfig};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn validate_portfolio(site: &SiteConfig, records: &[ProjectRecord]) -> ValidationReport {
    let mut report = ValidationReport::default();

    if site.owner.trim().is_empty() {
        report.errors.push("site.owner is empty".to_string());
    }
    for link in &site.social {
        check_url(&mut report, &link.url, &format!("site.social '{}'", link.label));
    }

    let mut seen_ids = HashSet::new();
    let mut labels: HashMap<&str, Vec<&str>> = HashMap::new();

    for record in records {
        if let Err(e) = validate_identifier(&record.id) {
            report.errors.push(e.to_string());
        }
        if !seen_ids.insert(record.id.as_str()) {
            report
                .errors
                .push(format!("Duplicate project identifier '{}'", record.id));
        }
        labels
            .entry(record.number.as_str())
            .or_default()
            .push(record.id.as_str());

        validate_record(&mut report, record);
    }

    let mut duplicated: Vec<_> = labels.into_iter().filter(|(_, ids)| ids.len() > 1).collect();
    duplicated.sort();
    for (label, ids) in duplicated {
        report.warnings.push(format!(
            "Sequence label '#{}' is shared by: {}",
            label,
            ids.join(", ")
        ));
    }

    report.info.push(format!(
        "{} project(s), {} route(s)",
        records.len(),
        records.len() + 1
    ));

    report
}

fn validate_record(report: &mut ValidationReport, record: &ProjectRecord) {
    let id = &record.id;

    for (field, value) in [
        ("title", &record.title),
        ("tagline", &record.tagline),
        ("description", &record.description),
    ] {
        if value.trim().is_empty() {
            report.errors.push(format!("{}: {} is empty", id, field));
        }
    }

    if let Some(url) = &record.repository {
        check_url(report, url, &format!("{}: github", id));
    }
    if let Some(url) = &record.demo {
        check_url(report, url, &format!("{}: demo", id));
    }

    if record.highlights.is_empty() {
        report.warnings.push(format!("{}: no highlights", id));
    }
    if record.technologies.is_empty() {
        report.warnings.push(format!("{}: tech_stack is empty", id));
    }
    if record.architecture.trim().is_empty() {
        report
            .warnings
            .push(format!("{}: architecture diagram is empty", id));
    }

    if record.concepts.len() > CARD_CONCEPT_LIMIT {
        report.info.push(format!(
            "{}: index card shows {} of {} concepts",
            id,
            CARD_CONCEPT_LIMIT,
            record.concepts.len()
        ));
    }
}

fn check_url(report: &mut ValidationReport, url: &str, field: &str) {
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        report
            .errors
            .push(format!("{} must be an http(s) URL, got '{}'", field, url));
    }
}
