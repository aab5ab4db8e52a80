use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One portfolio entry describing a single software project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Routing key, unique within the collection and URL-safe
    pub id: String,
    /// Display-only ordinal such as "01"
    pub number: String,
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub status: Status,
    /// Source repository URL (rendered as the GitHub affordance)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    pub technologies: Vec<String>,
    pub concepts: Vec<String>,
    pub models: Vec<String>,
    /// Diagram source (Mermaid), kept as an inert string
    pub architecture: String,
    pub highlights: Vec<String>,
}

/// Lifecycle state of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Live,
    InProgress,
    Planned,
}

/// Display label and style class for a status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub class: &'static str,
    /// Whether the badge carries the animated "active" indicator
    pub pulse: bool,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Live, Status::InProgress, Status::Planned];

    /// Wire value as written in portfolio.toml
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Live => "live",
            Status::InProgress => "in-progress",
            Status::Planned => "planned",
        }
    }

    pub fn badge(&self) -> StatusBadge {
        match self {
            Status::Live => StatusBadge {
                label: "Live",
                class: "badge-live",
                pulse: true,
            },
            Status::InProgress => StatusBadge {
                label: "In Progress",
                class: "badge-in-progress",
                pulse: false,
            },
            Status::Planned => StatusBadge {
                label: "Planned",
                class: "badge-planned",
                pulse: false,
            },
        }
    }
}

impl FromStr for Status {
    /// The rejected value
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concepts shown on an index card; the detail page lists all of them
pub const CARD_CONCEPT_LIMIT: usize = 2;

/// Site-wide chrome shown in headers and footers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub owner: String,
    pub initials: String,
    pub subtitle: String,
    pub headline: String,
    pub intro: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_note: Option<String>,
    /// Year printed in the copyright line; left out when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright_year: Option<i32>,
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Portfolio".to_string(),
            initials: "P".to_string(),
            subtitle: "Projects".to_string(),
            headline: "Projects".to_string(),
            intro: String::new(),
            footer_note: None,
            copyright_year: None,
            social: Vec::new(),
        }
    }
}

/// External profile link shown in the site header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_is_exact() {
        assert_eq!("live".parse::<Status>(), Ok(Status::Live));
        assert_eq!("in-progress".parse::<Status>(), Ok(Status::InProgress));
        assert_eq!("planned".parse::<Status>(), Ok(Status::Planned));

        assert_eq!("Live".parse::<Status>(), Err("Live".to_string()));
        assert_eq!("in_progress".parse::<Status>(), Err("in_progress".to_string()));
        assert!("archived".parse::<Status>().is_err());
        assert!("".parse::<Status>().is_err());
    }

    #[test]
    fn test_status_badges() {
        let live = Status::Live.badge();
        assert_eq!(live.label, "Live");
        assert_eq!(live.class, "badge-live");
        assert!(live.pulse);

        let in_progress = Status::InProgress.badge();
        assert_eq!(in_progress.label, "In Progress");
        assert!(!in_progress.pulse);

        let planned = Status::Planned.badge();
        assert_eq!(planned.label, "Planned");
        assert!(!planned.pulse);
    }

    #[test]
    fn test_status_badges_are_distinct() {
        let classes: std::collections::HashSet<_> =
            Status::ALL.iter().map(|s| s.badge().class).collect();
        assert_eq!(classes.len(), Status::ALL.len());
    }

    #[test]
    fn test_status_display_round_trips_wire_value() {
        for status in Status::ALL {
            assert_eq!(status.to_string().parse::<Status>(), Ok(status));
        }
    }
}
