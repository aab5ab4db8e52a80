//! Route derivation. The route list is computed from the repository every
//! time; there is no separately maintained list to drift out of sync.

use folio_core::ContentRepository;
use folio_core::repository::validate_identifier;
use serde::Serialize;

/// Path segment that prefixes every detail route
pub const PROJECTS_SEGMENT: &str = "projects";

/// A single static page the site must produce
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Route {
    Index,
    Project { id: String },
}

impl Route {
    /// URL path served by the host, e.g. `/projects/arxiv-paper-finder`
    pub fn path(&self) -> String {
        match self {
            Route::Index => "/".to_string(),
            Route::Project { id } => format!("/{}/{}", PROJECTS_SEGMENT, id),
        }
    }

    /// File written under the output directory
    pub fn output_path(&self) -> String {
        match self {
            Route::Index => "index.html".to_string(),
            Route::Project { id } => format!("{}/{}/index.html", PROJECTS_SEGMENT, id),
        }
    }

    /// Map a request path back to a route.
    ///
    /// Accepts one optional trailing `/` or a whole trailing `index.html`
    /// segment. Returns `None` for paths outside the route surface, including
    /// ids no repository could hold; whether a well-formed project route
    /// actually exists is decided by the repository, not here.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path
            .strip_suffix("index.html")
            .filter(|rest| rest.is_empty() || rest.ends_with('/'))
            .unwrap_or(path);
        let path = path.strip_prefix('/').unwrap_or(path);
        let path = path.strip_suffix('/').unwrap_or(path);

        if path.is_empty() {
            return Some(Route::Index);
        }

        let mut segments = path.split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some(PROJECTS_SEGMENT), Some(id), None) if validate_identifier(id).is_ok() => {
                Some(Route::Project { id: id.to_string() })
            }
            _ => None,
        }
    }
}

/// One index route followed by one detail route per record, in collection order
pub fn enumerate_routes(repository: &ContentRepository) -> Vec<Route> {
    std::iter::once(Route::Index)
        .chain(repository.list_all().iter().map(|record| Route::Project {
            id: record.id.clone(),
        }))
        .collect()
}

/// Route list handed to an external host as `routes.json`
#[derive(Debug, Serialize)]
pub struct RouteManifest {
    pub routes: Vec<ManifestEntry>,
    /// Page the host should serve for any other path
    pub not_found: String,
}

#[derive(Debug, Serialize)]
pub struct ManifestEntry {
    pub path: String,
    pub output: String,
    #[serde(flatten)]
    pub route: Route,
}

impl RouteManifest {
    pub fn new(routes: &[Route]) -> Self {
        Self {
            routes: routes
                .iter()
                .map(|route| ManifestEntry {
                    path: route.path(),
                    output: route.output_path(),
                    route: route.clone(),
                })
                .collect(),
            not_found: crate::NOT_FOUND_OUTPUT.to_string(),
        }
    }
}
