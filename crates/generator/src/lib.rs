//! Static site generation: derives the route set from a `ContentRepository`
//! and renders each route to a self-contained HTML page.

pub mod components;
pub mod pages;
pub mod routes;

use folio_core::{ContentRepository, SiteConfig};
use tracing::debug;

pub use routes::{Route, RouteManifest, enumerate_routes};

/// Output file for the not-found page
pub const NOT_FOUND_OUTPUT: &str = "404.html";
/// Output file for the route manifest
pub const MANIFEST_OUTPUT: &str = "routes.json";

/// Requested project does not exist. Affects that route only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("No project with identifier '{id}'")]
pub struct RouteNotFound {
    pub id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Failed to serialize route manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    /// An enumerated route no longer resolves in the repository
    #[error("Enumerated route has no page: {0}")]
    MissingRoute(#[from] RouteNotFound),
}

/// One rendered file
#[derive(Debug, Clone)]
pub struct GeneratedPage {
    /// `None` for the not-found page
    pub route: Option<Route>,
    pub output_path: String,
    pub html: String,
}

pub struct GeneratedSite {
    pub pages: Vec<GeneratedPage>,
    pub assets: Vec<(String, Vec<u8>)>, // (path, data)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveStatus {
    Found,
    NotFound,
}

/// Outcome of serving an arbitrary request path
#[derive(Debug, Clone)]
pub struct Resolved {
    pub status: ResolveStatus,
    pub html: String,
}

/// Route & page generator. Borrows the content read-only, so a single
/// instance can render routes from several threads.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    repository: &'a ContentRepository,
    site: &'a SiteConfig,
    is_preview: bool,
}

impl<'a> Generator<'a> {
    pub fn new(repository: &'a ContentRepository, site: &'a SiteConfig) -> Self {
        Self {
            repository,
            site,
            is_preview: false,
        }
    }

    /// Add the preview badge and live-reload script to every page
    pub fn with_preview(mut self, is_preview: bool) -> Self {
        self.is_preview = is_preview;
        self
    }

    pub fn enumerate_routes(&self) -> Vec<Route> {
        enumerate_routes(self.repository)
    }

    pub fn render_index_page(&self) -> String {
        pages::index_page(self.site, self.repository.list_all(), self.is_preview)
    }

    pub fn render_detail_page(&self, id: &str) -> Result<String, RouteNotFound> {
        let record = self
            .repository
            .find_by_id(id)
            .ok_or_else(|| RouteNotFound { id: id.to_string() })?;
        Ok(pages::detail_page(self.site, record, self.is_preview))
    }

    pub fn render_not_found_page(&self) -> String {
        pages::not_found_page(self.site, self.is_preview)
    }

    pub fn render(&self, route: &Route) -> Result<String, RouteNotFound> {
        match route {
            Route::Index => Ok(self.render_index_page()),
            Route::Project { id } => self.render_detail_page(id),
        }
    }

    /// Serve a request path the way a static host would: known routes render,
    /// everything else gets the not-found page.
    pub fn resolve(&self, path: &str) -> Resolved {
        let rendered = Route::parse(path).map(|route| self.render(&route));
        match rendered {
            Some(Ok(html)) => Resolved {
                status: ResolveStatus::Found,
                html,
            },
            Some(Err(RouteNotFound { id })) => {
                debug!(%id, "unknown project requested");
                self.not_found()
            }
            None => {
                debug!(path, "path outside route surface");
                self.not_found()
            }
        }
    }

    fn not_found(&self) -> Resolved {
        Resolved {
            status: ResolveStatus::NotFound,
            html: self.render_not_found_page(),
        }
    }

    /// Render every enumerated route plus the not-found page and manifest
    pub fn generate_site(&self) -> Result<GeneratedSite, GenerateError> {
        let routes = self.enumerate_routes();
        let mut pages = Vec::with_capacity(routes.len() + 1);

        // Every manifest entry must have a written page
        for route in &routes {
            let html = self.render(route)?;
            debug!(path = %route.path(), bytes = html.len(), "rendered route");
            pages.push(GeneratedPage {
                route: Some(route.clone()),
                output_path: route.output_path(),
                html,
            });
        }

        pages.push(GeneratedPage {
            route: None,
            output_path: NOT_FOUND_OUTPUT.to_string(),
            html: self.render_not_found_page(),
        });

        let manifest = serde_json::to_vec_pretty(&RouteManifest::new(&routes))?;

        Ok(GeneratedSite {
            pages,
            assets: vec![(MANIFEST_OUTPUT.to_string(), manifest)],
        })
    }
}
