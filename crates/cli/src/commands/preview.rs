use anyhow::{Context, Result};
use axum::{
    Router,
    extract::State,
    http::{StatusCode, Uri},
    response::{
        Html, IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
    routing::get,
};
use folio_generator::{Generator, ResolveStatus, components::html_escape};
use notify::{Event as NotifyEvent, EventKind, RecursiveMode, Watcher};
use std::{net::SocketAddr, path::PathBuf};
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use super::{CONTENT_FILE, fill_copyright_year, load_portfolio};

#[derive(Clone)]
struct AppState {
    portfolio_path: PathBuf,
    reload_tx: broadcast::Sender<()>,
}

/// Start preview server with hot reload for local development.
///
/// Pages are rendered on request from the current portfolio.toml, so edits
/// show up on the next reload. Unknown routes get the not-found page with a
/// 404 status, the same way a static host would serve `404.html`.
pub async fn run(path: PathBuf, port: u16) -> Result<()> {
    println!("🔭 Starting preview server...");
    println!("   Portfolio: {}", path.display());

    let (site, repository) = load_portfolio(&path)?
        .into_parts()
        .context("Invalid portfolio content")?;

    println!("   ✓ Loaded: {}", site.owner);
    println!("   ✓ Projects: {}", repository.len());

    let (reload_tx, _) = broadcast::channel::<()>(100);

    let state = AppState {
        portfolio_path: path.clone(),
        reload_tx: reload_tx.clone(),
    };

    let app = router(state);

    let watcher_path = path.clone();
    let watcher_tx = reload_tx.clone();
    tokio::spawn(async move {
        if let Err(e) = watch_files(watcher_path, watcher_tx).await {
            error!(error = %e, "file watcher stopped");
        }
    });

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("\n🚀 Preview ready at: http://localhost:{}", port);
    println!("   Press Ctrl+C to stop\n");
    info!(%addr, "preview server listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to port")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/_reload", get(sse_handler))
        .fallback(page_handler)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Watch portfolio.toml and trigger reload
async fn watch_files(path: PathBuf, reload_tx: broadcast::Sender<()>) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::channel(100);

    let mut watcher =
        notify::recommended_watcher(move |res: Result<NotifyEvent, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx.blocking_send(event);
            }
        })?;

    // Editors often replace the file, so watch the directory
    watcher.watch(&path, RecursiveMode::NonRecursive)?;

    while let Some(event) = rx.recv().await {
        match event.kind {
            EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_) => {
                if event
                    .paths
                    .iter()
                    .any(|p| p.file_name().is_some_and(|name| name == CONTENT_FILE))
                {
                    println!("   📝 {} changed, reloading...", CONTENT_FILE);
                    let _ = reload_tx.send(());
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// SSE endpoint for hot reload
async fn sse_handler(
    State(state): State<AppState>,
) -> Sse<impl futures::Stream<Item = Result<Event, std::convert::Infallible>>> {
    let mut rx = state.reload_tx.subscribe();

    let stream = async_stream::stream! {
        loop {
            if rx.recv().await.is_ok() {
                yield Ok(Event::default().data("reload"));
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Render whatever route the request path maps to
async fn page_handler(State(state): State<AppState>, uri: Uri) -> Response {
    // Reload content so edits are picked up without restarting
    let loaded = load_portfolio(&state.portfolio_path)
        .and_then(|portfolio| portfolio.into_parts().map_err(anyhow::Error::from));

    let (mut site, repository) = match loaded {
        Ok(parts) => parts,
        Err(e) => {
            let message = format!("{:#}", e);
            error!(error = %message, "failed to load portfolio");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(format!(
                    r#"<!DOCTYPE html>
<html><head><title>Error</title></head><body>
<h1>Content Error</h1>
<pre>{}</pre>
</body></html>"#,
                    html_escape(&message)
                )),
            )
                .into_response();
        }
    };
    fill_copyright_year(&mut site);

    let resolved = Generator::new(&repository, &site)
        .with_preview(true)
        .resolve(uri.path());

    let status = match resolved.status {
        ResolveStatus::Found => StatusCode::OK,
        ResolveStatus::NotFound => StatusCode::NOT_FOUND,
    };

    (status, Html(resolved.html)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use std::fs;
    use tower::ServiceExt;

    const CONTENT: &str = r##"
[[project]]
id = "demo-project"
number = "01"
title = "Demo Project"
tagline = "t"
description = "d"
status = "live"
"##;

    fn test_state(dir: &std::path::Path) -> AppState {
        let (reload_tx, _) = broadcast::channel(1);
        AppState {
            portfolio_path: dir.to_path_buf(),
            reload_tx,
        }
    }

    async fn get_page(app: Router, path: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_serves_index_and_detail() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONTENT_FILE), CONTENT).unwrap();

        let (status, body) = get_page(router(test_state(dir.path())), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Demo Project"));
        assert!(body.contains("EventSource"));

        let (status, body) =
            get_page(router(test_state(dir.path())), "/projects/demo-project").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Demo Project"));
    }

    #[tokio::test]
    async fn test_unknown_project_is_404() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONTENT_FILE), CONTENT).unwrap();

        let (status, body) = get_page(router(test_state(dir.path())), "/projects/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Project Not Found"));
    }

    #[tokio::test]
    async fn test_content_error_is_500() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONTENT_FILE),
            CONTENT.replace("\"live\"", "\"<bad>\""),
        )
        .unwrap();

        let (status, body) = get_page(router(test_state(dir.path())), "/").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("&lt;bad&gt;"));
    }
}
