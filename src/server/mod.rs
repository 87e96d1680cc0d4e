//! Local preview server for a site directory, with live reload on change.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use notify::{Event, RecursiveMode, Watcher};
use serde::Serialize;
use tower_livereload::LiveReloadLayer;

use crate::check::{has_failures, Diagnostic};
use crate::site::Site;

mod page;
pub(crate) mod util;

struct DevState {
    site: Site,
}

/// Routes served for `site`, without the live-reload layer.
pub fn router(site: Site) -> Router {
    let state = Arc::new(DevState { site });
    Router::new()
        .route("/__folio/check", get(serve_check))
        .route("/__folio/check.html", get(serve_check_page))
        .fallback(serve_file)
        .with_state(state)
}

/// Start the dev server for a site directory, reloading pages whenever a
/// file under it changes.
pub async fn run_dev_server(site: Site, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let root: PathBuf = site.root().to_path_buf();

    let livereload = LiveReloadLayer::new();
    let reloader = livereload.reloader();

    let mut watcher = notify::recommended_watcher(move |res: Result<Event, _>| {
        if let Ok(event) = res {
            if event.kind.is_modify() || event.kind.is_create() || event.kind.is_remove() {
                tracing::debug!(paths = ?event.paths, "site changed, reloading");
                reloader.reload();
            }
        }
    })?;
    watcher.watch(&root, RecursiveMode::Recursive)?;

    let app = router(site).layer(livereload);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    tracing::info!(root = %root.display(), "folio dev server");
    eprintln!("folio dev server");
    eprintln!("  site:    {}", root.display());
    eprintln!("  preview: http://localhost:{port}/");
    eprintln!("  check:   http://localhost:{port}/__folio/check.html");
    eprintln!("  watching for changes...");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    // Keep watcher alive
    drop(watcher);
    Ok(())
}

// ── Route handlers ────────────────────────────────────────────────────

#[derive(Serialize)]
struct CheckResponse {
    ok: bool,
    diagnostics: Vec<Diagnostic>,
    error: Option<String>,
}

/// Catalog diagnostics as JSON.
async fn serve_check(State(state): State<Arc<DevState>>) -> axum::Json<CheckResponse> {
    match state.site.check() {
        Ok(diagnostics) => axum::Json(CheckResponse {
            ok: !has_failures(&diagnostics, false),
            diagnostics,
            error: None,
        }),
        Err(e) => axum::Json(CheckResponse {
            ok: false,
            diagnostics: Vec::new(),
            error: Some(e.to_string()),
        }),
    }
}

async fn serve_check_page(State(state): State<Arc<DevState>>) -> Html<String> {
    match state.site.check() {
        Ok(diagnostics) => Html(page::build_check_page(&diagnostics)),
        Err(e) => Html(page::build_error_page(&e.to_string())),
    }
}

/// Static files under the site root.
async fn serve_file(State(state): State<Arc<DevState>>, uri: Uri) -> Response {
    let request_path = uri.path();
    let Some(path) = util::resolve_path(state.site.root(), request_path) else {
        tracing::warn!(path = request_path, "rejected request path");
        return (StatusCode::BAD_REQUEST, "bad path").into_response();
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, util::content_type(&path)),
                (header::CACHE_CONTROL, "no-store"),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "not found");
            (
                StatusCode::NOT_FOUND,
                Html(page::build_not_found_page(request_path)),
            )
                .into_response()
        }
    }
}
