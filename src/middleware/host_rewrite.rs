use axum::{
    extract::Request,
    http::{header::HOST, uri::Uri},
    middleware::Next,
    response::Response,
};

use crate::config;
use crate::routing::{classify_host, rewrite_path, HostClassification};

/// Classification result for the current request, injected for handlers
/// and logging.
#[derive(Clone, Debug)]
pub struct HostContext {
    pub classification: HostClassification,
}

/// Multi-tenant dispatcher. Runs before any application routing: classifies
/// the Host header and rewrites the request path onto the internal render
/// surfaces (`/u/{handle}`, `/d/{hostname}`). Platform hosts and excluded
/// paths pass through untouched.
///
/// Pure string work against static config; no I/O happens here, so it is
/// safe on every request including asset fetches.
pub async fn host_rewrite_middleware(mut request: Request, next: Next) -> Response {
    let host = request
        .headers()
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let classification = classify_host(&host, &config::config().routing);

    if let Some(internal_path) = rewrite_path(&classification, request.uri().path()) {
        if let Some(rewritten) = with_path(request.uri(), &internal_path) {
            tracing::debug!(
                "Rewriting {} {} -> {}",
                host,
                request.uri().path(),
                internal_path
            );
            *request.uri_mut() = rewritten;
        }
    }

    request
        .extensions_mut()
        .insert(HostContext { classification });

    next.run(request).await
}

/// Rebuild a URI with a new path, preserving the query string. Returns None
/// if the result is unparseable, in which case the request passes through
/// unrewritten and dies as a platform 404.
fn with_path(uri: &Uri, new_path: &str) -> Option<Uri> {
    let path_and_query = match uri.query() {
        Some(query) => format!("{}?{}", new_path, query),
        None => new_path.to_string(),
    };

    let parsed = path_and_query.parse().ok()?;
    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(parsed);
    Uri::from_parts(parts).ok()
}
