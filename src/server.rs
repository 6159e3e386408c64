use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower::Layer;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::middleware::{host_rewrite_middleware, jwt_auth_middleware};

/// Assemble the application router. The host-rewrite dispatcher is NOT
/// part of this router; it must wrap it (see `serve`) so the rewritten
/// URI is what routing matches against.
pub fn app() -> Router {
    Router::new()
        // Platform surface
        .route("/", get(root))
        .route("/health", get(health))
        // Tenant render surfaces (reached via host rewrite only)
        .merge(site_routes())
        // Authenticated domain management
        .merge(domain_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn site_routes() -> Router {
    use handlers::public::site::{domain, subdomain};

    Router::new()
        .route("/u/:handle", get(subdomain::blog_index))
        .route("/u/:handle/:slug", get(subdomain::blog_post))
        .route("/d/:hostname", get(domain::blog_index))
        .route("/d/:hostname/:slug", get(domain::blog_post))
}

fn domain_routes() -> Router {
    use axum::routing::{delete, post};
    use handlers::protected::domains;

    Router::new()
        .route(
            "/api/domains",
            get(domains::domain_list).post(domains::domain_create),
        )
        .route("/api/domains/:id/verify", post(domains::domain_verify))
        .route("/api/domains/:id/abandon", post(domains::domain_abandon))
        .route("/api/domains/:id", delete(domains::domain_delete))
        .route_layer(axum::middleware::from_fn(jwt_auth_middleware))
}

/// Bind and serve. The dispatcher middleware wraps the whole router so the
/// URI rewrite happens before path matching.
pub async fn serve() -> anyhow::Result<()> {
    let config = crate::config::config();
    tracing::info!("Starting Writine API in {:?} mode", config.environment);

    let dispatcher = axum::middleware::from_fn(host_rewrite_middleware);
    let app = dispatcher.layer(app());

    // Allow tests or deployments to override port via env
    let port = std::env::var("WRITINE_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("Writine API listening on http://{}", bind_addr);

    axum::serve(
        listener,
        axum::ServiceExt::<axum::extract::Request>::into_make_service(app),
    )
    .await?;

    Ok(())
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Writine API",
            "version": version,
            "description": "Multi-tenant blog publishing backend",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "blogs": "{handle}.writine.com, verified custom domains (public)",
                "domains": "/api/domains (protected - custom domain management)",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match crate::database::manager::DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
