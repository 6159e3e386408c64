mod common;

use anyhow::Result;
use reqwest::StatusCode;

// These tests exercise the host-rewrite dispatcher over a live server.
// The server runs without a database: platform pages and excluded paths
// respond normally, while requests rewritten onto a tenant render surface
// hit the data layer and report 503. That difference is exactly what makes
// the rewrite observable here.

async fn get_with_host(path: &str, host: &str) -> Result<reqwest::Response> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}{}", server.base_url, path))
        .header("host", host)
        .send()
        .await?;
    Ok(res)
}

#[tokio::test]
async fn apex_host_serves_platform_root() -> Result<()> {
    let res = get_with_host("/", "writine.com").await?;
    assert_eq!(res.status(), StatusCode::OK);

    let payload = res.json::<serde_json::Value>().await?;
    assert!(payload["success"].as_bool().unwrap_or(false), "success=false: {}", payload);
    assert_eq!(payload["data"]["name"], "Writine API");
    Ok(())
}

#[tokio::test]
async fn www_host_serves_platform_root() -> Result<()> {
    let res = get_with_host("/", "www.writine.com").await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn local_host_passes_through_unmodified() -> Result<()> {
    // The preview/dev escape hatch: 127.0.0.1 is a passthrough host
    let server = common::ensure_server().await?;
    let res = reqwest::get(format!("{}/", server.base_url)).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let payload = res.json::<serde_json::Value>().await?;
    assert_eq!(payload["data"]["name"], "Writine API");
    Ok(())
}

#[tokio::test]
async fn tenant_subdomain_rewrites_to_render_surface() -> Result<()> {
    // Rewritten to /u/alice, whose handler needs the (absent) database.
    // A platform response here would mean the rewrite never happened.
    let res = get_with_host("/", "alice.writine.com").await?;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    Ok(())
}

#[tokio::test]
async fn custom_domain_rewrites_to_render_surface() -> Result<()> {
    let res = get_with_host("/my-first-post", "blog.acme.com").await?;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    Ok(())
}

#[tokio::test]
async fn app_routes_are_never_shadowed_by_tenant_hosts() -> Result<()> {
    // /login is on the exclusion table: no rewrite happens on any host, so
    // the request falls through to the router (which has no such route)
    // instead of reaching the tenant data layer.
    let res = get_with_host("/login", "alice.writine.com").await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn static_assets_are_never_rewritten() -> Result<()> {
    let res = get_with_host("/favicon.ico", "alice.writine.com").await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn internal_surfaces_cannot_be_requested_directly() -> Result<()> {
    // External /u/... requests are excluded from rewriting and the routes
    // themselves still match; handlers then hit the data layer. The point
    // is that a forged Host cannot target another tenant's surface: the
    // response must be identical to a plain platform request for that path.
    let forged = get_with_host("/u/alice", "bob.writine.com").await?;
    let direct = get_with_host("/u/alice", "writine.com").await?;
    assert_eq!(forged.status(), direct.status());
    Ok(())
}

#[tokio::test]
async fn health_is_reachable_from_any_host() -> Result<()> {
    let res = get_with_host("/health", "alice.writine.com").await?;
    // Degraded without a database, but always the platform health surface
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let payload = res.json::<serde_json::Value>().await?;
    assert_eq!(payload["data"]["status"], "degraded");
    Ok(())
}
