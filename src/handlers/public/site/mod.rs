// Tenant render surfaces. These handlers are only reachable through the
// host-rewrite middleware (/u/... for subdomains, /d/... for custom
// domains); the exclusion table blocks direct external requests.

pub mod domain;
pub mod subdomain;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use crate::database::models::{Post, PostSummary, Tenant};

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PageQuery {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(20).clamp(1, 100)
    }

    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

/// Uniform not-found page for every miss on a tenant surface: unknown
/// host, unverified domain, missing tenant, draft, or wrong slug all look
/// identical, and the page never echoes the requested hostname.
pub fn not_found_page() -> Response {
    let body = r#"<!doctype html>
<html>
<head><title>Page not found</title></head>
<body>
<h1>Page not found</h1>
<p>The page you are looking for does not exist.</p>
<p><a href="https://writine.com">Writine &mdash; start your own blog</a></p>
</body>
</html>"#;
    (StatusCode::NOT_FOUND, Html(body.to_string())).into_response()
}

pub fn render_index(tenant: &Tenant, posts: &[PostSummary]) -> Response {
    let mut items = String::new();
    for post in posts {
        let date = post
            .published_at
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        items.push_str(&format!(
            "<li><a href=\"/{slug}\">{title}</a> <time>{date}</time></li>\n",
            slug = escape_html(&post.slug),
            title = escape_html(&post.title),
            date = date,
        ));
    }

    let body = format!(
        r#"<!doctype html>
<html>
<head><title>{name}</title></head>
<body>
<h1>{name}</h1>
<ul>
{items}</ul>
{footer}
</body>
</html>"#,
        name = escape_html(&tenant.display_name),
        items = items,
        footer = attribution_footer(tenant),
    );

    Html(body).into_response()
}

pub fn render_post(tenant: &Tenant, post: &Post) -> Response {
    let body = format!(
        r#"<!doctype html>
<html>
<head><title>{title} &mdash; {name}</title></head>
<body>
<article>
<h1>{title}</h1>
{content}
</article>
{footer}
</body>
</html>"#,
        title = escape_html(&post.title),
        name = escape_html(&tenant.display_name),
        content = post.body_html,
        footer = attribution_footer(tenant),
    );

    Html(body).into_response()
}

/// "Powered by" footer, suppressed for entitled tenants. Render-time gate
/// only; never affects routing.
fn attribution_footer(tenant: &Tenant) -> &'static str {
    if tenant.is_entitled() {
        ""
    } else {
        r#"<footer><p>Published with <a href="https://writine.com">Writine</a></p></footer>"#
    }
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn tenant(plan: &str) -> Tenant {
        Tenant {
            id: Uuid::new_v4(),
            handle: "alice".to_string(),
            display_name: "Alice & Co".to_string(),
            plan: plan.to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn attribution_shown_for_free_plan_only() {
        assert!(!attribution_footer(&tenant("free")).is_empty());
        assert!(attribution_footer(&tenant("pro")).is_empty());
    }

    #[test]
    fn titles_are_escaped() {
        assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
    }

    #[test]
    fn page_query_bounds() {
        let q = PageQuery { limit: Some(5000), offset: Some(-3) };
        assert_eq!(q.limit(), 100);
        assert_eq!(q.offset(), 0);
        let q = PageQuery { limit: None, offset: None };
        assert_eq!(q.limit(), 20);
        assert_eq!(q.offset(), 0);
    }
}
