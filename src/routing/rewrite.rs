use crate::routing::HostClassification;

/// Top-level application routes that always belong to the platform surface,
/// regardless of which host the request arrived on. Explicit table, not
/// inferred: a tenant subdomain must never shadow the operator's own pages.
const PLATFORM_ROUTES: &[&str] = &[
    "/dashboard",
    "/login",
    "/signup",
    "/settings",
    "/editor",
    "/admin",
    "/billing",
];

/// Path prefixes exempt from host rewriting: the API, auth endpoints,
/// health checks, asset directories, and the internal render surfaces
/// themselves (so external requests cannot spoof `/u/...` or `/d/...`).
const PLATFORM_PREFIXES: &[&str] = &[
    "/api/", "/auth/", "/health", "/assets/", "/static/", "/u/", "/d/",
];

/// File extensions served as static assets, never tenant content.
const STATIC_EXTENSIONS: &[&str] = &[
    ".css", ".js", ".ico", ".png", ".jpg", ".jpeg", ".svg", ".webp", ".txt",
    ".xml", ".map", ".woff", ".woff2",
];

/// Whether a path must resolve on the platform surface regardless of host.
pub fn is_platform_path(path: &str) -> bool {
    if PLATFORM_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return true;
    }
    if PLATFORM_ROUTES
        .iter()
        .any(|r| path == *r || path.starts_with(&format!("{}/", r)))
    {
        return true;
    }
    has_static_extension(path)
}

/// Apply a routing decision to an inbound request path.
///
/// Returns the internal render path, or `None` when the request passes
/// through unmodified (platform surface, excluded paths).
pub fn rewrite_path(classification: &HostClassification, path: &str) -> Option<String> {
    if is_platform_path(path) {
        return None;
    }

    let suffix = if path == "/" { "" } else { path };

    match classification {
        HostClassification::Platform => None,
        HostClassification::ReservedSubdomain { handle } => {
            Some(format!("/u/{}{}", handle, suffix))
        }
        HostClassification::CustomDomain { hostname } => {
            Some(format!("/d/{}{}", hostname, suffix))
        }
    }
}

fn has_static_extension(path: &str) -> bool {
    let last_segment = path.rsplit('/').next().unwrap_or(path);
    STATIC_EXTENSIONS
        .iter()
        .any(|ext| last_segment.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subdomain(handle: &str) -> HostClassification {
        HostClassification::ReservedSubdomain {
            handle: handle.to_string(),
        }
    }

    fn custom(hostname: &str) -> HostClassification {
        HostClassification::CustomDomain {
            hostname: hostname.to_string(),
        }
    }

    #[test]
    fn subdomain_paths_rewrite_to_u_surface() {
        assert_eq!(
            rewrite_path(&subdomain("alice"), "/my-first-post"),
            Some("/u/alice/my-first-post".to_string())
        );
        assert_eq!(rewrite_path(&subdomain("alice"), "/"), Some("/u/alice".to_string()));
    }

    #[test]
    fn custom_domain_paths_rewrite_to_d_surface() {
        assert_eq!(
            rewrite_path(&custom("blog.acme.com"), "/hello"),
            Some("/d/blog.acme.com/hello".to_string())
        );
        assert_eq!(
            rewrite_path(&custom("blog.acme.com"), "/"),
            Some("/d/blog.acme.com".to_string())
        );
    }

    #[test]
    fn platform_classification_never_rewrites() {
        assert_eq!(rewrite_path(&HostClassification::Platform, "/anything"), None);
        assert_eq!(rewrite_path(&HostClassification::Platform, "/"), None);
    }

    #[test]
    fn app_routes_pass_through_on_any_host() {
        // A tenant subdomain must not shadow the operator's login page.
        assert_eq!(rewrite_path(&subdomain("alice"), "/login"), None);
        assert_eq!(rewrite_path(&subdomain("alice"), "/dashboard/posts"), None);
        assert_eq!(rewrite_path(&custom("blog.acme.com"), "/settings"), None);
    }

    #[test]
    fn api_and_assets_pass_through_on_any_host() {
        assert_eq!(rewrite_path(&subdomain("alice"), "/api/domains"), None);
        assert_eq!(rewrite_path(&custom("blog.acme.com"), "/assets/logo.png"), None);
        assert_eq!(rewrite_path(&subdomain("alice"), "/favicon.ico"), None);
        assert_eq!(rewrite_path(&subdomain("alice"), "/robots.txt"), None);
    }

    #[test]
    fn internal_surfaces_cannot_be_spoofed_externally() {
        assert_eq!(rewrite_path(&subdomain("alice"), "/u/bob/post"), None);
        assert_eq!(rewrite_path(&custom("blog.acme.com"), "/d/other.com"), None);
    }

    #[test]
    fn route_name_prefixes_do_not_overmatch() {
        // "/loginhelp" is not "/login"
        assert_eq!(
            rewrite_path(&subdomain("alice"), "/loginhelp"),
            Some("/u/alice/loginhelp".to_string())
        );
    }
}
