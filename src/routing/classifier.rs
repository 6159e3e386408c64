use serde::Serialize;

use crate::config::RoutingConfig;

/// Routing decision for an inbound Host header.
///
/// Classification is total: every host maps to exactly one variant. Hosts
/// the platform knows nothing about still classify as `CustomDomain`; the
/// render layer decides whether a verified claim backs them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum HostClassification {
    /// The platform's own surface: apex, www, or an internal/dev host.
    Platform,
    /// `{handle}.{apex}` where the label is a plausible tenant handle.
    ReservedSubdomain { handle: String },
    /// Any other host. Only routable if a verified claim exists for it.
    CustomDomain { hostname: String },
}

/// Classify a raw Host header value.
///
/// Pure and synchronous; safe to call on every request. The precedence is
/// fixed: apex/www > passthrough hosts > subdomain pattern > custom-domain
/// catch-all. Reserved labels fall through to the catch-all rather than
/// resolving as handles, so `www`/`api` can never be hijacked as tenants.
pub fn classify_host(raw_host: &str, config: &RoutingConfig) -> HostClassification {
    let host = normalize_host(raw_host);
    if host.is_empty() {
        return HostClassification::Platform;
    }

    let apex = config.apex_domain.as_str();

    if host == apex || host == format!("www.{}", apex) {
        return HostClassification::Platform;
    }

    if is_passthrough_host(&host, config) {
        return HostClassification::Platform;
    }

    if let Some(label) = subdomain_label(&host, apex) {
        if !config.reserved_labels.iter().any(|r| r == label) {
            return HostClassification::ReservedSubdomain {
                handle: label.to_string(),
            };
        }
    }

    HostClassification::CustomDomain { hostname: host }
}

/// Lowercase, trim, and strip any `:port` suffix.
fn normalize_host(raw: &str) -> String {
    let trimmed = raw.trim().to_lowercase();
    match trimmed.split_once(':') {
        Some((host, _port)) => host.to_string(),
        None => trimmed,
    }
}

/// Local-development and preview hosts bypass tenant routing entirely.
/// Entries starting with '.' are suffix matches (e.g. ".vercel.app").
fn is_passthrough_host(host: &str, config: &RoutingConfig) -> bool {
    config.passthrough_hosts.iter().any(|entry| {
        if let Some(suffix) = entry.strip_prefix('.') {
            host.ends_with(suffix) && host != suffix
        } else {
            host == entry
        }
    })
}

/// Extract the single label of `{label}.{apex}`, if the host has that exact
/// shape and the label is restricted to `[a-z0-9-]`. Multi-level subdomains
/// (`a.b.apex`) do not match and fall through to the custom-domain branch.
fn subdomain_label<'a>(host: &'a str, apex: &str) -> Option<&'a str> {
    let label = host
        .strip_suffix(apex)
        .and_then(|prefix| prefix.strip_suffix('.'))?;

    if label.is_empty() || label.contains('.') {
        return None;
    }
    if !label
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return None;
    }

    Some(label)
}
