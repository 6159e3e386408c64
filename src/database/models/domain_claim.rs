use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Verification state of a custom-domain claim.
///
/// Only `Verified` authorizes routing. The DNS check path never writes
/// `Failed`; it is reachable only through the explicit owner abandon action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    Pending,
    Verified,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DomainClaim {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub hostname: String,
    pub status: ClaimStatus,
    pub created_at: DateTime<Utc>,
}

/// Normalize a user-submitted hostname for uniqueness checks and storage:
/// trim, lowercase, strip scheme, path, port, and any trailing dot.
pub fn normalize_hostname(raw: &str) -> String {
    let mut host = raw.trim().to_lowercase();

    for scheme in ["https://", "http://"] {
        if let Some(rest) = host.strip_prefix(scheme) {
            host = rest.to_string();
            break;
        }
    }
    if let Some((before, _)) = host.split_once('/') {
        host = before.to_string();
    }
    if let Some((before, _)) = host.split_once(':') {
        host = before.to_string();
    }
    host.trim_end_matches('.').to_string()
}

/// Hostname shape accepted for claims: dotted labels of `[a-z0-9-]`,
/// no label empty, no leading/trailing hyphen in a label.
pub fn is_valid_hostname(hostname: &str) -> bool {
    if hostname.is_empty() || hostname.len() > 253 || !hostname.contains('.') {
        return false;
    }
    hostname.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    })
}
