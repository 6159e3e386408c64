use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Plans whose subscription removes the attribution footer. The plan column
/// itself is maintained by the billing collaborator; this core only reads it.
const ENTITLED_PLANS: &[&str] = &["pro", "business"];

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tenant {
    pub id: Uuid,
    pub handle: String,
    pub display_name: String,
    pub plan: String,
    pub created_at: DateTime<Utc>,
}

impl Tenant {
    /// Whether this tenant's subscription suppresses attribution branding.
    pub fn is_entitled(&self) -> bool {
        ENTITLED_PLANS.iter().any(|p| *p == self.plan)
    }
}

/// Handle rules: lowercase alphanumeric plus hyphen, at least 3 characters.
pub fn is_valid_handle(handle: &str) -> bool {
    handle.len() >= 3
        && handle
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_rules() {
        assert!(is_valid_handle("alice"));
        assert!(is_valid_handle("blog-2024"));
        assert!(!is_valid_handle("ab"));
        assert!(!is_valid_handle("Alice"));
        assert!(!is_valid_handle("a_b_c"));
    }

    #[test]
    fn entitlement_follows_plan() {
        let mut tenant = Tenant {
            id: Uuid::new_v4(),
            handle: "alice".to_string(),
            display_name: "Alice".to_string(),
            plan: "free".to_string(),
            created_at: chrono::Utc::now(),
        };
        assert!(!tenant.is_entitled());
        tenant.plan = "pro".to_string();
        assert!(tenant.is_entitled());
    }
}
