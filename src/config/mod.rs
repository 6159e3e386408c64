use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub routing: RoutingConfig,
    pub verifier: VerifierConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

/// Static routing configuration consumed by the host classifier and the
/// path rewriter. Constructed once at startup and passed by reference so
/// classification stays a pure function of (host, path, config).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Platform apex domain, e.g. "writine.com".
    pub apex_domain: String,
    /// Subdomain labels that must never resolve as tenant handles.
    pub reserved_labels: Vec<String>,
    /// Hosts that always pass through as Platform (local dev, previews).
    /// An entry starting with '.' matches any host with that suffix.
    pub passthrough_hosts: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// DNS-over-HTTPS endpoint serving the application/dns-json format.
    pub doh_endpoint: String,
    /// CNAME target that proves a subdomain points at the platform.
    pub cname_target: String,
    /// Token a TXT record must carry to prove apex-domain ownership.
    pub txt_token: String,
    /// Upper bound on a single DNS lookup.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub max_connections: u32,
    pub connection_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub jwt_expiry_hours: u64,
    pub enable_cors: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Routing overrides
        if let Ok(v) = env::var("WRITINE_APEX_DOMAIN") {
            self.routing.apex_domain = v.trim().to_lowercase();
        }
        if let Ok(v) = env::var("WRITINE_RESERVED_LABELS") {
            self.routing.reserved_labels =
                v.split(',').map(|s| s.trim().to_lowercase()).collect();
        }
        if let Ok(v) = env::var("WRITINE_PASSTHROUGH_HOSTS") {
            self.routing.passthrough_hosts =
                v.split(',').map(|s| s.trim().to_lowercase()).collect();
        }

        // Verifier overrides
        if let Ok(v) = env::var("WRITINE_DOH_ENDPOINT") {
            self.verifier.doh_endpoint = v;
        }
        if let Ok(v) = env::var("WRITINE_CNAME_TARGET") {
            self.verifier.cname_target = v.trim().to_lowercase();
        }
        if let Ok(v) = env::var("WRITINE_TXT_TOKEN") {
            self.verifier.txt_token = v.trim().to_lowercase();
        }
        if let Ok(v) = env::var("WRITINE_DNS_TIMEOUT_SECS") {
            self.verifier.timeout_secs = v.parse().unwrap_or(self.verifier.timeout_secs);
        }

        // Database overrides
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Ok(v) = env::var("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout =
                v.parse().unwrap_or(self.database.connection_timeout);
        }

        // Security overrides
        if let Ok(v) = env::var("WRITINE_JWT_SECRET") {
            self.security.jwt_secret = v;
        }
        if let Ok(v) = env::var("SECURITY_JWT_EXPIRY_HOURS") {
            self.security.jwt_expiry_hours = v.parse().unwrap_or(self.security.jwt_expiry_hours);
        }
        if let Ok(v) = env::var("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = v.parse().unwrap_or(self.security.enable_cors);
        }

        self
    }

    /// Labels that collide with top-level application routes and therefore
    /// can never be tenant handles, plus the usual infrastructure names.
    fn default_reserved_labels() -> Vec<String> {
        [
            "www", "api", "app", "dashboard", "login", "signup", "settings",
            "editor", "admin", "billing", "docs", "blog", "assets", "static",
            "health", "mail", "smtp",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            routing: RoutingConfig {
                apex_domain: "writine.com".to_string(),
                reserved_labels: Self::default_reserved_labels(),
                passthrough_hosts: vec![
                    "localhost".to_string(),
                    "127.0.0.1".to_string(),
                    "0.0.0.0".to_string(),
                    ".vercel.app".to_string(),
                ],
            },
            verifier: VerifierConfig {
                doh_endpoint: "https://dns.google/resolve".to_string(),
                cname_target: "domains.writine.com".to_string(),
                txt_token: "writine-verify".to_string(),
                timeout_secs: 5,
            },
            database: DatabaseConfig {
                max_connections: 10,
                connection_timeout: 30,
            },
            security: SecurityConfig {
                jwt_secret: "dev-secret-do-not-use".to_string(),
                jwt_expiry_hours: 24 * 7, // 1 week
                enable_cors: true,
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            database: DatabaseConfig {
                max_connections: 20,
                connection_timeout: 10,
            },
            security: SecurityConfig {
                jwt_secret: String::new(), // must come from env
                jwt_expiry_hours: 24,
                enable_cors: true,
            },
            ..Self::development()
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            database: DatabaseConfig {
                max_connections: 50,
                connection_timeout: 5,
            },
            security: SecurityConfig {
                jwt_secret: String::new(), // must come from env
                jwt_expiry_hours: 4,
                enable_cors: true,
            },
            ..Self::development()
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_development_config() {
        let config = AppConfig::development();
        assert_eq!(config.routing.apex_domain, "writine.com");
        assert!(config.routing.reserved_labels.contains(&"www".to_string()));
        assert!(config.routing.reserved_labels.contains(&"api".to_string()));
        assert_eq!(config.verifier.timeout_secs, 5);
    }

    #[test]
    fn test_production_requires_env_secret() {
        let config = AppConfig::production();
        assert!(config.security.jwt_secret.is_empty());
        assert_eq!(config.database.max_connections, 50);
    }
}
