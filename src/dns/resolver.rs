use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DnsError {
    #[error("DNS lookup timed out")]
    Timeout,

    #[error("DNS lookup failed: {0}")]
    Transport(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    Cname,
    Txt,
}

impl RecordType {
    fn query_name(&self) -> &'static str {
        match self {
            RecordType::Cname => "CNAME",
            RecordType::Txt => "TXT",
        }
    }

    /// Numeric RR type as carried in the dns-json answer section.
    fn rr_code(&self) -> u16 {
        match self {
            RecordType::Cname => 5,
            RecordType::Txt => 16,
        }
    }
}

/// Seam over the external DNS collaborator so the verifier is testable
/// without live lookups.
#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Returns the data fields of matching answer records. Empty answer
    /// sections (NXDOMAIN, no records of the requested type) are an empty
    /// vector, never an error; errors are transport-level only.
    async fn resolve(&self, name: &str, record_type: RecordType) -> Result<Vec<String>, DnsError>;
}

/// DNS-over-HTTPS resolver speaking the application/dns-json format
/// (as served by dns.google and cloudflare-dns.com).
pub struct DohResolver {
    endpoint: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct DohResponse {
    #[serde(rename = "Answer", default)]
    answer: Vec<DohAnswer>,
}

#[derive(Debug, Deserialize)]
struct DohAnswer {
    #[serde(rename = "type")]
    rr_type: u16,
    data: String,
}

impl DohResolver {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    pub fn from_config(config: &crate::config::VerifierConfig) -> Self {
        Self::new(
            config.doh_endpoint.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }
}

#[async_trait]
impl DnsResolver for DohResolver {
    async fn resolve(&self, name: &str, record_type: RecordType) -> Result<Vec<String>, DnsError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("name", name), ("type", record_type.query_name())])
            .header("accept", "application/dns-json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DnsError::Timeout
                } else {
                    DnsError::Transport(e.to_string())
                }
            })?;

        // The resolver is untrusted: a malformed or empty body is treated
        // as "no answer", not a verifier crash.
        let parsed: DohResponse = match response.json().await {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Unparseable DNS response for {}: {}", name, e);
                return Ok(Vec::new());
            }
        };

        Ok(parsed
            .answer
            .into_iter()
            .filter(|a| a.rr_type == record_type.rr_code())
            .map(|a| a.data)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_section_defaults_to_empty() {
        // NXDOMAIN responses carry no Answer key at all
        let parsed: DohResponse = serde_json::from_str(r#"{"Status": 3}"#).unwrap();
        assert!(parsed.answer.is_empty());
    }

    #[test]
    fn answer_records_deserialize() {
        let body = r#"{
            "Status": 0,
            "Answer": [
                {"name": "blog.acme.com.", "type": 5, "TTL": 300, "data": "domains.writine.com."},
                {"name": "blog.acme.com.", "type": 1, "TTL": 300, "data": "192.0.2.1"}
            ]
        }"#;
        let parsed: DohResponse = serde_json::from_str(body).unwrap();
        let cnames: Vec<_> = parsed
            .answer
            .iter()
            .filter(|a| a.rr_type == RecordType::Cname.rr_code())
            .collect();
        assert_eq!(cnames.len(), 1);
        assert_eq!(cnames[0].data, "domains.writine.com.");
    }
}
