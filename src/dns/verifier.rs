use std::sync::Arc;

use crate::config::VerifierConfig;
use crate::dns::resolver::{DnsError, DnsResolver, RecordType};

/// Result of a single verification check. There is no failure outcome:
/// an unsuccessful check leaves the claim pending and retryable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    Verified { proof: Proof },
    StillPending,
}

/// Which of the two independent ownership proofs succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Proof {
    Cname,
    Txt,
}

/// Evaluates DNS proof-of-ownership for a claimed hostname.
///
/// Two proofs, either sufficient: a CNAME pointing at the platform routing
/// target (subdomain-style domains), or a TXT record carrying the platform
/// token (apex domains, which cannot hold a CNAME at the zone root).
/// Every check queries live DNS; nothing is cached.
pub struct DomainVerifier {
    resolver: Arc<dyn DnsResolver>,
    cname_target: String,
    txt_token: String,
}

impl DomainVerifier {
    pub fn new(resolver: Arc<dyn DnsResolver>, config: &VerifierConfig) -> Self {
        Self {
            resolver,
            cname_target: config.cname_target.to_lowercase(),
            txt_token: config.txt_token.to_lowercase(),
        }
    }

    /// Run both proofs against live DNS. CNAME is checked first since it is
    /// the common case for `blog.`-style domains.
    pub async fn check(&self, hostname: &str) -> Result<VerifyOutcome, DnsError> {
        let cnames = self.resolver.resolve(hostname, RecordType::Cname).await?;
        if cnames
            .iter()
            .any(|record| cname_matches(record, &self.cname_target))
        {
            tracing::debug!("CNAME proof succeeded for {}", hostname);
            return Ok(VerifyOutcome::Verified { proof: Proof::Cname });
        }

        let txts = self.resolver.resolve(hostname, RecordType::Txt).await?;
        if txts
            .iter()
            .any(|record| txt_matches(record, &self.txt_token))
        {
            tracing::debug!("TXT proof succeeded for {}", hostname);
            return Ok(VerifyOutcome::Verified { proof: Proof::Txt });
        }

        Ok(VerifyOutcome::StillPending)
    }

    /// The DNS records a domain owner should publish, surfaced alongside a
    /// still-pending outcome so the error is actionable.
    pub fn instructions(&self, hostname: &str) -> VerifyInstructions {
        VerifyInstructions {
            cname: format!("{} CNAME {}", hostname, self.cname_target),
            txt: format!("{} TXT \"{}\"", hostname, self.txt_token),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct VerifyInstructions {
    pub cname: String,
    pub txt: String,
}

fn cname_matches(record: &str, target: &str) -> bool {
    record.to_lowercase().contains(target)
}

/// TXT record data arrives quoted, sometimes with escaped quotes
/// (`"\"writine-verify\""`). Strip both layers and case-fold before
/// looking for the token.
fn txt_matches(record: &str, token: &str) -> bool {
    let normalized = record
        .replace("\\\"", "")
        .trim_matches('"')
        .to_lowercase();
    normalized.contains(token)
}
