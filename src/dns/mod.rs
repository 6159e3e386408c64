pub mod resolver;
pub mod verifier;

use once_cell::sync::Lazy;
use std::sync::Arc;

pub use resolver::{DnsError, DnsResolver, DohResolver, RecordType};
pub use verifier::{DomainVerifier, VerifyOutcome};

static DEFAULT_VERIFIER: Lazy<DomainVerifier> = Lazy::new(|| {
    let config = &crate::config::config().verifier;
    DomainVerifier::new(Arc::new(DohResolver::from_config(config)), config)
});

/// Process-wide verifier wired to the configured DNS-over-HTTPS endpoint.
/// Entry points (HTTP handler, CLI) share it; tests construct their own
/// with a stub resolver.
pub fn default_verifier() -> &'static DomainVerifier {
    &DEFAULT_VERIFIER
}
