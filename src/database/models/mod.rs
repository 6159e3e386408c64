pub mod domain_claim;
pub mod post;
pub mod tenant;

pub use domain_claim::{is_valid_hostname, normalize_hostname, ClaimStatus, DomainClaim};
pub use post::{Post, PostStatus, PostSummary};
pub use tenant::{is_valid_handle, Tenant};
