pub mod content_service;
pub mod domain_service;

pub use content_service::{ContentError, ContentService};
pub use domain_service::{DomainError, DomainService};
