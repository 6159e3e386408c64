pub mod classifier;
pub mod rewrite;

pub use classifier::{classify_host, HostClassification};
pub use rewrite::{is_platform_path, rewrite_path};
