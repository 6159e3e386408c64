pub mod auth;
pub mod host_rewrite;
pub mod response;

pub use auth::{jwt_auth_middleware, AuthUser};
pub use host_rewrite::{host_rewrite_middleware, HostContext};
pub use response::{ApiResponse, ApiResult, ApiSuccess, IntoApiResponse};
