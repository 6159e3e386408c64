use axum::extract::Extension;

use crate::database::manager::DatabaseManager;
use crate::database::models::DomainClaim;
use crate::middleware::{ApiResponse, AuthUser};
use crate::services::DomainService;

/// GET /api/domains - list the authenticated tenant's claims, newest first
pub async fn domain_list(
    Extension(auth): Extension<AuthUser>,
) -> Result<ApiResponse<Vec<DomainClaim>>, crate::error::ApiError> {
    let pool = DatabaseManager::pool().await?;
    let claims = DomainService::new(pool)
        .list_by_tenant(auth.tenant_id)
        .await?;

    Ok(ApiResponse::success(claims))
}
