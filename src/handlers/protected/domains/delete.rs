use axum::extract::{Extension, Path};
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::middleware::{ApiResponse, AuthUser};
use crate::services::DomainService;

/// DELETE /api/domains/:id - hard delete a claim
///
/// Routing for the hostname stops immediately; the hostname becomes
/// claimable by anyone.
pub async fn domain_delete(
    Extension(auth): Extension<AuthUser>,
    Path(claim_id): Path<Uuid>,
) -> Result<ApiResponse<()>, crate::error::ApiError> {
    let pool = DatabaseManager::pool().await?;
    DomainService::new(pool)
        .delete(auth.tenant_id, claim_id)
        .await?;

    Ok(ApiResponse::<()>::no_content())
}
