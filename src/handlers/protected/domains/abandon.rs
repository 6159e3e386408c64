use axum::extract::{Extension, Path};
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::DomainClaim;
use crate::middleware::{ApiResponse, AuthUser};
use crate::services::DomainService;

/// POST /api/domains/:id/abandon - retire a pending claim
///
/// This is the only path that produces the failed status; the DNS check
/// itself never does.
pub async fn domain_abandon(
    Extension(auth): Extension<AuthUser>,
    Path(claim_id): Path<Uuid>,
) -> Result<ApiResponse<DomainClaim>, crate::error::ApiError> {
    let pool = DatabaseManager::pool().await?;
    let claim = DomainService::new(pool)
        .abandon(auth.tenant_id, claim_id)
        .await?;

    Ok(ApiResponse::success(claim))
}
