use axum::{extract::Extension, Json};
use serde::Deserialize;

use crate::database::manager::DatabaseManager;
use crate::database::models::DomainClaim;
use crate::middleware::{ApiResponse, AuthUser};
use crate::services::DomainService;

#[derive(Debug, Deserialize)]
pub struct CreateDomainRequest {
    pub hostname: String,
}

/// POST /api/domains - claim a hostname for the authenticated tenant
pub async fn domain_create(
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<CreateDomainRequest>,
) -> Result<ApiResponse<DomainClaim>, crate::error::ApiError> {
    // Validation needs no storage access; reject bad input first
    let hostname = DomainService::validate_hostname(&body.hostname)?;

    let pool = DatabaseManager::pool().await?;
    let claim = DomainService::new(pool)
        .create(auth.tenant_id, &hostname)
        .await?;

    Ok(ApiResponse::created(claim))
}
