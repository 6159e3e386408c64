use axum::extract::{Extension, Path};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::dns::{self, VerifyOutcome};
use crate::middleware::{ApiResponse, AuthUser};
use crate::services::DomainService;

/// POST /api/domains/:id/verify - run the DNS ownership check
///
/// Success transitions the claim to verified. An unsuccessful check leaves
/// it pending and returns the DNS records the owner still needs to publish.
pub async fn domain_verify(
    Extension(auth): Extension<AuthUser>,
    Path(claim_id): Path<Uuid>,
) -> Result<ApiResponse<Value>, crate::error::ApiError> {
    let pool = DatabaseManager::pool().await?;
    let verifier = dns::default_verifier();

    let (claim, outcome) = DomainService::new(pool)
        .verify(auth.tenant_id, claim_id, verifier)
        .await?;

    let data = match outcome {
        VerifyOutcome::Verified { proof } => json!({
            "claim": claim,
            "verified": true,
            "proof": proof,
        }),
        VerifyOutcome::StillPending => json!({
            "claim": claim,
            "verified": claim.status == crate::database::models::ClaimStatus::Verified,
            "instructions": verifier.instructions(&claim.hostname),
        }),
    };

    Ok(ApiResponse::success(data))
}
