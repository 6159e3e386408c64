use sqlx::PgPool;
use uuid::Uuid;

use crate::config;
use crate::database::models::{is_valid_hostname, normalize_hostname, ClaimStatus, DomainClaim};
use crate::dns::resolver::DnsError;
use crate::dns::{DomainVerifier, VerifyOutcome};

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid hostname: {0}")]
    InvalidHostname(String),

    #[error("Hostname already claimed: {0}")]
    AlreadyClaimed(String),

    #[error("Claim not found")]
    NotFound,

    #[error("Claim is not in a state that allows this action: {0}")]
    InvalidState(String),

    #[error(transparent)]
    Dns(#[from] DnsError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Claim lifecycle over the domain_claims table.
///
/// Uniqueness is enforced by the table's unique constraint on hostname, not
/// by a check-then-insert, so concurrent submissions of the same hostname
/// cannot both win.
pub struct DomainService {
    pool: PgPool,
}

impl DomainService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Normalize and validate a submitted hostname. No storage access, so
    /// callers can reject bad input before acquiring a pool.
    pub fn validate_hostname(raw: &str) -> Result<String, DomainError> {
        let hostname = normalize_hostname(raw);

        if !is_valid_hostname(&hostname) {
            return Err(DomainError::InvalidHostname(format!(
                "'{}' is not a valid domain name",
                hostname
            )));
        }

        // The apex and its subdomains are platform-controlled; handles
        // cover the subdomain case and the apex is never claimable.
        let apex = &config::config().routing.apex_domain;
        if hostname == *apex || hostname.ends_with(&format!(".{}", apex)) {
            return Err(DomainError::InvalidHostname(format!(
                "'{}' is part of the platform domain",
                hostname
            )));
        }

        Ok(hostname)
    }

    /// Claim a hostname for a tenant. The hostname is normalized before the
    /// uniqueness check; claims start as pending.
    pub async fn create(
        &self,
        tenant_id: Uuid,
        raw_hostname: &str,
    ) -> Result<DomainClaim, DomainError> {
        let hostname = Self::validate_hostname(raw_hostname)?;

        let claim = sqlx::query_as::<_, DomainClaim>(
            r#"
            INSERT INTO domain_claims (id, tenant_id, hostname, status, created_at)
            VALUES ($1, $2, $3, 'pending', NOW())
            RETURNING id, tenant_id, hostname, status, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(tenant_id)
        .bind(&hostname)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                DomainError::AlreadyClaimed(hostname.clone())
            }
            _ => DomainError::Database(e),
        })?;

        tracing::info!("Domain claim created: {} -> {}", claim.hostname, tenant_id);
        Ok(claim)
    }

    pub async fn list_by_tenant(&self, tenant_id: Uuid) -> Result<Vec<DomainClaim>, DomainError> {
        let claims = sqlx::query_as::<_, DomainClaim>(
            r#"
            SELECT id, tenant_id, hostname, status, created_at
            FROM domain_claims
            WHERE tenant_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(claims)
    }

    /// Run the DNS ownership check for an owned claim and apply the status
    /// transition. The only transition this path performs is
    /// pending/failed -> verified; an unsuccessful check is a no-op, and a
    /// claim that is already verified is never demoted.
    pub async fn verify(
        &self,
        tenant_id: Uuid,
        claim_id: Uuid,
        verifier: &DomainVerifier,
    ) -> Result<(DomainClaim, VerifyOutcome), DomainError> {
        let mut claim = self.get_owned(tenant_id, claim_id).await?;

        let outcome = verifier.check(&claim.hostname).await?;
        if matches!(outcome, VerifyOutcome::Verified { .. }) {
            self.mark_verified(&mut claim).await?;
        }

        Ok((claim, outcome))
    }

    /// Operator-side variant of `verify`, keyed by hostname instead of
    /// (tenant, claim id). Same check, same one-directional transition.
    pub async fn verify_by_hostname(
        &self,
        raw_hostname: &str,
        verifier: &DomainVerifier,
    ) -> Result<(DomainClaim, VerifyOutcome), DomainError> {
        let hostname = normalize_hostname(raw_hostname);

        let mut claim = sqlx::query_as::<_, DomainClaim>(
            r#"
            SELECT id, tenant_id, hostname, status, created_at
            FROM domain_claims
            WHERE hostname = $1
            "#,
        )
        .bind(&hostname)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(DomainError::NotFound)?;

        let outcome = verifier.check(&claim.hostname).await?;
        if matches!(outcome, VerifyOutcome::Verified { .. }) {
            self.mark_verified(&mut claim).await?;
        }

        Ok((claim, outcome))
    }

    /// One-directional status write. Re-applying to an already verified
    /// claim is a no-op, so interleaved checks are safe without locking.
    async fn mark_verified(&self, claim: &mut DomainClaim) -> Result<(), DomainError> {
        if claim.status == ClaimStatus::Verified {
            return Ok(());
        }

        sqlx::query("UPDATE domain_claims SET status = 'verified' WHERE id = $1")
            .bind(claim.id)
            .execute(&self.pool)
            .await?;
        claim.status = ClaimStatus::Verified;
        tracing::info!("Domain verified: {}", claim.hostname);
        Ok(())
    }

    /// Explicit owner action that retires a pending claim without deleting
    /// it. The DNS check itself never produces this state.
    pub async fn abandon(
        &self,
        tenant_id: Uuid,
        claim_id: Uuid,
    ) -> Result<DomainClaim, DomainError> {
        let claim = self.get_owned(tenant_id, claim_id).await?;

        if claim.status != ClaimStatus::Pending {
            return Err(DomainError::InvalidState(
                "only pending claims can be abandoned".to_string(),
            ));
        }

        let updated = sqlx::query_as::<_, DomainClaim>(
            r#"
            UPDATE domain_claims SET status = 'failed'
            WHERE id = $1 AND status = 'pending'
            RETURNING id, tenant_id, hostname, status, created_at
            "#,
        )
        .bind(claim.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(DomainError::NotFound)?;

        Ok(updated)
    }

    /// Hard delete. Routing for the hostname stops immediately and the
    /// hostname becomes claimable again.
    pub async fn delete(&self, tenant_id: Uuid, claim_id: Uuid) -> Result<(), DomainError> {
        let result = sqlx::query(
            "DELETE FROM domain_claims WHERE id = $1 AND tenant_id = $2",
        )
        .bind(claim_id)
        .bind(tenant_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound);
        }

        tracing::info!("Domain claim deleted: {}", claim_id);
        Ok(())
    }

    async fn get_owned(
        &self,
        tenant_id: Uuid,
        claim_id: Uuid,
    ) -> Result<DomainClaim, DomainError> {
        sqlx::query_as::<_, DomainClaim>(
            r#"
            SELECT id, tenant_id, hostname, status, created_at
            FROM domain_claims
            WHERE id = $1 AND tenant_id = $2
            "#,
        )
        .bind(claim_id)
        .bind(tenant_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(DomainError::NotFound)
    }
}
