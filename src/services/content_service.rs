use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::{is_valid_handle, Post, PostSummary, Tenant};

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Read-only tenant content resolution for the public render surfaces.
///
/// Every lookup is scoped to published rows and the resolved tenant; a
/// pending or failed domain claim behaves exactly like no claim at all, so
/// content never leaks through an unverified hostname.
pub struct ContentService {
    pool: PgPool,
}

impl ContentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn resolve_owner_by_handle(
        &self,
        handle: &str,
    ) -> Result<Option<Tenant>, ContentError> {
        // Handles are lowercase [a-z0-9-], len >= 3; anything else cannot
        // exist and skips the query
        if !is_valid_handle(handle) {
            return Ok(None);
        }

        let tenant = sqlx::query_as::<_, Tenant>(
            r#"
            SELECT id, handle, display_name, plan, created_at
            FROM tenants
            WHERE handle = $1
            "#,
        )
        .bind(handle)
        .fetch_optional(&self.pool)
        .await?;

        Ok(tenant)
    }

    /// Owner lookup through a custom domain. The join is filtered to
    /// verified claims only; this is the invariant that keeps unverified
    /// domains inert for routing.
    pub async fn resolve_owner_by_verified_domain(
        &self,
        hostname: &str,
    ) -> Result<Option<Tenant>, ContentError> {
        let tenant = sqlx::query_as::<_, Tenant>(
            r#"
            SELECT t.id, t.handle, t.display_name, t.plan, t.created_at
            FROM tenants t
            JOIN domain_claims d ON d.tenant_id = t.id
            WHERE d.hostname = $1 AND d.status = 'verified'
            "#,
        )
        .bind(hostname)
        .fetch_optional(&self.pool)
        .await?;

        Ok(tenant)
    }

    /// Published posts, newest first. Drafts are excluded at the query
    /// level, not filtered in application code.
    pub async fn list_published(
        &self,
        tenant_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PostSummary>, ContentError> {
        let posts = sqlx::query_as::<_, PostSummary>(
            r#"
            SELECT slug, title, published_at
            FROM posts
            WHERE tenant_id = $1 AND status = 'published'
            ORDER BY published_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(tenant_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    /// Slug lookup scoped to (tenant, published). A slug that exists as a
    /// draft, or under another tenant, is indistinguishable from absent.
    pub async fn get_published_by_slug(
        &self,
        tenant_id: Uuid,
        slug: &str,
    ) -> Result<Option<Post>, ContentError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, tenant_id, slug, title, body_html, status, published_at, created_at
            FROM posts
            WHERE tenant_id = $1 AND slug = $2 AND status = 'published'
            "#,
        )
        .bind(tenant_id)
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }
}
