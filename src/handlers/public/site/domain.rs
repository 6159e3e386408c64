use axum::extract::{Path, Query};
use axum::response::{IntoResponse, Response};

use crate::database::manager::DatabaseManager;
use crate::services::ContentService;

use super::{not_found_page, render_index, render_post, PageQuery};

// The owner lookup here is filtered to verified claims. A hostname with a
// pending or failed claim renders the same not-found page as a hostname
// nobody has ever claimed; visitors cannot probe claim existence.

/// GET /d/:hostname - tenant blog index on the custom-domain surface
pub async fn blog_index(
    Path(hostname): Path<String>,
    Query(page): Query<PageQuery>,
) -> Response {
    let pool = match DatabaseManager::pool().await {
        Ok(p) => p,
        Err(e) => return crate::error::ApiError::from(e).into_response(),
    };
    let content = ContentService::new(pool);

    let tenant = match content.resolve_owner_by_verified_domain(&hostname).await {
        Ok(Some(t)) => t,
        Ok(None) => return not_found_page(),
        Err(e) => return crate::error::ApiError::from(e).into_response(),
    };

    match content
        .list_published(tenant.id, page.limit(), page.offset())
        .await
    {
        Ok(posts) => render_index(&tenant, &posts),
        Err(e) => crate::error::ApiError::from(e).into_response(),
    }
}

/// GET /d/:hostname/:slug - single post on the custom-domain surface
pub async fn blog_post(Path((hostname, slug)): Path<(String, String)>) -> Response {
    let pool = match DatabaseManager::pool().await {
        Ok(p) => p,
        Err(e) => return crate::error::ApiError::from(e).into_response(),
    };
    let content = ContentService::new(pool);

    let tenant = match content.resolve_owner_by_verified_domain(&hostname).await {
        Ok(Some(t)) => t,
        Ok(None) => return not_found_page(),
        Err(e) => return crate::error::ApiError::from(e).into_response(),
    };

    match content.get_published_by_slug(tenant.id, &slug).await {
        Ok(Some(post)) => render_post(&tenant, &post),
        Ok(None) => not_found_page(),
        Err(e) => crate::error::ApiError::from(e).into_response(),
    }
}
