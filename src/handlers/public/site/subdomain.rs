use axum::extract::{Path, Query};
use axum::response::{IntoResponse, Response};

use crate::database::manager::DatabaseManager;
use crate::services::ContentService;

use super::{not_found_page, render_index, render_post, PageQuery};

/// GET /u/:handle - tenant blog index on the reserved-subdomain surface
pub async fn blog_index(
    Path(handle): Path<String>,
    Query(page): Query<PageQuery>,
) -> Response {
    let pool = match DatabaseManager::pool().await {
        Ok(p) => p,
        Err(e) => return crate::error::ApiError::from(e).into_response(),
    };
    let content = ContentService::new(pool);

    let tenant = match content.resolve_owner_by_handle(&handle).await {
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

/// GET /u/:handle/:slug - single post on the reserved-subdomain surface
pub async fn blog_post(Path((handle, slug)): Path<(String, String)>) -> Response {
    let pool = match DatabaseManager::pool().await {
        Ok(p) => p,
        Err(e) => return crate::error::ApiError::from(e).into_response(),
    };
    let content = ContentService::new(pool);

    let tenant = match content.resolve_owner_by_handle(&handle).await {
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
