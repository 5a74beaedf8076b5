//! Category handlers.

use actix_web::{HttpResponse, web};

use pressroom_core::domain::{CATEGORIES, newest_first};

use super::posts::post_list;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories() -> HttpResponse {
    HttpResponse::Ok().json(CATEGORIES)
}

/// GET /api/categories/{name}/posts - exact, case-sensitive match
pub async fn category_posts(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let name = path.into_inner();
    let mut posts = state.posts.filter_by_category(&name).await?;
    newest_first(&mut posts);

    Ok(HttpResponse::Ok().json(post_list(posts, Some(name), None)))
}
