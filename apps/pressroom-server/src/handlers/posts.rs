//! Post handlers.

use actix_web::{HttpResponse, http::header, web};
use chrono::SecondsFormat;

use pressroom_core::domain::{
    CATEGORIES, Post, PostChanges, PostDraft, is_known_category, newest_first,
};
use pressroom_shared::dto::{
    CreatePostRequest, PostListResponse, PostResponse, SearchQuery, UpdatePostRequest,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts - most recently updated first
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let mut posts = state.posts.load().await?;
    newest_first(&mut posts);

    Ok(HttpResponse::Ok().json(post_list(posts, None, None)))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let post = state
        .posts
        .create(PostDraft {
            title: req.title,
            body: req.body,
            category: req.category,
            author: req.author,
        })
        .await?;

    if !is_known_category(&post.category) {
        tracing::warn!(
            post_id = %post.id,
            category = %post.category,
            "Post stored with unlisted category"
        );
    }

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/posts/{}", post.id)))
        .json(to_response(post)))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .find_by_id(&path)
        .await?
        .ok_or_else(post_not_found)?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let post = state
        .posts
        .update(
            &path,
            PostChanges {
                title: req.title,
                body: req.body,
                category: req.category,
                author: req.author,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /api/posts/{id} - succeeds whether or not the post exists
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.posts.delete(&path).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/search?q=
pub async fn search_posts(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let q = query.into_inner().q.unwrap_or_default().to_lowercase();
    let mut posts = state.posts.search(&q).await?;
    newest_first(&mut posts);

    Ok(HttpResponse::Ok().json(post_list(posts, None, Some(q))))
}

pub(super) fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        body: post.body,
        category: post.category,
        author: post.author,
        created_at: post.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        updated_at: post.updated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

pub(super) fn post_list(
    posts: Vec<Post>,
    category: Option<String>,
    search: Option<String>,
) -> PostListResponse {
    PostListResponse {
        posts: posts.into_iter().map(to_response).collect(),
        categories: CATEGORIES.iter().map(|c| c.to_string()).collect(),
        category,
        search,
    }
}

fn post_not_found() -> AppError {
    AppError::NotFound("Post not found".to_string())
}
