//! Post handlers. Each one issues exactly one record store call.

use actix_web::{HttpResponse, web};

use blog_core::domain::{Post, PostDraft, timestamp};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    tracing::debug!(count = posts.len(), "Listed posts");

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .posts
        .find_by_id(&id)
        .await?
        .ok_or(AppError::PostNotFound)?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /posts
///
/// The body is coerced, never rejected: missing or malformed fields take their defaults.
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let post = Post::new(PostDraft::from_json_lenient(&body));
    let saved = state.posts.save(post).await?;
    tracing::info!(post_id = %saved.id, "Created post");

    Ok(HttpResponse::Created().json(saved))
}

/// PUT /posts/{id}
///
/// Full replacement of the writable fields. An unknown id is a 404; nothing is created.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let draft = PostDraft::from_json_lenient(&body);
    let updated = state.posts.update(&id, draft, timestamp::now()).await?;
    tracing::info!(post_id = %id, "Updated post");

    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.posts.delete(&id).await?;
    tracing::info!(post_id = %id, "Deleted post");

    Ok(HttpResponse::NoContent().finish())
}
