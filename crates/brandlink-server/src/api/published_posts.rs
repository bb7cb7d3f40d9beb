//! Live post links and the verifier/analytics endpoints that follow them.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use brandlink_core::{
    PostPerformance, PublishedPost, SubmitPublishedPostRequest, UpdatePostStatusRequest, UserRole,
};
use uuid::Uuid;

use crate::actor::Actor;
use crate::middleware::RequestId;

use super::{map_store_error, ApiError, ApiResponse, AppState};

/// POST /api/v1/content/published-posts
pub(super) async fn submit_published_post(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    actor: Actor,
    Json(body): Json<SubmitPublishedPostRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PublishedPost>>), ApiError> {
    let rid = &req_id.0;
    actor.require(rid, &[UserRole::Influencer])?;
    let post = state
        .store
        .submit_post(&actor, body)
        .await
        .map_err(|e| map_store_error(rid, e))?;
    tracing::info!(
        post_id = %post.id,
        content_id = %post.content_id,
        platform = %post.platform,
        "published post submitted"
    );
    Ok((StatusCode::CREATED, ApiResponse::new(&req_id, post)))
}

/// GET /api/v1/content/{id}/published-posts
pub(super) async fn list_published_posts(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    actor: Actor,
    Path(content_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<PublishedPost>>>, ApiError> {
    let posts = state
        .store
        .content_posts(&actor, content_id)
        .await
        .map_err(|e| map_store_error(&req_id.0, e))?;
    Ok(ApiResponse::new(&req_id, posts))
}

/// PUT /api/v1/content/published-posts/{id}/status
pub(super) async fn update_post_status(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    actor: Actor,
    Path(post_id): Path<Uuid>,
    Json(body): Json<UpdatePostStatusRequest>,
) -> Result<Json<ApiResponse<PublishedPost>>, ApiError> {
    let rid = &req_id.0;
    actor.require(rid, &[UserRole::Admin])?;
    let post = state
        .store
        .update_post_status(post_id, body.status)
        .await
        .map_err(|e| map_store_error(rid, e))?;
    tracing::info!(%post_id, status = %post.status, "published post verified");
    Ok(ApiResponse::new(&req_id, post))
}

/// PUT /api/v1/content/published-posts/{id}/performance
pub(super) async fn update_post_performance(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    actor: Actor,
    Path(post_id): Path<Uuid>,
    Json(body): Json<PostPerformance>,
) -> Result<Json<ApiResponse<PublishedPost>>, ApiError> {
    let rid = &req_id.0;
    actor.require(rid, &[UserRole::Admin])?;
    let post = state
        .store
        .update_post_performance(post_id, body)
        .await
        .map_err(|e| map_store_error(rid, e))?;
    Ok(ApiResponse::new(&req_id, post))
}
