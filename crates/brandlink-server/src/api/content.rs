//! Content submission handlers: creation, file upload, listing and review.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Extension, Json,
};
use brandlink_core::{
    ContentSubmission, CreateContentRequest, EarningsSummary, ReviewContentRequest,
    UpdateContentStatusRequest, UserRole,
};
use uuid::Uuid;

use crate::actor::Actor;
use crate::middleware::RequestId;
use crate::store::NewFile;

use super::{map_store_error, ApiError, ApiResponse, AppState};

const REVIEWERS: &[UserRole] = &[UserRole::Brand, UserRole::Admin];

type ContentResponse = Result<Json<ApiResponse<ContentSubmission>>, ApiError>;

// ---------------------------------------------------------------------------
// Influencer side
// ---------------------------------------------------------------------------

/// POST /api/v1/content
pub(super) async fn create_content(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    actor: Actor,
    Json(body): Json<CreateContentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ContentSubmission>>), ApiError> {
    let rid = &req_id.0;
    actor.require(rid, &[UserRole::Influencer])?;
    let content = state
        .store
        .create_content(actor.user_id, body)
        .await
        .map_err(|e| map_store_error(rid, e))?;
    tracing::info!(content_id = %content.id, campaign_id = %content.campaign_id, "content created");
    Ok((StatusCode::CREATED, ApiResponse::new(&req_id, content)))
}

/// POST /api/v1/content/upload/{id}
///
/// Expects one multipart part named `file`.
pub(super) async fn upload_file(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    actor: Actor,
    Path(content_id): Path<Uuid>,
    mut multipart: Multipart,
) -> ContentResponse {
    let rid = &req_id.0;
    actor.require(rid, &[UserRole::Influencer])?;

    let bad_multipart = |e: axum::extract::multipart::MultipartError| {
        ApiError::new(rid, "bad_request", e.body_text())
    };

    let mut upload = None;
    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field.bytes().await.map_err(bad_multipart)?;
        upload = Some(NewFile {
            file_name,
            mime_type,
            bytes: bytes.to_vec(),
        });
        break;
    }
    let Some(file) = upload else {
        return Err(ApiError::new(
            rid,
            "validation_error",
            "multipart body must contain a `file` part",
        ));
    };

    let size = file.bytes.len();
    let content = state
        .store
        .add_file(&actor, content_id, file)
        .await
        .map_err(|e| map_store_error(rid, e))?;
    tracing::info!(%content_id, size, "content file stored");
    Ok(ApiResponse::new(&req_id, content))
}

/// GET /api/v1/content/my
pub(super) async fn list_my_content(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    actor: Actor,
) -> Result<Json<ApiResponse<Vec<ContentSubmission>>>, ApiError> {
    actor.require(&req_id.0, &[UserRole::Influencer])?;
    let items = state.store.influencer_content(actor.user_id).await;
    Ok(ApiResponse::new(&req_id, items))
}

/// GET /api/v1/content/earnings
pub(super) async fn earnings(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    actor: Actor,
) -> Result<Json<ApiResponse<EarningsSummary>>, ApiError> {
    actor.require(&req_id.0, &[UserRole::Influencer])?;
    let summary = state.store.earnings(actor.user_id).await;
    Ok(ApiResponse::new(&req_id, summary))
}

// ---------------------------------------------------------------------------
// Brand side
// ---------------------------------------------------------------------------

/// GET /api/v1/content/campaign/{id}
pub(super) async fn list_campaign_content(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    actor: Actor,
    Path(campaign_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<ContentSubmission>>>, ApiError> {
    let rid = &req_id.0;
    actor.require(rid, REVIEWERS)?;
    let items = state
        .store
        .campaign_content(&actor, campaign_id)
        .await
        .map_err(|e| map_store_error(rid, e))?;
    Ok(ApiResponse::new(&req_id, items))
}

/// GET /api/v1/content/{id}
pub(super) async fn get_content(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> ContentResponse {
    let content = state
        .store
        .content(&actor, id)
        .await
        .map_err(|e| map_store_error(&req_id.0, e))?;
    Ok(ApiResponse::new(&req_id, content))
}

/// PUT /api/v1/content/{id}/status
pub(super) async fn update_content_status(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateContentStatusRequest>,
) -> ContentResponse {
    let rid = &req_id.0;
    actor.require(rid, REVIEWERS)?;
    let content = state
        .store
        .update_content_status(&actor, id, body.status, body.feedback)
        .await
        .map_err(|e| map_store_error(rid, e))?;
    tracing::info!(content_id = %id, status = %content.status, "content status changed");
    Ok(ApiResponse::new(&req_id, content))
}

/// PUT /api/v1/content/{id}/approve
pub(super) async fn approve_content(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    actor: Actor,
    Path(id): Path<Uuid>,
    body: Option<Json<ReviewContentRequest>>,
) -> ContentResponse {
    let rid = &req_id.0;
    actor.require(rid, REVIEWERS)?;
    let review = body.map(|Json(b)| b).unwrap_or_default();
    let content = state
        .store
        .approve_content(&actor, id, review)
        .await
        .map_err(|e| map_store_error(rid, e))?;
    tracing::info!(content_id = %id, "content approved");
    Ok(ApiResponse::new(&req_id, content))
}

/// PUT /api/v1/content/{id}/reject
pub(super) async fn reject_content(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    actor: Actor,
    Path(id): Path<Uuid>,
    body: Option<Json<ReviewContentRequest>>,
) -> ContentResponse {
    let rid = &req_id.0;
    actor.require(rid, REVIEWERS)?;
    let feedback = body.and_then(|Json(b)| b.feedback);
    let content = state
        .store
        .reject_content(&actor, id, feedback)
        .await
        .map_err(|e| map_store_error(rid, e))?;
    tracing::info!(content_id = %id, "content rejected");
    Ok(ApiResponse::new(&req_id, content))
}
