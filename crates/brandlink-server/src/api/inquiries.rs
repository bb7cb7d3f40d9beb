//! Collaboration inquiries sent to influencers.
//!
//! Creating an inquiry needs no actor: companies reach out from a public
//! profile page.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use brandlink_core::{CreateInquiryRequest, Inquiry, UpdateInquiryStatusRequest, UserRole};
use uuid::Uuid;
use validator::Validate;

use crate::actor::Actor;
use crate::middleware::RequestId;

use super::{map_store_error, map_validation_errors, ApiError, ApiResponse, AppState};

pub(super) async fn create_inquiry(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<CreateInquiryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Inquiry>>), ApiError> {
    let rid = &req_id.0;
    body.validate().map_err(|e| map_validation_errors(rid, &e))?;
    let inquiry = state.store.create_inquiry(body).await;
    tracing::info!(
        inquiry_id = %inquiry.id,
        influencer_id = %inquiry.influencer_id,
        "inquiry received"
    );
    Ok((StatusCode::CREATED, ApiResponse::new(&req_id, inquiry)))
}

pub(super) async fn list_my_inquiries(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    actor: Actor,
) -> Result<Json<ApiResponse<Vec<Inquiry>>>, ApiError> {
    actor.require(&req_id.0, &[UserRole::Influencer])?;
    let inquiries = state.store.influencer_inquiries(actor.user_id).await;
    Ok(ApiResponse::new(&req_id, inquiries))
}

pub(super) async fn update_inquiry_status(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateInquiryStatusRequest>,
) -> Result<Json<ApiResponse<Inquiry>>, ApiError> {
    let rid = &req_id.0;
    actor.require(rid, &[UserRole::Influencer, UserRole::Admin])?;
    body.validate().map_err(|e| map_validation_errors(rid, &e))?;
    let inquiry = state
        .store
        .update_inquiry_status(&actor, id, body)
        .await
        .map_err(|e| map_store_error(rid, e))?;
    Ok(ApiResponse::new(&req_id, inquiry))
}
