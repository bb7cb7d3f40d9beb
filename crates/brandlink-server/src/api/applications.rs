//! Campaign application handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use brandlink_core::{
    ApplicationData, CampaignApplication, UpdateApplicationStatusRequest, UserRole,
};
use uuid::Uuid;

use crate::actor::Actor;
use crate::middleware::RequestId;

use super::{map_store_error, ApiError, ApiResponse, AppState};

/// POST /api/v1/campaigns/{id}/apply
pub(super) async fn apply_to_campaign(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    actor: Actor,
    Path(campaign_id): Path<Uuid>,
    Json(body): Json<ApplicationData>,
) -> Result<(StatusCode, Json<ApiResponse<CampaignApplication>>), ApiError> {
    let rid = &req_id.0;
    actor.require(rid, &[UserRole::Influencer])?;
    let application = state
        .store
        .apply(actor.user_id, campaign_id, body)
        .await
        .map_err(|e| map_store_error(rid, e))?;
    tracing::info!(
        application_id = %application.id,
        %campaign_id,
        status = %application.status,
        "application received"
    );
    Ok((StatusCode::CREATED, ApiResponse::new(&req_id, application)))
}

/// GET /api/v1/campaigns/{id}/applications
pub(super) async fn list_campaign_applications(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    actor: Actor,
    Path(campaign_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<CampaignApplication>>>, ApiError> {
    let rid = &req_id.0;
    actor.require(rid, &[UserRole::Brand, UserRole::Admin])?;
    let applications = state
        .store
        .campaign_applications(&actor, campaign_id)
        .await
        .map_err(|e| map_store_error(rid, e))?;
    Ok(ApiResponse::new(&req_id, applications))
}

/// GET /api/v1/campaigns/applications/my
pub(super) async fn list_my_applications(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    actor: Actor,
) -> Result<Json<ApiResponse<Vec<CampaignApplication>>>, ApiError> {
    actor.require(&req_id.0, &[UserRole::Influencer])?;
    let applications = state.store.influencer_applications(actor.user_id).await;
    Ok(ApiResponse::new(&req_id, applications))
}

/// PUT /api/v1/campaigns/applications/{id}/status
pub(super) async fn update_application_status(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    actor: Actor,
    Path(application_id): Path<Uuid>,
    Json(body): Json<UpdateApplicationStatusRequest>,
) -> Result<Json<ApiResponse<CampaignApplication>>, ApiError> {
    let rid = &req_id.0;
    actor.require(rid, &[UserRole::Brand, UserRole::Admin])?;
    let application = state
        .store
        .update_application_status(&actor, application_id, body.status)
        .await
        .map_err(|e| map_store_error(rid, e))?;
    tracing::info!(%application_id, status = %application.status, "application answered");
    Ok(ApiResponse::new(&req_id, application))
}
