//! Campaign handlers.
//!
//! - `POST   /api/v1/campaigns`                 create (brand)
//! - `GET    /api/v1/campaigns/my-campaigns`    the caller's campaigns
//! - `GET    /api/v1/campaigns/browse`          active campaigns
//! - `GET    /api/v1/campaigns/{id}`            one campaign
//! - `PUT    /api/v1/campaigns/{id}`            edit fields (owner)
//! - `DELETE /api/v1/campaigns/{id}`            delete (owner)
//! - `PUT    /api/v1/campaigns/{id}/status`     lifecycle move (owner)
//! - `GET    /api/v1/campaigns/{id}/performance` aggregated post metrics

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use brandlink_core::{
    Campaign, CampaignFilters, CampaignPerformance, CreateCampaignRequest, Page,
    UpdateCampaignRequest, UpdateCampaignStatusRequest, UserRole,
};
use uuid::Uuid;
use validator::Validate;

use crate::actor::Actor;
use crate::middleware::RequestId;

use super::{map_store_error, map_validation_errors, ApiError, ApiResponse, AppState};

const BRAND: &[UserRole] = &[UserRole::Brand, UserRole::Admin];

pub(super) async fn create_campaign(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    actor: Actor,
    Json(body): Json<CreateCampaignRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Campaign>>), ApiError> {
    let rid = &req_id.0;
    actor.require(rid, BRAND)?;
    body.validate().map_err(|e| map_validation_errors(rid, &e))?;

    let campaign = state
        .store
        .create_campaign(actor.user_id, body)
        .await
        .map_err(|e| map_store_error(rid, e))?;
    tracing::info!(campaign_id = %campaign.id, brand_id = %campaign.brand_id, "campaign created");

    Ok((StatusCode::CREATED, ApiResponse::new(&req_id, campaign)))
}

pub(super) async fn list_my_campaigns(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    actor: Actor,
    Query(filters): Query<CampaignFilters>,
) -> Result<Json<ApiResponse<Page<Campaign>>>, ApiError> {
    actor.require(&req_id.0, BRAND)?;
    let page = state.store.brand_campaigns(actor.user_id, &filters).await;
    Ok(ApiResponse::new(&req_id, page))
}

pub(super) async fn browse_campaigns(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    _actor: Actor,
    Query(filters): Query<CampaignFilters>,
) -> Json<ApiResponse<Page<Campaign>>> {
    let page = state.store.browse_campaigns(&filters).await;
    ApiResponse::new(&req_id, page)
}

pub(super) async fn get_campaign(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    _actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Campaign>>, ApiError> {
    let campaign = state
        .store
        .campaign(id)
        .await
        .map_err(|e| map_store_error(&req_id.0, e))?;
    Ok(ApiResponse::new(&req_id, campaign))
}

pub(super) async fn update_campaign(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateCampaignRequest>,
) -> Result<Json<ApiResponse<Campaign>>, ApiError> {
    let rid = &req_id.0;
    actor.require(rid, BRAND)?;
    body.validate().map_err(|e| map_validation_errors(rid, &e))?;

    let campaign = state
        .store
        .update_campaign(&actor, id, body)
        .await
        .map_err(|e| map_store_error(rid, e))?;
    Ok(ApiResponse::new(&req_id, campaign))
}

pub(super) async fn delete_campaign(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let rid = &req_id.0;
    actor.require(rid, BRAND)?;
    state
        .store
        .delete_campaign(&actor, id)
        .await
        .map_err(|e| map_store_error(rid, e))?;
    tracing::info!(campaign_id = %id, "campaign deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub(super) async fn update_campaign_status(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateCampaignStatusRequest>,
) -> Result<Json<ApiResponse<Campaign>>, ApiError> {
    let rid = &req_id.0;
    actor.require(rid, BRAND)?;
    let campaign = state
        .store
        .update_campaign_status(&actor, id, body.status)
        .await
        .map_err(|e| map_store_error(rid, e))?;
    tracing::info!(campaign_id = %id, status = %campaign.status, "campaign status changed");
    Ok(ApiResponse::new(&req_id, campaign))
}

pub(super) async fn campaign_performance(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CampaignPerformance>>, ApiError> {
    let rid = &req_id.0;
    actor.require(rid, BRAND)?;
    let performance = state
        .store
        .campaign_performance(&actor, id)
        .await
        .map_err(|e| map_store_error(rid, e))?;
    Ok(ApiResponse::new(&req_id, performance))
}
