use axum::{extract::State, Extension, Json};
use brandlink_core::{UpdateBrandProfileRequest, UpdateUserProfileRequest, UserProfile, UserRole};
use validator::Validate;

use crate::actor::Actor;
use crate::middleware::RequestId;

use super::{map_validation_errors, ApiError, ApiResponse, AppState};

/// GET /api/v1/profile
pub(super) async fn get_profile(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    actor: Actor,
) -> Json<ApiResponse<UserProfile>> {
    ApiResponse::new(&req_id, state.store.profile(&actor).await)
}

/// PUT /api/v1/profile
pub(super) async fn update_profile(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    actor: Actor,
    Json(body): Json<UpdateUserProfileRequest>,
) -> Result<Json<ApiResponse<UserProfile>>, ApiError> {
    let rid = &req_id.0;
    body.validate().map_err(|e| map_validation_errors(rid, &e))?;
    let profile = state.store.update_profile(&actor, body).await;
    Ok(ApiResponse::new(&req_id, profile))
}

/// PUT /api/v1/profile/brand
pub(super) async fn update_brand_profile(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    actor: Actor,
    Json(body): Json<UpdateBrandProfileRequest>,
) -> Result<Json<ApiResponse<UserProfile>>, ApiError> {
    let rid = &req_id.0;
    actor.require(rid, &[UserRole::Brand])?;
    body.validate().map_err(|e| map_validation_errors(rid, &e))?;
    let profile = state.store.update_brand_profile(&actor, body).await;
    Ok(ApiResponse::new(&req_id, profile))
}
