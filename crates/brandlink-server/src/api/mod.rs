mod applications;
mod campaigns;
mod content;
mod inquiries;
mod profiles;
mod published_posts;

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, State},
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post, put},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::actor::{USER_ID_HEADER, USER_ROLE_HEADER};
use crate::middleware::{
    enforce_rate_limit, request_id, require_bearer_auth, AuthState, RateLimitState, RequestId,
};
use crate::store::{Store, StoreError};

/// Largest multipart body accepted by the upload route.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<Store>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

impl ResponseMeta {
    pub(crate) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub(crate) fn new(req_id: &RequestId, data: T) -> Json<Self> {
        Json(Self {
            data,
            meta: ResponseMeta::new(req_id.0.clone()),
        })
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "unauthorized" => StatusCode::UNAUTHORIZED,
            "forbidden" => StatusCode::FORBIDDEN,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "conflict" | "invalid_transition" => StatusCode::CONFLICT,
            "rate_limited" => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

pub(crate) fn map_store_error(request_id: &str, error: StoreError) -> ApiError {
    let code = match &error {
        StoreError::NotFound(_) => "not_found",
        StoreError::Forbidden(_) => "forbidden",
        StoreError::Conflict(_) => "conflict",
        StoreError::Validation(_) => "validation_error",
        StoreError::InvalidTransition(_) => "invalid_transition",
    };
    tracing::debug!(code, error = %error, "request rejected by store");
    ApiError::new(request_id, code, error.to_string())
}

pub(crate) fn map_validation_errors(
    request_id: &str,
    errors: &validator::ValidationErrors,
) -> ApiError {
    ApiError::new(request_id, "validation_error", errors.to_string())
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-request-id"),
            HeaderName::from_static(USER_ID_HEADER),
            HeaderName::from_static(USER_ROLE_HEADER),
        ])
}

fn campaign_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/campaigns", post(campaigns::create_campaign))
        .route(
            "/api/v1/campaigns/my-campaigns",
            get(campaigns::list_my_campaigns),
        )
        .route("/api/v1/campaigns/browse", get(campaigns::browse_campaigns))
        .route(
            "/api/v1/campaigns/{id}",
            get(campaigns::get_campaign)
                .put(campaigns::update_campaign)
                .delete(campaigns::delete_campaign),
        )
        .route(
            "/api/v1/campaigns/{id}/status",
            put(campaigns::update_campaign_status),
        )
        .route(
            "/api/v1/campaigns/{id}/applications",
            get(applications::list_campaign_applications),
        )
        .route(
            "/api/v1/campaigns/{id}/performance",
            get(campaigns::campaign_performance),
        )
        .route(
            "/api/v1/campaigns/{id}/apply",
            post(applications::apply_to_campaign),
        )
        .route(
            "/api/v1/campaigns/applications/my",
            get(applications::list_my_applications),
        )
        .route(
            "/api/v1/campaigns/applications/{id}/status",
            put(applications::update_application_status),
        )
}

fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/content", post(content::create_content))
        .route(
            "/api/v1/content/upload/{id}",
            post(content::upload_file).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/api/v1/content/my", get(content::list_my_content))
        .route("/api/v1/content/earnings", get(content::earnings))
        .route(
            "/api/v1/content/campaign/{id}",
            get(content::list_campaign_content),
        )
        .route("/api/v1/content/{id}", get(content::get_content))
        .route(
            "/api/v1/content/{id}/status",
            put(content::update_content_status),
        )
        .route(
            "/api/v1/content/{id}/approve",
            put(content::approve_content),
        )
        .route("/api/v1/content/{id}/reject", put(content::reject_content))
        .route(
            "/api/v1/content/published-posts",
            post(published_posts::submit_published_post),
        )
        .route(
            "/api/v1/content/{id}/published-posts",
            get(published_posts::list_published_posts),
        )
        .route(
            "/api/v1/content/published-posts/{id}/status",
            put(published_posts::update_post_status),
        )
        .route(
            "/api/v1/content/published-posts/{id}/performance",
            put(published_posts::update_post_performance),
        )
}

fn protected_router(auth: AuthState, rate_limit: RateLimitState) -> Router<AppState> {
    Router::new()
        .merge(campaign_routes())
        .merge(content_routes())
        .route("/api/v1/inquiries", post(inquiries::create_inquiry))
        .route("/api/v1/inquiries/my", get(inquiries::list_my_inquiries))
        .route(
            "/api/v1/inquiries/{id}/status",
            put(inquiries::update_inquiry_status),
        )
        .route(
            "/api/v1/profile",
            get(profiles::get_profile).put(profiles::update_profile),
        )
        .route("/api/v1/profile/brand", put(profiles::update_brand_profile))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn_with_state(
                    rate_limit,
                    enforce_rate_limit,
                ))
                .layer(axum::middleware::from_fn_with_state(
                    auth,
                    require_bearer_auth,
                )),
        )
}

pub fn build_app(state: AppState, auth: AuthState, rate_limit: RateLimitState) -> Router {
    let public_routes = Router::new().route("/api/v1/health", get(health));

    Router::new()
        .merge(public_routes)
        .merge(protected_router(auth, rate_limit))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(_state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    (
        StatusCode::OK,
        ApiResponse::new(&req_id, HealthData { status: "ok" }),
    )
}

#[cfg(test)]
#[path = "router_test.rs"]
mod tests;
