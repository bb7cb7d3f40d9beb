//! Caller identity taken from the `x-user-id` / `x-user-role` headers.
//!
//! The headers are trusted as sent. Bearer auth is the only gate in front of
//! them, so any key holder can claim any role, `admin` included.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use brandlink_core::UserRole;
use uuid::Uuid;

use crate::api::ApiError;
use crate::middleware::RequestId;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: Uuid,
    pub role: UserRole,
}

impl Actor {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Fails with `forbidden` unless the caller holds one of `roles`.
    pub fn require(&self, req_id: &str, roles: &[UserRole]) -> Result<(), ApiError> {
        if roles.contains(&self.role) {
            return Ok(());
        }
        let allowed: Vec<&str> = roles.iter().map(|r| r.as_str()).collect();
        Err(ApiError::new(
            req_id,
            "forbidden",
            format!(
                "this action requires role {} (caller is {})",
                allowed.join(" or "),
                self.role
            ),
        ))
    }
}

fn header_str<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let req_id = parts
            .extensions
            .get::<RequestId>()
            .map(|r| r.0.clone())
            .unwrap_or_default();

        let user_id = header_str(parts, USER_ID_HEADER).and_then(|v| Uuid::parse_str(v).ok());
        let role = header_str(parts, USER_ROLE_HEADER).and_then(|v| v.parse::<UserRole>().ok());

        match (user_id, role) {
            (Some(user_id), Some(role)) => Ok(Self { user_id, role }),
            _ => Err(ApiError::new(
                req_id,
                "unauthorized",
                "missing or invalid x-user-id / x-user-role headers",
            )),
        }
    }
}
