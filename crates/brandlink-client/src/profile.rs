use std::sync::Arc;

use brandlink_core::{UpdateBrandProfileRequest, UpdateUserProfileRequest, UserProfile};
use validator::Validate;

use crate::api::ApiClient;
use crate::error::ClientError;

#[derive(Clone)]
pub struct ProfileService {
    api: Arc<ApiClient>,
}

impl ProfileService {
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn get(&self) -> Result<UserProfile, ClientError> {
        self.api.get("profile").await
    }

    pub async fn update(
        &self,
        request: &UpdateUserProfileRequest,
    ) -> Result<UserProfile, ClientError> {
        request.validate()?;
        self.api.put("profile", request).await
    }

    pub async fn update_brand(
        &self,
        request: &UpdateBrandProfileRequest,
    ) -> Result<UserProfile, ClientError> {
        request.validate()?;
        self.api.put("profile/brand", request).await
    }
}
