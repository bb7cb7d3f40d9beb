use std::sync::Arc;

use brandlink_core::{
    ApplicationData, ApplicationStatus, Campaign, CampaignApplication, CampaignFilters,
    CampaignPerformance, CampaignStatus, CreateCampaignRequest, Page,
    UpdateApplicationStatusRequest, UpdateCampaignRequest, UpdateCampaignStatusRequest,
};
use uuid::Uuid;
use validator::Validate;

use crate::api::ApiClient;
use crate::error::ClientError;

/// Campaigns and the applications made to them.
#[derive(Clone)]
pub struct CampaignService {
    api: Arc<ApiClient>,
}

impl CampaignService {
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// # Errors
    ///
    /// [`ClientError::Validation`] if the request fails its field checks;
    /// otherwise any transport or API error.
    pub async fn create(&self, request: &CreateCampaignRequest) -> Result<Campaign, ClientError> {
        request.validate()?;
        self.api.post("campaigns", request).await
    }

    /// The signed-in brand's campaigns.
    pub async fn my_campaigns(
        &self,
        filters: &CampaignFilters,
    ) -> Result<Page<Campaign>, ClientError> {
        self.api
            .get_with_query("campaigns/my-campaigns", filters)
            .await
    }

    /// Active campaigns open to influencers.
    pub async fn browse(&self, filters: &CampaignFilters) -> Result<Page<Campaign>, ClientError> {
        self.api.get_with_query("campaigns/browse", filters).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Campaign, ClientError> {
        self.api.get(&format!("campaigns/{id}")).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateCampaignRequest,
    ) -> Result<Campaign, ClientError> {
        request.validate()?;
        self.api.put(&format!("campaigns/{id}"), request).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ClientError> {
        self.api.delete(&format!("campaigns/{id}")).await
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        status: CampaignStatus,
    ) -> Result<Campaign, ClientError> {
        self.api
            .put(
                &format!("campaigns/{id}/status"),
                &UpdateCampaignStatusRequest { status },
            )
            .await
    }

    pub async fn applications(
        &self,
        campaign_id: Uuid,
    ) -> Result<Vec<CampaignApplication>, ClientError> {
        self.api
            .get(&format!("campaigns/{campaign_id}/applications"))
            .await
    }

    pub async fn performance(&self, campaign_id: Uuid) -> Result<CampaignPerformance, ClientError> {
        self.api
            .get(&format!("campaigns/{campaign_id}/performance"))
            .await
    }

    /// Submits an application after the form gate passes.
    ///
    /// # Errors
    ///
    /// [`ClientError::Validation`] naming the missing fields; no request is
    /// sent in that case.
    pub async fn apply(
        &self,
        campaign_id: Uuid,
        data: &ApplicationData,
    ) -> Result<CampaignApplication, ClientError> {
        data.ensure_submittable()?;
        self.api
            .post(&format!("campaigns/{campaign_id}/apply"), data)
            .await
    }

    pub async fn my_applications(&self) -> Result<Vec<CampaignApplication>, ClientError> {
        self.api.get("campaigns/applications/my").await
    }

    pub async fn update_application_status(
        &self,
        application_id: Uuid,
        status: ApplicationStatus,
    ) -> Result<CampaignApplication, ClientError> {
        self.api
            .put(
                &format!("campaigns/applications/{application_id}/status"),
                &UpdateApplicationStatusRequest { status },
            )
            .await
    }

    pub async fn accept_application(
        &self,
        application_id: Uuid,
    ) -> Result<CampaignApplication, ClientError> {
        self.update_application_status(application_id, ApplicationStatus::Accepted)
            .await
    }

    pub async fn reject_application(
        &self,
        application_id: Uuid,
    ) -> Result<CampaignApplication, ClientError> {
        self.update_application_status(application_id, ApplicationStatus::Rejected)
            .await
    }
}
