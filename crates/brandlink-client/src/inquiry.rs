use std::sync::Arc;

use brandlink_core::{CreateInquiryRequest, Inquiry, InquiryStatus, UpdateInquiryStatusRequest};
use uuid::Uuid;
use validator::Validate;

use crate::api::ApiClient;
use crate::error::ClientError;

#[derive(Clone)]
pub struct InquiryService {
    api: Arc<ApiClient>,
}

impl InquiryService {
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Public: no actor is required to raise an inquiry.
    pub async fn create(&self, request: &CreateInquiryRequest) -> Result<Inquiry, ClientError> {
        request.validate()?;
        self.api.post("inquiries", request).await
    }

    pub async fn my_inquiries(&self) -> Result<Vec<Inquiry>, ClientError> {
        self.api.get("inquiries/my").await
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        status: InquiryStatus,
        response: Option<String>,
    ) -> Result<Inquiry, ClientError> {
        let request = UpdateInquiryStatusRequest { status, response };
        request.validate()?;
        self.api
            .put(&format!("inquiries/{id}/status"), &request)
            .await
    }
}
