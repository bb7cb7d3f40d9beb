use std::sync::Arc;

use brandlink_core::{
    validate_social_media_url, ContentStatus, ContentSubmission, ContentSubmissionForm,
    CreateContentRequest, EarningsSummary, PostPerformance, PostStatus, PublishedPost,
    ReviewContentRequest, SubmitPublishedPostRequest, UpdateContentStatusRequest,
    UpdatePostStatusRequest, UploadFile,
};
use uuid::Uuid;

use crate::api::ApiClient;
use crate::error::ClientError;

/// Content submissions, their review, and the live posts made from them.
#[derive(Clone)]
pub struct ContentService {
    api: Arc<ApiClient>,
}

impl ContentService {
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Runs the form gate, creates the submission, then uploads each file.
    /// Returns the submission as it stands after the last upload.
    ///
    /// Uploads are sequential; a failed upload leaves the submission in
    /// place with the files sent so far.
    ///
    /// # Errors
    ///
    /// [`ClientError::Validation`] if the form is incomplete (nothing is
    /// sent), otherwise the first transport or API error.
    pub async fn submit(
        &self,
        form: ContentSubmissionForm,
    ) -> Result<ContentSubmission, ClientError> {
        let (request, files) = form.into_request()?;
        let mut submission = self.create(&request).await?;
        for file in &files {
            submission = self.upload_file(submission.id, file).await?;
        }
        tracing::debug!(
            content_id = %submission.id,
            files = files.len(),
            "content submitted"
        );
        Ok(submission)
    }

    pub async fn create(
        &self,
        request: &CreateContentRequest,
    ) -> Result<ContentSubmission, ClientError> {
        self.api.post("content", request).await
    }

    pub async fn upload_file(
        &self,
        content_id: Uuid,
        file: &UploadFile,
    ) -> Result<ContentSubmission, ClientError> {
        self.api
            .post_file(
                &format!("content/upload/{content_id}"),
                &file.file_name,
                &file.mime_type,
                file.bytes.clone(),
            )
            .await
    }

    pub async fn my_content(&self) -> Result<Vec<ContentSubmission>, ClientError> {
        self.api.get("content/my").await
    }

    pub async fn earnings(&self) -> Result<EarningsSummary, ClientError> {
        self.api.get("content/earnings").await
    }

    pub async fn for_campaign(
        &self,
        campaign_id: Uuid,
    ) -> Result<Vec<ContentSubmission>, ClientError> {
        self.api
            .get(&format!("content/campaign/{campaign_id}"))
            .await
    }

    pub async fn get(&self, id: Uuid) -> Result<ContentSubmission, ClientError> {
        self.api.get(&format!("content/{id}")).await
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        status: ContentStatus,
        feedback: Option<String>,
    ) -> Result<ContentSubmission, ClientError> {
        self.api
            .put(
                &format!("content/{id}/status"),
                &UpdateContentStatusRequest { status, feedback },
            )
            .await
    }

    pub async fn approve(
        &self,
        id: Uuid,
        review: &ReviewContentRequest,
    ) -> Result<ContentSubmission, ClientError> {
        self.api.put(&format!("content/{id}/approve"), review).await
    }

    pub async fn reject(
        &self,
        id: Uuid,
        feedback: Option<String>,
    ) -> Result<ContentSubmission, ClientError> {
        let review = ReviewContentRequest {
            feedback,
            amount: None,
        };
        self.api.put(&format!("content/{id}/reject"), &review).await
    }

    /// Submits a live post URL after checking it against the platform's
    /// pattern.
    ///
    /// # Errors
    ///
    /// [`ClientError::Validation`] carrying the URL check's message when the
    /// link does not match; no request is sent in that case.
    pub async fn submit_published_post(
        &self,
        request: &SubmitPublishedPostRequest,
    ) -> Result<PublishedPost, ClientError> {
        let check = validate_social_media_url(&request.post_url, &request.platform);
        if !check.is_valid {
            return Err(ClientError::Validation(
                check.error.unwrap_or_else(|| "invalid post URL".into()),
            ));
        }
        self.api.post("content/published-posts", request).await
    }

    pub async fn published_posts(
        &self,
        content_id: Uuid,
    ) -> Result<Vec<PublishedPost>, ClientError> {
        self.api
            .get(&format!("content/{content_id}/published-posts"))
            .await
    }

    /// Verifier-only.
    pub async fn update_post_status(
        &self,
        post_id: Uuid,
        status: PostStatus,
    ) -> Result<PublishedPost, ClientError> {
        self.api
            .put(
                &format!("content/published-posts/{post_id}/status"),
                &UpdatePostStatusRequest { status },
            )
            .await
    }

    /// Analytics ingestion; verifier-only.
    pub async fn update_post_performance(
        &self,
        post_id: Uuid,
        performance: &PostPerformance,
    ) -> Result<PublishedPost, ClientError> {
        self.api
            .put(
                &format!("content/published-posts/{post_id}/performance"),
                performance,
            )
            .await
    }
}
