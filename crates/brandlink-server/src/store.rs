//! In-memory marketplace state.
//!
//! Every mutation takes the write lock for its whole check-then-set, so two
//! concurrent transitions on the same entity cannot both pass the lifecycle
//! check.

use std::collections::HashMap;

use brandlink_core::{
    can_submit_post_url, ensure_transition, extract_post_id, validate_social_media_url,
    ApplicationData, ApplicationStatus, Campaign, CampaignApplication, CampaignFilters,
    CampaignPerformance, CampaignStatus, ContentFile, ContentStatus, ContentSubmission,
    CoreError, CreateCampaignRequest, CreateContentRequest, CreateInquiryRequest,
    EarningsSummary, Inquiry, InquiryStatus, Page, PerformanceTotals, PostPerformance,
    PostStatus, PublishedPost, ReviewContentRequest, SubmitPublishedPostRequest,
    UpdateBrandProfileRequest, UpdateCampaignRequest, UpdateInquiryStatusRequest,
    UpdateUserProfileRequest, UserProfile,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::actor::Actor;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    InvalidTransition(CoreError),
}

impl From<CoreError> for StoreError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidTransition { .. } => Self::InvalidTransition(err),
            CoreError::Validation(message) => Self::Validation(message),
            CoreError::UnknownStatus { .. } => Self::Validation(err.to_string()),
        }
    }
}

type StoreResult<T> = Result<T, StoreError>;

/// Bytes accepted by a single content upload.
pub struct NewFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Default)]
struct Tables {
    campaigns: HashMap<Uuid, Campaign>,
    applications: HashMap<Uuid, CampaignApplication>,
    content: HashMap<Uuid, ContentSubmission>,
    /// Published post id to owning content id.
    post_index: HashMap<Uuid, Uuid>,
    inquiries: HashMap<Uuid, Inquiry>,
    profiles: HashMap<Uuid, UserProfile>,
}

#[derive(Default)]
pub struct Store {
    tables: RwLock<Tables>,
}

fn ensure_owner(actor: &Actor, owner_id: Uuid, what: &str) -> StoreResult<()> {
    if actor.is_admin() || actor.user_id == owner_id {
        Ok(())
    } else {
        Err(StoreError::Forbidden(format!("you do not own this {what}")))
    }
}

fn missing_fields_error(missing: &[&str]) -> StoreResult<()> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(StoreError::Validation(format!(
            "missing required fields: {}",
            missing.join(", ")
        )))
    }
}

fn newest_first<T>(items: &mut [T], key: impl Fn(&T) -> DateTime<Utc>) {
    items.sort_by_key(|item| std::cmp::Reverse(key(item)));
}

impl Tables {
    fn campaign(&self, id: Uuid) -> StoreResult<&Campaign> {
        self.campaigns
            .get(&id)
            .ok_or(StoreError::NotFound("campaign"))
    }

    fn campaign_mut(&mut self, id: Uuid) -> StoreResult<&mut Campaign> {
        self.campaigns
            .get_mut(&id)
            .ok_or(StoreError::NotFound("campaign"))
    }

    fn content(&self, id: Uuid) -> StoreResult<&ContentSubmission> {
        self.content.get(&id).ok_or(StoreError::NotFound("content"))
    }

    fn content_mut(&mut self, id: Uuid) -> StoreResult<&mut ContentSubmission> {
        self.content
            .get_mut(&id)
            .ok_or(StoreError::NotFound("content"))
    }

    fn brand_of_campaign(&self, campaign_id: Uuid) -> StoreResult<Uuid> {
        self.campaign(campaign_id).map(|c| c.brand_id)
    }

    fn accepted_count(&self, campaign_id: Uuid) -> usize {
        self.applications
            .values()
            .filter(|a| a.campaign_id == campaign_id && a.status == ApplicationStatus::Accepted)
            .count()
    }

    fn has_capacity(&self, campaign: &Campaign) -> bool {
        campaign
            .max_influencers
            .is_none_or(|max| self.accepted_count(campaign.id) < max as usize)
    }

    /// Influencer who made it, brand that owns the campaign, or an admin.
    fn ensure_can_view_content(
        &self,
        actor: &Actor,
        content: &ContentSubmission,
    ) -> StoreResult<()> {
        if actor.is_admin() || content.influencer_id == actor.user_id {
            return Ok(());
        }
        let brand_id = self.brand_of_campaign(content.campaign_id)?;
        ensure_owner(actor, brand_id, "content")
    }

    fn post_mut(&mut self, post_id: Uuid) -> StoreResult<&mut PublishedPost> {
        let content_id = *self
            .post_index
            .get(&post_id)
            .ok_or(StoreError::NotFound("published post"))?;
        self.content_mut(content_id)?
            .published_posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(StoreError::NotFound("published post"))
    }
}

impl Store {
    // -----------------------------------------------------------------------
    // Campaigns
    // -----------------------------------------------------------------------

    pub async fn create_campaign(
        &self,
        brand_id: Uuid,
        request: CreateCampaignRequest,
    ) -> StoreResult<Campaign> {
        let status = request.status.unwrap_or(CampaignStatus::Draft);
        if !matches!(status, CampaignStatus::Draft | CampaignStatus::Active) {
            return Err(StoreError::Validation(format!(
                "campaigns are created as DRAFT or ACTIVE, not {status}"
            )));
        }
        let now = Utc::now();
        let campaign = Campaign {
            id: Uuid::new_v4(),
            brand_id,
            title: request.title.trim().to_string(),
            objective: request.objective,
            description: request.description,
            budget: request.budget,
            start_date: request.start_date,
            end_date: request.end_date,
            max_influencers: request.max_influencers,
            status,
            requires_approval: request.requires_approval.unwrap_or(true),
            target_criteria: request.target_criteria,
            requirements: request.requirements,
            created_at: now,
            updated_at: now,
        };
        self.tables
            .write()
            .await
            .campaigns
            .insert(campaign.id, campaign.clone());
        Ok(campaign)
    }

    pub async fn brand_campaigns(
        &self,
        brand_id: Uuid,
        filters: &CampaignFilters,
    ) -> Page<Campaign> {
        let tables = self.tables.read().await;
        let mut items: Vec<Campaign> = tables
            .campaigns
            .values()
            .filter(|c| c.brand_id == brand_id && filters.matches(c))
            .cloned()
            .collect();
        drop(tables);
        newest_first(&mut items, |c| c.created_at);
        Page::paginate(items, filters.page, filters.limit)
    }

    /// Active campaigns only, whatever status filter was requested.
    pub async fn browse_campaigns(&self, filters: &CampaignFilters) -> Page<Campaign> {
        let tables = self.tables.read().await;
        let mut items: Vec<Campaign> = tables
            .campaigns
            .values()
            .filter(|c| c.status == CampaignStatus::Active && filters.matches(c))
            .cloned()
            .collect();
        drop(tables);
        newest_first(&mut items, |c| c.created_at);
        Page::paginate(items, filters.page, filters.limit)
    }

    pub async fn campaign(&self, id: Uuid) -> StoreResult<Campaign> {
        self.tables.read().await.campaign(id).cloned()
    }

    pub async fn update_campaign(
        &self,
        actor: &Actor,
        id: Uuid,
        update: UpdateCampaignRequest,
    ) -> StoreResult<Campaign> {
        let mut tables = self.tables.write().await;
        let campaign = tables.campaign_mut(id)?;
        ensure_owner(actor, campaign.brand_id, "campaign")?;
        if is_closed(campaign.status) {
            return Err(StoreError::Conflict(format!(
                "campaign is {} and can no longer be edited",
                campaign.status
            )));
        }

        let start = update.start_date.or(campaign.start_date);
        let end = update.end_date.or(campaign.end_date);
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                return Err(StoreError::Validation(
                    "endDate must not be before startDate".to_string(),
                ));
            }
        }

        if let Some(title) = update.title {
            campaign.title = title.trim().to_string();
        }
        if update.objective.is_some() {
            campaign.objective = update.objective;
        }
        if update.description.is_some() {
            campaign.description = update.description;
        }
        if let Some(budget) = update.budget {
            campaign.budget = budget;
        }
        campaign.start_date = start;
        campaign.end_date = end;
        if update.max_influencers.is_some() {
            campaign.max_influencers = update.max_influencers;
        }
        if let Some(requires_approval) = update.requires_approval {
            campaign.requires_approval = requires_approval;
        }
        if let Some(criteria) = update.target_criteria {
            campaign.target_criteria = criteria;
        }
        if let Some(requirements) = update.requirements {
            campaign.requirements = requirements;
        }
        campaign.updated_at = Utc::now();
        Ok(campaign.clone())
    }

    /// Removes a campaign and its applications. Campaigns that already have
    /// content must be cancelled instead.
    pub async fn delete_campaign(&self, actor: &Actor, id: Uuid) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        let brand_id = tables.brand_of_campaign(id)?;
        ensure_owner(actor, brand_id, "campaign")?;
        if tables.content.values().any(|c| c.campaign_id == id) {
            return Err(StoreError::Conflict(
                "campaign has content submissions; cancel it instead".to_string(),
            ));
        }
        tables.applications.retain(|_, a| a.campaign_id != id);
        tables.campaigns.remove(&id);
        Ok(())
    }

    pub async fn update_campaign_status(
        &self,
        actor: &Actor,
        id: Uuid,
        status: CampaignStatus,
    ) -> StoreResult<Campaign> {
        let mut tables = self.tables.write().await;
        let campaign = tables.campaign_mut(id)?;
        ensure_owner(actor, campaign.brand_id, "campaign")?;
        ensure_transition(campaign.status, status)?;
        campaign.status = status;
        campaign.updated_at = Utc::now();
        Ok(campaign.clone())
    }

    pub async fn campaign_applications(
        &self,
        actor: &Actor,
        campaign_id: Uuid,
    ) -> StoreResult<Vec<CampaignApplication>> {
        let tables = self.tables.read().await;
        ensure_owner(actor, tables.brand_of_campaign(campaign_id)?, "campaign")?;
        let mut items: Vec<_> = tables
            .applications
            .values()
            .filter(|a| a.campaign_id == campaign_id)
            .cloned()
            .collect();
        drop(tables);
        newest_first(&mut items, |a| a.applied_at);
        Ok(items)
    }

    pub async fn campaign_performance(
        &self,
        actor: &Actor,
        campaign_id: Uuid,
    ) -> StoreResult<CampaignPerformance> {
        let tables = self.tables.read().await;
        ensure_owner(actor, tables.brand_of_campaign(campaign_id)?, "campaign")?;
        let submissions: Vec<ContentSubmission> = tables
            .content
            .values()
            .filter(|c| c.campaign_id == campaign_id)
            .cloned()
            .collect();
        drop(tables);
        Ok(PerformanceTotals::from_submissions(&submissions).into())
    }

    // -----------------------------------------------------------------------
    // Applications
    // -----------------------------------------------------------------------

    /// Files an application. Campaigns that don't require approval accept it
    /// straight away while they have room.
    pub async fn apply(
        &self,
        influencer_id: Uuid,
        campaign_id: Uuid,
        data: ApplicationData,
    ) -> StoreResult<CampaignApplication> {
        missing_fields_error(&data.missing_fields())?;

        let mut tables = self.tables.write().await;
        let campaign = tables.campaign(campaign_id)?;
        if campaign.status != CampaignStatus::Active {
            return Err(StoreError::Conflict(format!(
                "campaign is {} and not accepting applications",
                campaign.status
            )));
        }
        if tables
            .applications
            .values()
            .any(|a| a.campaign_id == campaign_id && a.influencer_id == influencer_id)
        {
            return Err(StoreError::Conflict(
                "you have already applied to this campaign".to_string(),
            ));
        }

        let now = Utc::now();
        let auto_accept = !campaign.requires_approval && tables.has_capacity(campaign);
        let application = CampaignApplication {
            id: Uuid::new_v4(),
            campaign_id,
            influencer_id,
            status: if auto_accept {
                ApplicationStatus::Accepted
            } else {
                ApplicationStatus::Pending
            },
            application_data: data,
            applied_at: now,
            responded_at: auto_accept.then_some(now),
        };
        tables
            .applications
            .insert(application.id, application.clone());
        Ok(application)
    }

    pub async fn update_application_status(
        &self,
        actor: &Actor,
        application_id: Uuid,
        status: ApplicationStatus,
    ) -> StoreResult<CampaignApplication> {
        let mut tables = self.tables.write().await;
        let application = tables
            .applications
            .get(&application_id)
            .ok_or(StoreError::NotFound("application"))?;
        let campaign = tables.campaign(application.campaign_id)?;
        ensure_owner(actor, campaign.brand_id, "campaign")?;
        ensure_transition(application.status, status)?;
        if status == ApplicationStatus::Accepted && !tables.has_capacity(campaign) {
            return Err(StoreError::Conflict(
                "campaign already has its maximum number of influencers".to_string(),
            ));
        }

        let application = tables
            .applications
            .get_mut(&application_id)
            .ok_or(StoreError::NotFound("application"))?;
        application.status = status;
        application.responded_at = Some(Utc::now());
        Ok(application.clone())
    }

    pub async fn influencer_applications(&self, influencer_id: Uuid) -> Vec<CampaignApplication> {
        let tables = self.tables.read().await;
        let mut items: Vec<_> = tables
            .applications
            .values()
            .filter(|a| a.influencer_id == influencer_id)
            .cloned()
            .collect();
        drop(tables);
        newest_first(&mut items, |a| a.applied_at);
        items
    }

    // -----------------------------------------------------------------------
    // Content
    // -----------------------------------------------------------------------

    pub async fn create_content(
        &self,
        influencer_id: Uuid,
        request: CreateContentRequest,
    ) -> StoreResult<ContentSubmission> {
        let mut missing = Vec::new();
        if request.title.trim().is_empty() {
            missing.push("title");
        }
        if request.caption.trim().is_empty() {
            missing.push("caption");
        }
        if request.platforms.is_empty() {
            missing.push("platforms");
        }
        missing_fields_error(&missing)?;

        let mut tables = self.tables.write().await;
        let campaign = tables.campaign(request.campaign_id)?;
        if !matches!(
            campaign.status,
            CampaignStatus::Active | CampaignStatus::Paused
        ) {
            return Err(StoreError::Conflict(format!(
                "campaign is {} and not accepting content",
                campaign.status
            )));
        }
        let accepted = tables.applications.values().any(|a| {
            a.campaign_id == request.campaign_id
                && a.influencer_id == influencer_id
                && a.status == ApplicationStatus::Accepted
        });
        if !accepted {
            return Err(StoreError::Forbidden(
                "only accepted participants can submit content to this campaign".to_string(),
            ));
        }

        let submission = ContentSubmission {
            id: Uuid::new_v4(),
            campaign_id: request.campaign_id,
            influencer_id,
            title: request.title.trim().to_string(),
            description: request.description,
            caption: request.caption.trim().to_string(),
            hashtags: request.hashtags,
            platforms: request.platforms,
            content_type: request.content_type,
            status: ContentStatus::Pending,
            feedback: None,
            amount: None,
            files: Vec::new(),
            published_posts: Vec::new(),
            submitted_at: Utc::now(),
            approved_at: None,
            completed_at: None,
            paid_at: None,
        };
        tables.content.insert(submission.id, submission.clone());
        Ok(submission)
    }

    /// Records an uploaded file against a pending submission. Only the
    /// metadata and checksum are kept.
    pub async fn add_file(
        &self,
        actor: &Actor,
        content_id: Uuid,
        file: NewFile,
    ) -> StoreResult<ContentSubmission> {
        if file.bytes.is_empty() {
            return Err(StoreError::Validation("uploaded file is empty".to_string()));
        }

        let mut tables = self.tables.write().await;
        let content = tables.content_mut(content_id)?;
        ensure_owner(actor, content.influencer_id, "content")?;
        if content.status != ContentStatus::Pending {
            return Err(StoreError::Conflict(format!(
                "files can only be added while content is PENDING (it is {})",
                content.status
            )));
        }

        let file_id = Uuid::new_v4();
        let digest = Sha256::digest(&file.bytes);
        content.files.push(ContentFile {
            id: file_id,
            file_name: file.file_name,
            mime_type: file.mime_type,
            size_bytes: file.bytes.len() as u64,
            sha256: format!("{digest:x}"),
            url: format!("/files/{content_id}/{file_id}"),
            uploaded_at: Utc::now(),
        });
        Ok(content.clone())
    }

    pub async fn influencer_content(&self, influencer_id: Uuid) -> Vec<ContentSubmission> {
        let tables = self.tables.read().await;
        let mut items: Vec<_> = tables
            .content
            .values()
            .filter(|c| c.influencer_id == influencer_id)
            .cloned()
            .collect();
        drop(tables);
        newest_first(&mut items, |c| c.submitted_at);
        items
    }

    pub async fn earnings(&self, influencer_id: Uuid) -> EarningsSummary {
        EarningsSummary::from_submissions(&self.influencer_content(influencer_id).await)
    }

    pub async fn campaign_content(
        &self,
        actor: &Actor,
        campaign_id: Uuid,
    ) -> StoreResult<Vec<ContentSubmission>> {
        let tables = self.tables.read().await;
        ensure_owner(actor, tables.brand_of_campaign(campaign_id)?, "campaign")?;
        let mut items: Vec<_> = tables
            .content
            .values()
            .filter(|c| c.campaign_id == campaign_id)
            .cloned()
            .collect();
        drop(tables);
        newest_first(&mut items, |c| c.submitted_at);
        Ok(items)
    }

    pub async fn content(&self, actor: &Actor, id: Uuid) -> StoreResult<ContentSubmission> {
        let tables = self.tables.read().await;
        let content = tables.content(id)?;
        tables.ensure_can_view_content(actor, content)?;
        Ok(content.clone())
    }

    /// Generic status move for the brand or an admin, stamping the matching
    /// timestamp.
    pub async fn update_content_status(
        &self,
        actor: &Actor,
        id: Uuid,
        status: ContentStatus,
        feedback: Option<String>,
    ) -> StoreResult<ContentSubmission> {
        self.move_content(actor, id, status, |content| {
            if feedback.is_some() {
                content.feedback = feedback;
            }
            Ok(())
        })
        .await
    }

    pub async fn approve_content(
        &self,
        actor: &Actor,
        id: Uuid,
        review: ReviewContentRequest,
    ) -> StoreResult<ContentSubmission> {
        if review.amount.is_some_and(|a| a < Decimal::ZERO) {
            return Err(StoreError::Validation(
                "amount must not be negative".to_string(),
            ));
        }
        self.move_content(actor, id, ContentStatus::Approved, |content| {
            if review.feedback.is_some() {
                content.feedback = review.feedback;
            }
            if review.amount.is_some() {
                content.amount = review.amount;
            }
            Ok(())
        })
        .await
    }

    pub async fn reject_content(
        &self,
        actor: &Actor,
        id: Uuid,
        feedback: Option<String>,
    ) -> StoreResult<ContentSubmission> {
        self.move_content(actor, id, ContentStatus::Rejected, |content| {
            content.feedback = feedback;
            Ok(())
        })
        .await
    }

    async fn move_content<F>(
        &self,
        actor: &Actor,
        id: Uuid,
        status: ContentStatus,
        apply: F,
    ) -> StoreResult<ContentSubmission>
    where
        F: FnOnce(&mut ContentSubmission) -> StoreResult<()>,
    {
        let mut tables = self.tables.write().await;
        let campaign_id = tables.content(id)?.campaign_id;
        let brand_id = tables.brand_of_campaign(campaign_id)?;
        ensure_owner(actor, brand_id, "campaign")?;

        let content = tables.content_mut(id)?;
        ensure_transition(content.status, status)?;
        apply(content)?;

        let now = Utc::now();
        match status {
            ContentStatus::Approved => content.approved_at = Some(now),
            ContentStatus::Completed => content.completed_at = Some(now),
            ContentStatus::Paid => content.paid_at = Some(now),
            ContentStatus::Pending | ContentStatus::Rejected => {}
        }
        content.status = status;
        Ok(content.clone())
    }

    // -----------------------------------------------------------------------
    // Published posts
    // -----------------------------------------------------------------------

    pub async fn submit_post(
        &self,
        actor: &Actor,
        request: SubmitPublishedPostRequest,
    ) -> StoreResult<PublishedPost> {
        let check = validate_social_media_url(&request.post_url, &request.platform);
        if !check.is_valid {
            return Err(StoreError::Validation(
                check.error.unwrap_or_else(|| "invalid post URL".into()),
            ));
        }

        let mut tables = self.tables.write().await;
        let content = tables.content(request.content_id)?;
        ensure_owner(actor, content.influencer_id, "content")?;
        if !can_submit_post_url(content.status) {
            return Err(StoreError::Conflict(format!(
                "live posts can only be submitted for APPROVED content (it is {})",
                content.status
            )));
        }
        let campaign_status = tables.campaign(content.campaign_id)?.status;
        if is_closed(campaign_status) {
            return Err(StoreError::Conflict(format!(
                "campaign is {campaign_status}"
            )));
        }
        let url = request.post_url.trim().to_string();
        if content.published_posts.iter().any(|p| p.post_url == url) {
            return Err(StoreError::Conflict(
                "this post URL has already been submitted".to_string(),
            ));
        }

        let platform = request.platform.trim().to_ascii_lowercase();
        let post = PublishedPost {
            id: Uuid::new_v4(),
            content_id: request.content_id,
            post_id: extract_post_id(&url, &platform),
            platform,
            post_url: url,
            post_type: request.post_type,
            published_at: request.published_at,
            status: PostStatus::PendingVerification,
            performance: None,
            created_at: Utc::now(),
        };
        tables.post_index.insert(post.id, post.content_id);
        tables
            .content_mut(request.content_id)?
            .published_posts
            .push(post.clone());
        Ok(post)
    }

    pub async fn content_posts(
        &self,
        actor: &Actor,
        content_id: Uuid,
    ) -> StoreResult<Vec<PublishedPost>> {
        let tables = self.tables.read().await;
        let content = tables.content(content_id)?;
        tables.ensure_can_view_content(actor, content)?;
        Ok(content.published_posts.clone())
    }

    /// Verifier-driven status change.
    pub async fn update_post_status(
        &self,
        post_id: Uuid,
        status: PostStatus,
    ) -> StoreResult<PublishedPost> {
        let mut tables = self.tables.write().await;
        let post = tables.post_mut(post_id)?;
        ensure_transition(post.status, status)?;
        post.status = status;
        Ok(post.clone())
    }

    /// Stores reported engagement. Rates the reporter leaves out are derived
    /// from the counts.
    pub async fn update_post_performance(
        &self,
        post_id: Uuid,
        mut performance: PostPerformance,
    ) -> StoreResult<PublishedPost> {
        let mut tables = self.tables.write().await;
        let post = tables.post_mut(post_id)?;
        if matches!(post.status, PostStatus::InvalidUrl | PostStatus::Deleted) {
            return Err(StoreError::Conflict(format!(
                "cannot record performance for a {} post",
                post.status
            )));
        }

        if performance.engagement_rate.is_none() {
            let single = PerformanceTotals {
                views: performance.views,
                likes: performance.likes,
                comments: performance.comments,
                shares: performance.shares,
                saves: performance.saves,
                ..PerformanceTotals::default()
            };
            performance.engagement_rate = single.engagement_rate();
        }
        if performance.ctr.is_none() && performance.impressions > 0 {
            #[allow(clippy::cast_precision_loss)]
            let ctr = performance.clicks as f64 * 100.0 / performance.impressions as f64;
            performance.ctr = Some(ctr);
        }
        performance.last_updated.get_or_insert_with(Utc::now);

        post.performance = Some(performance);
        Ok(post.clone())
    }

    // -----------------------------------------------------------------------
    // Inquiries
    // -----------------------------------------------------------------------

    pub async fn create_inquiry(&self, request: CreateInquiryRequest) -> Inquiry {
        let inquiry = Inquiry {
            id: Uuid::new_v4(),
            influencer_id: request.influencer_id,
            package_id: request.package_id,
            company_name: request.company_name.trim().to_string(),
            contact_name: request.contact_name.trim().to_string(),
            email: request.email.trim().to_string(),
            message: request.message,
            budget: request.budget,
            timeline: request.timeline,
            package_details: request.package_details,
            status: InquiryStatus::Pending,
            response: None,
            created_at: Utc::now(),
            responded_at: None,
        };
        self.tables
            .write()
            .await
            .inquiries
            .insert(inquiry.id, inquiry.clone());
        inquiry
    }

    pub async fn influencer_inquiries(&self, influencer_id: Uuid) -> Vec<Inquiry> {
        let tables = self.tables.read().await;
        let mut items: Vec<_> = tables
            .inquiries
            .values()
            .filter(|i| i.influencer_id == influencer_id)
            .cloned()
            .collect();
        drop(tables);
        newest_first(&mut items, |i| i.created_at);
        items
    }

    pub async fn update_inquiry_status(
        &self,
        actor: &Actor,
        id: Uuid,
        request: UpdateInquiryStatusRequest,
    ) -> StoreResult<Inquiry> {
        let mut tables = self.tables.write().await;
        let inquiry = tables
            .inquiries
            .get_mut(&id)
            .ok_or(StoreError::NotFound("inquiry"))?;
        ensure_owner(actor, inquiry.influencer_id, "inquiry")?;
        ensure_transition(inquiry.status, request.status)?;
        inquiry.status = request.status;
        if request.response.is_some() {
            inquiry.response = request.response;
        }
        inquiry.responded_at = Some(Utc::now());
        Ok(inquiry.clone())
    }

    // -----------------------------------------------------------------------
    // Profiles
    // -----------------------------------------------------------------------

    pub async fn profile(&self, actor: &Actor) -> UserProfile {
        self.tables
            .read()
            .await
            .profiles
            .get(&actor.user_id)
            .cloned()
            .unwrap_or_else(|| blank_profile(actor))
    }

    pub async fn update_profile(
        &self,
        actor: &Actor,
        update: UpdateUserProfileRequest,
    ) -> UserProfile {
        let mut tables = self.tables.write().await;
        let profile = tables
            .profiles
            .entry(actor.user_id)
            .or_insert_with(|| blank_profile(actor));
        profile.apply(update);
        profile.clone()
    }

    pub async fn update_brand_profile(
        &self,
        actor: &Actor,
        update: UpdateBrandProfileRequest,
    ) -> UserProfile {
        let mut tables = self.tables.write().await;
        let profile = tables
            .profiles
            .entry(actor.user_id)
            .or_insert_with(|| blank_profile(actor));
        profile
            .brand
            .get_or_insert_with(Default::default)
            .apply(update);
        profile.clone()
    }
}

fn blank_profile(actor: &Actor) -> UserProfile {
    UserProfile {
        id: actor.user_id,
        role: Some(actor.role),
        ..UserProfile::default()
    }
}

fn is_closed(status: CampaignStatus) -> bool {
    matches!(
        status,
        CampaignStatus::Completed | CampaignStatus::Cancelled
    )
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
