//! Campaign and application types shared by the client and the server.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::status::{ApplicationStatus, CampaignStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: Uuid,
    pub brand_id: Uuid,
    pub title: String,
    pub objective: Option<String>,
    pub description: Option<String>,
    pub budget: Decimal,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub max_influencers: Option<u32>,
    pub status: CampaignStatus,
    pub requires_approval: bool,
    /// Audience and influencer requirements; shape is owned by the brand UI.
    #[serde(default)]
    pub target_criteria: serde_json::Value,
    #[serde(default)]
    pub requirements: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_create_schedule"))]
pub struct CreateCampaignRequest {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    pub objective: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = "validate_budget"))]
    pub budget: Decimal,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    #[validate(range(min = 1, message = "maxInfluencers must be at least 1"))]
    pub max_influencers: Option<u32>,
    /// `DRAFT` or `ACTIVE`; defaults to `DRAFT`.
    pub status: Option<CampaignStatus>,
    pub requires_approval: Option<bool>,
    #[serde(default)]
    pub target_criteria: serde_json::Value,
    #[serde(default)]
    pub requirements: serde_json::Value,
}

/// Sparse field edit. Status changes go through [`UpdateCampaignStatusRequest`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_schedule"))]
pub struct UpdateCampaignRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_budget"))]
    pub budget: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "maxInfluencers must be at least 1"))]
    pub max_influencers: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_approval: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_criteria: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCampaignStatusRequest {
    pub status: CampaignStatus,
}

/// Listing filters for `my-campaigns` and `browse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CampaignStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_budget: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_budget: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl CampaignFilters {
    /// Whether a campaign passes the search, status and budget filters.
    /// Paging is applied separately.
    #[must_use]
    pub fn matches(&self, campaign: &Campaign) -> bool {
        if let Some(status) = self.status {
            if campaign.status != status {
                return false;
            }
        }
        if self.min_budget.is_some_and(|min| campaign.budget < min) {
            return false;
        }
        if self.max_budget.is_some_and(|max| campaign.budget > max) {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                let in_field = |field: Option<&str>| {
                    field.is_some_and(|f| f.to_lowercase().contains(&term))
                };
                in_field(Some(&campaign.title))
                    || in_field(campaign.objective.as_deref())
                    || in_field(campaign.description.as_deref())
            }
            _ => true,
        }
    }
}

/// Free-form part of an application, as filled in by the influencer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationData {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub motivation: String,
    #[serde(default)]
    pub content_ideas: String,
    #[serde(default)]
    pub proposed_timeline: String,
    #[serde(default)]
    pub portfolio_links: Vec<String>,
    #[serde(default)]
    pub agrees_to_terms: bool,
    #[serde(default)]
    pub agrees_to_content_guidelines: bool,
    #[serde(default)]
    pub agrees_to_timeline: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignApplication {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub influencer_id: Uuid,
    pub status: ApplicationStatus,
    pub application_data: ApplicationData,
    pub applied_at: DateTime<Utc>,
    pub responded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApplicationStatusRequest {
    pub status: ApplicationStatus,
}

fn validate_budget(budget: &Decimal) -> Result<(), ValidationError> {
    if budget.is_sign_negative() {
        let mut err = ValidationError::new("budget");
        err.message = Some("budget must not be negative".into());
        return Err(err);
    }
    Ok(())
}

fn check_schedule(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<(), ValidationError> {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            let mut err = ValidationError::new("schedule");
            err.message = Some("endDate must not be before startDate".into());
            return Err(err);
        }
    }
    Ok(())
}

fn validate_create_schedule(req: &CreateCampaignRequest) -> Result<(), ValidationError> {
    check_schedule(req.start_date, req.end_date)
}

fn validate_update_schedule(req: &UpdateCampaignRequest) -> Result<(), ValidationError> {
    check_schedule(req.start_date, req.end_date)
}
