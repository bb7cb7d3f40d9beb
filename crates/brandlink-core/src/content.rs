//! Content submissions, their uploaded files, and the live posts published
//! from them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::status::{ContentStatus, ContentType, PostStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSubmission {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub influencer_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub caption: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    pub content_type: ContentType,
    pub status: ContentStatus,
    pub feedback: Option<String>,
    /// Payout agreed at approval time.
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub files: Vec<ContentFile>,
    #[serde(default)]
    pub published_posts: Vec<PublishedPost>,
    pub submitted_at: DateTime<Utc>,
    pub approved_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub paid_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentFile {
    pub id: Uuid,
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    /// Hex SHA-256 of the uploaded bytes.
    pub sha256: String,
    pub url: String,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedPost {
    pub id: Uuid,
    pub content_id: Uuid,
    pub platform: String,
    pub post_url: String,
    /// Platform-native id pulled from the URL, when recognizable.
    pub post_id: Option<String>,
    pub post_type: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub status: PostStatus,
    pub performance: Option<PostPerformance>,
    pub created_at: DateTime<Utc>,
}

/// Engagement numbers reported by the analytics ingestion job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostPerformance {
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub saves: u64,
    pub clicks: u64,
    pub impressions: u64,
    pub reach: u64,
    pub engagement_rate: Option<f64>,
    pub ctr: Option<f64>,
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContentRequest {
    pub campaign_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub caption: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    pub content_type: ContentType,
}

/// A file picked for upload alongside a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Everything the influencer filled in before pressing submit. Converted into
/// a [`CreateContentRequest`] plus uploads once the form gate passes.
#[derive(Debug, Clone, Default)]
pub struct ContentSubmissionForm {
    pub campaign_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub caption: String,
    pub hashtags: Vec<String>,
    pub platforms: Vec<String>,
    pub content_type: Option<ContentType>,
    pub files: Vec<UploadFile>,
}

/// Body for approve and reject.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContentStatusRequest {
    pub status: ContentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPublishedPostRequest {
    pub content_id: Uuid,
    pub platform: String,
    pub post_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostStatusRequest {
    pub status: PostStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn performance_fills_missing_counts_with_zero() {
        let perf: PostPerformance = serde_json::from_str(r#"{"views":120,"likes":7}"#).unwrap();
        assert_eq!(perf.views, 120);
        assert_eq!(perf.likes, 7);
        assert_eq!(perf.shares, 0);
        assert!(perf.engagement_rate.is_none());
    }

    #[test]
    fn submission_tolerates_missing_collections() {
        let json = serde_json::json!({
            "id": Uuid::nil(),
            "campaignId": Uuid::nil(),
            "influencerId": Uuid::nil(),
            "title": "Unboxing",
            "description": null,
            "caption": "new drop",
            "contentType": "VIDEO",
            "status": "PENDING",
            "feedback": null,
            "amount": "150.00",
            "submittedAt": "2025-03-01T12:00:00Z",
            "approvedAt": null,
            "completedAt": null,
            "paidAt": null
        });
        let submission: ContentSubmission = serde_json::from_value(json).unwrap();
        assert!(submission.published_posts.is_empty());
        assert!(submission.files.is_empty());
        assert_eq!(submission.amount, Some(Decimal::new(15_000, 2)));
    }
}
