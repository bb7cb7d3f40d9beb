//! Roll-ups over the published posts of a set of content submissions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::content::{ContentSubmission, PostPerformance, PublishedPost};
use crate::status::ContentStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Views,
    Likes,
    Comments,
    Shares,
    Saves,
    Clicks,
    Impressions,
    Reach,
}

impl Metric {
    pub const ALL: &[Self] = &[
        Metric::Views,
        Metric::Likes,
        Metric::Comments,
        Metric::Shares,
        Metric::Saves,
        Metric::Clicks,
        Metric::Impressions,
        Metric::Reach,
    ];

    #[must_use]
    pub fn read(self, perf: &PostPerformance) -> u64 {
        match self {
            Self::Views => perf.views,
            Self::Likes => perf.likes,
            Self::Comments => perf.comments,
            Self::Shares => perf.shares,
            Self::Saves => perf.saves,
            Self::Clicks => perf.clicks,
            Self::Impressions => perf.impressions,
            Self::Reach => perf.reach,
        }
    }
}

fn posts(submissions: &[ContentSubmission]) -> impl Iterator<Item = &PublishedPost> {
    submissions.iter().flat_map(|s| s.published_posts.iter())
}

/// Sum one metric across every post of every submission. Posts without
/// performance data count as zero.
#[must_use]
pub fn total_metric(submissions: &[ContentSubmission], metric: Metric) -> u64 {
    posts(submissions)
        .filter_map(|p| p.performance.as_ref())
        .fold(0u64, |acc, perf| acc.saturating_add(metric.read(perf)))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceTotals {
    pub posts: u64,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub saves: u64,
    pub clicks: u64,
    pub impressions: u64,
    pub reach: u64,
}

impl PerformanceTotals {
    /// All metric totals in a single pass.
    #[must_use]
    pub fn from_submissions(submissions: &[ContentSubmission]) -> Self {
        posts(submissions).fold(Self::default(), |mut acc, post| {
            acc.posts = acc.posts.saturating_add(1);
            if let Some(perf) = &post.performance {
                acc.views = acc.views.saturating_add(perf.views);
                acc.likes = acc.likes.saturating_add(perf.likes);
                acc.comments = acc.comments.saturating_add(perf.comments);
                acc.shares = acc.shares.saturating_add(perf.shares);
                acc.saves = acc.saves.saturating_add(perf.saves);
                acc.clicks = acc.clicks.saturating_add(perf.clicks);
                acc.impressions = acc.impressions.saturating_add(perf.impressions);
                acc.reach = acc.reach.saturating_add(perf.reach);
            }
            acc
        })
    }

    #[must_use]
    pub fn get(&self, metric: Metric) -> u64 {
        match metric {
            Metric::Views => self.views,
            Metric::Likes => self.likes,
            Metric::Comments => self.comments,
            Metric::Shares => self.shares,
            Metric::Saves => self.saves,
            Metric::Clicks => self.clicks,
            Metric::Impressions => self.impressions,
            Metric::Reach => self.reach,
        }
    }

    /// Interactions per hundred views, or `None` with no views.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn engagement_rate(&self) -> Option<f64> {
        if self.views == 0 {
            return None;
        }
        let interactions = self
            .likes
            .saturating_add(self.comments)
            .saturating_add(self.shares)
            .saturating_add(self.saves);
        Some(interactions as f64 * 100.0 / self.views as f64)
    }
}

/// Wire shape of `GET /campaigns/{id}/performance`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPerformance {
    #[serde(flatten)]
    pub totals: PerformanceTotals,
    pub engagement_rate: Option<f64>,
}

impl From<PerformanceTotals> for CampaignPerformance {
    fn from(totals: PerformanceTotals) -> Self {
        Self {
            engagement_rate: totals.engagement_rate(),
            totals,
        }
    }
}

/// What an influencer has been paid and what is still owed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsSummary {
    pub total_paid: Decimal,
    pub total_pending: Decimal,
    pub paid_count: u32,
    pub pending_count: u32,
}

impl EarningsSummary {
    /// Paid covers `PAID` submissions; pending covers `APPROVED` and
    /// `COMPLETED`. Other statuses are ignored.
    #[must_use]
    pub fn from_submissions(submissions: &[ContentSubmission]) -> Self {
        submissions.iter().fold(Self::default(), |mut acc, s| {
            let amount = s.amount.unwrap_or(Decimal::ZERO);
            match s.status {
                ContentStatus::Paid => {
                    acc.total_paid = acc.total_paid.saturating_add(amount);
                    acc.paid_count = acc.paid_count.saturating_add(1);
                }
                ContentStatus::Approved | ContentStatus::Completed => {
                    acc.total_pending = acc.total_pending.saturating_add(amount);
                    acc.pending_count = acc.pending_count.saturating_add(1);
                }
                ContentStatus::Pending | ContentStatus::Rejected => {}
            }
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::status::{ContentType, PostStatus};

    fn post(perf: Option<PostPerformance>) -> PublishedPost {
        PublishedPost {
            id: Uuid::new_v4(),
            content_id: Uuid::nil(),
            platform: "instagram".to_string(),
            post_url: "https://instagram.com/p/abc".to_string(),
            post_id: Some("abc".to_string()),
            post_type: None,
            published_at: None,
            status: PostStatus::Verified,
            performance: perf,
            created_at: Utc::now(),
        }
    }

    fn views(n: u64) -> Option<PostPerformance> {
        Some(PostPerformance {
            views: n,
            ..PostPerformance::default()
        })
    }

    fn submission(
        status: ContentStatus,
        amount: Option<i64>,
        posts: Vec<PublishedPost>,
    ) -> ContentSubmission {
        ContentSubmission {
            id: Uuid::new_v4(),
            campaign_id: Uuid::nil(),
            influencer_id: Uuid::nil(),
            title: "t".to_string(),
            description: None,
            caption: "c".to_string(),
            hashtags: vec![],
            platforms: vec![],
            content_type: ContentType::Post,
            status,
            feedback: None,
            amount: amount.map(|a| Decimal::new(a, 0)),
            files: vec![],
            published_posts: posts,
            submitted_at: Utc::now(),
            approved_at: None,
            completed_at: None,
            paid_at: None,
        }
    }

    #[test]
    fn total_views_skips_missing_performance() {
        let subs = vec![
            submission(
                ContentStatus::Approved,
                None,
                vec![post(views(10)), post(None)],
            ),
            submission(ContentStatus::Approved, None, vec![post(views(5))]),
        ];
        assert_eq!(total_metric(&subs, Metric::Views), 15);
    }

    #[test]
    fn total_is_order_independent() {
        let mut subs = vec![
            submission(ContentStatus::Approved, None, vec![post(views(10))]),
            submission(ContentStatus::Approved, None, vec![]),
            submission(
                ContentStatus::Approved,
                None,
                vec![post(views(5)), post(None)],
            ),
        ];
        let forward = total_metric(&subs, Metric::Views);
        subs.reverse();
        assert_eq!(forward, total_metric(&subs, Metric::Views));
        assert_eq!(forward, 15);
    }

    #[test]
    fn empty_input_totals_zero() {
        assert_eq!(total_metric(&[], Metric::Likes), 0);
        let empty = PerformanceTotals::from_submissions(&[]);
        assert_eq!(empty.engagement_rate(), None);
    }

    #[test]
    fn totals_match_per_metric_sums() {
        let perf = PostPerformance {
            views: 200,
            likes: 10,
            comments: 4,
            shares: 3,
            saves: 3,
            clicks: 7,
            impressions: 400,
            reach: 300,
            ..PostPerformance::default()
        };
        let subs = vec![submission(
            ContentStatus::Completed,
            None,
            vec![post(Some(perf.clone())), post(Some(perf))],
        )];
        let totals = PerformanceTotals::from_submissions(&subs);
        for &metric in Metric::ALL {
            assert_eq!(
                totals.get(metric),
                total_metric(&subs, metric),
                "{metric:?}"
            );
        }
        assert_eq!(totals.posts, 2);
        assert_eq!(totals.engagement_rate(), Some(10.0));
    }

    #[test]
    fn totals_saturate_instead_of_overflowing() {
        let subs = vec![submission(
            ContentStatus::Approved,
            None,
            vec![post(views(u64::MAX)), post(views(1))],
        )];
        assert_eq!(total_metric(&subs, Metric::Views), u64::MAX);
    }

    #[test]
    fn earnings_split_paid_and_pending() {
        let subs = vec![
            submission(ContentStatus::Paid, Some(100), vec![]),
            submission(ContentStatus::Paid, None, vec![]),
            submission(ContentStatus::Approved, Some(50), vec![]),
            submission(ContentStatus::Completed, Some(25), vec![]),
            submission(ContentStatus::Rejected, Some(999), vec![]),
            submission(ContentStatus::Pending, Some(999), vec![]),
        ];
        let summary = EarningsSummary::from_submissions(&subs);
        assert_eq!(summary.total_paid, Decimal::new(100, 0));
        assert_eq!(summary.paid_count, 2);
        assert_eq!(summary.total_pending, Decimal::new(75, 0));
        assert_eq!(summary.pending_count, 2);
    }

    #[test]
    fn earnings_saturate_instead_of_overflowing() {
        let mut paid = submission(ContentStatus::Paid, None, vec![]);
        paid.amount = Some(Decimal::MAX);
        let mut approved = submission(ContentStatus::Approved, None, vec![]);
        approved.amount = Some(Decimal::MAX);
        let subs = vec![paid.clone(), paid, approved.clone(), approved];

        let summary = EarningsSummary::from_submissions(&subs);
        assert_eq!(summary.total_paid, Decimal::MAX);
        assert_eq!(summary.total_pending, Decimal::MAX);
        assert_eq!(summary.paid_count, 2);
    }
}
