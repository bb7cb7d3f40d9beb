//! `content` command handlers.

use brandlink_client::{ClientError, ContentService};
use brandlink_core::format::{format_compact_count, format_currency, format_date};
use brandlink_core::{
    content_actions, ContentSubmission, PublishedPost, ReviewContentRequest,
    SubmitPublishedPostRequest,
};
use clap::Subcommand;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::campaigns::truncate;

/// Sub-commands available under `content`.
#[derive(Debug, Subcommand)]
pub enum ContentCommands {
    /// The signed-in influencer's submissions
    Mine,
    /// Paid and pending totals for the signed-in influencer
    Earnings,
    /// Submissions received for a campaign
    ForCampaign { campaign_id: Uuid },
    /// Approve a pending submission
    Approve {
        id: Uuid,
        #[arg(long)]
        feedback: Option<String>,
        /// Agreed payment, e.g. 250.00
        #[arg(long)]
        amount: Option<Decimal>,
    },
    /// Reject a pending submission
    Reject {
        id: Uuid,
        #[arg(long)]
        feedback: Option<String>,
    },
    /// Submit the live URL of an approved submission
    SubmitPost {
        content_id: Uuid,
        platform: String,
        url: String,
    },
    /// Live posts recorded for a submission
    Posts { content_id: Uuid },
}

pub(crate) async fn run_content(
    service: &ContentService,
    command: ContentCommands,
) -> Result<(), ClientError> {
    match command {
        ContentCommands::Mine => print_submissions(&service.my_content().await?),
        ContentCommands::Earnings => {
            let earnings = service.earnings().await?;
            println!(
                "paid     {:>14}  ({} submissions)",
                format_currency(earnings.total_paid),
                earnings.paid_count
            );
            println!(
                "pending  {:>14}  ({} submissions)",
                format_currency(earnings.total_pending),
                earnings.pending_count
            );
        }
        ContentCommands::ForCampaign { campaign_id } => {
            print_submissions(&service.for_campaign(campaign_id).await?);
        }
        ContentCommands::Approve {
            id,
            feedback,
            amount,
        } => {
            let content = service
                .approve(id, &ReviewContentRequest { feedback, amount })
                .await?;
            println!("content {} is now {}", content.id, content.status);
        }
        ContentCommands::Reject { id, feedback } => {
            let content = service.reject(id, feedback).await?;
            println!("content {} is now {}", content.id, content.status);
        }
        ContentCommands::SubmitPost {
            content_id,
            platform,
            url,
        } => {
            let post = service
                .submit_published_post(&SubmitPublishedPostRequest {
                    content_id,
                    platform,
                    post_url: url,
                    post_type: None,
                    published_at: None,
                })
                .await?;
            println!("post {} recorded as {}", post.id, post.status);
        }
        ContentCommands::Posts { content_id } => {
            print_posts(&service.published_posts(content_id).await?);
        }
    }
    Ok(())
}

fn print_submissions(items: &[ContentSubmission]) {
    if items.is_empty() {
        println!("no content submissions found");
        return;
    }
    println!(
        "{:<38}{:<28}{:<10}{:>12}  {:<14}ACTIONS",
        "ID", "TITLE", "STATUS", "AMOUNT", "SUBMITTED"
    );
    for c in items {
        let amount = c.amount.map_or_else(|| "-".to_string(), format_currency);
        let actions: Vec<String> = content_actions(c.status)
            .iter()
            .map(|action| format!("{action:?}").to_lowercase())
            .collect();
        println!(
            "{:<38}{:<28}{:<10}{:>12}  {:<14}{}",
            c.id.to_string(),
            truncate(&c.title, 26),
            c.status.as_str(),
            amount,
            format_date(&c.submitted_at),
            actions.join(",")
        );
    }
}

fn print_posts(posts: &[PublishedPost]) {
    if posts.is_empty() {
        println!("no published posts yet");
        return;
    }
    println!(
        "{:<11}{:<22}{:>8}{:>8}  URL",
        "PLATFORM", "STATUS", "VIEWS", "LIKES"
    );
    for p in posts {
        let (views, likes) = p.performance.as_ref().map_or_else(
            || ("-".to_string(), "-".to_string()),
            |perf| {
                (
                    format_compact_count(perf.views),
                    format_compact_count(perf.likes),
                )
            },
        );
        println!(
            "{:<11}{:<22}{:>8}{:>8}  {}",
            p.platform,
            p.status.as_str(),
            views,
            likes,
            p.post_url
        );
    }
}
