//! `campaigns` and `applications` command handlers.

use brandlink_client::{CampaignService, ClientError};
use brandlink_core::format::{format_compact_count, format_currency, format_date};
use brandlink_core::{
    application_actions, Campaign, CampaignApplication, CampaignFilters, CampaignStatus,
};
use clap::{Args, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Args)]
pub struct FilterArgs {
    /// Match against title, objective and description
    #[arg(long)]
    pub search: Option<String>,

    #[arg(long)]
    pub status: Option<CampaignStatus>,

    #[arg(long)]
    pub min_budget: Option<Decimal>,

    #[arg(long)]
    pub max_budget: Option<Decimal>,

    #[arg(long)]
    pub page: Option<u32>,

    #[arg(long)]
    pub limit: Option<u32>,
}

impl From<FilterArgs> for CampaignFilters {
    fn from(args: FilterArgs) -> Self {
        Self {
            search: args.search,
            status: args.status,
            min_budget: args.min_budget,
            max_budget: args.max_budget,
            page: args.page,
            limit: args.limit,
        }
    }
}

/// Sub-commands available under `campaigns`.
#[derive(Debug, Subcommand)]
pub enum CampaignCommands {
    /// List the signed-in brand's campaigns
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Browse active campaigns
    Browse {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Show one campaign
    Show { id: Uuid },
    /// Move a campaign to a new status (DRAFT, ACTIVE, PAUSED, COMPLETED, CANCELLED)
    SetStatus { id: Uuid, status: CampaignStatus },
    /// Aggregated post performance for a campaign
    Performance { id: Uuid },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Decision {
    Accept,
    Reject,
}

/// Sub-commands available under `applications`.
#[derive(Debug, Subcommand)]
pub enum ApplicationCommands {
    /// The signed-in influencer's applications
    Mine,
    /// Applications received for a campaign
    List { campaign_id: Uuid },
    /// Accept or reject a pending application
    Respond {
        id: Uuid,
        #[arg(value_enum)]
        decision: Decision,
    },
}

pub(crate) async fn run_campaigns(
    service: &CampaignService,
    command: CampaignCommands,
) -> Result<(), ClientError> {
    match command {
        CampaignCommands::List { filters } => {
            let page = service.my_campaigns(&filters.into()).await?;
            print_campaigns(&page.items);
            println!(
                "page {} of {} ({} total)",
                page.page,
                page.total_pages.max(1),
                page.total
            );
        }
        CampaignCommands::Browse { filters } => {
            let page = service.browse(&filters.into()).await?;
            print_campaigns(&page.items);
            println!(
                "page {} of {} ({} total)",
                page.page,
                page.total_pages.max(1),
                page.total
            );
        }
        CampaignCommands::Show { id } => print_campaign(&service.get(id).await?),
        CampaignCommands::SetStatus { id, status } => {
            let campaign = service.update_status(id, status).await?;
            println!("campaign {} is now {}", campaign.id, campaign.status);
        }
        CampaignCommands::Performance { id } => {
            let perf = service.performance(id).await?;
            let totals = &perf.totals;
            println!("posts        {}", totals.posts);
            println!("views        {}", format_compact_count(totals.views));
            println!("likes        {}", format_compact_count(totals.likes));
            println!("comments     {}", format_compact_count(totals.comments));
            println!("shares       {}", format_compact_count(totals.shares));
            println!("saves        {}", format_compact_count(totals.saves));
            println!("clicks       {}", format_compact_count(totals.clicks));
            println!("impressions  {}", format_compact_count(totals.impressions));
            println!("reach        {}", format_compact_count(totals.reach));
            match perf.engagement_rate {
                Some(rate) => println!("engagement   {rate:.2}%"),
                None => println!("engagement   N/A"),
            }
        }
    }
    Ok(())
}

pub(crate) async fn run_applications(
    service: &CampaignService,
    command: ApplicationCommands,
) -> Result<(), ClientError> {
    match command {
        ApplicationCommands::Mine => print_applications(&service.my_applications().await?),
        ApplicationCommands::List { campaign_id } => {
            print_applications(&service.applications(campaign_id).await?);
        }
        ApplicationCommands::Respond { id, decision } => {
            let application = match decision {
                Decision::Accept => service.accept_application(id).await?,
                Decision::Reject => service.reject_application(id).await?,
            };
            println!(
                "application {} is now {}",
                application.id, application.status
            );
        }
    }
    Ok(())
}

fn print_campaigns(campaigns: &[Campaign]) {
    if campaigns.is_empty() {
        println!("no campaigns found");
        return;
    }
    println!(
        "{:<38}{:<32}{:<11}{:>14}",
        "ID", "TITLE", "STATUS", "BUDGET"
    );
    for c in campaigns {
        println!(
            "{:<38}{:<32}{:<11}{:>14}",
            c.id.to_string(),
            truncate(&c.title, 30),
            c.status.as_str(),
            format_currency(c.budget)
        );
    }
}

fn print_campaign(c: &Campaign) {
    println!("{}  [{}]", c.title, c.status);
    println!("id           {}", c.id);
    println!("budget       {}", format_currency(c.budget));
    if let Some(objective) = &c.objective {
        println!("objective    {objective}");
    }
    let schedule = |d: Option<chrono::DateTime<chrono::Utc>>| {
        d.as_ref().map_or_else(|| "N/A".to_string(), format_date)
    };
    println!("starts       {}", schedule(c.start_date));
    println!("ends         {}", schedule(c.end_date));
    if let Some(max) = c.max_influencers {
        println!("max slots    {max}");
    }
    println!(
        "approval     {}",
        if c.requires_approval { "required" } else { "automatic" }
    );
    if let Some(description) = &c.description {
        println!("\n{description}");
    }
}

fn print_applications(applications: &[CampaignApplication]) {
    if applications.is_empty() {
        println!("no applications found");
        return;
    }
    println!(
        "{:<38}{:<38}{:<10}{:<14}ACTIONS",
        "ID", "CAMPAIGN", "STATUS", "APPLIED"
    );
    for a in applications {
        let actions: Vec<String> = application_actions(a.status)
            .iter()
            .map(|action| format!("{action:?}").to_lowercase())
            .collect();
        println!(
            "{:<38}{:<38}{:<10}{:<14}{}",
            a.id.to_string(),
            a.campaign_id.to_string(),
            a.status.as_str(),
            format_date(&a.applied_at),
            actions.join(",")
        );
    }
}

/// Shorten to `max` characters, marking the cut with `…`.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}
