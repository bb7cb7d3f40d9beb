mod campaigns;
mod content;
mod inquiries;
mod offline;

use brandlink_client::{Actor, ApiClient, ClientError, Services};
use brandlink_core::UserRole;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use crate::campaigns::{ApplicationCommands, CampaignCommands};
use crate::content::ContentCommands;
use crate::inquiries::InquiryCommands;

#[derive(Debug, Parser)]
#[command(name = "brandlink-cli")]
#[command(about = "Brand and influencer marketplace command line interface")]
struct Cli {
    /// User the requests are made for
    #[arg(long, global = true, env = "BRANDLINK_USER_ID")]
    user_id: Option<Uuid>,

    /// Role of that user: brand, influencer or admin
    #[arg(long, global = true, env = "BRANDLINK_USER_ROLE")]
    role: Option<UserRole>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create, browse and manage campaigns
    Campaigns {
        #[command(subcommand)]
        command: CampaignCommands,
    },
    /// Campaign applications
    Applications {
        #[command(subcommand)]
        command: ApplicationCommands,
    },
    /// Content submissions, reviews and live posts
    Content {
        #[command(subcommand)]
        command: ContentCommands,
    },
    /// Collaboration inquiries
    Inquiries {
        #[command(subcommand)]
        command: InquiryCommands,
    },
    /// Check a post URL against a platform's link format (offline)
    ValidateUrl {
        /// instagram, tiktok, youtube, twitter (or x), facebook
        platform: String,
        url: String,
    },
    /// Show badge style and allowed next states for a status (offline)
    Status {
        #[arg(value_enum)]
        entity: offline::Entity,
        status: String,
    },
}

impl Cli {
    fn actor(&self) -> Option<Actor> {
        Some(Actor {
            user_id: self.user_id?,
            role: self.role?,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = brandlink_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let actor = cli.actor();

    let Some(command) = cli.command else {
        println!("brandlink-cli ready; run with --help to list commands");
        return Ok(());
    };

    match command {
        Commands::ValidateUrl { platform, url } => offline::run_validate_url(&platform, &url),
        Commands::Status { entity, status } => offline::run_status(entity, &status),
        remote => {
            let mut api = ApiClient::from_config(&config)?;
            if let Some(actor) = actor {
                api = api.with_actor(actor);
            } else {
                tracing::warn!("no --user-id/--role given; most endpoints will answer 401");
            }
            let services = Services::new(api);
            if let Err(e) = run_remote(&services, remote).await {
                tracing::debug!(error = ?e, "request failed");
                anyhow::bail!(e.user_message());
            }
            Ok(())
        }
    }
}

async fn run_remote(services: &Services, command: Commands) -> Result<(), ClientError> {
    match command {
        Commands::Campaigns { command } => {
            campaigns::run_campaigns(&services.campaigns, command).await
        }
        Commands::Applications { command } => {
            campaigns::run_applications(&services.campaigns, command).await
        }
        Commands::Content { command } => content::run_content(&services.content, command).await,
        Commands::Inquiries { command } => {
            inquiries::run_inquiries(&services.inquiries, command).await
        }
        Commands::ValidateUrl { .. } | Commands::Status { .. } => Ok(()),
    }
}

#[cfg(test)]
mod tests;
