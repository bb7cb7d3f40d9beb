use brandlink_core::{CampaignFilters, CampaignStatus, ContentStatus, InquiryStatus};
use clap::Parser;
use rust_decimal::Decimal;

use super::*;
use crate::campaigns::{truncate, Decision, FilterArgs};

const ID: &str = "0b9d6f5e-3c1a-4f7e-9a51-2d8c7b6a5e40";

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["brandlink-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_global_actor_after_subcommand() {
    let cli = Cli::try_parse_from([
        "brandlink-cli",
        "campaigns",
        "show",
        ID,
        "--user-id",
        ID,
        "--role",
        "Brand",
    ])
    .expect("expected valid cli args");

    let actor = cli.actor().expect("actor");
    assert_eq!(actor.user_id.to_string(), ID);
    assert_eq!(actor.role, UserRole::Brand);
}

#[test]
fn actor_needs_both_id_and_role() {
    let cli = Cli::try_parse_from(["brandlink-cli", "--user-id", ID, "content", "mine"])
        .expect("expected valid cli args");
    assert!(cli.actor().is_none());
}

#[test]
fn rejects_unknown_role() {
    assert!(Cli::try_parse_from(["brandlink-cli", "--role", "owner", "content", "mine"]).is_err());
}

#[test]
fn campaign_list_filters_map_to_query() {
    let cli = Cli::try_parse_from([
        "brandlink-cli",
        "campaigns",
        "list",
        "--search",
        "summer",
        "--status",
        "active",
        "--min-budget",
        "100.50",
        "--page",
        "2",
    ])
    .expect("expected valid cli args");

    let Some(Commands::Campaigns {
        command: CampaignCommands::List { filters },
    }) = cli.command
    else {
        panic!("expected campaigns list");
    };
    let filters: CampaignFilters = filters.into();
    assert_eq!(filters.search.as_deref(), Some("summer"));
    assert_eq!(filters.status, Some(CampaignStatus::Active));
    assert_eq!(filters.min_budget, Some(Decimal::new(10_050, 2)));
    assert_eq!(filters.page, Some(2));
    assert!(filters.limit.is_none());
}

#[test]
fn browse_without_filters_uses_defaults() {
    let cli = Cli::try_parse_from(["brandlink-cli", "campaigns", "browse"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Campaigns {
            command: CampaignCommands::Browse { ref filters }
        }) if *filters == FilterArgs::default()
    ));
}

#[test]
fn set_status_parses_wire_status() {
    let cli = Cli::try_parse_from(["brandlink-cli", "campaigns", "set-status", ID, "PAUSED"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Campaigns {
            command: CampaignCommands::SetStatus {
                status: CampaignStatus::Paused,
                ..
            }
        })
    ));
}

#[test]
fn set_status_rejects_unknown_status() {
    assert!(
        Cli::try_parse_from(["brandlink-cli", "campaigns", "set-status", ID, "ARCHIVED"]).is_err()
    );
}

#[test]
fn applications_respond_takes_decision() {
    let cli = Cli::try_parse_from(["brandlink-cli", "applications", "respond", ID, "reject"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Applications {
            command: ApplicationCommands::Respond {
                decision: Decision::Reject,
                ..
            }
        })
    ));
}

#[test]
fn content_approve_accepts_amount_and_feedback() {
    let cli = Cli::try_parse_from([
        "brandlink-cli",
        "content",
        "approve",
        ID,
        "--amount",
        "250.00",
        "--feedback",
        "great work",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Content {
            command: ContentCommands::Approve {
                amount: Some(a),
                feedback: Some(ref f),
                ..
            }
        }) if a == Decimal::new(25_000, 2) && f == "great work"
    ));
}

#[test]
fn inquiries_respond_parses_status() {
    let cli = Cli::try_parse_from([
        "brandlink-cli",
        "inquiries",
        "respond",
        ID,
        "negotiating",
        "--response",
        "let's talk",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Inquiries {
            command: InquiryCommands::Respond {
                status: InquiryStatus::Negotiating,
                response: Some(_),
                ..
            }
        })
    ));
}

#[test]
fn validate_url_is_offline_command() {
    let cli = Cli::try_parse_from([
        "brandlink-cli",
        "validate-url",
        "tiktok",
        "https://www.tiktok.com/@brand/video/7234567890123456789",
    ])
    .expect("expected valid cli args");
    let Some(Commands::ValidateUrl { platform, url }) = cli.command else {
        panic!("expected validate-url");
    };
    assert!(offline::run_validate_url(&platform, &url).is_ok());
    assert!(offline::run_validate_url("tiktok", "tiktok.com/foo").is_err());
}

#[test]
fn status_command_lists_next_states() {
    let next = offline::next_states::<ContentStatus>("approved").expect("known status");
    assert_eq!(next, vec!["COMPLETED".to_string()]);

    let terminal = offline::next_states::<ContentStatus>("PAID").expect("known status");
    assert!(terminal.is_empty());

    assert!(offline::next_states::<ContentStatus>("SHIPPED").is_err());
    assert!(offline::run_status(offline::Entity::Post, "pending_verification").is_ok());
}

#[test]
fn truncate_marks_cut() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a very long campaign title", 8), "a very …");
}
