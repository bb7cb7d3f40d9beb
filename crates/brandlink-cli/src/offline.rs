//! Commands that answer from the shared model without calling the API.

use std::str::FromStr;

use brandlink_core::{
    status_style, validate_social_media_url, ApplicationStatus, CampaignStatus, ContentStatus,
    InquiryStatus, Lifecycle, PostStatus,
};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Entity {
    Campaign,
    Application,
    Content,
    Post,
    Inquiry,
}

pub(crate) fn run_validate_url(platform: &str, url: &str) -> anyhow::Result<()> {
    let check = validate_social_media_url(url, platform);
    if check.is_valid {
        println!("ok: {url}");
        Ok(())
    } else {
        anyhow::bail!(check.error.unwrap_or_else(|| "invalid URL".to_string()))
    }
}

pub(crate) fn run_status(entity: Entity, status: &str) -> anyhow::Result<()> {
    let next = match entity {
        Entity::Campaign => next_states::<CampaignStatus>(status)?,
        Entity::Application => next_states::<ApplicationStatus>(status)?,
        Entity::Content => next_states::<ContentStatus>(status)?,
        Entity::Post => next_states::<PostStatus>(status)?,
        Entity::Inquiry => next_states::<InquiryStatus>(status)?,
    };
    let style = status_style(status);
    println!("color  {:?}", style.color);
    println!("icon   {:?}", style.icon);
    if next.is_empty() {
        println!("next   (terminal)");
    } else {
        println!("next   {}", next.join(", "));
    }
    Ok(())
}

/// Legal targets from `status`, as wire strings.
pub(crate) fn next_states<S>(status: &str) -> anyhow::Result<Vec<String>>
where
    S: Lifecycle + FromStr,
    S::Err: std::error::Error + Send + Sync + 'static,
{
    let current = S::from_str(status.trim())?;
    Ok(current
        .next_states()
        .into_iter()
        .map(|s| s.to_string())
        .collect())
}
