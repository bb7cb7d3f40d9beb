//! Social post URL checks and the client-side form gates.
//!
//! Everything here is advisory: the server re-runs the same checks before it
//! accepts a write.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::campaigns::ApplicationData;
use crate::content::{ContentSubmissionForm, CreateContentRequest, UploadFile};
use crate::CoreError;

static INSTAGRAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://(?:www\.)?instagram\.com/(?:p|reel|reels|tv)/([A-Za-z0-9_-]+)/?(?:[?#].*)?$")
        .expect("valid regex")
});
static TIKTOK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://(?:(?:(?:www|m)\.)?tiktok\.com/@[\w.-]+/video/(\d+)|(?:vm|vt)\.tiktok\.com/([A-Za-z0-9]+))/?(?:[?#].*)?$")
        .expect("valid regex")
});
static YOUTUBE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://(?:(?:www|m)\.)?(?:youtube\.com/(?:watch\?(?:.*&)?v=|shorts/|embed/|live/)|youtu\.be/)([A-Za-z0-9_-]{11})(?:[?&#/].*)?$")
        .expect("valid regex")
});
static TWITTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://(?:(?:www|mobile)\.)?(?:twitter|x)\.com/[A-Za-z0-9_]+/status/(\d+)/?(?:[?#].*)?$")
        .expect("valid regex")
});
static FACEBOOK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://(?:(?:www|m)\.)?facebook\.com/(?:[\w.-]+/(?:posts|videos)/([\w.-]+)|watch/?\?v=(\d+)|reel/(\d+)|share/[prv]/([A-Za-z0-9]+))/?(?:[?#].*)?$")
        .expect("valid regex")
});

/// Platforms with a registered post URL pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    TikTok,
    YouTube,
    Twitter,
    Facebook,
}

impl Platform {
    pub const ALL: &[Self] = &[
        Platform::Instagram,
        Platform::TikTok,
        Platform::YouTube,
        Platform::Twitter,
        Platform::Facebook,
    ];

    /// Case-insensitive lookup. `x` is accepted for Twitter. Unknown names
    /// yield `None`, which callers treat as "no pattern registered".
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "instagram" => Some(Self::Instagram),
            "tiktok" => Some(Self::TikTok),
            "youtube" => Some(Self::YouTube),
            "twitter" | "x" => Some(Self::Twitter),
            "facebook" => Some(Self::Facebook),
            _ => None,
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::TikTok => "TikTok",
            Self::YouTube => "YouTube",
            Self::Twitter => "Twitter/X",
            Self::Facebook => "Facebook",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Instagram => &INSTAGRAM_RE,
            Self::TikTok => &TIKTOK_RE,
            Self::YouTube => &YOUTUBE_RE,
            Self::Twitter => &TWITTER_RE,
            Self::Facebook => &FACEBOOK_RE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlValidation {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UrlValidation {
    fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Check that `url` looks like a post link for `platform`.
///
/// The URL must use `http` or `https`. Platforms without a registered
/// pattern pass on the scheme check alone.
#[must_use]
pub fn validate_social_media_url(url: &str, platform: &str) -> UrlValidation {
    let url = url.trim();
    if url.is_empty() {
        return UrlValidation::fail("URL is required");
    }
    let lower = url.to_ascii_lowercase();
    if !(lower.starts_with("http://") || lower.starts_with("https://")) {
        return UrlValidation::fail("URL must start with http:// or https://");
    }
    match Platform::from_name(platform) {
        Some(p) if !p.pattern().is_match(url) => UrlValidation::fail(format!(
            "URL does not look like a valid {} post link",
            p.display_name()
        )),
        _ => UrlValidation::ok(),
    }
}

/// Best-effort extraction of the platform's post id: the last capture group
/// that took part in the match.
#[must_use]
pub fn extract_post_id(url: &str, platform: &str) -> Option<String> {
    let Some(p) = Platform::from_name(platform) else {
        tracing::debug!(platform, "no post id pattern for platform");
        return None;
    };
    let Some(caps) = p.pattern().captures(url.trim()) else {
        tracing::debug!(platform, url, "post url did not match platform pattern");
        return None;
    };
    caps.iter()
        .skip(1)
        .flatten()
        .last()
        .map(|m| m.as_str().to_string())
}

// ---------------------------------------------------------------------------
// Form gates
// ---------------------------------------------------------------------------

impl ApplicationData {
    /// Fields that still block submission, named as the form labels them.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.motivation.trim().is_empty() {
            missing.push("motivation");
        }
        if self.content_ideas.trim().is_empty() {
            missing.push("contentIdeas");
        }
        if !self.agrees_to_terms {
            missing.push("agreesToTerms");
        }
        if !self.agrees_to_content_guidelines {
            missing.push("agreesToContentGuidelines");
        }
        if !self.agrees_to_timeline {
            missing.push("agreesToTimeline");
        }
        missing
    }

    #[must_use]
    pub fn is_form_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming every missing field.
    pub fn ensure_submittable(&self) -> Result<(), CoreError> {
        ensure_complete(&self.missing_fields())
    }
}

impl ContentSubmissionForm {
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.caption.trim().is_empty() {
            missing.push("caption");
        }
        if self.files.is_empty() {
            missing.push("files");
        }
        if self.platforms.is_empty() {
            missing.push("platforms");
        }
        if self.content_type.is_none() {
            missing.push("contentType");
        }
        missing
    }

    #[must_use]
    pub fn is_form_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Split a complete form into the create request and the files to upload
    /// once the submission exists.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the form gate fails.
    pub fn into_request(self) -> Result<(CreateContentRequest, Vec<UploadFile>), CoreError> {
        ensure_complete(&self.missing_fields())?;
        let content_type = self
            .content_type
            .ok_or_else(|| CoreError::Validation("missing required fields: contentType".into()))?;
        let request = CreateContentRequest {
            campaign_id: self.campaign_id,
            title: self.title.trim().to_string(),
            description: self.description.filter(|d| !d.trim().is_empty()),
            caption: self.caption.trim().to_string(),
            hashtags: self.hashtags,
            platforms: self.platforms,
            content_type,
        };
        Ok((request, self.files))
    }
}

fn ensure_complete(missing: &[&str]) -> Result<(), CoreError> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "missing required fields: {}",
            missing.join(", ")
        )))
    }
}

#[cfg(test)]
#[path = "validation_test.rs"]
mod tests;
