//! Status enums for every marketplace entity, plus the display lookup that
//! maps any status string to a badge color and icon.
//!
//! Statuses travel over the wire as SCREAMING_SNAKE_CASE strings. Parsing is
//! case-insensitive and treats `-` and spaces like `_`, so `"pending
//! verification"` and `"Pending-Verification"` both resolve.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Canonical lookup key for a status string: trimmed, upper-cased, with `-`
/// and spaces folded into `_`.
pub(crate) fn normalize_status_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}

/// Resolve `raw` against a closed set of wire names.
fn parse_wire<T: Copy>(
    all: &[T],
    as_str: fn(T) -> &'static str,
    kind: &'static str,
    raw: &str,
) -> Result<T, CoreError> {
    let key = normalize_status_key(raw);
    all.iter()
        .copied()
        .find(|v| as_str(*v) == key)
        .ok_or_else(|| CoreError::UnknownStatus {
            kind,
            value: raw.to_string(),
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    Draft,
    Active,
    Paused,
    Completed,
    Cancelled,
}

impl CampaignStatus {
    pub const ALL: &[Self] = &[
        Self::Draft,
        Self::Active,
        Self::Paused,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Wire name, e.g. `"ACTIVE"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Active => "ACTIVE",
            Self::Paused => "PAUSED",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire(Self::ALL, Self::as_str, "campaign", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: &[Self] = &[Self::Pending, Self::Accepted, Self::Rejected];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire(Self::ALL, Self::as_str, "application", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
    Paid,
}

impl ContentStatus {
    pub const ALL: &[Self] = &[
        Self::Pending,
        Self::Approved,
        Self::Rejected,
        Self::Completed,
        Self::Paid,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Completed => "COMPLETED",
            Self::Paid => "PAID",
        }
    }
}

impl std::fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire(Self::ALL, Self::as_str, "content", s)
    }
}

/// Set by the external verifier, never by the submitting influencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostStatus {
    PendingVerification,
    Verified,
    InvalidUrl,
    Deleted,
}

impl PostStatus {
    pub const ALL: &[Self] = &[
        Self::PendingVerification,
        Self::Verified,
        Self::InvalidUrl,
        Self::Deleted,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PendingVerification => "PENDING_VERIFICATION",
            Self::Verified => "VERIFIED",
            Self::InvalidUrl => "INVALID_URL",
            Self::Deleted => "DELETED",
        }
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire(Self::ALL, Self::as_str, "published post", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InquiryStatus {
    Pending,
    Contacted,
    Negotiating,
    Accepted,
    Declined,
    Completed,
}

impl InquiryStatus {
    pub const ALL: &[Self] = &[
        Self::Pending,
        Self::Contacted,
        Self::Negotiating,
        Self::Accepted,
        Self::Declined,
        Self::Completed,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Contacted => "CONTACTED",
            Self::Negotiating => "NEGOTIATING",
            Self::Accepted => "ACCEPTED",
            Self::Declined => "DECLINED",
            Self::Completed => "COMPLETED",
        }
    }
}

impl std::fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InquiryStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire(Self::ALL, Self::as_str, "inquiry", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    Image,
    Video,
    Story,
    Reel,
    Post,
}

impl ContentType {
    pub const ALL: &[Self] = &[
        Self::Image,
        Self::Video,
        Self::Story,
        Self::Reel,
        Self::Post,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "IMAGE",
            Self::Video => "VIDEO",
            Self::Story => "STORY",
            Self::Reel => "REEL",
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire(Self::ALL, Self::as_str, "content type", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Yellow,
    Green,
    Red,
    Blue,
    Purple,
    Orange,
    Gray,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusIcon {
    Clock,
    CheckCircle,
    XCircle,
    Play,
    Pause,
    Flag,
    Ban,
    DollarSign,
    Edit,
    MessageCircle,
    Handshake,
    AlertTriangle,
    Trash,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusStyle {
    pub color: StatusColor,
    pub icon: StatusIcon,
}

const FALLBACK_STYLE: StatusStyle = StatusStyle {
    color: StatusColor::Gray,
    icon: StatusIcon::Default,
};

/// Badge color and icon for any status string of any entity.
///
/// Never fails: unknown or garbage input yields gray with the default icon.
#[must_use]
pub fn status_style(status: &str) -> StatusStyle {
    use StatusColor as C;
    use StatusIcon as I;

    let (color, icon) = match normalize_status_key(status).as_str() {
        "PENDING" | "PENDING_VERIFICATION" => (C::Yellow, I::Clock),
        "ACTIVE" => (C::Green, I::Play),
        "APPROVED" | "ACCEPTED" | "VERIFIED" => (C::Green, I::CheckCircle),
        "REJECTED" | "DECLINED" => (C::Red, I::XCircle),
        "INVALID_URL" => (C::Red, I::AlertTriangle),
        "CANCELLED" => (C::Red, I::Ban),
        "DRAFT" => (C::Gray, I::Edit),
        "PAUSED" => (C::Orange, I::Pause),
        "NEGOTIATING" => (C::Orange, I::Handshake),
        "COMPLETED" => (C::Blue, I::Flag),
        "CONTACTED" => (C::Blue, I::MessageCircle),
        "PAID" => (C::Purple, I::DollarSign),
        "DELETED" => (C::Gray, I::Trash),
        _ => return FALLBACK_STYLE,
    };
    StatusStyle { color, icon }
}

#[must_use]
pub fn status_color(status: &str) -> StatusColor {
    status_style(status).color
}

#[must_use]
pub fn status_icon(status: &str) -> StatusIcon {
    status_style(status).icon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_round_trip_through_display_and_parse() {
        fn check<T>(all: &[T])
        where
            T: Copy + PartialEq + std::fmt::Debug + std::fmt::Display + FromStr + Serialize,
            T::Err: std::fmt::Debug,
        {
            for s in all {
                assert_eq!(s.to_string().parse::<T>().unwrap(), *s);
                let json = serde_json::to_value(s).unwrap();
                assert_eq!(json.as_str(), Some(s.to_string().as_str()));
            }
        }
        check(CampaignStatus::ALL);
        check(ApplicationStatus::ALL);
        check(ContentStatus::ALL);
        check(PostStatus::ALL);
        check(InquiryStatus::ALL);
        check(ContentType::ALL);
    }

    #[test]
    fn parse_is_case_and_separator_insensitive() {
        assert_eq!(
            "pending verification".parse::<PostStatus>().unwrap(),
            PostStatus::PendingVerification
        );
        assert_eq!(
            "Invalid-Url".parse::<PostStatus>().unwrap(),
            PostStatus::InvalidUrl
        );
        assert_eq!(
            " active ".parse::<CampaignStatus>().unwrap(),
            CampaignStatus::Active
        );
    }

    #[test]
    fn parse_unknown_status_names_the_kind() {
        let err = "ARCHIVED".parse::<CampaignStatus>().unwrap_err();
        assert_eq!(
            err,
            CoreError::UnknownStatus {
                kind: "campaign",
                value: "ARCHIVED".to_string()
            }
        );
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&PostStatus::PendingVerification).unwrap();
        assert_eq!(json, "\"PENDING_VERIFICATION\"");
        let parsed: ContentType = serde_json::from_str("\"REEL\"").unwrap();
        assert_eq!(parsed, ContentType::Reel);
    }

    #[test]
    fn style_lookup_is_case_insensitive() {
        assert_eq!(status_color("approved"), StatusColor::Green);
        assert_eq!(status_color("APPROVED"), StatusColor::Green);
        assert_eq!(status_icon("Paid"), StatusIcon::DollarSign);
    }

    #[test]
    fn style_lookup_falls_back_for_unknown_input() {
        for garbage in ["", "   ", "not-a-status", "🙃", "PENDINGX", "\0"] {
            let style = status_style(garbage);
            assert_eq!(style.color, StatusColor::Gray, "input {garbage:?}");
            assert_eq!(style.icon, StatusIcon::Default, "input {garbage:?}");
        }
    }

    #[test]
    fn every_known_status_has_a_non_default_icon() {
        let names = CampaignStatus::ALL
            .iter()
            .map(|s| s.as_str())
            .chain(ApplicationStatus::ALL.iter().map(|s| s.as_str()))
            .chain(ContentStatus::ALL.iter().map(|s| s.as_str()))
            .chain(PostStatus::ALL.iter().map(|s| s.as_str()))
            .chain(InquiryStatus::ALL.iter().map(|s| s.as_str()));
        for name in names {
            assert_ne!(status_icon(name), StatusIcon::Default, "status {name}");
        }
    }

    #[test]
    fn style_serializes_for_display_layers() {
        let json = serde_json::to_value(status_style("INVALID_URL")).unwrap();
        assert_eq!(json["color"], "red");
        assert_eq!(json["icon"], "alert-triangle");
    }
}
