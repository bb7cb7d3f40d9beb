pub mod actions;
pub mod app_config;
pub mod campaigns;
pub mod config;
pub mod content;
pub mod error;
pub mod format;
pub mod inquiries;
pub mod lifecycle;
pub mod pagination;
pub mod performance;
pub mod profiles;
pub mod status;
pub mod validation;

pub use actions::{application_actions, can_submit_post_url, content_actions, Action};
pub use app_config::{AppConfig, Environment};
pub use campaigns::{
    ApplicationData, Campaign, CampaignApplication, CampaignFilters, CreateCampaignRequest,
    UpdateApplicationStatusRequest, UpdateCampaignRequest, UpdateCampaignStatusRequest,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use content::{
    ContentFile, ContentSubmission, ContentSubmissionForm, CreateContentRequest, PostPerformance,
    PublishedPost, ReviewContentRequest, SubmitPublishedPostRequest, UpdateContentStatusRequest,
    UpdatePostStatusRequest, UploadFile,
};
pub use error::{ConfigError, CoreError};
pub use format::{format_safe_budget, format_safe_date, format_safe_datetime, FormatError};
pub use inquiries::{CreateInquiryRequest, Inquiry, PackageDetails, UpdateInquiryStatusRequest};
pub use lifecycle::{ensure_transition, Lifecycle};
pub use pagination::Page;
pub use performance::{
    total_metric, CampaignPerformance, EarningsSummary, Metric, PerformanceTotals,
};
pub use profiles::{
    BrandProfile, UpdateBrandProfileRequest, UpdateUserProfileRequest, UserProfile, UserRole,
};
pub use status::{
    status_color, status_icon, status_style, ApplicationStatus, CampaignStatus, ContentStatus,
    ContentType, InquiryStatus, PostStatus, StatusColor, StatusIcon, StatusStyle,
};
pub use validation::{extract_post_id, validate_social_media_url, Platform, UrlValidation};
