pub mod api;
pub mod campaign;
pub mod content;
pub mod error;
pub mod inquiry;
pub mod profile;

use std::sync::Arc;

pub use api::{handle_api_error, Actor, ApiClient};
pub use campaign::CampaignService;
pub use content::ContentService;
pub use error::ClientError;
pub use inquiry::InquiryService;
pub use profile::ProfileService;

/// Every service wired to one shared [`ApiClient`].
#[derive(Clone)]
pub struct Services {
    pub campaigns: CampaignService,
    pub content: ContentService,
    pub inquiries: InquiryService,
    pub profile: ProfileService,
}

impl Services {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        let api = Arc::new(api);
        Self {
            campaigns: CampaignService::new(Arc::clone(&api)),
            content: ContentService::new(Arc::clone(&api)),
            inquiries: InquiryService::new(Arc::clone(&api)),
            profile: ProfileService::new(api),
        }
    }
}
