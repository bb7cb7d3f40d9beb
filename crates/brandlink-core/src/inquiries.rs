//! Brand-to-influencer inquiries raised from an influencer's public package
//! page.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::status::InquiryStatus;

/// Snapshot of the package the inquiry was raised against, copied at
/// creation so later package edits don't rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDetails {
    pub platform: String,
    #[serde(rename = "type")]
    pub package_type: String,
    pub price: Decimal,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: Uuid,
    pub influencer_id: Uuid,
    pub package_id: Option<Uuid>,
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub message: String,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub package_details: Option<PackageDetails>,
    pub status: InquiryStatus,
    pub response: Option<String>,
    pub created_at: DateTime<Utc>,
    pub responded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInquiryRequest {
    pub influencer_id: Uuid,
    pub package_id: Option<Uuid>,
    #[validate(length(min = 1, max = 200, message = "companyName must be 1-200 characters"))]
    pub company_name: String,
    #[validate(length(min = 1, max = 100, message = "contactName must be 1-100 characters"))]
    pub contact_name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, max = 5000, message = "message must be 1-5000 characters"))]
    pub message: String,
    #[validate(length(max = 100))]
    pub budget: Option<String>,
    #[validate(length(max = 100))]
    pub timeline: Option<String>,
    pub package_details: Option<PackageDetails>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInquiryStatusRequest {
    pub status: InquiryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 5000, message = "response must be at most 5000 characters"))]
    pub response: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateInquiryRequest {
        CreateInquiryRequest {
            influencer_id: Uuid::new_v4(),
            package_id: None,
            company_name: "Acme Beverages".to_string(),
            contact_name: "Sam Lee".to_string(),
            email: "sam@acme.example".to_string(),
            message: "Interested in a reel package".to_string(),
            budget: Some("$1k-$2k".to_string()),
            timeline: None,
            package_details: None,
        }
    }

    #[test]
    fn valid_inquiry_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn inquiry_rejects_bad_email() {
        let mut req = request();
        req.email = "not-an-email".to_string();
        let err = req.validate().unwrap_err();
        assert!(err.field_errors().contains_key("email"));
    }

    #[test]
    fn inquiry_rejects_empty_company() {
        let mut req = request();
        req.company_name = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn package_details_use_type_key() {
        let details = PackageDetails {
            platform: "instagram".to_string(),
            package_type: "REEL".to_string(),
            price: Decimal::new(25_000, 2),
            title: "One reel".to_string(),
        };
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["type"], "REEL");
        assert_eq!(json["price"], "250.00");
    }
}
