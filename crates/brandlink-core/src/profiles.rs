use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::CoreError;

/// Who is making a request. Carried in the `x-user-role` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Brand,
    Influencer,
    Admin,
}

impl UserRole {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Influencer => "influencer",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brand" => Ok(Self::Brand),
            "influencer" => Ok(Self::Influencer),
            "admin" => Ok(Self::Admin),
            _ => Err(CoreError::Validation(format!("unknown user role: '{s}'"))),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub role: Option<UserRole>,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub brand: Option<BrandProfile>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandProfile {
    pub company_name: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub industry: Vec<String>,
    #[serde(default)]
    pub brand_values: Vec<String>,
    #[serde(default)]
    pub marketing_goals: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 1000, message = "bio must be at most 1000 characters"))]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100))]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "website must be a valid URL"))]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "avatarUrl must be a valid URL"))]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 30))]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBrandProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200, message = "companyName must be 1-200 characters"))]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "website must be a valid URL"))]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing_goals: Option<Vec<String>>,
}

impl UserProfile {
    /// Apply a sparse update; absent fields are left untouched.
    pub fn apply(&mut self, update: UpdateUserProfileRequest) {
        let UpdateUserProfileRequest {
            name,
            bio,
            location,
            website,
            avatar_url,
            phone,
        } = update;
        if name.is_some() {
            self.name = name;
        }
        if bio.is_some() {
            self.bio = bio;
        }
        if location.is_some() {
            self.location = location;
        }
        if website.is_some() {
            self.website = website;
        }
        if avatar_url.is_some() {
            self.avatar_url = avatar_url;
        }
        if phone.is_some() {
            self.phone = phone;
        }
    }
}

impl BrandProfile {
    pub fn apply(&mut self, update: UpdateBrandProfileRequest) {
        if update.company_name.is_some() {
            self.company_name = update.company_name;
        }
        if update.website.is_some() {
            self.website = update.website;
        }
        if update.description.is_some() {
            self.description = update.description;
        }
        if let Some(industry) = update.industry {
            self.industry = industry;
        }
        if let Some(values) = update.brand_values {
            self.brand_values = values;
        }
        if let Some(goals) = update.marketing_goals {
            self.marketing_goals = goals;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("Brand".parse::<UserRole>().unwrap(), UserRole::Brand);
        assert_eq!(" ADMIN ".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert!("agency".parse::<UserRole>().is_err());
    }

    #[test]
    fn profile_update_rejects_bad_website() {
        let req = UpdateUserProfileRequest {
            website: Some("not a url".to_string()),
            ..UpdateUserProfileRequest::default()
        };
        let err = req.validate().unwrap_err();
        assert!(err.field_errors().contains_key("website"));
    }

    #[test]
    fn empty_profile_update_is_valid() {
        assert!(UpdateUserProfileRequest::default().validate().is_ok());
        assert!(UpdateBrandProfileRequest::default().validate().is_ok());
    }

    #[test]
    fn apply_keeps_absent_fields() {
        let mut profile = UserProfile {
            name: Some("Ana".to_string()),
            bio: Some("Travel".to_string()),
            ..UserProfile::default()
        };
        profile.apply(UpdateUserProfileRequest {
            bio: Some("Food and travel".to_string()),
            ..UpdateUserProfileRequest::default()
        });
        assert_eq!(profile.name.as_deref(), Some("Ana"));
        assert_eq!(profile.bio.as_deref(), Some("Food and travel"));
    }

    #[test]
    fn brand_apply_replaces_lists_wholesale() {
        let mut brand = BrandProfile {
            industry: vec!["beverage".to_string(), "food".to_string()],
            ..BrandProfile::default()
        };
        brand.apply(UpdateBrandProfileRequest {
            industry: Some(vec!["wellness".to_string()]),
            ..UpdateBrandProfileRequest::default()
        });
        assert_eq!(brand.industry, vec!["wellness".to_string()]);
        assert!(brand.brand_values.is_empty());
    }
}
