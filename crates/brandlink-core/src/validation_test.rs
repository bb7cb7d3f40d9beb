use uuid::Uuid;

use super::*;
use crate::status::ContentType;

// ---------------------------------------------------------------------------
// validate_social_media_url
// ---------------------------------------------------------------------------

#[test]
fn rejects_url_without_scheme() {
    let result = validate_social_media_url("not-a-url", "instagram");
    assert!(!result.is_valid);
    assert!(result.error.unwrap().contains("http"));
}

#[test]
fn rejects_blank_url() {
    let result = validate_social_media_url("   ", "instagram");
    assert!(!result.is_valid);
    assert_eq!(result.error.as_deref(), Some("URL is required"));
}

#[test]
fn accepts_instagram_post() {
    let post = validate_social_media_url("https://instagram.com/p/ABC123", "instagram");
    assert!(post.is_valid);
    let reel = "https://www.instagram.com/reel/Cx9_a-Z/?igsh=abc";
    assert!(validate_social_media_url(reel, "Instagram").is_valid);
}

#[test]
fn rejects_instagram_profile_link() {
    let result = validate_social_media_url("https://instagram.com/someone", "instagram");
    assert!(!result.is_valid);
    assert!(result.error.unwrap().contains("Instagram"));
}

#[test]
fn rejects_other_platform_url() {
    assert!(
        !validate_social_media_url("https://www.tiktok.com/@me/video/123", "instagram").is_valid
    );
}

#[test]
fn accepts_each_registered_platform() {
    let cases = [
        ("tiktok", "https://www.tiktok.com/@creator.name/video/7251234567890123456"),
        ("tiktok", "https://vm.tiktok.com/ZMabc123/"),
        ("youtube", "https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
        ("youtube", "https://youtu.be/dQw4w9WgXcQ"),
        ("youtube", "https://youtube.com/shorts/dQw4w9WgXcQ"),
        ("twitter", "https://twitter.com/brand/status/1780000000000000000"),
        ("x", "https://x.com/brand/status/1780000000000000000"),
        ("facebook", "https://www.facebook.com/brandpage/posts/pfbid0abc"),
        ("facebook", "https://www.facebook.com/watch/?v=123456789"),
    ];
    for (platform, url) in cases {
        assert!(
            validate_social_media_url(url, platform).is_valid,
            "{platform}: {url}"
        );
    }
}

#[test]
fn unknown_platform_only_checks_scheme() {
    let https = validate_social_media_url("https://example.com/anything", "pinterest");
    assert!(https.is_valid);
    let ftp = validate_social_media_url("ftp://example.com/anything", "pinterest");
    assert!(!ftp.is_valid);
}

#[test]
fn scheme_check_is_case_insensitive() {
    let shouted = "HTTPS://instagram.com/p/ABC123";
    assert!(validate_social_media_url(shouted, "unknown").is_valid);
    assert!(validate_social_media_url(shouted, "instagram").is_valid);
    let mixed_host = "https://WWW.YouTube.com/watch?v=dQw4w9WgXcQ";
    assert!(validate_social_media_url(mixed_host, "youtube").is_valid);
}

#[test]
fn tiktok_accepts_bare_domain() {
    let url = "https://tiktok.com/@user/video/7234567890123456789";
    assert!(validate_social_media_url(url, "tiktok").is_valid);
    assert_eq!(
        extract_post_id(url, "tiktok").as_deref(),
        Some("7234567890123456789")
    );
}

#[test]
fn upper_case_host_keeps_post_id_case() {
    assert_eq!(
        extract_post_id("HTTPS://WWW.INSTAGRAM.COM/p/AbC123", "instagram").as_deref(),
        Some("AbC123")
    );
}

// ---------------------------------------------------------------------------
// extract_post_id
// ---------------------------------------------------------------------------

#[test]
fn extracts_ids_per_platform() {
    assert_eq!(
        extract_post_id("https://instagram.com/p/ABC123/", "instagram").as_deref(),
        Some("ABC123")
    );
    assert_eq!(
        extract_post_id("https://www.tiktok.com/@me/video/725123", "tiktok").as_deref(),
        Some("725123")
    );
    assert_eq!(
        extract_post_id("https://youtu.be/dQw4w9WgXcQ", "youtube").as_deref(),
        Some("dQw4w9WgXcQ")
    );
    assert_eq!(
        extract_post_id("https://x.com/brand/status/42", "twitter").as_deref(),
        Some("42")
    );
    assert_eq!(
        extract_post_id("https://www.facebook.com/watch/?v=987", "facebook").as_deref(),
        Some("987")
    );
}

#[test]
fn extract_returns_none_on_miss() {
    assert!(extract_post_id("https://instagram.com/someone", "instagram").is_none());
    assert!(extract_post_id("https://example.com/p/1", "myspace").is_none());
    assert!(extract_post_id("", "instagram").is_none());
}

#[test]
fn platform_aliases() {
    assert_eq!(Platform::from_name("X"), Some(Platform::Twitter));
    assert_eq!(Platform::from_name(" TikTok "), Some(Platform::TikTok));
    assert_eq!(Platform::from_name("snapchat"), None);
}

// ---------------------------------------------------------------------------
// Form gates
// ---------------------------------------------------------------------------

fn complete_application() -> ApplicationData {
    ApplicationData {
        motivation: "Long-time customer".to_string(),
        content_ideas: "Morning routine reel".to_string(),
        agrees_to_terms: true,
        agrees_to_content_guidelines: true,
        agrees_to_timeline: true,
        ..ApplicationData::default()
    }
}

#[test]
fn complete_application_passes_gate() {
    let data = complete_application();
    assert!(data.is_form_valid());
    assert!(data.ensure_submittable().is_ok());
}

#[test]
fn each_application_condition_blocks_the_gate() {
    let breakers: [(&str, fn(&mut ApplicationData)); 5] = [
        ("motivation", |d| d.motivation = "   ".to_string()),
        ("contentIdeas", |d| d.content_ideas = String::new()),
        ("agreesToTerms", |d| d.agrees_to_terms = false),
        ("agreesToContentGuidelines", |d| {
            d.agrees_to_content_guidelines = false;
        }),
        ("agreesToTimeline", |d| d.agrees_to_timeline = false),
    ];
    for (field, breaker) in breakers {
        let mut data = complete_application();
        breaker(&mut data);
        assert!(!data.is_form_valid(), "{field}");
        assert_eq!(data.missing_fields(), vec![field]);
    }
}

#[test]
fn application_gate_error_lists_fields() {
    let err = ApplicationData::default().ensure_submittable().unwrap_err();
    let CoreError::Validation(message) = err else {
        panic!("expected validation error");
    };
    assert!(message.contains("motivation"));
    assert!(message.contains("agreesToTimeline"));
}

fn complete_content_form() -> ContentSubmissionForm {
    ContentSubmissionForm {
        campaign_id: Uuid::new_v4(),
        title: " Launch reel ".to_string(),
        description: Some("  ".to_string()),
        caption: "New flavor!".to_string(),
        hashtags: vec!["#ad".to_string()],
        platforms: vec!["instagram".to_string()],
        content_type: Some(ContentType::Reel),
        files: vec![UploadFile {
            file_name: "reel.mp4".to_string(),
            mime_type: "video/mp4".to_string(),
            bytes: vec![0, 1, 2],
        }],
    }
}

#[test]
fn content_form_gate_requires_every_field() {
    assert!(complete_content_form().is_form_valid());
    assert_eq!(
        ContentSubmissionForm::default().missing_fields(),
        vec!["title", "caption", "files", "platforms", "contentType"]
    );
}

#[test]
fn content_form_converts_to_trimmed_request() {
    let (request, files) = complete_content_form().into_request().unwrap();
    assert_eq!(request.title, "Launch reel");
    assert!(request.description.is_none());
    assert_eq!(request.content_type, ContentType::Reel);
    assert_eq!(files.len(), 1);
}

#[test]
fn incomplete_content_form_does_not_convert() {
    let mut form = complete_content_form();
    form.files.clear();
    assert!(matches!(form.into_request(), Err(CoreError::Validation(_))));
}
