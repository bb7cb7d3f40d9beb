use super::*;

fn test_client(base_url: &str) -> ApiClient {
    ApiClient::new(base_url, 30).expect("client construction should not fail")
}

fn api_message(err: ClientError) -> (u16, String) {
    match err {
        ClientError::Api { status, message } => (status, message),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn url_appends_path_to_base() {
    let client = test_client("http://localhost:3000/api/v1");
    let url = client.url("/campaigns/browse").unwrap();
    assert_eq!(
        url.as_str(),
        "http://localhost:3000/api/v1/campaigns/browse"
    );
}

#[test]
fn url_tolerates_trailing_slash_on_base() {
    let client = test_client("http://localhost:3000/api/v1/");
    let url = client.url("content/my").unwrap();
    assert_eq!(url.as_str(), "http://localhost:3000/api/v1/content/my");
}

#[test]
fn rejects_non_http_base_url() {
    assert!(matches!(
        ApiClient::new("ftp://files.example", 30),
        Err(ClientError::InvalidBaseUrl { .. })
    ));
    assert!(matches!(
        ApiClient::new("not a url", 30),
        Err(ClientError::InvalidBaseUrl { .. })
    ));
}

#[test]
fn api_error_prefers_nested_error_message() {
    let body = r#"{"error":{"code":"invalid_transition","message":"campaign cannot move from DRAFT to COMPLETED"},"message":"ignored"}"#;
    let (status, message) = api_message(handle_api_error(409, body));
    assert_eq!(status, 409);
    assert_eq!(message, "campaign cannot move from DRAFT to COMPLETED");
}

#[test]
fn api_error_reads_top_level_message_string() {
    let (_, message) = api_message(handle_api_error(404, r#"{"message":"Campaign not found"}"#));
    assert_eq!(message, "Campaign not found");
}

#[test]
fn api_error_joins_message_arrays() {
    let body = r#"{"statusCode":400,"message":["title should not be empty","budget must be positive"],"error":"Bad Request"}"#;
    let (_, message) = api_message(handle_api_error(400, body));
    assert_eq!(
        message,
        "title should not be empty; budget must be positive"
    );
}

#[test]
fn api_error_falls_back_to_error_string() {
    let (_, message) = api_message(handle_api_error(403, r#"{"error":"Forbidden"}"#));
    assert_eq!(message, "Forbidden");
}

#[test]
fn api_error_generic_fallback() {
    for body in ["", "<html>502</html>", "{}", r#"{"message":""}"#, r#"{"message":[]}"#] {
        let (_, message) = api_message(handle_api_error(502, body));
        assert_eq!(message, "Request failed with status 502", "body: {body}");
    }
}

#[test]
fn user_message_passes_through_api_and_validation_text() {
    let err = handle_api_error(409, r#"{"message":"Already applied"}"#);
    assert_eq!(err.user_message(), "Already applied");
    assert_eq!(err.status(), Some(409));

    let err = ClientError::Validation("missing required fields: motivation".into());
    assert_eq!(err.user_message(), "missing required fields: motivation");
    assert_eq!(err.status(), None);
}
