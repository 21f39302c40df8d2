use crate::client::client::error_detail;
use crate::{Client, ClientError};

use reqwest::StatusCode;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:7060/");
    assert_eq!(client.base_url, "http://localhost:7060");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:7060");
    assert_eq!(client.base_url, "http://localhost:7060");
}

#[test]
fn test_base_url_keeps_path_prefix() {
    let client = Client::new("http://gateway/agency//");
    assert_eq!(client.base_url, "http://gateway/agency");
}

#[test]
fn test_error_detail_prefers_detail_field() {
    let detail = error_detail(
        StatusCode::NOT_FOUND,
        br#"{"detail": "Project not found"}"#,
    );
    assert_eq!(detail, "Project not found");
}

#[test]
fn test_error_detail_non_string_detail_is_rendered_as_json() {
    let detail = error_detail(
        StatusCode::UNPROCESSABLE_ENTITY,
        br#"{"detail": [{"loc": ["query", "name"], "msg": "field required"}]}"#,
    );
    assert!(detail.contains("field required"));
}

#[test]
fn test_error_detail_falls_back_to_body_text() {
    let detail = error_detail(StatusCode::BAD_GATEWAY, b"  upstream down \n");
    assert_eq!(detail, "upstream down");
}

#[test]
fn test_error_detail_empty_body_uses_reason_phrase() {
    let detail = error_detail(StatusCode::INTERNAL_SERVER_ERROR, b"");
    assert_eq!(detail, "Internal Server Error");
}

#[test]
fn test_api_error_display_and_status() {
    let err = ClientError::api_error(404, "Project not found".to_string());
    let message = err.to_string();
    assert!(message.contains("Project not found"));
    assert!(message.contains("404"));
    assert_eq!(err.status(), Some(404));
    assert!(!err.is_transport());
}

#[test]
fn test_json_error_has_no_status() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = ClientError::from_json(json_err);
    assert!(err.to_string().starts_with("Malformed response"));
    assert_eq!(err.status(), None);
}
