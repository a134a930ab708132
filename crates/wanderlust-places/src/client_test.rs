use super::*;

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", 5, base_url)
        .expect("client construction should not fail")
}

#[test]
fn build_url_constructs_correct_query_string() {
    let client = test_client("https://maps.googleapis.com/maps/api");
    let url = client
        .build_url("geocode/json", &[("address", "Paris")])
        .expect("url");
    assert_eq!(
        url.as_str(),
        "https://maps.googleapis.com/maps/api/geocode/json?address=Paris&key=test-key"
    );
}

#[test]
fn build_url_strips_trailing_slash() {
    let client = test_client("https://maps.googleapis.com/maps/api/");
    let url = client
        .build_url("place/details/json", &[("place_id", "abc")])
        .expect("url");
    assert_eq!(
        url.as_str(),
        "https://maps.googleapis.com/maps/api/place/details/json?place_id=abc&key=test-key"
    );
}

#[test]
fn build_url_encodes_special_characters() {
    let client = test_client("https://maps.googleapis.com/maps/api");
    let url = client
        .build_url("place/textsearch/json", &[("query", "rock & roll hall")])
        .expect("url");
    assert!(
        url.as_str().contains("rock+%26+roll+hall")
            || url.as_str().contains("rock%20%26%20roll%20hall"),
        "query param should be percent-encoded: {url}"
    );
}

#[test]
fn base_url_has_no_trailing_slash() {
    let client = test_client("http://127.0.0.1:9999/maps/api/");
    assert_eq!(client.base_url(), "http://127.0.0.1:9999/maps/api");
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = PlacesClient::with_base_url("test-key", 5, "not a url");
    assert!(matches!(result, Err(PlacesError::InvalidBaseUrl { .. })));
}

#[test]
fn check_status_accepts_ok_and_zero_results() {
    assert!(PlacesClient::check_status(&serde_json::json!({"status": "OK"})).is_ok());
    assert!(PlacesClient::check_status(&serde_json::json!({"status": "ZERO_RESULTS"})).is_ok());
}

#[test]
fn check_status_surfaces_error_message() {
    let body = serde_json::json!({
        "status": "REQUEST_DENIED",
        "error_message": "The provided API key is invalid."
    });
    let err = PlacesClient::check_status(&body).unwrap_err();
    match err {
        PlacesError::ProviderStatus { status, message } => {
            assert_eq!(status, "REQUEST_DENIED");
            assert_eq!(message, "The provided API key is invalid.");
        }
        other => panic!("expected ProviderStatus, got {other:?}"),
    }
}

#[test]
fn check_status_missing_status_is_error() {
    let err = PlacesClient::check_status(&serde_json::json!({"results": []})).unwrap_err();
    assert!(matches!(err, PlacesError::ProviderStatus { ref status, .. } if status == "UNKNOWN"));
}
