use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::Deserialize;
use snorlax::prelude::*;

#[derive(Debug, Deserialize, PartialEq)]
struct Pokemon {
    id: u32,
    name: String,
}

fn response(status: StatusCode, body: &str) -> ApiResponse {
    ApiResponse::new(status, HeaderMap::new(), body)
}

#[test]
fn test_json_decoding() {
    let resp = response(StatusCode::OK, r#"{"id":1,"name":"bulbasaur"}"#);
    assert_eq!(
        resp.json::<Pokemon>().unwrap(),
        Pokemon {
            id: 1,
            name: "bulbasaur".to_string()
        }
    );
    assert_eq!(resp.json_value().unwrap()["id"], 1);
}

#[test]
fn test_empty_body_is_null() {
    let resp = response(StatusCode::NO_CONTENT, "  ");
    assert!(resp.json_value().unwrap().is_null());
}

#[test]
fn test_invalid_json() {
    let resp = response(StatusCode::OK, "<html>");
    assert!(matches!(resp.json_value(), Err(AppError::Json(_))));
}

#[test]
fn test_error_for_status_mapping() {
    assert!(response(StatusCode::CREATED, "").error_for_status().is_ok());
    assert!(matches!(
        response(StatusCode::UNAUTHORIZED, "").error_for_status(),
        Err(AppError::Unauthorized)
    ));
    assert!(matches!(
        response(StatusCode::NOT_FOUND, "").error_for_status(),
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        response(StatusCode::TOO_MANY_REQUESTS, "").error_for_status(),
        Err(AppError::RateLimitExceeded)
    ));
    assert!(matches!(
        response(StatusCode::INTERNAL_SERVER_ERROR, "").error_for_status(),
        Err(AppError::Unexpected(status)) if status == StatusCode::INTERNAL_SERVER_ERROR
    ));
}
