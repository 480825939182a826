use reqwest::StatusCode;
use snorlax::error::AppError;
use std::error::Error;

#[test]
fn test_app_error_display_resource_not_implemented() {
    let error = AppError::ResourceNotImplemented("digimons".to_string());
    assert_eq!(error.to_string(), "Resource \"digimons\" is not implemented");
}

#[test]
fn test_app_error_display_action_not_implemented() {
    let error = AppError::ActionNotImplemented {
        resource: "pokemons".to_string(),
        action: "evolve".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Action \"evolve\" is not implemented on resource \"pokemons\""
    );
}

#[test]
fn test_app_error_display_rate_limit() {
    assert_eq!(AppError::RateLimitExceeded.to_string(), "rate limit exceeded");
}

#[test]
fn test_app_error_display_unauthorized() {
    assert_eq!(AppError::Unauthorized.to_string(), "unauthorized");
}

#[test]
fn test_app_error_display_not_found() {
    assert_eq!(AppError::NotFound.to_string(), "not found");
}

#[test]
fn test_app_error_display_unexpected() {
    let error = AppError::Unexpected(StatusCode::BAD_REQUEST);
    assert!(error.to_string().contains("400"));
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("missing argument 0".to_string());
    assert_eq!(error.to_string(), "invalid input: missing argument 0");
}

#[test]
fn test_app_error_from_json_keeps_source() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error: AppError = json_err.into();
    assert!(matches!(error, AppError::Json(_)));
    assert!(error.source().is_some());
    assert!(error.to_string().starts_with("json error:"));
}

#[test]
fn test_app_error_from_invalid_header() {
    let err = reqwest::header::HeaderName::from_bytes(b"bad header").unwrap_err();
    let error: AppError = err.into();
    assert!(matches!(error, AppError::InvalidHeader(_)));
    assert!(error.source().is_none());
}
