use crate::error::AppError;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::error;

/// Response returned by an [`HttpClient`](crate::model::http::HttpClient)
///
/// The body is read eagerly so the response can be stored as the client's
/// last response and decoded more than once.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body text
    pub body: String,
}

impl ApiResponse {
    /// Creates a response from its parts
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<String>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Reads a `reqwest` response into an `ApiResponse`
    pub async fn from_response(response: reqwest::Response) -> Result<Self, AppError> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;
        Ok(Self::new(status, headers, body))
    }

    /// Returns true for 2xx statuses
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Turns a non-success status into an error
    ///
    /// 401, 404 and 429 map to their own variants, everything else to
    /// `AppError::Unexpected`.
    pub fn error_for_status(self) -> Result<Self, AppError> {
        if self.is_success() {
            return Ok(self);
        }
        error!("Request failed with status {}: {}", self.status, self.body);
        match self.status {
            StatusCode::UNAUTHORIZED => Err(AppError::Unauthorized),
            StatusCode::NOT_FOUND => Err(AppError::NotFound),
            StatusCode::TOO_MANY_REQUESTS => Err(AppError::RateLimitExceeded),
            status => Err(AppError::Unexpected(status)),
        }
    }

    /// Decodes the body as JSON, an empty body decodes to `Value::Null`
    pub fn json_value(&self) -> Result<Value, AppError> {
        if self.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Decodes the body into `T`
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        Ok(serde_json::from_value(self.json_value()?)?)
    }
}
