/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;
use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::Value;

/// Per-call options for a resource action
#[derive(Debug, Clone, Default)]
pub struct RequestParams {
    /// Query string pairs, sent in order
    pub query: Vec<(String, String)>,
    /// Optional JSON body
    pub body: Option<Value>,
    /// Extra headers, overriding the client defaults
    pub headers: HeaderMap,
}

impl RequestParams {
    /// Creates empty parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a query string pair
    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Sets the JSON body
    ///
    /// # Errors
    /// Returns `AppError::Json` if `body` cannot be serialized
    pub fn with_body<B: Serialize>(mut self, body: &B) -> Result<Self, AppError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Adds a header for this call only
    ///
    /// # Errors
    /// Returns `AppError::InvalidHeader` if the name or value is not valid
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, AppError> {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let value = HeaderValue::from_str(value)?;
        self.headers.insert(name, value);
        Ok(self)
    }
}

/// A request ready to be handed to an [`HttpClient`](crate::model::http::HttpClient)
///
/// `path` is either relative to the client's base URI or an absolute URL.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Path or absolute URL
    pub path: String,
    /// Query string pairs
    pub query: Vec<(String, String)>,
    /// Request specific headers
    pub headers: HeaderMap,
    /// Optional JSON body
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Creates a request without query, headers or body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Copies query, body and headers from call parameters
    pub fn with_params(mut self, params: RequestParams) -> Self {
        self.query = params.query;
        self.headers = params.headers;
        self.body = params.body;
        self
    }
}
