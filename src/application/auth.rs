/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Authentication methods
//!
//! An [`Authorization`] is a value object that yields one header. It is
//! applied with [`RestClient::set_authorization`](crate::application::client::RestClient::set_authorization),
//! which writes the header into the client's defaults.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::AUTHORIZATION;

/// A method of authenticating requests through a single header
pub trait Authorization: Send + Sync {
    /// Scheme name, e.g. `Bearer`
    fn auth_type(&self) -> &str;

    /// Credentials placed after the scheme
    fn credentials(&self) -> String;

    /// Header the credentials are sent in
    fn header_name(&self) -> String {
        AUTHORIZATION.as_str().to_string()
    }

    /// Full header value
    fn header_value(&self) -> String {
        format!("{} {}", self.auth_type(), self.credentials())
    }
}

/// `Authorization: Bearer <token>`
#[derive(Clone)]
pub struct BearerAuth {
    token: String,
}

impl BearerAuth {
    /// Creates a bearer token method
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl Authorization for BearerAuth {
    fn auth_type(&self) -> &str {
        "Bearer"
    }

    fn credentials(&self) -> String {
        self.token.clone()
    }
}

/// `Authorization: Basic <base64(username:password)>`
#[derive(Clone)]
pub struct BasicAuth {
    username: String,
    password: String,
}

impl BasicAuth {
    /// Creates a basic auth method
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Authorization for BasicAuth {
    fn auth_type(&self) -> &str {
        "Basic"
    }

    fn credentials(&self) -> String {
        STANDARD.encode(format!("{}:{}", self.username, self.password))
    }
}

/// API key sent verbatim in a custom header, e.g. `X-API-KEY: <key>`
#[derive(Clone)]
pub struct ApiKeyAuth {
    header: String,
    key: String,
}

impl ApiKeyAuth {
    /// Creates an API key method sending `key` in `header`
    pub fn new(header: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            key: key.into(),
        }
    }
}

impl Authorization for ApiKeyAuth {
    fn auth_type(&self) -> &str {
        "ApiKey"
    }

    fn credentials(&self) -> String {
        self.key.clone()
    }

    fn header_name(&self) -> String {
        self.header.clone()
    }

    fn header_value(&self) -> String {
        self.key.clone()
    }
}

// Credentials stay out of logs
impl std::fmt::Debug for BearerAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerAuth").field("token", &"***").finish()
    }
}

impl std::fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl std::fmt::Debug for ApiKeyAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyAuth")
            .field("header", &self.header)
            .field("key", &"***")
            .finish()
    }
}
