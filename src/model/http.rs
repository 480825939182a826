/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! HTTP transport seam
//!
//! [`HttpClient`] is the only thing resources talk to. The crate ships
//! [`ReqwestHttpClient`], a `reqwest-middleware` chain with optional cache,
//! debug and rate limit steps, but any implementation can be plugged in.

use crate::application::config::Config;
use crate::application::rate_limiter::{RateLimitMiddleware, RateLimiter};
use crate::constants::{
    CACHE_MIDDLEWARE_NAME, DEBUG_MIDDLEWARE_NAME, RATE_LIMIT_MIDDLEWARE_NAME, USER_AGENT,
};
use crate::error::AppError;
use crate::model::requests::ApiRequest;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use http::Extensions;
use http_cache_reqwest::{CACacheManager, Cache, CacheMode, HttpCache, HttpCacheOptions};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Request, Response};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, Middleware, Next};
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Transport used by every resource of a [`RestClient`](crate::application::client::RestClient)
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Sends a request and returns the full response, whatever its status
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, AppError>;

    /// Inserts or replaces a header sent with every request
    fn set_default_header(&self, name: HeaderName, value: HeaderValue);

    /// Returns a snapshot of the default headers
    fn default_headers(&self) -> HeaderMap;

    /// Names of the middleware steps in the request chain, outermost first
    fn middleware_names(&self) -> Vec<&'static str> {
        Vec::new()
    }

    /// Returns true if a middleware step with this name is in the chain
    fn has_middleware(&self, name: &str) -> bool {
        self.middleware_names().iter().any(|n| *n == name)
    }
}

/// Default [`HttpClient`] built on `reqwest` and `reqwest-middleware`
pub struct ReqwestHttpClient {
    client: ClientWithMiddleware,
    base_uri: String,
    default_headers: RwLock<HeaderMap>,
    middleware: Vec<&'static str>,
}

impl ReqwestHttpClient {
    /// Builds the client described by `config`
    ///
    /// The chain is assembled as `debug` → `cache` → `rate_limit`, each step
    /// only when enabled, so cached responses never consume rate limit tokens.
    ///
    /// # Errors
    /// * `AppError::Network` if the underlying `reqwest` client cannot be built
    /// * `AppError::InvalidHeader` if a configured default header is invalid
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        let mut builder = ClientBuilder::new(http_client);
        let mut middleware = Vec::new();

        if config.debug {
            builder = builder.with(DebugMiddleware);
            middleware.push(DEBUG_MIDDLEWARE_NAME);
        }

        if config.cache.enabled {
            debug!("Attaching HTTP cache in {}", config.cache.dir);
            builder = builder.with(Cache(HttpCache {
                mode: CacheMode::Default,
                manager: CACacheManager {
                    path: config.cache.dir.clone().into(),
                    ..Default::default()
                },
                options: HttpCacheOptions::default(),
            }));
            middleware.push(CACHE_MIDDLEWARE_NAME);
        }

        if let Some(rate_limiter) = &config.rate_limiter {
            builder = builder.with(RateLimitMiddleware::new(RateLimiter::new(rate_limiter)));
            middleware.push(RATE_LIMIT_MIDDLEWARE_NAME);
        }

        let mut default_headers = HeaderMap::new();
        for (name, value) in &config.default_headers {
            default_headers.insert(
                HeaderName::from_bytes(name.as_bytes())?,
                HeaderValue::from_str(value)?,
            );
        }

        Ok(Self {
            client: builder.build(),
            base_uri: config.base_uri.clone(),
            default_headers: RwLock::new(default_headers),
            middleware,
        })
    }

    /// Wraps an already configured `reqwest-middleware` client
    ///
    /// The chain of a foreign client is opaque, so `middleware_names` is empty.
    pub fn from_client(client: ClientWithMiddleware, base_uri: impl Into<String>) -> Self {
        Self {
            client,
            base_uri: base_uri.into(),
            default_headers: RwLock::new(HeaderMap::new()),
            middleware: Vec::new(),
        }
    }

    /// Base URI relative paths are resolved against
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Underlying `reqwest-middleware` client
    pub fn inner(&self) -> &ClientWithMiddleware {
        &self.client
    }

    fn resolve_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let path = path.trim_start_matches('/');
        if self.base_uri.is_empty() {
            return path.to_string();
        }
        format!("{}/{}", self.base_uri.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, AppError> {
        let url = self.resolve_url(&request.path);
        debug!("{} {}", request.method, url);

        let mut builder = self
            .client
            .request(request.method, &url)
            .headers(self.default_headers())
            .headers(request.headers);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        debug!("Response status: {}", response.status());
        ApiResponse::from_response(response).await
    }

    fn set_default_header(&self, name: HeaderName, value: HeaderValue) {
        self.default_headers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name, value);
    }

    fn default_headers(&self) -> HeaderMap {
        self.default_headers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn middleware_names(&self) -> Vec<&'static str> {
        self.middleware.clone()
    }
}

impl std::fmt::Debug for ReqwestHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestHttpClient")
            .field("base_uri", &self.base_uri)
            .field("middleware", &self.middleware)
            .finish()
    }
}

/// Middleware step logging every request and its outcome
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugMiddleware;

#[async_trait]
impl Middleware for DebugMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let method = req.method().clone();
        let url = req.url().clone();
        let started = Instant::now();
        info!("--> {} {}", method, url);

        let result = next.run(req, extensions).await;
        match &result {
            Ok(response) => info!(
                "<-- {} {} {} ({} ms)",
                response.status(),
                method,
                url,
                started.elapsed().as_millis()
            ),
            Err(e) => error!("<-- {} {} failed: {}", method, url, e),
        }
        result
    }
}
