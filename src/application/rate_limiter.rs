/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Client-side rate limiting
//!
//! Wraps a `governor` token bucket and exposes it as a `reqwest-middleware`
//! step so every request sent through the default client waits for a token.

use crate::application::config::RateLimiterConfig;
use async_trait::async_trait;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use http::Extensions;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tracing::trace;

/// Token bucket limiting how often requests can be sent
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>>,
}

impl RateLimiter {
    /// Creates a new rate limiter from configuration
    ///
    /// Tokens are replenished evenly over the period, one every
    /// `period_seconds / max_requests`. A zero `max_requests` or period falls
    /// back to one request per second.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use snorlax::application::config::RateLimiterConfig;
    /// use snorlax::application::rate_limiter::RateLimiter;
    ///
    /// let limiter = RateLimiter::new(&RateLimiterConfig {
    ///     max_requests: 60,
    ///     period_seconds: 60,
    ///     burst_size: 10,
    /// });
    /// ```
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let burst_size = NonZeroU32::new(config.burst_size).unwrap_or(NonZeroU32::MIN);

        let quota = NonZeroU32::new(config.max_requests)
            .map(|max| Duration::from_secs(config.period_seconds) / max.get())
            .and_then(Quota::with_period)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst_size);

        Self {
            limiter: Arc::new(GovernorRateLimiter::direct(quota)),
        }
    }

    /// Waits until a request can be made according to the rate limit
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Returns true when a request can be made immediately, consuming a token
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("limiter", &"GovernorRateLimiter")
            .finish()
    }
}

/// Middleware step that waits on a [`RateLimiter`] before forwarding
#[derive(Debug, Clone)]
pub struct RateLimitMiddleware {
    limiter: RateLimiter,
}

impl RateLimitMiddleware {
    /// Wraps a rate limiter
    #[must_use]
    pub fn new(limiter: RateLimiter) -> Self {
        Self { limiter }
    }
}

#[async_trait]
impl Middleware for RateLimitMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        trace!("Waiting for rate limiter: {} {}", req.method(), req.url());
        self.limiter.wait().await;
        next.run(req, extensions).await
    }
}
