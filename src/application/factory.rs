//! Client factory
//!
//! Decides where the [`HttpClient`] of a [`RestClient`](crate::application::client::RestClient)
//! comes from: built from configuration, supplied as an instance, or produced
//! by a caller supplied closure.

use crate::application::config::Config;
use crate::error::AppError;
use crate::model::http::{HttpClient, ReqwestHttpClient};
use std::sync::Arc;
use tracing::debug;

/// Closure producing a client from the configuration
pub type ClientFactory =
    Box<dyn FnOnce(&Config) -> Result<Arc<dyn HttpClient>, AppError> + Send>;

/// Origin of the HTTP client
#[derive(Default)]
pub enum ClientSource {
    /// Build a [`ReqwestHttpClient`] from the configuration
    #[default]
    Default,
    /// Use this client unchanged
    Instance(Arc<dyn HttpClient>),
    /// Call this closure once with the configuration
    Factory(ClientFactory),
}

impl ClientSource {
    /// Wraps a client instance
    pub fn instance<C: HttpClient + 'static>(client: C) -> Self {
        ClientSource::Instance(Arc::new(client))
    }

    /// Wraps a factory closure
    pub fn factory<F>(factory: F) -> Self
    where
        F: FnOnce(&Config) -> Result<Arc<dyn HttpClient>, AppError> + Send + 'static,
    {
        ClientSource::Factory(Box::new(factory))
    }

    /// Produces the client
    ///
    /// Cache, debug and rate limit settings only shape the default client. A
    /// factory receives the configuration and may honour them itself.
    pub fn build(self, config: &Config) -> Result<Arc<dyn HttpClient>, AppError> {
        match self {
            ClientSource::Default => {
                debug!(
                    "Building default client (cache: {}, debug: {})",
                    config.cache.enabled, config.debug
                );
                Ok(Arc::new(ReqwestHttpClient::new(config)?))
            }
            ClientSource::Instance(client) => {
                if config.cache.enabled || config.debug {
                    debug!("Custom client supplied, cache and debug settings are ignored");
                }
                Ok(client)
            }
            ClientSource::Factory(factory) => {
                debug!("Building client from custom factory");
                factory(config)
            }
        }
    }
}

impl std::fmt::Debug for ClientSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientSource::Default => write!(f, "ClientSource::Default"),
            ClientSource::Instance(_) => write!(f, "ClientSource::Instance"),
            ClientSource::Factory(_) => write!(f, "ClientSource::Factory"),
        }
    }
}
