//! # Snorlax Prelude
//!
//! Re-exports the types needed for most uses of the crate.
//!
//! ```rust
//! use snorlax::prelude::*;
//!
//! let config = Config::default().with_base_uri("https://pokeapi.co/api/v2");
//! assert!(!config.cache.enabled);
//! ```

// ============================================================================
// CLIENT
// ============================================================================

pub use crate::application::client::{ResourceHandle, RestClient, RestClientBuilder};
pub use crate::application::factory::{ClientFactory, ClientSource};

// ============================================================================
// RESOURCES
// ============================================================================

pub use crate::application::resource::{Action, Resource, ResourceRegistry};

// ============================================================================
// AUTHENTICATION
// ============================================================================

pub use crate::application::auth::{ApiKeyAuth, Authorization, BasicAuth, BearerAuth};

// ============================================================================
// CONFIGURATION
// ============================================================================

pub use crate::application::config::{CacheConfig, Config, RateLimiterConfig};

// ============================================================================
// TRANSPORT AND MODELS
// ============================================================================

pub use crate::model::http::{HttpClient, ReqwestHttpClient};
pub use crate::model::requests::{ApiRequest, RequestParams};
pub use crate::model::responses::ApiResponse;

// ============================================================================
// ERRORS AND UTILITIES
// ============================================================================

pub use crate::error::AppError;
pub use crate::utils::setup_logger;
pub use crate::{VERSION, version};

pub use reqwest::Method;
pub use serde_json::Value;
