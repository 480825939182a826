//! # Snorlax
//!
//! A resource-oriented REST client built on top of `reqwest`.
//!
//! Resources are declared once, registered under a name, and then called by
//! action name. Transport, connection pooling and caching are delegated to
//! `reqwest`, `reqwest-middleware` and `http-cache-reqwest`.
//!
//! ## Example
//!
//! ```ignore
//! use snorlax::prelude::*;
//!
//! #[derive(Default)]
//! struct PokemonResource;
//!
//! impl Resource for PokemonResource {
//!     fn base_uri(&self) -> &str {
//!         "/pokemon"
//!     }
//!
//!     fn actions(&self) -> Vec<Action> {
//!         vec![Action::get("get", "/{0}")]
//!     }
//! }
//!
//! let client = RestClient::builder()
//!     .config(Config::default().with_base_uri("https://pokeapi.co/api/v2").with_cache(true))
//!     .resource("pokemons", PokemonResource)
//!     .build()?;
//!
//! let pikachu = client
//!     .resource("pokemons")?
//!     .call("get", &["pikachu"], RequestParams::default())
//!     .await?;
//! ```

/// Application layer: client, resources, auth and configuration
pub mod application;

/// Library-wide constants
pub mod constants;

/// Error type shared by the whole crate
pub mod error;

/// Transport abstraction and request/response models
pub mod model;

/// Commonly used re-exports
pub mod prelude;

/// Helpers for logging and environment handling
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
