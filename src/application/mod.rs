/// Authentication methods applied through default headers
pub mod auth;
/// REST client and resource handles
pub mod client;
/// Application configuration module
pub mod config;
/// Client factory deciding where the HTTP client comes from
pub mod factory;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
/// Resources, actions and the resource registry
pub mod resource;
