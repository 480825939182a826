use snorlax::constants::{DEFAULT_CACHE_DIR, DEFAULT_TIMEOUT_SECS};
use snorlax::prelude::*;
use std::env;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.base_uri, "");
    assert_eq!(config.timeout, DEFAULT_TIMEOUT_SECS);
    assert!(!config.debug);
    assert!(!config.cache.enabled);
    assert_eq!(config.cache.dir, DEFAULT_CACHE_DIR);
    assert!(config.rate_limiter.is_none());
}

#[test]
fn test_config_builders() {
    let config = Config::default()
        .with_base_uri("https://pokeapi.test")
        .with_timeout(5)
        .with_debug(true)
        .with_cache(true)
        .with_cache_dir("/tmp/snorlax")
        .with_header("Accept", "application/json");

    assert_eq!(config.base_uri, "https://pokeapi.test");
    assert_eq!(config.timeout, 5);
    assert!(config.debug);
    assert!(config.cache.enabled);
    assert_eq!(config.cache.dir, "/tmp/snorlax");
    assert_eq!(
        config.default_headers.get("Accept").map(String::as_str),
        Some("application/json")
    );
}

#[test]
fn test_config_from_env() {
    unsafe {
        env::set_var("SNORLAX_BASE_URI", "https://env.test");
        env::set_var("SNORLAX_TIMEOUT", "12");
        env::set_var("SNORLAX_DEBUG", "yes");
        env::set_var("SNORLAX_CACHE", "1");
        env::set_var("SNORLAX_CACHE_DIR", "/tmp/env-cache");
        env::set_var("SNORLAX_RATE_LIMIT_MAX_REQUESTS", "30");
        env::set_var("SNORLAX_RATE_LIMIT_BURST_SIZE", "3");
    }

    let config = Config::new();

    unsafe {
        for var in [
            "SNORLAX_BASE_URI",
            "SNORLAX_TIMEOUT",
            "SNORLAX_DEBUG",
            "SNORLAX_CACHE",
            "SNORLAX_CACHE_DIR",
            "SNORLAX_RATE_LIMIT_MAX_REQUESTS",
            "SNORLAX_RATE_LIMIT_BURST_SIZE",
        ] {
            env::remove_var(var);
        }
    }

    assert_eq!(config.base_uri, "https://env.test");
    assert_eq!(config.timeout, 12);
    assert!(config.debug);
    assert!(config.cache.enabled);
    assert_eq!(config.cache.dir, "/tmp/env-cache");

    let rate_limiter = config.rate_limiter.expect("rate limiter configured");
    assert_eq!(rate_limiter.max_requests, 30);
    assert_eq!(rate_limiter.period_seconds, 60);
    assert_eq!(rate_limiter.burst_size, 3);
}

#[test]
fn test_config_display() {
    let config = Config::default().with_base_uri("https://pokeapi.test");
    let display = format!("{}", config);
    assert!(display.contains("https://pokeapi.test"));
}
