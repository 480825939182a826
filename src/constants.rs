/// User agent string sent by the default HTTP client
pub const USER_AGENT: &str = concat!("snorlax/", env!("CARGO_PKG_VERSION"));
/// Name under which the caching middleware is registered in the request chain
pub const CACHE_MIDDLEWARE_NAME: &str = "cache";
/// Name under which the request logging middleware is registered
pub const DEBUG_MIDDLEWARE_NAME: &str = "debug";
/// Name under which the rate limiting middleware is registered
pub const RATE_LIMIT_MIDDLEWARE_NAME: &str = "rate_limit";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default directory used by the disk cache manager
pub const DEFAULT_CACHE_DIR: &str = "./http-cacache";
/// Default maximum number of requests per period when rate limiting is enabled
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 60;
/// Default rate limit period in seconds
pub const DEFAULT_RATE_LIMIT_PERIOD_SECONDS: u64 = 60;
/// Default burst size for the rate limiter
pub const DEFAULT_RATE_LIMIT_BURST_SIZE: u32 = 10;
