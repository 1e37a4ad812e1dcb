/// Environment variable holding the backend base origin
pub const API_URL_ENV_VAR: &str = "NEXT_PUBLIC_API_URL";
/// Base origin used when `NEXT_PUBLIC_API_URL` is not set
pub const DEFAULT_API_URL: &str = "https://cogni-ml.onrender.com";
/// Environment variable overriding the request timeout (seconds)
pub const API_TIMEOUT_ENV_VAR: &str = "API_TIMEOUT_SECS";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Environment variable enabling strict placeholder validation
pub const STRICT_PLACEHOLDERS_ENV_VAR: &str = "API_STRICT_PLACEHOLDERS";
/// Storage key under which the authentication token lives
pub const AUTH_TOKEN_KEY: &str = "auth_token";
/// Media type used for both `Content-Type` and `Accept`
pub const JSON_MEDIA_TYPE: &str = "application/json";
/// Message returned when a failure carries no message of its own
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";
/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("loan-client/", env!("CARGO_PKG_VERSION"));
/// Length of the correlation id attached to request log lines
pub const REQUEST_ID_LENGTH: usize = 12;
