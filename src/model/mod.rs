/// Endpoint registry and URL construction
pub mod endpoints;
/// Generic request wrapper
pub mod http;
/// Request bodies for the typed helpers
pub mod requests;
/// Response models from API calls
pub mod responses;
/// Success/failure envelope returned by every call
pub mod result;
