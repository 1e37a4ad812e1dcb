//! # Loan Client
//!
//! Typed HTTP client for the Cogni loan eligibility backend.
//!
//! The crate is organised in three layers:
//!
//! - [`model::endpoints`]: the endpoint registry and URL construction with
//!   `:param` substitution.
//! - [`model::http`]: the generic request wrapper. Every call resolves to an
//!   [`ApiResult`](model::result::ApiResult), never to a raised error.
//! - [`application::client`]: typed helpers (login, loans, profile,
//!   eligibility prediction, ...) built on top of the wrapper.
//!
//! ```rust,no_run
//! use loan_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let client = Client::new(Config::new())?;
//! match client.get_loans().await {
//!     ApiResult::Success { data } => println!("{} loans", data.len()),
//!     ApiResult::Failure { error } => eprintln!("{error}"),
//! }
//! # Ok(())
//! # }
//! ```

/// Application layer: configuration, token providers and the typed client
pub mod application;
/// Global constants
pub mod constants;
/// Error type shared by the whole crate
pub mod error;
/// Endpoint registry, request wrapper and wire models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Helpers for environment variables, logging and ids
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
