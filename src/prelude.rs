//! # Loan Client Prelude
//!
//! Re-exports the types needed for most interactions with the loan API.
//!
//! ```rust,no_run
//! use loan_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let store = TokenStore::new();
//! let client = Client::with_token_provider(Config::new(), Arc::new(store.clone()))?;
//!
//! let login = LoginRequest::new("a@b.com", "secret");
//! if let ApiResult::Success { data } = client.login(&login).await {
//!     if let Some(token) = data.token {
//!         store.set_token(token);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the loan API client
pub use crate::application::config::{Config, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Internal error type, surfaced only through `ApiResult::Failure` messages
pub use crate::error::AppError;

/// Success/failure envelope
pub use crate::model::result::ApiResult;

// ============================================================================
// CLIENT AND TRANSPORT
// ============================================================================

/// Typed client and its service trait
pub use crate::application::client::Client;
pub use crate::application::interfaces::loan::LoanService;

/// Generic request wrapper
pub use crate::model::http::{HttpClient, HttpMethod, RequestOptions};

/// Endpoint registry
pub use crate::model::endpoints::{Endpoint, EndpointRegistry, PathParams, build_url};

/// Token providers
pub use crate::application::token::{NoToken, StaticToken, TokenProvider, TokenStore};

// ============================================================================
// MODELS
// ============================================================================

/// Request bodies
pub use crate::model::requests::{
    ApplicantProfile, EligibilityRequest, LoanApplicationRequest, LoginRequest, PropertyArea,
    RegisterRequest, UpdateProfileRequest,
};

/// Response models
pub use crate::model::responses::{
    AnalyticsData, AuthResponse, DashboardData, EligibilityPrediction, Loan, LoanStatus,
    MessageResponse, Recommendations, User,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
