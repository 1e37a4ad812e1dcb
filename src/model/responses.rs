use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Authenticated user as returned by the backend
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User identifier
    #[serde(default)]
    pub id: Option<Value>,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Account e-mail
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Postal address
    #[serde(default)]
    pub address: Option<String>,
    /// Account creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Response of `POST /auth/login` and `POST /auth/register`
#[derive(Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AuthResponse {
    /// Bearer token to store for later calls
    #[serde(default, alias = "access_token", alias = "accessToken")]
    pub token: Option<String>,
    /// Authenticated user
    #[serde(default)]
    pub user: Option<User>,
    /// Informational message
    #[serde(default)]
    pub message: Option<String>,
}

impl std::fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthResponse")
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("user", &self.user)
            .field("message", &self.message)
            .finish()
    }
}

/// Response of `POST /auth/logout`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MessageResponse {
    /// Informational message
    #[serde(default)]
    pub message: Option<String>,
}

/// Lifecycle of a loan application
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    /// Submitted, not reviewed yet
    #[default]
    Pending,
    /// Under review
    Processing,
    /// Approved
    Approved,
    /// Rejected
    Rejected,
    /// Any status this client does not know about
    #[serde(other)]
    Unknown,
}

/// A loan application
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    /// Loan identifier, numeric or textual depending on the backend
    #[serde(default)]
    pub id: Option<Value>,
    /// Requested amount
    #[serde(default)]
    pub loan_amount: Option<f64>,
    /// Term in months
    #[serde(default)]
    pub loan_amount_term: Option<u32>,
    /// Declared purpose
    #[serde(default)]
    pub purpose: Option<String>,
    /// Current status
    #[serde(default)]
    pub status: LoanStatus,
    /// Submission time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Outcome of `POST /predict/eligibility`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityPrediction {
    /// Whether the applicant is predicted eligible
    #[serde(default, alias = "is_eligible")]
    pub eligible: bool,
    /// Model confidence in `[0, 1]`
    #[serde(default)]
    pub probability: Option<f64>,
    /// Human readable explanation
    #[serde(default)]
    pub message: Option<String>,
}

/// Free-form payload of `GET /dashboard`
pub type DashboardData = Value;
/// Free-form payload of `GET /analytics`
pub type AnalyticsData = Value;
/// Free-form payload of `GET /recommendations`
pub type Recommendations = Value;
