//! Endpoint registry and URL construction
//!
//! Every backend operation is identified by an [`Endpoint`] key mapped to a
//! path template. Templates may contain `:name` placeholders that
//! [`build_url`] replaces with caller supplied [`PathParams`].

use crate::application::config::Config;
use crate::error::AppError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r":[A-Za-z_][A-Za-z0-9_]*").expect("placeholder pattern is valid")
});

/// Logical backend operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Endpoint {
    /// `POST /auth/login`
    Login,
    /// `POST /auth/register`
    Register,
    /// `POST /auth/logout`
    Logout,
    /// `POST /loans/apply`
    ApplyLoan,
    /// `GET /loans`
    GetLoans,
    /// `GET /loans/:id`
    GetLoanDetails,
    /// `GET /user/profile`
    GetUserProfile,
    /// `PUT /user/profile`
    UpdateUserProfile,
    /// `GET /dashboard`
    GetDashboardData,
    /// `GET /analytics`
    GetAnalytics,
    /// `GET /recommendations`
    GetRecommendations,
    /// `POST /predict/eligibility`
    PredictEligibility,
}

impl Endpoint {
    /// Every registered endpoint
    pub const ALL: [Endpoint; 12] = [
        Endpoint::Login,
        Endpoint::Register,
        Endpoint::Logout,
        Endpoint::ApplyLoan,
        Endpoint::GetLoans,
        Endpoint::GetLoanDetails,
        Endpoint::GetUserProfile,
        Endpoint::UpdateUserProfile,
        Endpoint::GetDashboardData,
        Endpoint::GetAnalytics,
        Endpoint::GetRecommendations,
        Endpoint::PredictEligibility,
    ];

    /// Path template of the endpoint, relative to the base origin
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::Login => "/auth/login",
            Endpoint::Register => "/auth/register",
            Endpoint::Logout => "/auth/logout",
            Endpoint::ApplyLoan => "/loans/apply",
            Endpoint::GetLoans => "/loans",
            Endpoint::GetLoanDetails => "/loans/:id",
            Endpoint::GetUserProfile | Endpoint::UpdateUserProfile => "/user/profile",
            Endpoint::GetDashboardData => "/dashboard",
            Endpoint::GetAnalytics => "/analytics",
            Endpoint::GetRecommendations => "/recommendations",
            Endpoint::PredictEligibility => "/predict/eligibility",
        }
    }

    /// Registry key of the endpoint, e.g. `GET_LOAN_DETAILS`
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Endpoint::Login => "LOGIN",
            Endpoint::Register => "REGISTER",
            Endpoint::Logout => "LOGOUT",
            Endpoint::ApplyLoan => "APPLY_LOAN",
            Endpoint::GetLoans => "GET_LOANS",
            Endpoint::GetLoanDetails => "GET_LOAN_DETAILS",
            Endpoint::GetUserProfile => "GET_USER_PROFILE",
            Endpoint::UpdateUserProfile => "UPDATE_USER_PROFILE",
            Endpoint::GetDashboardData => "GET_DASHBOARD_DATA",
            Endpoint::GetAnalytics => "GET_ANALYTICS",
            Endpoint::GetRecommendations => "GET_RECOMMENDATIONS",
            Endpoint::PredictEligibility => "PREDICT_ELIGIBILITY",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Endpoint {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endpoint::ALL
            .into_iter()
            .find(|endpoint| endpoint.key() == s)
            .ok_or_else(|| AppError::UnknownEndpoint(s.to_string()))
    }
}

/// Ordered mapping of placeholder name to substitution value
///
/// Values are stored in their string form; numbers and strings are both
/// accepted through [`PathParams::with`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    entries: Vec<(String, String)>,
}

impl PathParams {
    /// Creates an empty set of parameters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, replacing any previous value for the same name
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts a parameter, replacing any previous value for the same name
    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) {
        let name = name.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Value registered for `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns `true` if no parameter is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for PathParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = PathParams::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

/// Substitutes `:name` placeholders of `template` and prefixes `base_url`
///
/// Every literal occurrence of `:key` is replaced for every entry of
/// `params`, in insertion order. Placeholders without an entry are kept as
/// they are and values are inserted without any escaping.
///
/// # Examples
///
/// ```
/// use loan_client::model::endpoints::{build_url, PathParams};
///
/// let params = PathParams::new().with("id", 42);
/// let url = build_url("https://api.example.com", "/loans/:id", Some(&params));
/// assert_eq!(url, "https://api.example.com/loans/42");
/// ```
#[must_use]
pub fn build_url(base_url: &str, template: &str, params: Option<&PathParams>) -> String {
    let mut path = template.to_string();
    if let Some(params) = params {
        for (name, value) in params.iter() {
            path = path.replace(&format!(":{name}"), value);
        }
    }
    format!("{base_url}{path}")
}

/// Placeholders left in `path`, e.g. `[":id"]` for `/loans/:id`
#[must_use]
pub fn unresolved_placeholders(path: &str) -> Vec<&str> {
    PLACEHOLDER.find_iter(path).map(|m| m.as_str()).collect()
}

/// Resolves endpoints against the configured base origin
#[derive(Debug, Clone)]
pub struct EndpointRegistry {
    base_url: String,
    strict: bool,
}

impl EndpointRegistry {
    /// Creates a registry rooted at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            strict: false,
        }
    }

    /// Enables rejection of unresolved placeholders
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Base origin used for every endpoint
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the URL of `endpoint` without any validation
    #[must_use]
    pub fn url(&self, endpoint: Endpoint, params: Option<&PathParams>) -> String {
        build_url(&self.base_url, endpoint.path(), params)
    }

    /// Builds the URL of `endpoint`
    ///
    /// In strict mode a template placeholder with no matching entry in
    /// `params` is rejected with [`AppError::InvalidInput`]. Values are never
    /// inspected. Otherwise this never fails.
    pub fn resolve(
        &self,
        endpoint: Endpoint,
        params: Option<&PathParams>,
    ) -> Result<String, AppError> {
        if self.strict {
            let missing: Vec<&str> = unresolved_placeholders(endpoint.path())
                .into_iter()
                .filter(|placeholder| {
                    params.is_none_or(|params| params.get(&placeholder[1..]).is_none())
                })
                .collect();
            if !missing.is_empty() {
                return Err(AppError::InvalidInput(format!(
                    "unresolved path placeholder(s) {} for {}",
                    missing.join(", "),
                    endpoint
                )));
            }
        }
        Ok(self.url(endpoint, params))
    }
}

impl From<&Config> for EndpointRegistry {
    fn from(config: &Config) -> Self {
        EndpointRegistry::new(config.base_url()).strict(config.strict_placeholders)
    }
}
