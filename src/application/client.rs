use crate::application::config::Config;
use crate::application::interfaces::loan::LoanService;
use crate::application::token::TokenProvider;
use crate::error::AppError;
use crate::model::endpoints::{Endpoint, PathParams};
use crate::model::http::{HttpClient, HttpMethod, RequestOptions};
use crate::model::requests::{
    EligibilityRequest, LoanApplicationRequest, LoginRequest, RegisterRequest,
    UpdateProfileRequest,
};
use crate::model::responses::{
    AnalyticsData, AuthResponse, DashboardData, EligibilityPrediction, Loan, MessageResponse,
    Recommendations, User,
};
use crate::model::result::ApiResult;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Typed client for the loan eligibility API
#[derive(Debug, Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client that sends no bearer token
    pub fn new(config: Config) -> Result<Self, AppError> {
        Ok(Self::from_http_client(HttpClient::new(config)?))
    }

    /// Creates a client reading its bearer token from `token_provider`
    pub fn with_token_provider(
        config: Config,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Result<Self, AppError> {
        let http_client = HttpClient::with_token_provider(config, token_provider)?;
        Ok(Self::from_http_client(http_client))
    }

    /// Wraps an existing request wrapper
    pub fn from_http_client(http_client: HttpClient) -> Self {
        Self {
            http_client: Arc::new(http_client),
        }
    }

    /// Underlying request wrapper, for calls not covered by the helpers
    #[must_use]
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }
}

#[async_trait]
impl LoanService for Client {
    async fn login(&self, credentials: &LoginRequest) -> ApiResult<AuthResponse> {
        info!("Logging in as {}", credentials.email);
        self.http_client.post(Endpoint::Login, credentials).await
    }

    async fn register(&self, account: &RegisterRequest) -> ApiResult<AuthResponse> {
        info!("Registering account for {}", account.email);
        self.http_client.post(Endpoint::Register, account).await
    }

    async fn logout(&self) -> ApiResult<MessageResponse> {
        info!("Logging out");
        self.http_client
            .request(Endpoint::Logout, RequestOptions::new(HttpMethod::Post))
            .await
    }

    async fn apply_loan(&self, application: &LoanApplicationRequest) -> ApiResult<Loan> {
        info!(
            "Submitting loan application for {}",
            application.applicant.loan_amount
        );
        self.http_client
            .post(Endpoint::ApplyLoan, application)
            .await
    }

    async fn get_loans(&self) -> ApiResult<Vec<Loan>> {
        let result: ApiResult<Vec<Loan>> = self.http_client.get(Endpoint::GetLoans, None).await;
        if let Some(loans) = result.data() {
            debug!("Loans obtained: {} loans", loans.len());
        }
        result
    }

    async fn get_loan_details(&self, id: &str) -> ApiResult<Loan> {
        debug!("Getting loan details: {}", id);
        let params = PathParams::new().with("id", id);
        self.http_client
            .get(Endpoint::GetLoanDetails, Some(params))
            .await
    }

    async fn get_user_profile(&self) -> ApiResult<User> {
        self.http_client.get(Endpoint::GetUserProfile, None).await
    }

    async fn update_user_profile(&self, update: &UpdateProfileRequest) -> ApiResult<User> {
        info!("Updating user profile");
        self.http_client
            .put(Endpoint::UpdateUserProfile, update)
            .await
    }

    async fn get_dashboard_data(&self) -> ApiResult<DashboardData> {
        self.http_client.get(Endpoint::GetDashboardData, None).await
    }

    async fn get_analytics(&self) -> ApiResult<AnalyticsData> {
        self.http_client.get(Endpoint::GetAnalytics, None).await
    }

    async fn get_recommendations(&self) -> ApiResult<Recommendations> {
        self.http_client
            .get(Endpoint::GetRecommendations, None)
            .await
    }

    async fn predict_eligibility(
        &self,
        applicant: &EligibilityRequest,
    ) -> ApiResult<EligibilityPrediction> {
        info!(
            "Predicting eligibility for {} over {} months",
            applicant.loan_amount, applicant.loan_amount_term
        );
        let result: ApiResult<EligibilityPrediction> = self
            .http_client
            .post(Endpoint::PredictEligibility, applicant)
            .await;
        if let Some(prediction) = result.data() {
            debug!("Eligibility prediction: {}", prediction.eligible);
        }
        result
    }
}
