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

/// Interface for the loan eligibility API
///
/// Every method performs exactly one request and resolves to an
/// [`ApiResult`]; none of them returns an error or panics.
#[async_trait]
pub trait LoanService: Send + Sync {
    /// Logs in with e-mail and password
    async fn login(&self, credentials: &LoginRequest) -> ApiResult<AuthResponse>;

    /// Creates a new account
    async fn register(&self, account: &RegisterRequest) -> ApiResult<AuthResponse>;

    /// Ends the current session on the backend
    async fn logout(&self) -> ApiResult<MessageResponse>;

    /// Submits a loan application
    async fn apply_loan(&self, application: &LoanApplicationRequest) -> ApiResult<Loan>;

    /// Lists the loans of the current user
    async fn get_loans(&self) -> ApiResult<Vec<Loan>>;

    /// Gets one loan
    ///
    /// # Arguments
    /// * `id` - Loan identifier, substituted into `/loans/:id` as is
    async fn get_loan_details(&self, id: &str) -> ApiResult<Loan>;

    /// Gets the profile of the current user
    async fn get_user_profile(&self) -> ApiResult<User>;

    /// Updates the profile of the current user
    async fn update_user_profile(&self, update: &UpdateProfileRequest) -> ApiResult<User>;

    /// Gets the dashboard summary
    async fn get_dashboard_data(&self) -> ApiResult<DashboardData>;

    /// Gets analytics
    async fn get_analytics(&self) -> ApiResult<AnalyticsData>;

    /// Gets loan recommendations
    async fn get_recommendations(&self) -> ApiResult<Recommendations>;

    /// Predicts loan eligibility for an applicant profile
    async fn predict_eligibility(
        &self,
        applicant: &EligibilityRequest,
    ) -> ApiResult<EligibilityPrediction>;
}
