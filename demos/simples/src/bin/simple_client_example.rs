use loan_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::new();
    info!("Using backend at {}", config.base_url());

    let store = TokenStore::new();
    let client = Client::with_token_provider(config, Arc::new(store.clone()))?;

    let email = std::env::var("LOAN_EMAIL").unwrap_or_else(|_| "demo@example.com".to_string());
    let password = std::env::var("LOAN_PASSWORD").unwrap_or_else(|_| "demo".to_string());

    match client.login(&LoginRequest::new(email, password)).await {
        ApiResult::Success { data } => {
            if let Some(token) = data.token {
                store.set_token(token);
                info!("Logged in");
            }
        }
        ApiResult::Failure { error } => warn!("Login failed: {}", error),
    }

    let applicant = ApplicantProfile::new(150_000.0, 360)
        .with_income(5_000.0, 1_500.0)
        .with_credit_history(true)
        .with_household(true, 1)
        .with_employment(true, false)
        .with_property_area(PropertyArea::Semiurban);

    match client.predict_eligibility(&applicant).await {
        ApiResult::Success { data } => info!("Prediction: {}", data),
        ApiResult::Failure { error } => warn!("Prediction failed: {}", error),
    }

    let dashboard = client.get_dashboard_data().await;
    info!(
        "Dashboard envelope: {}",
        serde_json::to_string_pretty(&dashboard)?
    );

    Ok(())
}
