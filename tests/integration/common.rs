// Common utilities for integration tests

use loan_client::prelude::*;
use mockito::ServerGuard;

/// Configuration pointing at a mock server
pub fn config_for(server: &ServerGuard) -> Config {
    Config::with_base_url(&server.url()).with_timeout(5)
}

/// Request wrapper without a token
pub fn http_client(server: &ServerGuard) -> HttpClient {
    setup_logger();
    HttpClient::new(config_for(server)).expect("Failed to create HTTP client")
}

/// Request wrapper reading its token from `store`
pub fn http_client_with_store(server: &ServerGuard, store: &TokenStore) -> HttpClient {
    setup_logger();
    HttpClient::with_token_provider(config_for(server), Arc::new(store.clone()))
        .expect("Failed to create HTTP client")
}

/// Typed client reading its token from `store`
pub fn loan_client(server: &ServerGuard, store: &TokenStore) -> Client {
    Client::from_http_client(http_client_with_store(server, store))
}
