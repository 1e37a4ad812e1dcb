use loan_client::application::client::Client;
use loan_client::application::config::Config;
use loan_client::application::interfaces::loan::LoanService;
use loan_client::application::token::StaticToken;
use loan_client::model::endpoints::Endpoint;
use loan_client::model::http::HttpClient;
use std::sync::Arc;
use tokio_test::block_on;

// Nothing listens on port 1, so every call fails at the transport layer
const UNREACHABLE: &str = "http://127.0.0.1:1";

#[test]
fn client_exposes_its_configuration() {
    let config = Config::with_base_url("https://api.example.com").with_timeout(7);
    let client = Client::new(config.clone()).unwrap();

    assert_eq!(client.http_client().config(), &config);
    assert_eq!(client.http_client().registry().base_url(), "https://api.example.com");
    assert_eq!(
        client.http_client().registry().url(Endpoint::GetLoans, None),
        "https://api.example.com/loans"
    );
}

#[test]
fn client_debug_does_not_leak_token() {
    let config = Config::with_base_url("https://api.example.com");
    let client = Client::with_token_provider(config, Arc::new(StaticToken::new("s3cr3t"))).unwrap();
    let debug = format!("{:?}", client);
    assert!(debug.contains("https://api.example.com"));
    assert!(!debug.contains("s3cr3t"));
}

#[test]
fn helpers_resolve_to_failure_when_backend_is_unreachable() {
    let client = Client::new(Config::with_base_url(UNREACHABLE).with_timeout(5)).unwrap();
    let service: &dyn LoanService = &client;

    let result = block_on(service.get_loans());
    assert!(result.is_failure());
    assert!(!result.error().unwrap().is_empty());

    let result = block_on(service.logout());
    assert!(result.is_failure());
}

#[test]
fn http_client_clones_share_configuration() {
    let http = HttpClient::new(Config::with_base_url(UNREACHABLE)).unwrap();
    let clone = http.clone();
    assert_eq!(clone.config(), http.config());
    let client = Client::from_http_client(clone);
    assert_eq!(client.http_client().registry().base_url(), UNREACHABLE);
}
