use crate::common;
use loan_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::{Value, json};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::time::Duration;

#[tokio::test]
async fn success_returns_parsed_body_as_data() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/dashboard")
        .match_header("accept", "application/json")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"totalLoans":3,"approved":2}"#)
        .expect(1)
        .create_async()
        .await;

    let client = common::http_client(&server);
    let result: ApiResult<Value> = client.get(Endpoint::GetDashboardData, None).await;

    assert_eq!(
        result,
        ApiResult::Success {
            data: json!({"totalLoans": 3, "approved": 2})
        }
    );
    assert_eq!(result.error(), None);
    mock.assert_async().await;
}

#[tokio::test]
async fn http_error_status_becomes_failure_with_code() {
    let mut server = Server::new_async().await;
    for status in [400_usize, 401, 404, 500, 503] {
        let mock = server
            .mock("GET", "/analytics")
            .with_status(status)
            .with_body(r#"{"detail":"ignored"}"#)
            .expect(1)
            .create_async()
            .await;

        let client = common::http_client(&server);
        let result: ApiResult<Value> = client.get(Endpoint::GetAnalytics, None).await;

        let error = result.error().expect("should be a failure");
        assert!(error.contains(&status.to_string()), "{error}");
        assert!(!error.contains("ignored"));
        assert_eq!(result.data(), None);
        mock.assert_async().await;
        mock.remove_async().await;
    }
}

#[tokio::test]
async fn invalid_json_body_becomes_failure_with_parse_message() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/recommendations")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let client = common::http_client(&server);
    let result: ApiResult<Value> = client.get(Endpoint::GetRecommendations, None).await;

    let error = result.error().expect("should be a failure");
    assert!(!error.is_empty());
    assert_ne!(error, GENERIC_ERROR_MESSAGE);
}

#[tokio::test]
async fn empty_success_body_is_a_parse_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/auth/logout")
        .with_status(204)
        .create_async()
        .await;

    let client = common::http_client(&server);
    let result: ApiResult<Value> = client
        .request(Endpoint::Logout, RequestOptions::new(HttpMethod::Post))
        .await;
    assert!(result.is_failure());
}

#[tokio::test]
async fn unreachable_backend_becomes_failure() {
    let client = HttpClient::new(Config::with_base_url("http://127.0.0.1:1")).unwrap();
    let result: ApiResult<Value> = client.get(Endpoint::GetLoans, None).await;

    let error = result.error().expect("should be a failure");
    assert!(!error.is_empty());
}

#[tokio::test]
async fn slow_backend_hits_timeout() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/loans")
        .with_status(200)
        .with_body_from_request(|_| {
            std::thread::sleep(Duration::from_secs(2));
            b"[]".to_vec()
        })
        .create_async()
        .await;

    let client = HttpClient::new(Config::with_base_url(&server.url()).with_timeout(1)).unwrap();
    let result: ApiResult<Value> = client.get(Endpoint::GetLoans, None).await;

    let error = result.error().expect("should be a failure");
    assert!(error.contains("timed out"), "{error}");
}

#[tokio::test]
async fn stalled_body_hits_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\n[");
            let _ = stream.flush();
            std::thread::sleep(Duration::from_secs(3));
        }
    });

    let config = Config::with_base_url(&format!("http://{addr}")).with_timeout(1);
    let client = HttpClient::new(config).unwrap();
    let result: ApiResult<Value> = client.get(Endpoint::GetLoans, None).await;

    assert_eq!(result.error(), Some("request timed out after 1s"));
}

#[tokio::test]
async fn caller_headers_override_defaults() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/loans/apply")
        .match_header("content-type", "application/vnd.loan+json")
        .match_header("accept", "application/json")
        .match_header("x-client", "tests")
        .with_status(201)
        .with_body(r#"{"id":1}"#)
        .create_async()
        .await;

    let client = common::http_client(&server);
    let options = RequestOptions::with_body(HttpMethod::Post, json!({"purpose": "car"}))
        .header("Content-Type", "application/vnd.loan+json")
        .header("X-Client", "tests");
    let result: ApiResult<Value> = client.request(Endpoint::ApplyLoan, options).await;

    assert!(result.is_success(), "{:?}", result);
    mock.assert_async().await;
}

#[tokio::test]
async fn token_present_adds_bearer_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/user/profile")
        .match_header("authorization", "Bearer tok-1")
        .with_status(200)
        .with_body(r#"{"email":"a@b.com"}"#)
        .create_async()
        .await;

    let store = TokenStore::new();
    store.set_token("tok-1");
    let client = common::http_client_with_store(&server, &store);

    let options = RequestOptions::new(HttpMethod::Get).header("Authorization", "Basic xyz");
    let result: ApiResult<Value> = client.request(Endpoint::GetUserProfile, options).await;

    assert!(result.is_success(), "{:?}", result);
    mock.assert_async().await;
}

#[tokio::test]
async fn token_is_read_on_every_call() {
    let mut server = Server::new_async().await;
    let anonymous = server
        .mock("GET", "/loans")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;

    let store = TokenStore::new();
    let client = common::http_client_with_store(&server, &store);

    let result: ApiResult<Value> = client.get(Endpoint::GetLoans, None).await;
    assert!(result.is_success(), "{:?}", result);
    anonymous.assert_async().await;
    anonymous.remove_async().await;

    let authenticated = server
        .mock("GET", "/loans")
        .match_header("authorization", "Bearer later")
        .with_status(200)
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;

    store.set_token("later");
    let result: ApiResult<Value> = client.get(Endpoint::GetLoans, None).await;
    assert!(result.is_success(), "{:?}", result);
    authenticated.assert_async().await;
}

#[tokio::test]
async fn empty_token_is_treated_as_absent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/loans")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let store = TokenStore::new();
    store.set_token("");
    let client = common::http_client_with_store(&server, &store);
    let result: ApiResult<Value> = client.get(Endpoint::GetLoans, None).await;

    assert!(result.is_success(), "{:?}", result);
    mock.assert_async().await;
}

#[tokio::test]
async fn get_never_sends_a_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/loans")
        .match_body(Matcher::Exact(String::new()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = common::http_client(&server);
    let options = RequestOptions::with_body(HttpMethod::Get, json!({"ignored": true}));
    let result: ApiResult<Value> = client.request(Endpoint::GetLoans, options).await;

    assert!(result.is_success(), "{:?}", result);
    mock.assert_async().await;
}

#[tokio::test]
async fn non_get_methods_send_json_body() {
    let mut server = Server::new_async().await;
    let client = common::http_client(&server);

    for (method, name) in [
        (HttpMethod::Post, "POST"),
        (HttpMethod::Put, "PUT"),
        (HttpMethod::Patch, "PATCH"),
        (HttpMethod::Delete, "DELETE"),
    ] {
        let mock = server
            .mock(name, "/user/profile")
            .match_body(Matcher::Json(json!({"name": "Ada"})))
            .with_status(200)
            .with_body("{}")
            .expect(1)
            .create_async()
            .await;

        let options = RequestOptions::with_body(method, json!({"name": "Ada"}));
        let result: ApiResult<Value> = client.request(Endpoint::UpdateUserProfile, options).await;

        assert!(result.is_success(), "{name}: {:?}", result);
        mock.assert_async().await;
        mock.remove_async().await;
    }
}

#[tokio::test]
async fn unresolved_placeholder_is_sent_verbatim() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/loans/:id")
        .with_status(200)
        .with_body(r#"{"id":null}"#)
        .create_async()
        .await;

    let client = common::http_client(&server);
    let result: ApiResult<Value> = client.get(Endpoint::GetLoanDetails, None).await;

    assert!(result.is_success(), "{:?}", result);
    mock.assert_async().await;
}

#[tokio::test]
async fn strict_mode_fails_before_any_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let config = common::config_for(&server).with_strict_placeholders(true);
    let client = HttpClient::new(config).unwrap();
    let result: ApiResult<Value> = client.get(Endpoint::GetLoanDetails, None).await;

    let error = result.error().expect("should be a failure");
    assert!(error.contains(":id"), "{error}");
    mock.assert_async().await;
}

#[tokio::test]
async fn path_params_are_substituted() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/loans/42")
        .with_status(200)
        .with_body(r#"{"deleted":true}"#)
        .create_async()
        .await;

    let client = common::http_client(&server);
    let options =
        RequestOptions::new(HttpMethod::Delete).params(PathParams::new().with("id", 42));
    let result: ApiResult<Value> = client.request(Endpoint::GetLoanDetails, options).await;

    assert_eq!(result.into_data(), Some(json!({"deleted": true})));
    mock.assert_async().await;
}

#[tokio::test]
async fn concurrent_calls_are_independent() {
    let mut server = Server::new_async().await;
    let ok = server
        .mock("GET", "/dashboard")
        .with_status(200)
        .with_body(r#"{"ok":true}"#)
        .expect(2)
        .create_async()
        .await;
    let failing = server
        .mock("GET", "/analytics")
        .with_status(502)
        .create_async()
        .await;

    let client = common::http_client(&server);
    let (a, b, c) = tokio::join!(
        client.get::<Value>(Endpoint::GetDashboardData, None),
        client.get::<Value>(Endpoint::GetAnalytics, None),
        client.get::<Value>(Endpoint::GetDashboardData, None),
    );

    assert!(a.is_success());
    assert!(b.error().unwrap().contains("502"));
    assert_eq!(a, c);
    ok.assert_async().await;
    failing.assert_async().await;
}
