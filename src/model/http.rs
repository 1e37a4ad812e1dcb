
use crate::application::config::Config;
use crate::application::token::{NoToken, TokenProvider};
use crate::constants::{JSON_MEDIA_TYPE, USER_AGENT};
use crate::error::AppError;
use crate::model::endpoints::{Endpoint, EndpointRegistry, PathParams};
use crate::model::result::ApiResult;
use crate::utils::id::request_id;
use reqwest::Client as HttpInternalClient;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// HTTP methods accepted by the request wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// `GET`, the default
    #[default]
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
    /// `PATCH`
    Patch,
}

impl HttpMethod {
    /// Returns `true` if a request body may be sent with this method
    #[must_use]
    pub fn allows_body(self) -> bool {
        self != HttpMethod::Get
    }
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
            HttpMethod::Patch => Method::PATCH,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        };
        f.write_str(name)
    }
}

/// Per-call options for [`HttpClient::request`]
///
/// Defaults to a `GET` with no extra headers, no body and no path params.
#[derive(Debug, Clone)]
pub struct RequestOptions<B = ()> {
    /// HTTP method
    pub method: HttpMethod,
    /// Extra headers, overriding the defaults on name collision
    pub headers: Vec<(String, String)>,
    /// Body serialized as JSON for non-GET methods
    pub body: Option<B>,
    /// Values for `:name` placeholders of the endpoint path
    pub params: Option<PathParams>,
}

impl<B> Default for RequestOptions<B> {
    fn default() -> Self {
        Self {
            method: HttpMethod::Get,
            headers: Vec::new(),
            body: None,
            params: None,
        }
    }
}

impl RequestOptions<()> {
    /// Creates options for a bodyless call with `method`
    #[must_use]
    pub fn new(method: HttpMethod) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }
}

impl<B> RequestOptions<B> {
    /// Creates options carrying `body`
    pub fn with_body(method: HttpMethod, body: B) -> Self {
        Self {
            method,
            body: Some(body),
            ..Default::default()
        }
    }

    /// Set the method
    #[must_use]
    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the path params
    #[must_use]
    pub fn params(mut self, params: PathParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Replace the body, changing its type
    pub fn body<C>(self, body: C) -> RequestOptions<C> {
        RequestOptions {
            method: self.method,
            headers: self.headers,
            body: Some(body),
            params: self.params,
        }
    }
}

/// Generic request wrapper for the loan API
///
/// Resolves endpoint URLs, merges headers, attaches the bearer token and
/// turns every outcome into an [`ApiResult`]. Cheap to clone; clones share
/// the connection pool, configuration and token provider.
#[derive(Clone)]
pub struct HttpClient {
    http_client: HttpInternalClient,
    config: Arc<Config>,
    registry: EndpointRegistry,
    token_provider: Arc<dyn TokenProvider>,
}

impl HttpClient {
    /// Creates a client without a token provider
    pub fn new(config: Config) -> Result<Self, AppError> {
        Self::with_token_provider(config, Arc::new(NoToken))
    }

    /// Creates a client reading its bearer token from `token_provider`
    ///
    /// The configured timeout is enforced by the underlying transport on
    /// every request.
    pub fn with_token_provider(
        config: Config,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Result<Self, AppError> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        let registry = EndpointRegistry::from(&config);

        Ok(Self {
            http_client,
            config: Arc::new(config),
            registry,
            token_provider,
        })
    }

    /// Configuration the client was built with
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Endpoint registry used to resolve URLs
    #[must_use]
    pub fn registry(&self) -> &EndpointRegistry {
        &self.registry
    }

    /// Performs one call to `endpoint`
    ///
    /// Never returns an error: HTTP failures, transport failures and
    /// (de)serialization failures all become [`ApiResult::Failure`] and are
    /// logged.
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        options: RequestOptions<B>,
    ) -> ApiResult<T> {
        let id = request_id();
        match self.request_internal(&id, endpoint, &options).await {
            Ok(data) => ApiResult::success(data),
            Err(e) => {
                error!("[{}] API request failed for {}: {}", id, endpoint, e);
                ApiResult::failure(e.to_string())
            }
        }
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        params: Option<PathParams>,
    ) -> ApiResult<T> {
        let options = RequestOptions {
            params,
            ..RequestOptions::new(HttpMethod::Get)
        };
        self.request(endpoint, options).await
    }

    /// Makes a POST request
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        body: B,
    ) -> ApiResult<T> {
        self.request(endpoint, RequestOptions::with_body(HttpMethod::Post, body))
            .await
    }

    /// Makes a PUT request
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        body: B,
    ) -> ApiResult<T> {
        self.request(endpoint, RequestOptions::with_body(HttpMethod::Put, body))
            .await
    }

    async fn request_internal<B: Serialize, T: DeserializeOwned>(
        &self,
        id: &str,
        endpoint: Endpoint,
        options: &RequestOptions<B>,
    ) -> Result<T, AppError> {
        let url = self.registry.resolve(endpoint, options.params.as_ref())?;
        let token = self.token_provider.token().filter(|t| !t.is_empty());
        let headers = build_headers(&options.headers, token.as_deref())?;

        let body = match &options.body {
            Some(body) if options.method.allows_body() => Some(serde_json::to_string(body)?),
            Some(_) => {
                debug!("[{}] Ignoring body supplied to GET {}", id, url);
                None
            }
            None => None,
        };

        let response = make_http_request(
            &self.http_client,
            id,
            options.method,
            &url,
            headers,
            body,
            self.config.rest_api.timeout,
        )
        .await?;

        parse_response(response, self.config.rest_api.timeout).await
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.registry.base_url())
            .field("timeout", &self.config.rest_api.timeout)
            .finish()
    }
}

/// Builds the outgoing header set
///
/// Defaults (`Content-Type` and `Accept` set to `application/json`) come
/// first, caller headers override them by name, and `Authorization:
/// Bearer <token>` is set last when a token is present. Names compare
/// case-insensitively and the last write wins.
pub fn build_headers(
    extra: &[(String, String)],
    token: Option<&str>,
) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MEDIA_TYPE));
    headers.insert(ACCEPT, HeaderValue::from_static(JSON_MEDIA_TYPE));

    for (name, value) in extra {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        headers.insert(name, HeaderValue::from_str(value)?);
    }

    if let Some(token) = token {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}

/// Sends one request and checks its status
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `id` - Correlation id used in log lines
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Complete header set
/// * `body` - Serialized JSON body, if any
/// * `timeout_secs` - Timeout reported when the transport gives up
///
/// # Returns
///
/// * `Ok(Response)` - Response with a 2xx status, body not yet read
/// * `Err(AppError)` - Transport failure, timeout, or non-success status
pub async fn make_http_request(
    client: &HttpInternalClient,
    id: &str,
    method: HttpMethod,
    url: &str,
    headers: HeaderMap,
    body: Option<String>,
    timeout_secs: u64,
) -> Result<Response, AppError> {
    debug!("[{}] {} {}", id, method, url);

    let mut request = client.request(method.into(), url).headers(headers);
    if let Some(body) = body {
        request = request.body(body);
    }

    let response = request
        .send()
        .await
        .map_err(|e| transport_error(e, timeout_secs))?;

    let status = response.status();
    debug!("[{}] Response status: {}", id, status);

    if status.is_success() {
        Ok(response)
    } else {
        Err(AppError::HttpStatus(status))
    }
}

/// Maps a transport error, reporting the configured budget on timeout
fn transport_error(e: reqwest::Error, timeout_secs: u64) -> AppError {
    if e.is_timeout() {
        AppError::Timeout(timeout_secs)
    } else {
        AppError::Network(e)
    }
}

async fn parse_response<T: DeserializeOwned>(
    response: Response,
    timeout_secs: u64,
) -> Result<T, AppError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| transport_error(e, timeout_secs))?;
    Ok(serde_json::from_slice(&bytes)?)
}
