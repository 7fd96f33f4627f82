//! Client layer: orchestrates transport calls and maps transport ↔ domain.

mod rate_limit;

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

pub use rate_limit::{BoxFuture, DEFAULT_REQUESTS_PER_SECOND, RateLimiter, TokenBucket};

use crate::domain::{
    AddOrder, ApiKey, Host, OrderId, OrderStatus, Service, UserBalance, ValidationError,
};
use crate::transport::TransportError;

/// Host used when [`SmmClientBuilder::host`] is not called.
pub const DEFAULT_HOST: &str = Host::DEFAULT;

/// Every panel action lives at the API root.
const API_ROOT: &[&str] = &[];

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: Vec<u8>,
}

trait HttpTransport: Send + Sync {
    fn post<'a>(
        &'a self,
        url: &'a str,
        headers: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post<'a>(
        &'a self,
        url: &'a str,
        headers: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut request = self.client.post(url);
            for (name, value) in headers {
                request = request.header(name, value);
            }
            let response = request.send().await?;
            let status = response.status();
            let body = if status.is_success() {
                response.bytes().await?.to_vec()
            } else {
                // The status alone decides the outcome; an unreadable body is dropped.
                response
                    .bytes()
                    .await
                    .map(|bytes| bytes.to_vec())
                    .unwrap_or_default()
            };
            Ok(HttpResponse {
                status: status.as_u16(),
                body,
            })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmmClient`].
pub enum SmmError {
    /// Invalid client configuration (bad host, empty key, bad user agent, etc).
    #[error("configuration error: {0}")]
    Config(#[from] ValidationError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server. The body is kept raw.
    #[error("request failed with status code {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// The panel answered `{"error": "..."}`.
    #[error("API error: {message}")]
    Api { message: String },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),
}

impl From<TransportError> for SmmError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Provider { message } => Self::Api { message },
            TransportError::Json(err) => Self::Parse(Box::new(err)),
        }
    }
}

fn decoded<T>(result: Result<T, TransportError>) -> Result<T, SmmError> {
    result.map_err(|err| {
        if let TransportError::Provider { message } = &err {
            tracing::warn!(%message, "panel returned an error payload");
        }
        err.into()
    })
}

#[derive(Clone)]
/// Builder for [`SmmClient`].
///
/// Options are checked in [`SmmClientBuilder::build`]; any invalid option fails
/// the whole build.
pub struct SmmClientBuilder {
    api_key: ApiKey,
    host: String,
    rate_limiter: Option<Arc<dyn RateLimiter>>,
    http_client: Option<reqwest::Client>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SmmClientBuilder {
    /// Create a builder with the default host, limiter and HTTP client.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            host: DEFAULT_HOST.to_owned(),
            rate_limiter: None,
            http_client: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the upstream host, e.g. `panel.example.com/api/v2`.
    ///
    /// Requests go to `https://<host>/`.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Replace the default limiter ([`DEFAULT_REQUESTS_PER_SECOND`] requests per second).
    pub fn rate_limiter(mut self, rate_limiter: Arc<dyn RateLimiter>) -> Self {
        self.rate_limiter = Some(rate_limiter);
        self
    }

    /// Send requests through a caller-provided `reqwest::Client`.
    ///
    /// Cannot be combined with [`timeout`](Self::timeout) or
    /// [`user_agent`](Self::user_agent); configure those on the client itself.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SmmClient`].
    pub fn build(self) -> Result<SmmClient, SmmError> {
        let host = Host::new(self.host)?;

        let client = match self.http_client {
            Some(client) => {
                if self.timeout.is_some() {
                    return Err(conflict("timeout").into());
                }
                if self.user_agent.is_some() {
                    return Err(conflict("user_agent").into());
                }
                client
            }
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    let user_agent = reqwest::header::HeaderValue::from_str(&user_agent)
                        .map_err(|err| ValidationError::InvalidUserAgent {
                            reason: err.to_string(),
                        })?;
                    builder = builder.user_agent(user_agent);
                }
                builder
                    .build()
                    .map_err(|err| ValidationError::HttpClient {
                        reason: err.to_string(),
                    })?
            }
        };

        let rate_limiter = self
            .rate_limiter
            .unwrap_or_else(|| Arc::new(TokenBucket::default()));

        Ok(SmmClient {
            api_key: self.api_key,
            host,
            rate_limiter,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn conflict(option: &'static str) -> ValidationError {
    ValidationError::ConflictingOptions {
        option,
        conflicts_with: "http_client",
    }
}

#[derive(Clone)]
/// High-level SMM panel client.
///
/// Every call is a `POST https://<host>/?key=...&action=...` with an empty body
/// and a bearer `Authorization` header, gated by the client's rate limiter.
/// Query values are embedded verbatim, without percent-encoding.
pub struct SmmClient {
    api_key: ApiKey,
    host: Host,
    rate_limiter: Arc<dyn RateLimiter>,
    http: Arc<dyn HttpTransport>,
}

impl SmmClient {
    /// Create a client for [`DEFAULT_HOST`] with the default limiter.
    ///
    /// For more customization, use [`SmmClient::builder`].
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            host: Host::default(),
            rate_limiter: Arc::new(TokenBucket::default()),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> SmmClientBuilder {
        SmmClientBuilder::new(api_key)
    }

    /// Host this client sends requests to.
    pub fn host(&self) -> &Host {
        &self.host
    }

    /// Current account balance (`action=balance`).
    #[tracing::instrument(level = "debug", skip_all, fields(action = "balance"))]
    pub async fn user_balance(&self) -> Result<UserBalance, SmmError> {
        let body = self
            .post(crate::transport::encode_balance_params())
            .await?;
        decoded(crate::transport::decode_balance_json_response(&body))
    }

    /// Service catalog in the order the panel returns it (`action=services`).
    #[tracing::instrument(level = "debug", skip_all, fields(action = "services"))]
    pub async fn services(&self) -> Result<Vec<Service>, SmmError> {
        let body = self
            .post(crate::transport::encode_services_params())
            .await?;
        decoded(crate::transport::decode_services_json_response(&body))
    }

    /// Place an order (`action=add`) and return its id.
    ///
    /// `runs` and `interval` are sent only when set on the request.
    #[tracing::instrument(level = "debug", skip_all, fields(action = "add", service = request.service().as_str()))]
    pub async fn add_order(&self, request: AddOrder) -> Result<OrderId, SmmError> {
        let body = self
            .post(crate::transport::encode_add_order_params(&request))
            .await?;
        decoded(crate::transport::decode_add_order_json_response(&body))
    }

    /// Status of one order (`action=status&order=<id>`).
    #[tracing::instrument(level = "debug", skip_all, fields(action = "status", order = order.as_str()))]
    pub async fn order_status(&self, order: &OrderId) -> Result<OrderStatus, SmmError> {
        let body = self
            .post(crate::transport::encode_order_status_params(order))
            .await?;
        decoded(crate::transport::decode_order_status_json_response(&body))
    }

    /// Status of several orders (`action=status&orders=<id>,<id>,...`).
    ///
    /// The map is keyed exactly as the panel answers; ids the panel could not
    /// resolve usually come back with [`OrderStatus::error`] set.
    #[tracing::instrument(level = "debug", skip_all, fields(action = "status", orders = orders.len()))]
    pub async fn multiple_orders_status(
        &self,
        orders: &[OrderId],
    ) -> Result<BTreeMap<OrderId, OrderStatus>, SmmError> {
        let body = self
            .post(crate::transport::encode_multiple_orders_status_params(orders))
            .await?;
        decoded(crate::transport::decode_multiple_orders_status_json_response(&body))
    }

    async fn post(&self, params: Vec<(String, String)>) -> Result<Vec<u8>, SmmError> {
        let mut query = Vec::with_capacity(params.len() + 1);
        query.push((ApiKey::FIELD.to_owned(), self.api_key.as_str().to_owned()));
        query.extend(params);

        let url =
            crate::transport::build_url_with_parameters(self.host.as_str(), API_ROOT, &query);
        self.execute(&url).await
    }

    /// Authorize, wait for the limiter, send. Returns the raw body of a 2xx response.
    async fn execute(&self, url: &str) -> Result<Vec<u8>, SmmError> {
        let headers = vec![(
            "Authorization".to_owned(),
            format!("Bearer {}", self.api_key.as_str()),
        )];

        self.rate_limiter.acquire().await;

        tracing::debug!(host = self.host.as_str(), "sending request");
        let response = self
            .http
            .post(url, headers)
            .await
            .map_err(SmmError::Transport)?;
        tracing::debug!(status = response.status, "received response");

        if !(200..=299).contains(&response.status) {
            tracing::warn!(status = response.status, "request failed");
            let body = String::from_utf8_lossy(&response.body);
            let body = if body.trim().is_empty() {
                None
            } else {
                Some(body.into_owned())
            };
            return Err(SmmError::HttpStatus {
                status: response.status,
                body,
            });
        }

        Ok(response.body)
    }
}
