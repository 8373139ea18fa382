//! Client layer: orchestrates signing, transport calls, and error mapping.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use crate::domain::{
    ApiKey, CityCode, DriverDetailsResponse, DriverId, DriverLocationResponse,
    OrderDetailsResponse, OrderId, PlaceOrderRequest, PlaceOrderResponse, QuotationRequest,
    QuotationResponse, Secret, ValidationError,
};
use crate::signature::{
    self, AUTHORIZATION_HEADER, MARKET_HEADER, Method, REQUEST_ID_HEADER,
};
use crate::transport;

mod api_error;

pub use api_error::ApiError;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpRequest {
    method: Method,
    url: String,
    headers: Vec<(&'static str, String)>,
    body: Option<Vec<u8>>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let method = match request.method {
                Method::Get => reqwest::Method::GET,
                Method::Post => reqwest::Method::POST,
                Method::Put => reqwest::Method::PUT,
            };
            let mut builder = self.client.request(method, &request.url);
            for (name, value) in &request.headers {
                builder = builder.header(*name, value.as_str());
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// API key/secret pair issued per market from the partner portal.
///
/// Credentials are validated on construction and immutable afterwards.
pub struct Credentials {
    api_key: ApiKey,
    secret: Secret,
}

impl Credentials {
    /// Create validated credentials; either part being blank is rejected
    /// before any network call.
    pub fn new(
        api_key: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            api_key: ApiKey::new(api_key)?,
            secret: Secret::new(secret)?,
        })
    }

    /// Borrow the API key.
    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`LalamoveClient`].
///
/// This error preserves:
/// - HTTP-level failures (DNS, TLS, timeouts),
/// - API-level failures (the server's closed error-code taxonomy),
/// - wire-format and validation failures.
pub enum LalamoveError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Business error reported by the server.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// A request body could not be encoded or a response body could not be
    /// decoded as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The client was constructed with an unusable base URL.
    #[error("configuration error: {0}")]
    Config(String),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`LalamoveClient`].
///
/// The base URL is market infrastructure (production vs sandbox) and has no
/// safe default, so it must be provided explicitly.
pub struct LalamoveClientBuilder {
    credentials: Credentials,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl LalamoveClientBuilder {
    /// Create a builder with no base URL, timeout, or user-agent set.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Set the API base URL, e.g. `https://rest.lalamove.com` or the
    /// sandbox host. Required.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
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

    /// Build a [`LalamoveClient`].
    ///
    /// Fails with [`LalamoveError::Config`] when the base URL is missing or
    /// not an absolute http(s) URL.
    pub fn build(self) -> Result<LalamoveClient, LalamoveError> {
        let base_url = self
            .base_url
            .ok_or_else(|| LalamoveError::Config("base URL missing".to_owned()))?;
        let parsed = Url::parse(&base_url)
            .map_err(|err| LalamoveError::Config(format!("invalid base URL: {err}")))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(LalamoveError::Config(format!(
                "invalid base URL scheme: {}",
                parsed.scheme()
            )));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder
            .build()
            .map_err(|err| LalamoveError::Transport(Box::new(err)))?;

        Ok(LalamoveClient {
            credentials: self.credentials,
            base_url: base_url.trim_end_matches('/').to_owned(),
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Lalamove v2 client.
///
/// Holds only immutable credentials, the base URL, and the HTTP handle, so
/// clones are cheap and concurrent calls need no locking. Every call issues
/// exactly one HTTP request, freshly signed (see [`crate::signature`]) and
/// carrying a unique `X-Request-ID` plus the market's `X-LLM-Country`
/// header. Retries are left to the caller.
pub struct LalamoveClient {
    credentials: Credentials,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for LalamoveClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LalamoveClient")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .field("http", &"<dyn HttpTransport>")
            .finish()
    }
}

impl LalamoveClient {
    /// Create a client for the given base URL.
    ///
    /// For more customization, use [`LalamoveClient::builder`].
    pub fn new(
        credentials: Credentials,
        base_url: impl Into<String>,
    ) -> Result<Self, LalamoveError> {
        Self::builder(credentials).base_url(base_url).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> LalamoveClientBuilder {
        LalamoveClientBuilder::new(credentials)
    }

    /// Request a priced estimate for a delivery. A quotation is required
    /// before placing an order.
    pub async fn quotation(
        &self,
        city: CityCode,
        request: &QuotationRequest,
    ) -> Result<QuotationResponse, LalamoveError> {
        let body = transport::encode_quotation_body(request).map_err(wire_error)?;
        let body = self
            .dispatch(Method::Post, "/v2/quotations", city, Some(body))
            .await?;
        transport::decode_quotation_response(&body).map_err(wire_error)
    }

    /// Place an order for a previously quoted delivery.
    pub async fn place_order(
        &self,
        city: CityCode,
        request: &PlaceOrderRequest,
    ) -> Result<PlaceOrderResponse, LalamoveError> {
        let body = transport::encode_place_order_body(request).map_err(wire_error)?;
        let body = self
            .dispatch(Method::Post, "/v2/orders", city, Some(body))
            .await?;
        transport::decode_place_order_response(&body).map_err(wire_error)
    }

    /// Fetch the current status, price, and driver of an order.
    pub async fn order_details(
        &self,
        city: CityCode,
        order_id: &OrderId,
    ) -> Result<OrderDetailsResponse, LalamoveError> {
        let path = format!("/v2/orders/{}", order_id.as_str());
        let body = self.dispatch(Method::Get, &path, city, None).await?;
        transport::decode_order_details_response(&body).map_err(wire_error)
    }

    /// Cancel an order under the cancellation policy.
    ///
    /// Attempts that do not comply with the policy are rejected with
    /// [`ApiError::CancellationForbidden`].
    pub async fn cancel_order(
        &self,
        city: CityCode,
        order_id: &OrderId,
    ) -> Result<(), LalamoveError> {
        let path = format!("/v2/orders/{}/cancel", order_id.as_str());
        self.dispatch(Method::Put, &path, city, None).await?;
        Ok(())
    }

    /// Fetch the matched driver's contact and vehicle details.
    pub async fn driver_details(
        &self,
        city: CityCode,
        order_id: &OrderId,
        driver_id: &DriverId,
    ) -> Result<DriverDetailsResponse, LalamoveError> {
        let path = format!(
            "/v2/orders/{}/drivers/{}",
            order_id.as_str(),
            driver_id.as_str()
        );
        let body = self.dispatch(Method::Get, &path, city, None).await?;
        transport::decode_driver_details_response(&body).map_err(wire_error)
    }

    /// Fetch the driver's latest position. Available from one hour before
    /// the scheduled pick-up until the order completes; outside that window
    /// the server responds 403.
    pub async fn driver_location(
        &self,
        city: CityCode,
        order_id: &OrderId,
        driver_id: &DriverId,
    ) -> Result<DriverLocationResponse, LalamoveError> {
        let path = format!(
            "/v2/orders/{}/drivers/{}/location",
            order_id.as_str(),
            driver_id.as_str()
        );
        let body = self.dispatch(Method::Get, &path, city, None).await?;
        transport::decode_driver_location_response(&body).map_err(wire_error)
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        city: CityCode,
        body: Option<Vec<u8>>,
    ) -> Result<String, LalamoveError> {
        let timestamp = signature::unix_timestamp_ms();
        let authorization = signature::authorization_header(
            self.credentials.api_key.as_str(),
            self.credentials.secret.as_str(),
            timestamp,
            method,
            path,
            body.as_deref().unwrap_or_default(),
        );
        let mut headers = vec![
            (AUTHORIZATION_HEADER, authorization),
            (REQUEST_ID_HEADER, uuid::Uuid::new_v4().to_string()),
            (MARKET_HEADER, city.llm_country().to_owned()),
        ];
        if body.is_some() {
            headers.push(("Content-Type", "application/json".to_owned()));
        }

        debug!(
            method = method.as_str(),
            path,
            market = city.llm_country(),
            "dispatching request"
        );

        let response = self
            .http
            .send(HttpRequest {
                method,
                url: format!("{}{}", self.base_url, path),
                headers,
                body,
            })
            .await
            .map_err(LalamoveError::Transport)?;

        if !(200..=299).contains(&response.status) {
            warn!(status = response.status, path, "API request failed");
            return Err(map_error_status(response.status, &response.body));
        }
        Ok(response.body)
    }
}

/// Map a non-2xx response to the error taxonomy.
///
/// 401 and 429 are mapped from the status alone; 402 and 409 carry the
/// business code in the payload; everything else is the generic unknown
/// error.
fn map_error_status(status: u16, body: &str) -> LalamoveError {
    match status {
        401 => ApiError::Unauthorized.into(),
        429 => ApiError::TooManyRequests.into(),
        402 | 409 => match transport::decode_error_code(body) {
            Ok(code) => ApiError::from_code(&code).into(),
            Err(err) => LalamoveError::Parse(Box::new(err)),
        },
        _ => ApiError::Unknown.into(),
    }
}

fn wire_error(err: transport::TransportError) -> LalamoveError {
    LalamoveError::Parse(Box::new(err))
}
