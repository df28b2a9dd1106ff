//! Recurly HTTP client implementation.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

use recurly_core::to_xml;

use crate::config::Config;
use crate::error::Error;
use crate::request::Params;
use crate::response::Response;
use crate::services::{Accounts, Coupons, Invoices, Subscriptions, Transactions};

const XML_MEDIA_TYPE: &str = "application/xml";
const XML_CONTENT_TYPE: &str = "application/xml; charset=utf-8";

/// Body argument for requests that carry none.
pub const NO_BODY: Option<&()> = None;

/// Recurly API client.
///
/// Holds the connection pool and credentials; both are read-only after
/// construction, so one client can serve many concurrent calls.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a client for a site.
    ///
    /// # Arguments
    ///
    /// * `subdomain` - Site subdomain (e.g., `"your-subdomain"`)
    /// * `api_key` - Private API key
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty or the transport cannot be built.
    pub fn new(subdomain: &str, api_key: impl Into<String>) -> Result<Self, Error> {
        Self::with_options(subdomain, api_key, ClientOptions::default())
    }

    /// Create a client with custom options.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty, the base URL is invalid, or the
    /// transport cannot be built.
    pub fn with_options(
        subdomain: &str,
        api_key: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, Error> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(Error::Configuration("API key is empty".to_string()));
        }

        let mut base_url = options
            .base_url
            .unwrap_or_else(|| format!("https://{subdomain}.recurly.com/v2/"));
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .user_agent(options.user_agent)
            .build()?;

        Ok(Self {
            http,
            base_url: Url::parse(&base_url)?,
            api_key,
        })
    }

    /// Create a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// See [`Client::with_options`].
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::with_options(&config.subdomain, config.api_key.clone(), config.options.clone())
    }

    /// Versioned base URL that request paths are joined onto.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Account operations.
    #[must_use]
    pub fn accounts(&self) -> Accounts<'_> {
        Accounts::new(self)
    }

    /// Subscription operations.
    #[must_use]
    pub fn subscriptions(&self) -> Subscriptions<'_> {
        Subscriptions::new(self)
    }

    /// Invoice operations.
    #[must_use]
    pub fn invoices(&self) -> Invoices<'_> {
        Invoices::new(self)
    }

    /// Transaction operations.
    #[must_use]
    pub fn transactions(&self) -> Transactions<'_> {
        Transactions::new(self)
    }

    /// Coupon operations.
    #[must_use]
    pub fn coupons(&self) -> Coupons<'_> {
        Coupons::new(self)
    }

    /// Build an authenticated request. No I/O happens here.
    ///
    /// `method` is case-insensitive. `path` is relative to the base URL, e.g.
    /// `accounts/1/subscriptions`. A body is encoded as XML and attached, except on
    /// GET, HEAD, and DELETE, which never carry one.
    ///
    /// # Errors
    ///
    /// Returns an error if the method or URL is invalid or the body cannot be encoded.
    pub fn new_request<B: Serialize>(
        &self,
        method: &str,
        path: &str,
        params: &Params,
        body: Option<&B>,
    ) -> Result<reqwest::Request, Error> {
        let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes())
            .map_err(|_| Error::InvalidMethod(method.to_string()))?;
        let url = self.base_url.join(path.trim_start_matches('/'))?;
        let carries_body = !matches!(method, Method::GET | Method::HEAD | Method::DELETE);

        let mut builder = self
            .http
            .request(method, url)
            .basic_auth(&self.api_key, None::<&str>)
            .header(ACCEPT, XML_MEDIA_TYPE);

        if !params.is_empty() {
            builder = builder.query(&params.0);
        }

        if let Some(body) = body.filter(|_| carries_body) {
            builder = builder
                .header(CONTENT_TYPE, XML_CONTENT_TYPE)
                .body(to_xml(body)?);
        }

        let request = builder.build()?;
        tracing::debug!(
            method = %request.method(),
            url = %request.url(),
            "Built request"
        );
        Ok(request)
    }

    /// Execute a request and wrap the reply.
    ///
    /// The body is read in full, which releases the connection. Transport
    /// failures are returned as-is and never retried.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the request fails or the body cannot be read.
    pub async fn execute(&self, request: reqwest::Request) -> Result<Response, Error> {
        let method = request.method().clone();
        let url = request.url().clone();

        let reply = self.http.execute(request).await.map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "Request failed");
            e
        })?;
        let status = reply.status();
        let headers = reply.headers().clone();
        let body = reply.bytes().await?.to_vec();

        tracing::debug!(
            %method,
            %url,
            status = status.as_u16(),
            bytes = body.len(),
            "Received response"
        );

        Ok(Response::new(status, headers, body))
    }

    /// Execute a request and decode a successful body into `T`.
    ///
    /// Error statuses yield `(response, None)`; inspect
    /// [`Response::errors`] for validation failures.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] on network failure and [`Error::Decode`],
    /// carrying the response, if a successful body does not match `T`.
    pub async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::Request,
    ) -> Result<(Response, Option<T>), Error> {
        let response = self.execute(request).await?;
        match response.decode() {
            Ok(value) => Ok((response, value)),
            Err(source) => Err(Error::Decode {
                response: Box::new(response),
                source,
            }),
        }
    }

    /// Execute a request and copy a successful body verbatim, e.g. a PDF.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] on network failure.
    pub async fn send_raw(
        &self,
        request: reqwest::Request,
    ) -> Result<(Response, Option<Vec<u8>>), Error> {
        let response = self.execute(request).await?;
        let body = response.is_ok().then(|| response.body().to_vec());
        Ok((response, body))
    }
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
    /// `User-Agent` header value.
    pub user_agent: String,
    /// Override the versioned base URL (default: `https://{subdomain}.recurly.com/v2/`).
    pub base_url: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: format!("recurly-rust/{}", env!("CARGO_PKG_VERSION")),
            base_url: None,
        }
    }
}

impl ClientOptions {
    /// Create options pointing at a custom base URL, e.g. a mock server.
    #[must_use]
    pub fn with_base_url(url: impl Into<String>) -> Self {
        Self {
            base_url: Some(url.into()),
            ..Self::default()
        }
    }
}
