//! Low-level HTTP transport: `HttpTransport`.
//!
//! Performs exactly one HTTP call per method invocation and normalizes the
//! outcome to a parsed JSON value or an [`Error`]. Non-2xx responses go
//! through the [`ErrorMapper`] supplied at construction, if any.

use std::fmt;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ConnectionConfig;
use crate::error::{Error, HttpError, Result};

/// Header carrying the API key.
pub const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-api-key");

// ─── Error mapping ───────────────────────────────────────────────────────────

/// Error descriptor parsed from a non-2xx response body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorDetail {
    pub code: Option<i64>,
    pub message: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<Value>,
    #[serde(default, rename = "errorCode")]
    error_code: Option<i64>,
    #[serde(default, rename = "errorMessage")]
    error_message: Option<String>,
}

impl ErrorDetail {
    /// Accepts `{"error": {"code", "message"}}`, `{"error": "..."}` and
    /// WalletAPI's `{"errorCode", "errorMessage"}`. Returns `None` for
    /// anything else, including an empty body.
    pub fn parse(body: &str) -> Option<Self> {
        let raw: ErrorBody = serde_json::from_str(body).ok()?;

        let detail = match raw.error {
            Some(Value::Object(obj)) => ErrorDetail {
                code: obj.get("code").and_then(Value::as_i64),
                message: obj
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            },
            Some(Value::String(message)) => ErrorDetail {
                code: None,
                message: Some(message),
            },
            _ => ErrorDetail {
                code: raw.error_code,
                message: raw.error_message,
            },
        };

        if detail.code.is_none() && detail.message.is_none() {
            None
        } else {
            Some(detail)
        }
    }
}

/// Maps a non-2xx status and its parsed body to the error returned to the caller.
pub trait ErrorMapper: Send + Sync {
    fn map_error(&self, status: StatusCode, detail: Option<&ErrorDetail>) -> Error;
}

impl<F> ErrorMapper for F
where
    F: Fn(StatusCode, Option<&ErrorDetail>) -> Error + Send + Sync,
{
    fn map_error(&self, status: StatusCode, detail: Option<&ErrorDetail>) -> Error {
        self(status, detail)
    }
}

// ─── HttpTransport ───────────────────────────────────────────────────────────

/// Shared GET/POST/PUT/DELETE helper used by every client.
#[derive(Clone)]
pub struct HttpTransport {
    base_url: String,
    client: Client,
    error_mapper: Option<Arc<dyn ErrorMapper>>,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("error_mapper", &self.error_mapper.is_some())
            .finish()
    }
}

impl HttpTransport {
    /// Transport without an error mapper: non-2xx responses become
    /// [`HttpError::Status`].
    pub fn new(config: &ConnectionConfig) -> Result<Self> {
        Self::with_error_mapper(config, None)
    }

    pub fn with_error_mapper(
        config: &ConnectionConfig,
        error_mapper: Option<Arc<dyn ErrorMapper>>,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|_| HttpError::InvalidHeader { name: "User-Agent" })?,
        );

        if let Some(key) = config.api_key.as_deref().filter(|k| !k.is_empty()) {
            let mut value = HeaderValue::from_str(key)
                .map_err(|_| HttpError::InvalidHeader { name: "X-API-KEY" })?;
            value.set_sensitive(true);
            headers.insert(API_KEY_HEADER, value);
        }

        let idle_per_host = if config.keep_alive { 10 } else { 0 };

        let mut builder = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .pool_max_idle_per_host(idle_per_host);

        if config.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder.build().map_err(HttpError::from)?;

        Ok(Self {
            base_url: config.base_url(),
            client,
            error_mapper,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint; a leading `/` is tolerated.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    // ── Verbs ────────────────────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let value = self.request(Method::GET, endpoint, None::<&()>).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// POST a JSON body; `None` sends `{}`.
    pub async fn post<T, B>(&self, endpoint: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let value = self.request(Method::POST, endpoint, body).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// PUT a JSON body; `None` sends `{}`.
    pub async fn put<T, B>(&self, endpoint: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let value = self.request(Method::PUT, endpoint, body).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn delete(&self, endpoint: &str) -> Result<()> {
        self.request(Method::DELETE, endpoint, None::<&()>).await?;
        Ok(())
    }

    // ── Internals ────────────────────────────────────────────────────────

    async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<Value> {
        let url = self.url(endpoint);
        tracing::debug!(method = %method, url = %url, "Sending request");

        let mut req = self.client.request(method.clone(), &url);
        if method == Method::POST || method == Method::PUT {
            req = match body {
                Some(b) => req.json(b),
                None => req.body("{}"),
            };
        }

        let resp = req.send().await.map_err(HttpError::from)?;
        let status = resp.status();
        let text = resp.text().await.map_err(HttpError::from)?;

        if status.is_success() {
            return parse_success_body(&method, &text);
        }

        Err(self.map_status(status, &text))
    }

    fn map_status(&self, status: StatusCode, body: &str) -> Error {
        let err = match &self.error_mapper {
            Some(mapper) => {
                let detail = ErrorDetail::parse(body);
                mapper.map_error(status, detail.as_ref())
            }
            None => HttpError::Status {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("Unknown Status")
                    .to_string(),
            }
            .into(),
        };
        tracing::warn!(status = status.as_u16(), error = %err, "Request failed");
        err
    }
}

/// GET bodies must be JSON; other verbs may answer with nothing.
fn parse_success_body(method: &Method, text: &str) -> Result<Value> {
    if text.trim().is_empty() {
        if *method == Method::GET {
            return Err(HttpError::MalformedBody("empty body".to_string()).into());
        }
        return Ok(Value::Null);
    }

    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(e) if *method == Method::GET => Err(HttpError::MalformedBody(e.to_string()).into()),
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring unparseable response body");
            Ok(Value::Null)
        }
    }
}
