//! HTTP transport for the Freeport API
//!
//! Every endpoint speaks JSON with a Bearer token and (for resource
//! routes) a `{success, message, data}` envelope. The transport maps
//! status codes onto the [`ApiError`] taxonomy and funnels any 401
//! through [`Session::clear`] so the whole client agrees the session
//! is gone.
//!
//! The [`Transport`] trait is the test seam: services and the identity
//! resolver are written against it, and the unit tests drive them with
//! an in-memory fake instead of a live server.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::session::Session;

/// Wire abstraction: one JSON request/response exchange.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a request and return the decoded JSON body of a 2xx response.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError>;

    /// Multipart upload (profile pictures, company logos). `field` is the
    /// form field name the server expects.
    async fn upload(
        &self,
        path: &str,
        field: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Value, ApiError>;
}

/// reqwest-backed transport.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig, session: Session) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn apply_auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Decode the response body and map non-2xx statuses onto the error
    /// taxonomy. Clears the session on 401 before returning.
    async fn decode(&self, response: reqwest::Response) -> Result<Value, ApiError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);

        if status.is_success() {
            if body.is_null() && !text.trim().is_empty() {
                return Err(ApiError::Parse(format!(
                    "Non-JSON response body: {}",
                    text.chars().take(120).collect::<String>()
                )));
            }
            return Ok(body);
        }

        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("An error occurred")
            .to_string();

        match status.as_u16() {
            401 => {
                tracing::debug!("401 from API; clearing session");
                self.session.clear();
                Err(ApiError::Auth(message))
            }
            404 => Err(ApiError::NotFound(message)),
            422 => {
                let errors = body
                    .get("errors")
                    .and_then(Value::as_object)
                    .map(|map| {
                        map.iter()
                            .map(|(field, msgs)| {
                                let msgs = msgs
                                    .as_array()
                                    .map(|arr| {
                                        arr.iter()
                                            .filter_map(Value::as_str)
                                            .map(str::to_string)
                                            .collect()
                                    })
                                    .unwrap_or_default();
                                (field.clone(), msgs)
                            })
                            .collect()
                    })
                    .unwrap_or_default();
                Err(ApiError::Validation { message, errors })
            }
            code => Err(ApiError::Server {
                status: code,
                message,
            }),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        tracing::debug!(%method, path, "API request");

        let mut builder = self
            .http
            .request(method, self.url(path))
            .header("Accept", "application/json");
        builder = self.apply_auth(builder);

        if let Some(json) = body {
            builder = builder.json(&json);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        self.decode(response).await
    }

    async fn upload(
        &self,
        path: &str,
        field: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Value, ApiError> {
        tracing::debug!(path, field, "API upload");

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part(field.to_string(), part);

        let mut builder = self
            .http
            .post(self.url(path))
            .header("Accept", "application/json")
            .multipart(form);
        builder = self.apply_auth(builder);

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        self.decode(response).await
    }
}

/// Handle to the API: a transport plus the shared session and config.
/// Endpoint services hang off this as free functions (see `api::*`).
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    session: Session,
    config: ApiConfig,
}

impl ApiClient {
    /// Client over a live HTTP transport.
    pub fn new(config: ApiConfig, session: Session) -> Result<Self, ApiError> {
        let transport = HttpTransport::new(&config, session.clone())?;
        Ok(Self {
            transport: Arc::new(transport),
            session,
            config,
        })
    }

    /// Config from disk/env, session restored from disk.
    pub fn from_env() -> Result<Self, ApiError> {
        let config = ApiConfig::load()?;
        let session = Session::restore();
        Self::new(config, session)
    }

    /// Client over an arbitrary transport (tests use an in-memory fake).
    pub fn with_transport(
        transport: Arc<dyn Transport>,
        session: Session,
        config: ApiConfig,
    ) -> Self {
        Self {
            transport,
            session,
            config,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub(crate) async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.transport.request(Method::GET, path, None).await
    }

    pub(crate) async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.transport.request(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn post_empty(&self, path: &str) -> Result<Value, ApiError> {
        self.transport.request(Method::POST, path, None).await
    }

    pub(crate) async fn put(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.transport.request(Method::PUT, path, Some(body)).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.transport.request(Method::DELETE, path, None).await
    }

    pub(crate) async fn upload(
        &self,
        path: &str,
        field: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Value, ApiError> {
        self.transport.upload(path, field, file_name, bytes).await
    }
}

/// Pull `data` out of a `{success, message, data}` envelope.
///
/// Auth endpoints return their own top-level shape and bypass this.
pub(crate) fn unwrap_data(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// `data` as an array, tolerating `null` and scalar bodies.
pub(crate) fn unwrap_list(body: Value) -> Vec<Value> {
    match unwrap_data(body) {
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}
