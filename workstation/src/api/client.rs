use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use std::sync::Arc;

use super::common::{ApiErrorDetails, ApiErrorResponse, VMREST_MEDIA_TYPE};
use super::config::ClientConfig;
use super::error::ApiError;

/// Username/password pair for the vmrest Basic authentication
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// `Basic <base64(username:password)>`
    pub fn authorization_header(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(raw.as_bytes()))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Join an API address and a port into the base URL every request path is
/// appended to. The result never ends with a slash.
pub fn build_base_url(api_url: &str, api_port: u16) -> Result<String, ApiError> {
    let mut url = url::Url::parse(api_url.trim())
        .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", api_url, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::InvalidUrl(format!(
            "{}: unsupported scheme {}",
            api_url,
            url.scheme()
        )));
    }

    url.set_port(Some(api_port))
        .map_err(|_| ApiError::InvalidUrl(format!("{}: cannot carry a port", api_url)))?;

    Ok(url.as_str().trim_end_matches('/').to_string())
}

/// VMware Workstation REST API client
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http_client: reqwest::Client,
    base_url: String,
    auth_header: String,
}

impl Client {
    /// Create a new API client with default configuration
    pub fn new(
        endpoint: &str,
        credentials: &Credentials,
        validate_certs: bool,
    ) -> Result<Self, ApiError> {
        Self::with_config(
            endpoint,
            credentials,
            ClientConfig::default().with_validate_certs(validate_certs),
        )
    }

    /// Create a new API client with custom timeouts
    pub fn with_config(
        endpoint: &str,
        credentials: &Credentials,
        config: ClientConfig,
    ) -> Result<Self, ApiError> {
        let http_client = config.build_client()?;
        let base_url = endpoint.trim_end_matches('/').to_string();

        Ok(Self {
            inner: Arc::new(ClientInner {
                http_client,
                base_url,
                auth_header: credentials.authorization_header(),
            }),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Full URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url, path)
    }

    /// VM inventory operations
    pub fn vms(&self) -> crate::api::vms::VmsApi<'_> {
        crate::api::vms::VmsApi::new(self)
    }

    /// Execute a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!("GET request to: {}", url);

        let request = self.inner.http_client.get(&url);
        self.execute(request).await
    }

    /// Execute a GET request and keep the body as untyped JSON
    pub async fn get_value(&self, path: &str) -> Result<serde_json::Value, ApiError> {
        self.get(path).await
    }

    /// Execute a POST request with a JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!("POST request to: {}", url);

        let request = self
            .inner
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, VMREST_MEDIA_TYPE)
            .json(body);
        self.execute(request).await
    }

    /// Execute a PUT request with a JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!("PUT request to: {}", url);

        let request = self
            .inner
            .http_client
            .put(&url)
            .header(CONTENT_TYPE, VMREST_MEDIA_TYPE)
            .json(body);
        self.execute(request).await
    }

    /// Execute a PUT request whose body is a bare word (power operations)
    pub async fn put_text<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &str,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!("PUT request to: {} ({})", url, body);

        let request = self
            .inner
            .http_client
            .put(&url)
            .header(CONTENT_TYPE, VMREST_MEDIA_TYPE)
            .body(body.to_string());
        self.execute(request).await
    }

    /// Execute a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!("DELETE request to: {}", url);

        let request = self.inner.http_client.delete(&url);
        self.execute(request).await
    }

    /// Send one request. No retry: the first failure is returned as is.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request
            .header(AUTHORIZATION, &self.inner.auth_header)
            .header(ACCEPT, VMREST_MEDIA_TYPE)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status.is_success() {
            return self.parse_success_response(response).await;
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::AuthError);
        }

        self.handle_error_response(response).await
    }

    /// Parse successful response, an empty body reads as JSON `null`
    async fn parse_success_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let text = response.text().await?;
        tracing::debug!("API response body: {}", text);

        let body = if text.trim().is_empty() {
            "null"
        } else {
            text.as_str()
        };

        serde_json::from_str::<T>(body).map_err(|e| {
            tracing::error!("Failed to deserialize response: {}, body: {}", e, text);
            ApiError::ParseError(format!("Failed to parse response: {}", e))
        })
    }

    /// Handle error response
    async fn handle_error_response<T>(&self, response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        let details = serde_json::from_str::<ApiErrorResponse>(&text)
            .ok()
            .map(|err_resp| Box::new(ApiErrorDetails::from(err_resp)));

        Err(ApiError::ApiError {
            status,
            message: text,
            details,
        })
    }
}
