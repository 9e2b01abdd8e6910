// SPDX-FileCopyrightText: Copyright (c) 2025 Hewlett Packard Enterprise Development LP. All rights reserved.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::HttpClient;
use crate::SessionError;
use http::header;
use http::HeaderMap;
use http::StatusCode;
use oneview_core::ETag;
use oneview_core::Reply;
use oneview_core::ResourceUri;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::time::Duration;
use url::Url;

/// Error body returned by the appliance with non-success responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub recommended_actions: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApplianceError {
    #[error("HTTP client error: {0}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("JSON deserialization error: {0}")]
    JsonError(#[source] serde_path_to_error::Error<serde_json::Error>),
    #[error("invalid response body: {0}")]
    InvalidBody(#[source] serde_json::Error),
    #[error("invalid HTTP response {status}: {}", describe_response(.api_error, .body))]
    InvalidResponse {
        status: StatusCode,
        body: String,
        api_error: Option<ApiError>,
    },
    #[error("session error: {0}")]
    Session(String),
}

fn describe_response(api_error: &Option<ApiError>, body: &str) -> String {
    match api_error {
        Some(ApiError {
            error_code,
            message: Some(message),
            ..
        }) => match error_code {
            Some(code) => format!("{code}: {message}"),
            None => message.clone(),
        },
        _ => body.to_string(),
    }
}

impl ApplianceError {
    /// HTTP status of an unsuccessful response.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::InvalidResponse { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl SessionError for ApplianceError {
    fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    fn session_error(reason: String) -> Self {
        Self::Session(reason)
    }

    fn invalid_body(err: serde_json::Error) -> Self {
        Self::InvalidBody(err)
    }
}

/// Configuration parameters for the reqwest HTTP client.
///
/// This struct allows customizing various aspects of the reqwest client behavior,
/// including timeouts, TLS settings, and connection pooling.
///
/// # Examples
///
/// ```rust
/// use oneview_http::reqwest::ClientParams;
/// use std::time::Duration;
///
/// let params = ClientParams::new()
///     .timeout(Duration::from_secs(30))
///     .connect_timeout(Duration::from_secs(10))
///     .user_agent("MyApp/1.0")
///     .accept_invalid_certs(true);
/// ```
#[derive(Debug, Clone)]
pub struct ClientParams {
    /// HTTP request timeout
    pub timeout: Option<Duration>,
    /// TCP connection timeout
    pub connect_timeout: Option<Duration>,
    /// User-Agent header value
    pub user_agent: Option<String>,
    /// Whether to accept invalid TLS certificates
    pub accept_invalid_certs: bool,
    /// Maximum number of HTTP redirects to follow
    pub max_redirects: Option<usize>,
    /// TCP keep-alive timeout
    pub tcp_keepalive: Option<Duration>,
    /// Connection pool idle timeout
    pub pool_idle_timeout: Option<Duration>,
    /// Maximum idle connections per host
    pub pool_max_idle_per_host: Option<usize>,
    /// List of default headers, added to every request
    pub default_headers: Option<HeaderMap>,
}

impl Default for ClientParams {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(120)),
            connect_timeout: Some(Duration::from_secs(5)),
            user_agent: Some("oneview-rust/v1".to_string()),
            accept_invalid_certs: false,
            max_redirects: Some(10),
            tcp_keepalive: Some(Duration::from_secs(60)),
            pool_idle_timeout: Some(Duration::from_secs(90)),
            pool_max_idle_per_host: Some(1),
            default_headers: None,
        }
    }
}

impl ClientParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    #[must_use]
    pub const fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    #[must_use]
    pub const fn max_redirects(mut self, max: usize) -> Self {
        self.max_redirects = Some(max);
        self
    }

    #[must_use]
    pub const fn no_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    #[must_use]
    pub fn default_headers(mut self, default_headers: HeaderMap) -> Self {
        self.default_headers = Some(default_headers);
        self
    }
}

/// HTTP client implementation using the reqwest library.
///
/// # Examples
///
/// ```rust,no_run
/// use oneview_http::reqwest::Client;
/// use oneview_http::reqwest::ClientParams;
/// use oneview_http::Credentials;
/// use oneview_http::HttpAppliance;
/// use oneview_http::SessionSettings;
/// use std::time::Duration;
/// use url::Url;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let params = ClientParams::new().timeout(Duration::from_secs(60));
/// let client = Client::with_params(params)?;
///
/// let credentials = Credentials::new("Administrator".to_string(), "password".to_string());
/// let endpoint = Url::parse("https://oneview.example.com")?;
/// let appliance = HttpAppliance::new(client, endpoint, credentials, SessionSettings::default());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    client: reqwest::Client,
}

#[allow(clippy::missing_errors_doc)]
impl Client {
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_params(ClientParams::default())
    }

    pub fn with_params(params: ClientParams) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder().use_rustls_tls();

        if let Some(timeout) = params.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(connect_timeout) = params.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        if let Some(user_agent) = params.user_agent {
            builder = builder.user_agent(user_agent);
        }

        if params.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(max_redirects) = params.max_redirects {
            builder = builder.redirect(reqwest::redirect::Policy::limited(max_redirects));
        }

        if let Some(keepalive) = params.tcp_keepalive {
            builder = builder.tcp_keepalive(keepalive);
        }

        if let Some(idle_timeout) = params.pool_idle_timeout {
            builder = builder.pool_idle_timeout(idle_timeout);
        }

        if let Some(max_idle) = params.pool_max_idle_per_host {
            builder = builder.pool_max_idle_per_host(max_idle);
        }

        if let Some(default_headers) = params.default_headers {
            builder = builder.default_headers(default_headers);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Client {
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApplianceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let api_error = serde_json::from_str(&body).ok();
        Err(ApplianceError::InvalidResponse {
            status,
            body,
            api_error,
        })
    }

    async fn handle_response<T>(response: reqwest::Response) -> Result<T, ApplianceError>
    where
        T: DeserializeOwned,
    {
        let response = Self::check_status(response).await?;
        let etag_header = response.headers().get(header::ETAG).cloned();

        let mut value: JsonValue = response.json().await?;

        if let Some(header) = etag_header {
            if let Ok(etag_value) = header.to_str() {
                if let Some(obj) = value.as_object_mut() {
                    // Body value wins; fill only absent or null tags.
                    let entry = obj.entry("eTag").or_insert(JsonValue::Null);
                    if entry.is_null() {
                        *entry = JsonValue::String(etag_value.to_string());
                    }
                }
            }
        }

        serde_path_to_error::deserialize(value).map_err(ApplianceError::JsonError)
    }

    async fn handle_reply(response: reqwest::Response) -> Result<Reply, ApplianceError> {
        let response = Self::check_status(response).await?;
        let status = response.status().as_u16();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(location_uri);
        let bytes = response.bytes().await?;
        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            None
        } else {
            Some(serde_json::from_slice(&bytes).map_err(ApplianceError::InvalidBody)?)
        };
        Ok(Reply {
            status,
            location,
            body,
        })
    }
}

/// `Location` may be absolute; keep the path and query only.
fn location_uri(value: &str) -> ResourceUri {
    Url::parse(value).map_or_else(
        |_| ResourceUri::from(value),
        |url| match url.query() {
            Some(query) => format!("{}?{query}", url.path()).into(),
            None => url.path().into(),
        },
    )
}

impl HttpClient for Client {
    type Error = ApplianceError;

    async fn get<T>(&self, url: Url, headers: HeaderMap) -> Result<T, Self::Error>
    where
        T: DeserializeOwned + Send + Sync,
    {
        let response = self.client.get(url).headers(headers).send().await?;
        Self::handle_response(response).await
    }

    async fn post<B>(&self, url: Url, body: &B, headers: HeaderMap) -> Result<Reply, Self::Error>
    where
        B: Serialize + Send + Sync,
    {
        let response = self
            .client
            .post(url)
            .headers(headers)
            .json(body)
            .send()
            .await?;
        Self::handle_reply(response).await
    }

    async fn put<B>(
        &self,
        url: Url,
        etag: ETag,
        body: &B,
        headers: HeaderMap,
    ) -> Result<Reply, Self::Error>
    where
        B: Serialize + Send + Sync,
    {
        let response = self
            .client
            .put(url)
            .headers(headers)
            .header(header::IF_MATCH, etag.to_string())
            .json(body)
            .send()
            .await?;
        Self::handle_reply(response).await
    }

    async fn delete(&self, url: Url, etag: ETag, headers: HeaderMap) -> Result<Reply, Self::Error> {
        let response = self
            .client
            .delete(url)
            .headers(headers)
            .header(header::IF_MATCH, etag.to_string())
            .send()
            .await?;
        Self::handle_reply(response).await
    }
}
