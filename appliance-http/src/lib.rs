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

//! HTTP implementation of the [`Appliance`] trait.
//!
//! [`HttpAppliance`] combines an [`HttpClient`] with the appliance endpoint,
//! credentials and session settings. It takes care of the OneView session
//! protocol:
//!
//! - Login: `POST /rest/login-sessions` returns a `sessionID`.
//! - Every request carries `X-API-Version` and `Auth: <sessionID>`.
//! - A `401 Unauthorized` answer drops the session, logs in again and
//!   retries the request once.
//! - `PUT` and `DELETE` carry `If-Match`.

pub mod credentials;

#[cfg(feature = "reqwest")]
pub mod reqwest;

use http::HeaderMap;
use http::HeaderName;
use http::HeaderValue;
use oneview_core::query::ListQuery;
use oneview_core::ApiVersion;
use oneview_core::Appliance;
use oneview_core::ETag;
use oneview_core::Reply;
use oneview_core::ResourceList;
use oneview_core::ResourceUri;
use oneview_core::TaskHandle;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use std::error::Error as StdError;
use std::future::Future;
use std::sync::RwLock;
use tracing::debug;
use url::Url;

#[doc(inline)]
pub use credentials::Credentials;

/// Path of the session resource.
pub const LOGIN_SESSIONS: &str = "/rest/login-sessions";

/// Header carrying the REST API version.
pub const X_API_VERSION: HeaderName = HeaderName::from_static("x-api-version");

/// Header carrying the session id.
pub const AUTH: HeaderName = HeaderName::from_static("auth");

pub trait HttpClient: Send + Sync {
    type Error: Send + Sync + StdError + 'static;

    /// Perform an HTTP GET request.
    fn get<T>(
        &self,
        url: Url,
        headers: HeaderMap,
    ) -> impl Future<Output = Result<T, Self::Error>> + Send
    where
        T: DeserializeOwned + Send + Sync;

    /// Perform an HTTP POST request.
    fn post<B>(
        &self,
        url: Url,
        body: &B,
        headers: HeaderMap,
    ) -> impl Future<Output = Result<Reply, Self::Error>> + Send
    where
        B: Serialize + Send + Sync;

    /// Perform an HTTP PUT request.
    fn put<B>(
        &self,
        url: Url,
        etag: ETag,
        body: &B,
        headers: HeaderMap,
    ) -> impl Future<Output = Result<Reply, Self::Error>> + Send
    where
        B: Serialize + Send + Sync;

    /// Perform an HTTP DELETE request.
    fn delete(
        &self,
        url: Url,
        etag: ETag,
        headers: HeaderMap,
    ) -> impl Future<Output = Result<Reply, Self::Error>> + Send;
}

/// Trait for errors that can tell whether the session was rejected and
/// provide a way to create session-related errors.
pub trait SessionError {
    /// Returns true if the appliance rejected the session (HTTP 401).
    fn is_unauthorized(&self) -> bool;

    /// Session bookkeeping failed.
    fn session_error(reason: String) -> Self;

    /// Reply body could not be interpreted.
    fn invalid_body(err: serde_json::Error) -> Self;
}

/// Settings of the appliance session.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    api_version: ApiVersion,
    if_match: ETag,
    custom_headers: HeaderMap,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            api_version: ApiVersion::default(),
            if_match: ETag::any(),
            custom_headers: HeaderMap::new(),
        }
    }
}

impl SessionSettings {
    #[must_use]
    pub fn new(api_version: ApiVersion) -> Self {
        Self {
            api_version,
            ..Self::default()
        }
    }

    /// `If-Match` value used when a request has no explicit entity tag.
    #[must_use]
    pub fn if_match(mut self, if_match: ETag) -> Self {
        self.if_match = if_match;
        self
    }

    /// Headers added to every request.
    #[must_use]
    pub fn custom_headers(mut self, custom_headers: HeaderMap) -> Self {
        self.custom_headers = custom_headers;
        self
    }

    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }
}

/// Base URL of the appliance.
///
/// Provides conversion methods to build request URLs from `ResourceUri` paths.
#[derive(Debug, Clone)]
pub struct ApplianceEndpoint {
    base_url: Url,
}

impl ApplianceEndpoint {
    /// Create a new `ApplianceEndpoint` from a base URL
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// Convert a path to a full request URL
    #[must_use]
    pub fn with_path(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url.set_query(None);
        url
    }

    /// Convert a resource URI (path and optional query) to a full request URL
    #[must_use]
    pub fn with_uri(&self, uri: &ResourceUri) -> Url {
        let mut url = self.with_path(uri.path());
        url.set_query(uri.query());
        url
    }

    /// Convert a resource URI to a full request URL with list parameters
    #[must_use]
    pub fn with_uri_and_query(&self, uri: &ResourceUri, query: &ListQuery) -> Url {
        let mut url = self.with_uri(uri);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.to_pairs());
        }
        url
    }
}

impl From<Url> for ApplianceEndpoint {
    fn from(url: Url) -> Self {
        Self::new(url)
    }
}

impl From<&ApplianceEndpoint> for Url {
    fn from(endpoint: &ApplianceEndpoint) -> Self {
        endpoint.base_url.clone()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    user_name: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    auth_login_domain: &'a str,
    login_msg_ack: &'static str,
}

#[derive(Deserialize)]
struct LoginSession {
    #[serde(rename = "sessionID")]
    session_id: String,
}

/// HTTP-based appliance implementation that wraps an [`HttpClient`].
///
/// # Examples
///
/// ```rust,no_run
/// use oneview_http::reqwest::Client;
/// use oneview_http::Credentials;
/// use oneview_http::HttpAppliance;
/// use oneview_http::SessionSettings;
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("Administrator".to_string(), "password".to_string());
/// let http_client = Client::new()?;
/// let endpoint = Url::parse("https://oneview.example.com")?;
///
/// let appliance = HttpAppliance::new(http_client, endpoint, credentials, SessionSettings::default());
/// appliance.login().await?;
/// # Ok(())
/// # }
/// ```
pub struct HttpAppliance<C: HttpClient> {
    client: C,
    endpoint: ApplianceEndpoint,
    credentials: Credentials,
    settings: SessionSettings,
    session: RwLock<Option<String>>,
}

impl<C: HttpClient> HttpAppliance<C>
where
    C::Error: SessionError,
{
    /// Create a new appliance client. No request is sent until the first
    /// call; the session is opened lazily.
    pub fn new(
        client: C,
        endpoint: Url,
        credentials: Credentials,
        settings: SessionSettings,
    ) -> Self {
        Self {
            client,
            endpoint: ApplianceEndpoint::from(endpoint),
            credentials,
            settings,
            session: RwLock::new(None),
        }
    }

    #[must_use]
    pub const fn endpoint(&self) -> &ApplianceEndpoint {
        &self.endpoint
    }

    #[must_use]
    pub const fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Session is open.
    ///
    /// # Errors
    ///
    /// Returns an error if the session lock is poisoned.
    pub fn has_session(&self) -> Result<bool, C::Error> {
        Ok(self.current_session()?.is_some())
    }

    /// Open a new session and return its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the appliance rejects the credentials or the
    /// reply carries no session id.
    pub async fn login(&self) -> Result<String, C::Error> {
        let url = self.endpoint.with_path(LOGIN_SESSIONS);
        debug!(%url, user = %self.credentials.username, "opening appliance session");
        let request = LoginRequest {
            user_name: &self.credentials.username,
            password: self.credentials.password(),
            auth_login_domain: &self.credentials.domain,
            login_msg_ack: "true",
        };
        let reply = self
            .client
            .post(url, &request, self.base_headers()?)
            .await?;
        let body = reply
            .body
            .ok_or_else(|| C::Error::session_error("login reply has no body".into()))?;
        let session: LoginSession = serde_json::from_value(body).map_err(C::Error::invalid_body)?;
        *self
            .session
            .write()
            .map_err(|e| C::Error::session_error(e.to_string()))? = Some(session.session_id.clone());
        Ok(session.session_id)
    }

    /// Close the current session, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the appliance fails to delete the session.
    pub async fn logout(&self) -> Result<(), C::Error> {
        let Some(session) = self.take_session()? else {
            return Ok(());
        };
        let url = self.endpoint.with_path(LOGIN_SESSIONS);
        debug!(%url, "closing appliance session");
        let headers = self.session_headers_for(&session)?;
        self.client
            .delete(url, self.settings.if_match.clone(), headers)
            .await?;
        Ok(())
    }

    fn current_session(&self) -> Result<Option<String>, C::Error> {
        Ok(self
            .session
            .read()
            .map_err(|e| C::Error::session_error(e.to_string()))?
            .clone())
    }

    fn take_session(&self) -> Result<Option<String>, C::Error> {
        Ok(self
            .session
            .write()
            .map_err(|e| C::Error::session_error(e.to_string()))?
            .take())
    }

    fn base_headers(&self) -> Result<HeaderMap, C::Error> {
        let mut headers = self.settings.custom_headers.clone();
        headers.insert(
            X_API_VERSION,
            HeaderValue::from(self.settings.api_version.value()),
        );
        Ok(headers)
    }

    fn session_headers_for(&self, session: &str) -> Result<HeaderMap, C::Error> {
        let mut headers = self.base_headers()?;
        let value = HeaderValue::from_str(session)
            .map_err(|e| C::Error::session_error(e.to_string()))?;
        headers.insert(AUTH, value);
        Ok(headers)
    }

    async fn session_headers(&self) -> Result<HeaderMap, C::Error> {
        let session = match self.current_session()? {
            Some(session) => session,
            None => self.login().await?,
        };
        self.session_headers_for(&session)
    }

    /// Run a request with session headers. A rejected session is replaced
    /// once and the request is repeated.
    async fn with_session<T, F, Fut>(&self, request: F) -> Result<T, C::Error>
    where
        F: Fn(HeaderMap) -> Fut,
        Fut: Future<Output = Result<T, C::Error>>,
    {
        let headers = self.session_headers().await?;
        match request(headers).await {
            Err(err) if err.is_unauthorized() => {
                debug!("session rejected by appliance, logging in again");
                self.take_session()?;
                let headers = self.session_headers().await?;
                request(headers).await
            }
            result => result,
        }
    }

    fn if_match(&self, etag: Option<&ETag>) -> ETag {
        etag.cloned()
            .unwrap_or_else(|| self.settings.if_match.clone())
    }
}

impl<C: HttpClient> Appliance for HttpAppliance<C>
where
    C::Error: SessionError,
{
    type Error = C::Error;

    async fn get<T: DeserializeOwned + Send + Sync>(
        &self,
        uri: &ResourceUri,
    ) -> Result<T, Self::Error> {
        let url = self.endpoint.with_uri(uri);
        debug!(%url, "GET");
        self.with_session(|headers| self.client.get::<T>(url.clone(), headers))
            .await
    }

    async fn list<T: DeserializeOwned + Send + Sync>(
        &self,
        uri: &ResourceUri,
        query: &ListQuery,
    ) -> Result<ResourceList<T>, Self::Error> {
        let url = self.endpoint.with_uri_and_query(uri, query);
        debug!(%url, "GET collection");
        self.with_session(|headers| self.client.get::<ResourceList<T>>(url.clone(), headers))
            .await
    }

    async fn create<V: Serialize + Send + Sync>(
        &self,
        uri: &ResourceUri,
        body: &V,
    ) -> Result<TaskHandle, Self::Error> {
        let url = self.endpoint.with_uri(uri);
        debug!(%url, "POST");
        let reply = self
            .with_session(|headers| self.client.post(url.clone(), body, headers))
            .await?;
        TaskHandle::from_reply(reply).map_err(C::Error::invalid_body)
    }

    async fn update<V: Serialize + Send + Sync>(
        &self,
        uri: &ResourceUri,
        etag: Option<&ETag>,
        body: &V,
    ) -> Result<TaskHandle, Self::Error> {
        let url = self.endpoint.with_uri(uri);
        let etag = self.if_match(etag);
        debug!(%url, %etag, "PUT");
        let reply = self
            .with_session(|headers| self.client.put(url.clone(), etag.clone(), body, headers))
            .await?;
        TaskHandle::from_reply(reply).map_err(C::Error::invalid_body)
    }

    async fn delete(
        &self,
        uri: &ResourceUri,
        etag: Option<&ETag>,
    ) -> Result<TaskHandle, Self::Error> {
        let url = self.endpoint.with_uri(uri);
        let etag = self.if_match(etag);
        debug!(%url, %etag, "DELETE");
        let reply = self
            .with_session(|headers| self.client.delete(url.clone(), etag.clone(), headers))
            .await?;
        TaskHandle::from_reply(reply).map_err(C::Error::invalid_body)
    }
}
