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

//! Client configuration.
//!
//! A [`Config`] comes either from the environment or from a JSON file
//! (traditionally `oneview_config.json`):
//!
//! | Environment variable  | JSON field   | Default |
//! |-----------------------|--------------|---------|
//! | `ONEVIEW_OV_USER`     | `UserName`   | required |
//! | `ONEVIEW_OV_PASSWORD` | `Password`   | required |
//! | `ONEVIEW_OV_DOMAIN`   | `Domain`     | empty (appliance default) |
//! | `ONEVIEW_OV_ENDPOINT` | `Endpoint`   | required |
//! | `ONEVIEW_APIVERSION`  | `ApiVersion` | `800` |
//! | `ONEVIEW_SSLVERIFY`   | `SSlVerify`  | `false` |
//! | `ONEVIEW_IFMATCH`     | `IfMatch`    | `*` |

use oneview_core::ApiVersion;
use oneview_core::ETag;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use url::Url;

pub const ENV_USER: &str = "ONEVIEW_OV_USER";
pub const ENV_PASSWORD: &str = "ONEVIEW_OV_PASSWORD";
pub const ENV_DOMAIN: &str = "ONEVIEW_OV_DOMAIN";
pub const ENV_ENDPOINT: &str = "ONEVIEW_OV_ENDPOINT";
pub const ENV_API_VERSION: &str = "ONEVIEW_APIVERSION";
pub const ENV_SSL_VERIFY: &str = "ONEVIEW_SSLVERIFY";
pub const ENV_IF_MATCH: &str = "ONEVIEW_IFMATCH";

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "oneview_config.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("environment variable {0} is not set")]
    MissingVariable(&'static str),
    #[error("invalid value of {name}: {value:?}")]
    InvalidVariable { name: &'static str, value: String },
    #[error("invalid endpoint {endpoint:?}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
}

/// Connection settings of a OneView appliance.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Config {
    pub user_name: String,
    pub password: String,
    #[serde(default)]
    pub domain: String,
    pub endpoint: String,
    /// Verify the appliance TLS certificate.
    #[serde(rename = "SSlVerify", default)]
    pub ssl_verify: bool,
    #[serde(default = "default_api_version")]
    pub api_version: u16,
    /// Default `If-Match` for updates and deletes.
    #[serde(default = "default_if_match")]
    pub if_match: String,
}

fn default_api_version() -> u16 {
    ApiVersion::default().value()
}

fn default_if_match() -> String {
    ETag::any().to_string()
}

impl Config {
    /// Settings with the given credentials and endpoint; everything else
    /// takes its default.
    #[must_use]
    pub fn new(user_name: String, password: String, endpoint: String) -> Self {
        Self {
            user_name,
            password,
            domain: String::new(),
            endpoint,
            ssl_verify: false,
            api_version: default_api_version(),
            if_match: default_if_match(),
        }
    }

    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value cannot
    /// be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value cannot
    /// be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Unset and empty are the same thing.
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &'static str| get(name).ok_or(ConfigError::MissingVariable(name));

        let api_version = match get(ENV_API_VERSION) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidVariable {
                    name: ENV_API_VERSION,
                    value,
                })?,
            None => default_api_version(),
        };
        let ssl_verify = match get(ENV_SSL_VERIFY) {
            Some(value) => parse_bool(&value).ok_or(ConfigError::InvalidVariable {
                name: ENV_SSL_VERIFY,
                value,
            })?,
            None => false,
        };

        Ok(Self {
            user_name: required(ENV_USER)?,
            password: required(ENV_PASSWORD)?,
            domain: get(ENV_DOMAIN).unwrap_or_default(),
            endpoint: required(ENV_ENDPOINT)?,
            ssl_verify,
            api_version,
            if_match: get(ENV_IF_MATCH).unwrap_or_else(default_if_match),
        })
    }

    /// Load configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Appliance base URL. A bare host name is taken as `https://<host>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid URL.
    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        let endpoint = self.endpoint.trim();
        let candidate = if endpoint.contains("://") {
            endpoint.to_string()
        } else {
            format!("https://{endpoint}")
        };
        Url::parse(&candidate).map_err(|source| ConfigError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            source,
        })
    }

    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        ApiVersion::new(self.api_version)
    }

    #[must_use]
    pub fn if_match(&self) -> ETag {
        ETag::from(self.if_match.as_str())
    }

    #[cfg(feature = "http")]
    #[must_use]
    pub fn credentials(&self) -> oneview_http::Credentials {
        oneview_http::Credentials::new(self.user_name.clone(), self.password.clone())
            .with_domain(self.domain.clone())
    }

    #[cfg(feature = "http")]
    #[must_use]
    pub fn session_settings(&self) -> oneview_http::SessionSettings {
        oneview_http::SessionSettings::new(self.api_version()).if_match(self.if_match())
    }

    #[cfg(feature = "http")]
    #[must_use]
    pub fn client_params(&self) -> oneview_http::reqwest::ClientParams {
        oneview_http::reqwest::ClientParams::new().accept_invalid_certs(!self.ssl_verify)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("user_name", &self.user_name)
            .field("password", &"[REDACTED]")
            .field("domain", &self.domain)
            .field("endpoint", &self.endpoint)
            .field("ssl_verify", &self.ssl_verify)
            .field("api_version", &self.api_version)
            .field("if_match", &self.if_match)
            .finish()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
