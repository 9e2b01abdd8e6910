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

//! Identifiers used by OneView resources
//!
//! Minimal wrappers for identifiers found in every OneView payload:
//! - [`ResourceUri`]: value of `uri`, the canonical resource path (opaque string)
//! - [`ETag`]: value of `eTag`, the HTTP entity tag (opaque string)
//! - [`ApiVersion`]: value sent in the `X-API-Version` header
//!
//! Notes
//! - These types are intentionally semantic-unaware; they do not validate content.
//! - Formatting/Display returns the raw underlying string.
//!
//! Example
//! ```rust
//! use oneview_core::ResourceUri;
//!
//! let scopes = ResourceUri::from("/rest/scopes");
//! assert_eq!(scopes.join("resources").to_string(), "/rest/scopes/resources");
//! ```

use core::fmt::Display;
use core::fmt::Formatter;
use core::fmt::Result as FmtResult;
use serde::Deserialize;
use serde::Serialize;

/// Type for the `uri` identifier of appliance resources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ResourceUri(String);

impl ResourceUri {
    /// Raw string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path part of the URI (everything before `?`).
    #[must_use]
    pub fn path(&self) -> &str {
        self.0.split_once('?').map_or(self.0.as_str(), |(path, _)| path)
    }

    /// Query part of the URI (everything after `?`), if any.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.0.split_once('?').map(|(_, query)| query)
    }

    /// Append a path segment.
    #[must_use]
    pub fn join(&self, segment: &str) -> Self {
        format!(
            "{}/{}",
            self.path().trim_end_matches('/'),
            segment.trim_start_matches('/')
        )
        .into()
    }

    /// Whether the URI points to an appliance task.
    #[must_use]
    pub fn is_task(&self) -> bool {
        self.path().contains("/rest/tasks/")
    }
}

impl From<String> for ResourceUri {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ResourceUri {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Display for ResourceUri {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}

/// Type for the `eTag` identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ETag(String);

impl ETag {
    /// Tag that matches any entity version.
    #[must_use]
    pub fn any() -> Self {
        Self("*".into())
    }
}

impl From<String> for ETag {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ETag {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Display for ETag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}

/// REST API version of the appliance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ApiVersion(u16);

impl ApiVersion {
    /// Create a new API version.
    #[must_use]
    pub const fn new(version: u16) -> Self {
        Self(version)
    }

    /// Numeric value.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self(800)
    }
}

impl From<u16> for ApiVersion {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl Display for ApiVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}

/// Reference to an appliance resource.
///
/// Every resource model exposes its `uri` and optional `eTag`.
pub trait Resource {
    /// Resource URI, absent for values not yet created.
    fn uri(&self) -> Option<&ResourceUri>;

    /// Entity tag of the snapshot.
    fn etag(&self) -> Option<&ETag>;
}
