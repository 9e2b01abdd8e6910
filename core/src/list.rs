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

//! Paged collection responses.

use crate::ETag;
use crate::ResourceUri;
use serde::Deserialize;
use serde::Serialize;

/// One page of a OneView collection.
///
/// Collection endpoints always answer with this envelope; `members`
/// carries the resources of the page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceList<T> {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<ResourceUri>,
    #[serde(rename = "eTag", default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<ETag>,
    #[serde(default)]
    pub start: u32,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_page_uri: Option<ResourceUri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_uri: Option<ResourceUri>,
    #[serde(default = "Vec::new")]
    pub members: Vec<T>,
}

impl<T> Default for ResourceList<T> {
    fn default() -> Self {
        Self {
            resource_type: None,
            category: None,
            uri: None,
            etag: None,
            start: 0,
            count: 0,
            total: 0,
            prev_page_uri: None,
            next_page_uri: None,
            members: Vec::new(),
        }
    }
}

impl<T> ResourceList<T> {
    /// First member of the page.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.members.first()
    }

    /// Take the first member of the page.
    #[must_use]
    pub fn into_first(self) -> Option<T> {
        self.members.into_iter().next()
    }

    /// URI of the following page, if the collection has one.
    #[must_use]
    pub fn next_page(&self) -> Option<&ResourceUri> {
        self.next_page_uri.as_ref()
    }

    /// Page has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
