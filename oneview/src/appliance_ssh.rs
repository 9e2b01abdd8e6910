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

//! Appliance SSH access (`/rest/appliance/ssh-access`).

use crate::Error;
use crate::OneView;
use oneview_core::Appliance;
use oneview_core::ETag;
use oneview_core::ResourceUri;
use oneview_core::TaskHandle;
use serde::Deserialize;
use serde::Serialize;

const SSH_ACCESS: &str = "/rest/appliance/ssh-access";

/// Whether the appliance accepts SSH logins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SshAccess {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<ResourceUri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "eTag", default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<ETag>,
    #[serde(default)]
    pub allow_ssh_access: bool,
}

impl SshAccess {
    #[must_use]
    pub fn new(allow_ssh_access: bool) -> Self {
        Self {
            allow_ssh_access,
            ..Self::default()
        }
    }
}

pub struct ApplianceSsh<A: Appliance> {
    oneview: OneView<A>,
}

impl<A: Appliance> ApplianceSsh<A> {
    pub(crate) const fn new(oneview: OneView<A>) -> Self {
        Self { oneview }
    }

    /// # Errors
    ///
    /// Returns an error if the appliance request fails.
    pub async fn get(&self) -> Result<SshAccess, Error<A>> {
        self.oneview
            .appliance()
            .get(&SSH_ACCESS.into())
            .await
            .map_err(Error::Appliance)
    }

    /// Apply `access` and wait for the task.
    ///
    /// # Errors
    ///
    /// Returns an error if the submission fails or the task does not succeed.
    pub async fn set(&self, access: &SshAccess) -> Result<TaskHandle, Error<A>> {
        let submitted = self
            .oneview
            .appliance()
            .update(&SSH_ACCESS.into(), access.etag.as_ref(), access)
            .await;
        self.oneview.complete(submitted).await
    }
}
