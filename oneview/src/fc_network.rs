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

//! Fibre Channel networks (`/rest/fc-networks`).

use crate::Error;
use crate::OneView;
use oneview_core::Appliance;
use oneview_core::ETag;
use oneview_core::ListQuery;
use oneview_core::ResourceList;
use oneview_core::ResourceUri;
use oneview_core::TaskHandle;
use serde::Deserialize;
use serde::Serialize;
use tracing::info;

const FC_NETWORKS: &str = "/rest/fc-networks";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FcNetwork {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<ResourceUri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "eTag", default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<ETag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// `FabricAttach` or `DirectAttach`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fabric_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_login_redistribution: Option<bool>,
    /// Seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_stability_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_san_uri: Option<ResourceUri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_template_uri: Option<ResourceUri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes_uri: Option<ResourceUri>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub initial_scope_uris: Vec<ResourceUri>,
}

/// FC network operations.
pub struct FcNetworks<A: Appliance> {
    oneview: OneView<A>,
}

impl<A: Appliance> FcNetworks<A> {
    pub(crate) const fn new(oneview: OneView<A>) -> Self {
        Self { oneview }
    }

    /// One page of FC networks.
    ///
    /// # Errors
    ///
    /// Returns an error if the appliance request fails.
    pub async fn list(&self, query: &ListQuery) -> Result<ResourceList<FcNetwork>, Error<A>> {
        self.oneview
            .appliance()
            .list(&FC_NETWORKS.into(), query)
            .await
            .map_err(Error::Appliance)
    }

    /// # Errors
    ///
    /// Returns an error if the appliance request fails.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<FcNetwork>, Error<A>> {
        self.oneview.first_by_name(FC_NETWORKS, name).await
    }

    /// Create a network and wait for the task.
    ///
    /// # Errors
    ///
    /// Returns an error if the submission fails or the task does not succeed.
    pub async fn create(&self, network: &FcNetwork) -> Result<TaskHandle, Error<A>> {
        let submitted = self
            .oneview
            .appliance()
            .create(&FC_NETWORKS.into(), network)
            .await;
        self.oneview.complete(submitted).await
    }

    /// Replace the network and wait for the task.
    ///
    /// # Errors
    ///
    /// Returns an error if the network has no `uri`, the submission fails or
    /// the task does not succeed.
    pub async fn update(&self, network: &FcNetwork) -> Result<TaskHandle, Error<A>> {
        let uri = network.uri.as_ref().ok_or(Error::MissingUri("fc network"))?;
        let submitted = self
            .oneview
            .appliance()
            .update(uri, network.etag.as_ref(), network)
            .await;
        self.oneview.complete(submitted).await
    }

    /// Delete the network named `name`. Returns `false` if there is no such
    /// network.
    ///
    /// # Errors
    ///
    /// Returns an error if an appliance request fails or the task does not
    /// succeed.
    pub async fn delete(&self, name: &str) -> Result<bool, Error<A>> {
        let Some(network) = self.get_by_name(name).await? else {
            info!(network = name, "fc network not found, nothing to delete");
            return Ok(false);
        };
        let uri = network.uri.as_ref().ok_or(Error::MissingUri("fc network"))?;
        let submitted = self
            .oneview
            .appliance()
            .delete(uri, network.etag.as_ref())
            .await;
        self.oneview.complete(submitted).await?;
        Ok(true)
    }
}
