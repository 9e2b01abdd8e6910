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

//! Ethernet networks (`/rest/ethernet-networks`). Lookup only.

use crate::Error;
use crate::OneView;
use oneview_core::Appliance;
use oneview_core::ETag;
use oneview_core::ListQuery;
use oneview_core::ResourceList;
use oneview_core::ResourceUri;
use serde::Deserialize;
use serde::Serialize;

const ETHERNET_NETWORKS: &str = "/rest/ethernet-networks";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthernetNetwork {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<ResourceUri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "eTag", default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<ETag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlan_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    /// `Tagged`, `Untagged` or `Tunnel`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ethernet_network_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smart_link: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_network: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_template_uri: Option<ResourceUri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes_uri: Option<ResourceUri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

pub struct EthernetNetworks<A: Appliance> {
    oneview: OneView<A>,
}

impl<A: Appliance> EthernetNetworks<A> {
    pub(crate) const fn new(oneview: OneView<A>) -> Self {
        Self { oneview }
    }

    /// # Errors
    ///
    /// Returns an error if the appliance request fails.
    pub async fn list(
        &self,
        query: &ListQuery,
    ) -> Result<ResourceList<EthernetNetwork>, Error<A>> {
        self.oneview
            .appliance()
            .list(&ETHERNET_NETWORKS.into(), query)
            .await
            .map_err(Error::Appliance)
    }

    /// # Errors
    ///
    /// Returns an error if the appliance request fails.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<EthernetNetwork>, Error<A>> {
        self.oneview.first_by_name(ETHERNET_NETWORKS, name).await
    }
}
