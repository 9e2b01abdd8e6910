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

//! Server hardware (`/rest/server-hardware`): lookup and power control.

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
use tracing::debug;
use tracing::info;

const SERVER_HARDWARE: &str = "/rest/server-hardware";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerState {
    On,
    Off,
    PoweringOn,
    PoweringOff,
    Resetting,
    #[serde(other)]
    Unknown,
}

/// How a power state change is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerControl {
    MomentaryPress,
    /// Forced power off.
    PressAndHold,
    ColdBoot,
    Reset,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PowerRequest {
    power_state: PowerState,
    power_control: PowerControl,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerHardware {
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
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_state: Option<PowerState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_profile_uri: Option<ResourceUri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ServerHardware {
    #[must_use]
    pub fn is_powered_off(&self) -> bool {
        self.power_state == Some(PowerState::Off)
    }
}

/// Server hardware operations.
pub struct Servers<A: Appliance> {
    oneview: OneView<A>,
}

impl<A: Appliance> Servers<A> {
    pub(crate) const fn new(oneview: OneView<A>) -> Self {
        Self { oneview }
    }

    /// # Errors
    ///
    /// Returns an error if the appliance request fails.
    pub async fn list(&self, query: &ListQuery) -> Result<ResourceList<ServerHardware>, Error<A>> {
        self.oneview
            .appliance()
            .list(&SERVER_HARDWARE.into(), query)
            .await
            .map_err(Error::Appliance)
    }

    /// # Errors
    ///
    /// Returns an error if the appliance request fails.
    pub async fn get(&self, uri: &ResourceUri) -> Result<ServerHardware, Error<A>> {
        self.oneview
            .appliance()
            .get(uri)
            .await
            .map_err(Error::Appliance)
    }

    /// # Errors
    ///
    /// Returns an error if the appliance request fails.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<ServerHardware>, Error<A>> {
        self.oneview.first_by_name(SERVER_HARDWARE, name).await
    }

    /// Change the power state and wait for the task.
    ///
    /// # Errors
    ///
    /// Returns an error if the server has no `uri`, the submission fails or
    /// the task does not succeed.
    pub async fn set_power_state(
        &self,
        server: &ServerHardware,
        power_state: PowerState,
        power_control: PowerControl,
    ) -> Result<TaskHandle, Error<A>> {
        let uri = server
            .uri
            .as_ref()
            .ok_or(Error::MissingUri("server hardware"))?
            .join("powerState");
        debug!(%uri, ?power_state, ?power_control, "changing server power state");
        let request = PowerRequest {
            power_state,
            power_control,
        };
        let submitted = self.oneview.appliance().update(&uri, None, &request).await;
        self.oneview.complete(submitted).await
    }

    /// Force the server off. Returns `false` if it is already off.
    ///
    /// # Errors
    ///
    /// Returns an error if the power change fails.
    pub async fn power_off(&self, server: &ServerHardware) -> Result<bool, Error<A>> {
        if server.is_powered_off() {
            return Ok(false);
        }
        info!(
            server = server.name.as_deref().unwrap_or("unnamed"),
            "powering server off"
        );
        self.set_power_state(server, PowerState::Off, PowerControl::PressAndHold)
            .await?;
        Ok(true)
    }
}
