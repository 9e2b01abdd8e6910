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

//! Server profiles (`/rest/server-profiles`).
//!
//! A server profile captures the configuration of one server: firmware,
//! BIOS, boot order, network connections and storage. Profiles are usually
//! created from a template profile and assigned to a blade, see
//! [`ServerProfiles::create_from_template`].

use crate::server_hardware::ServerHardware;
use crate::Error;
use crate::OneView;
use oneview_core::Appliance;
use oneview_core::ETag;
use oneview_core::Filter;
use oneview_core::ListQuery;
use oneview_core::ResourceList;
use oneview_core::ResourceUri;
use oneview_core::SortOrder;
use oneview_core::TaskHandle;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use tracing::info;
use tracing::warn;

const SERVER_PROFILES: &str = "/rest/server-profiles";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirmwareOption {
    /// How the firmware bundle is installed, such as `FirmwareOnly` or
    /// `FirmwareOnlyOfflineMode`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firmware_install_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_install_firmware: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firmware_baseline_uri: Option<ResourceUri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manage_firmware: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootModeOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manage_mode: Option<bool>,
    /// `BIOS` or `UEFI`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pxe_boot_policy: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootManagement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manage_boot: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiosSetting {
    pub id: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiosOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manage_bios: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overridden_settings: Vec<BiosSetting>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array_wwpn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lun: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionBoot {
    /// `Primary`, `Secondary` or `NotBootable`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boot_volume_source: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<BootTarget>,
}

/// Network connection of a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `Ethernet` or `FibreChannel`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_uri: Option<ResourceUri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_mbps: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocated_mbps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_mbps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wwpn_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wwnn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wwpn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boot: Option<ConnectionBoot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Connection {
    /// Requested settings without the addresses and state allocated by the
    /// appliance.
    #[must_use]
    pub fn from_template(template: &Self) -> Self {
        Self {
            id: template.id,
            name: template.name.clone(),
            function_type: template.function_type.clone(),
            network_uri: template.network_uri.clone(),
            port_id: template.port_id.clone(),
            requested_mbps: template.requested_mbps.clone(),
            mac_type: template.mac_type.clone(),
            wwpn_type: template.wwpn_type.clone(),
            boot: template.boot.clone(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicalDrive {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical_drive_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bootable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raid_level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalStorageOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manage_local_storage: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initialize: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub logical_drives: Vec<LogicalDrive>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoragePath {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_target_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeAttachment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_uri: Option<ResourceUri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_storage_system_uri: Option<ResourceUri>,
    /// `Auto` or `Manual`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lun_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lun: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub storage_paths: Vec<StoragePath>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanStorageOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_os_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manage_san_storage: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volume_attachments: Vec<VolumeAttachment>,
}

impl SanStorageOptions {
    /// Requested attachments without their runtime state.
    #[must_use]
    pub fn from_template(template: &Self) -> Self {
        Self {
            host_os_type: template.host_os_type.clone(),
            manage_san_storage: template.manage_san_storage,
            volume_attachments: template
                .volume_attachments
                .iter()
                .map(|attachment| VolumeAttachment {
                    state: None,
                    status: None,
                    storage_paths: attachment
                        .storage_paths
                        .iter()
                        .map(|path| StoragePath {
                            status: None,
                            ..path.clone()
                        })
                        .collect(),
                    ..attachment.clone()
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerProfile {
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
    /// `Bay` or `BayAndServer`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affinity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_server: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bios: Option<BiosOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boot: Option<BootManagement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boot_mode: Option<BootModeOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connections: Vec<Connection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enclosure_bay: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enclosure_group_uri: Option<ResourceUri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enclosure_uri: Option<ResourceUri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firmware: Option<FirmwareOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_unused_flex_nics: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_progress: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_storage: Option<LocalStorageOptions>,
    /// `Physical`, `Virtual` or `UserDefined`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub san_storage: Option<SanStorageOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_hardware_type_uri: Option<ResourceUri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_hardware_uri: Option<ResourceUri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_uri: Option<ResourceUri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wwn_type: Option<String>,
}

impl ServerProfile {
    /// Template-level settings of `template`.
    ///
    /// Identity (`uri`, `eTag`, serial number, UUID), server assignment and
    /// appliance-maintained state are dropped, so the result can be submitted
    /// as a new profile.
    #[must_use]
    pub fn from_template(template: &Self) -> Self {
        Self {
            resource_type: template.resource_type.clone(),
            name: template.name.clone(),
            description: template.description.clone(),
            affinity: template.affinity.clone(),
            bios: template.bios.clone(),
            boot: template.boot.clone(),
            boot_mode: template.boot_mode.clone(),
            connections: template
                .connections
                .iter()
                .map(Connection::from_template)
                .collect(),
            enclosure_bay: template.enclosure_bay,
            enclosure_group_uri: template.enclosure_group_uri.clone(),
            enclosure_uri: template.enclosure_uri.clone(),
            firmware: template.firmware.clone(),
            hide_unused_flex_nics: template.hide_unused_flex_nics,
            local_storage: template.local_storage.clone(),
            mac_type: template.mac_type.clone(),
            san_storage: template
                .san_storage
                .as_ref()
                .map(SanStorageOptions::from_template),
            serial_number_type: template.serial_number_type.clone(),
            wwn_type: template.wwn_type.clone(),
            ..Self::default()
        }
    }

    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed")
    }
}

/// Server profile operations.
pub struct ServerProfiles<A: Appliance> {
    oneview: OneView<A>,
}

impl<A: Appliance> ServerProfiles<A> {
    pub(crate) const fn new(oneview: OneView<A>) -> Self {
        Self { oneview }
    }

    /// One page of profiles.
    ///
    /// # Errors
    ///
    /// Returns an error if the appliance request fails.
    pub async fn list(&self, query: &ListQuery) -> Result<ResourceList<ServerProfile>, Error<A>> {
        self.oneview
            .appliance()
            .list(&SERVER_PROFILES.into(), query)
            .await
            .map_err(Error::Appliance)
    }

    /// # Errors
    ///
    /// Returns an error if the appliance request fails.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<ServerProfile>, Error<A>> {
        self.oneview.first_by_name(SERVER_PROFILES, name).await
    }

    /// Profile with the given serial number.
    ///
    /// # Errors
    ///
    /// Returns an error if the appliance request fails.
    pub async fn get_by_serial_number(
        &self,
        serial_number: &str,
    ) -> Result<Option<ServerProfile>, Error<A>> {
        let query = ListQuery::new()
            .filter(Filter::matches("serialNumber", serial_number))
            .sort_by("name", SortOrder::Asc);
        self.oneview.first_matching(SERVER_PROFILES, query).await
    }

    /// Submit creation of `profile` without waiting.
    ///
    /// # Errors
    ///
    /// Returns an error if the submission fails.
    pub async fn submit_new(&self, profile: &ServerProfile) -> Result<TaskHandle, Error<A>> {
        info!(
            profile = profile.display_name(),
            "initializing creation of server profile"
        );
        let handle = self
            .oneview
            .appliance()
            .create(&SERVER_PROFILES.into(), profile)
            .await
            .map_err(Error::Appliance)?;
        debug!(task = ?handle.uri(), "server profile creation submitted");
        Ok(handle)
    }

    /// Create profile `name` from `template`, assigned to `blade`, and wait
    /// for the task.
    ///
    /// # Errors
    ///
    /// Returns an error if the submission fails or the task does not succeed.
    pub async fn create_from_template(
        &self,
        name: &str,
        template: &ServerProfile,
        blade: &ServerHardware,
    ) -> Result<TaskHandle, Error<A>> {
        let mut profile = ServerProfile::from_template(template);
        profile.server_hardware_uri = blade.uri.clone();
        profile.description = Some(format!(
            "{} {name}",
            profile.description.unwrap_or_default()
        ));
        profile.name = Some(name.to_string());

        let mut handle = self.submit_new(&profile).await?;
        self.oneview.wait(&mut handle).await?;
        Ok(handle)
    }

    /// Submit deletion of `profile` without waiting. A profile without
    /// `uri` was never created; the returned handle is already done.
    ///
    /// # Errors
    ///
    /// Returns an error if the submission fails.
    pub async fn submit_delete(&self, profile: &ServerProfile) -> Result<TaskHandle, Error<A>> {
        let Some(uri) = profile.uri.as_ref() else {
            warn!(
                profile = profile.display_name(),
                "unable to post delete, no uri found"
            );
            return Ok(TaskHandle::completed(None));
        };
        let handle = self
            .oneview
            .appliance()
            .delete(uri, profile.etag.as_ref())
            .await
            .map_err(Error::Appliance)?;
        debug!(task = ?handle.uri(), "server profile deletion submitted");
        Ok(handle)
    }

    /// Delete the profile named `name`, powering its server off first.
    /// Returns `false` if there is no such profile.
    ///
    /// Only a named server is powered off. Failure to look the server up or
    /// to power it off is logged and does not stop the deletion.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile lookup or the deletion fails.
    pub async fn delete(&self, name: &str) -> Result<bool, Error<A>> {
        let Some(profile) = self.get_by_name(name).await? else {
            info!(
                profile = name,
                "profile could not be found to delete, skipping delete"
            );
            return Ok(false);
        };

        let servers = self.oneview.server_hardware();
        let mut server = None;
        if let Some(uri) = &profile.server_hardware_uri {
            match servers.get(uri).await {
                Ok(hardware) if hardware.name.as_deref().is_some_and(|n| !n.is_empty()) => {
                    server = Some(hardware);
                }
                Ok(_) => debug!(%uri, "server hardware has no name, not powering it off"),
                Err(err) => warn!(%uri, error = %err, "problem getting server hardware"),
            }
        }
        info!(
            profile = profile.display_name(),
            server = server
                .as_ref()
                .and_then(|s| s.name.as_deref())
                .unwrap_or("no server"),
            "deleting server profile, server will be unassigned"
        );

        if let Some(server) = &server {
            if let Err(err) = servers.power_off(server).await {
                warn!(error = %err, "cannot power server off, deleting profile anyway");
            }
        }

        let mut handle = self.submit_delete(&profile).await?;
        self.oneview.wait(&mut handle).await?;
        Ok(true)
    }
}
