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

//! High-level client for the HPE OneView REST API.
//!
//! [`OneView`] wraps an [`Appliance`] implementation and hands out operation
//! groups, one per resource kind:
//!
//! - [`OneView::scopes`]: scopes and scope assignment of resources.
//! - [`OneView::fc_networks`]: Fibre Channel networks.
//! - [`OneView::ethernet_networks`]: Ethernet network lookup.
//! - [`OneView::server_profiles`]: server profiles, including creation from
//!   a template and deletion with power-off of the assigned server.
//! - [`OneView::server_hardware`]: server lookup and power control.
//! - [`OneView::ssh_access`]: appliance SSH access switch.
//!
//! Mutating operations submit a request and wait for the resulting task
//! according to the client's [`WaitPolicy`]. Operations named `submit_*`
//! return the [`TaskHandle`] without waiting; pass it to
//! [`OneView::wait`] later.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "http")]
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use oneview::Config;
//! use oneview::HttpOneView;
//!
//! let config = Config::from_env()?;
//! let oneview = HttpOneView::connect(&config)?;
//! if let Some(scope) = oneview.scopes().get_by_name("production").await? {
//!     println!("{:?}", scope.description);
//! }
//! # Ok(())
//! # }
//! ```

pub mod appliance_ssh;
pub mod config;
pub mod error;
pub mod ethernet_network;
pub mod fc_network;
pub mod scope;
pub mod server_hardware;
pub mod server_profile;
pub mod task;

#[doc(inline)]
pub use appliance_ssh::SshAccess;
#[doc(inline)]
pub use config::Config;
#[doc(inline)]
pub use config::ConfigError;
#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use ethernet_network::EthernetNetwork;
#[doc(inline)]
pub use fc_network::FcNetwork;
#[doc(inline)]
pub use scope::ResourceScope;
#[doc(inline)]
pub use scope::Scope;
#[doc(inline)]
pub use server_hardware::PowerControl;
#[doc(inline)]
pub use server_hardware::PowerState;
#[doc(inline)]
pub use server_hardware::ServerHardware;
#[doc(inline)]
pub use server_profile::ServerProfile;
#[doc(inline)]
pub use task::WaitPolicy;

pub use oneview_core::Appliance;
pub use oneview_core::ETag;
pub use oneview_core::Filter;
pub use oneview_core::ListQuery;
pub use oneview_core::Resource;
pub use oneview_core::ResourceList;
pub use oneview_core::ResourceUri;
pub use oneview_core::SortOrder;
pub use oneview_core::TaskHandle;

use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Client bound to one appliance.
pub struct OneView<A: Appliance> {
    appliance: Arc<A>,
    wait_policy: WaitPolicy,
}

impl<A: Appliance> Clone for OneView<A> {
    fn clone(&self) -> Self {
        Self {
            appliance: self.appliance.clone(),
            wait_policy: self.wait_policy,
        }
    }
}

impl<A: Appliance> OneView<A> {
    /// Create a client with the default [`WaitPolicy`].
    pub fn new(appliance: Arc<A>) -> Self {
        Self {
            appliance,
            wait_policy: WaitPolicy::default(),
        }
    }

    /// Replace the task wait policy.
    #[must_use]
    pub const fn with_wait_policy(mut self, wait_policy: WaitPolicy) -> Self {
        self.wait_policy = wait_policy;
        self
    }

    pub fn appliance(&self) -> &A {
        &self.appliance
    }

    pub const fn wait_policy(&self) -> &WaitPolicy {
        &self.wait_policy
    }

    pub fn scopes(&self) -> scope::Scopes<A> {
        scope::Scopes::new(self.clone())
    }

    pub fn fc_networks(&self) -> fc_network::FcNetworks<A> {
        fc_network::FcNetworks::new(self.clone())
    }

    pub fn ethernet_networks(&self) -> ethernet_network::EthernetNetworks<A> {
        ethernet_network::EthernetNetworks::new(self.clone())
    }

    pub fn server_profiles(&self) -> server_profile::ServerProfiles<A> {
        server_profile::ServerProfiles::new(self.clone())
    }

    pub fn server_hardware(&self) -> server_hardware::Servers<A> {
        server_hardware::Servers::new(self.clone())
    }

    pub fn ssh_access(&self) -> appliance_ssh::ApplianceSsh<A> {
        appliance_ssh::ApplianceSsh::new(self.clone())
    }

    /// Wait for a submitted task with the client's policy.
    ///
    /// # Errors
    ///
    /// See [`task::wait`].
    pub async fn wait(&self, handle: &mut TaskHandle) -> Result<(), Error<A>> {
        task::wait(self.appliance.as_ref(), &self.wait_policy, handle).await
    }

    /// Wait for a fresh submission and hand the finished handle back.
    pub(crate) async fn complete(
        &self,
        submitted: Result<TaskHandle, A::Error>,
    ) -> Result<TaskHandle, Error<A>> {
        let mut handle = submitted.map_err(Error::Appliance)?;
        self.wait(&mut handle).await?;
        Ok(handle)
    }

    /// First member of `collection` named `name`.
    pub(crate) async fn first_by_name<T>(
        &self,
        collection: &str,
        name: &str,
    ) -> Result<Option<T>, Error<A>>
    where
        T: DeserializeOwned + Send + Sync,
    {
        self.first_matching(collection, ListQuery::by_name(name))
            .await
    }

    pub(crate) async fn first_matching<T>(
        &self,
        collection: &str,
        query: ListQuery,
    ) -> Result<Option<T>, Error<A>>
    where
        T: DeserializeOwned + Send + Sync,
    {
        let list: ResourceList<T> = self
            .appliance
            .list(&ResourceUri::from(collection), &query)
            .await
            .map_err(Error::Appliance)?;
        Ok(list.into_first())
    }
}

/// Appliance reached over HTTP with the reqwest client.
#[cfg(feature = "http")]
pub type HttpAppliance = oneview_http::HttpAppliance<oneview_http::reqwest::Client>;

#[cfg(feature = "http")]
pub type HttpOneView = OneView<HttpAppliance>;

#[cfg(feature = "http")]
impl HttpOneView {
    /// Build an HTTP client for the configured appliance. No request is
    /// sent until the first operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is invalid or the HTTP client cannot
    /// be built.
    pub fn connect(config: &Config) -> Result<Self, Error<HttpAppliance>> {
        use oneview_http::reqwest::ApplianceError;
        use oneview_http::reqwest::Client;

        let endpoint = config.endpoint_url().map_err(Error::Config)?;
        let client = Client::with_params(config.client_params())
            .map_err(|err| Error::Appliance(ApplianceError::ReqwestError(err)))?;
        let appliance = HttpAppliance::new(
            client,
            endpoint,
            config.credentials(),
            config.session_settings(),
        );
        Ok(Self::new(Arc::new(appliance)))
    }
}

macro_rules! impl_resource {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl oneview_core::Resource for $ty {
                fn uri(&self) -> Option<&ResourceUri> {
                    self.uri.as_ref()
                }

                fn etag(&self) -> Option<&ETag> {
                    self.etag.as_ref()
                }
            }
        )+
    };
}

impl_resource!(
    Scope,
    ResourceScope,
    FcNetwork,
    EthernetNetwork,
    ServerProfile,
    ServerHardware,
    SshAccess,
);
