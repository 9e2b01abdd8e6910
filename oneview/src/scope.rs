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

//! Scopes.
//!
//! A scope groups resources so that permissions can be restricted to them.
//! Besides the scope collection itself (`/rest/scopes`) the appliance keeps
//! the scope assignment of every resource at
//! `/rest/scopes/resources<resource uri>`.

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

const SCOPES: &str = "/rest/scopes";
const SCOPE_RESOURCES: &str = "/rest/scopes/resources";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scope {
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
    /// Scopes this scope belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes_uri: Option<ResourceUri>,
    /// Scopes assigned at creation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub initial_scope_uris: Vec<ResourceUri>,
    /// Resources added to the scope by the request.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub added_resource_uris: Vec<ResourceUri>,
    /// Resources removed from the scope by the request.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub removed_resource_uris: Vec<ResourceUri>,
}

impl Scope {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Scopes assigned to one resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceScope {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<ResourceUri>,
    #[serde(rename = "eTag", default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<ETag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_uri: Option<ResourceUri>,
    #[serde(default)]
    pub scope_uris: Vec<ResourceUri>,
}

fn resource_scope_uri(resource: &ResourceUri) -> ResourceUri {
    format!("{SCOPE_RESOURCES}{}", resource.path()).into()
}

/// Scope operations.
pub struct Scopes<A: Appliance> {
    oneview: OneView<A>,
}

impl<A: Appliance> Scopes<A> {
    pub(crate) const fn new(oneview: OneView<A>) -> Self {
        Self { oneview }
    }

    /// One page of scopes.
    ///
    /// # Errors
    ///
    /// Returns an error if the appliance request fails.
    pub async fn list(&self, query: &ListQuery) -> Result<ResourceList<Scope>, Error<A>> {
        self.oneview
            .appliance()
            .list(&SCOPES.into(), query)
            .await
            .map_err(Error::Appliance)
    }

    /// Scope named `name`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the appliance request fails.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Scope>, Error<A>> {
        self.oneview.first_by_name(SCOPES, name).await
    }

    /// # Errors
    ///
    /// Returns an error if the appliance request fails.
    pub async fn get_by_uri(&self, uri: &ResourceUri) -> Result<Scope, Error<A>> {
        self.oneview
            .appliance()
            .get(uri)
            .await
            .map_err(Error::Appliance)
    }

    /// Create a scope and wait for the task.
    ///
    /// # Errors
    ///
    /// Returns an error if the submission fails or the task does not succeed.
    pub async fn create(&self, scope: &Scope) -> Result<TaskHandle, Error<A>> {
        let submitted = self.oneview.appliance().create(&SCOPES.into(), scope).await;
        self.oneview.complete(submitted).await
    }

    /// Replace the scope and wait for the task.
    ///
    /// # Errors
    ///
    /// Returns an error if the scope has no `uri`, the submission fails or
    /// the task does not succeed.
    pub async fn update(&self, scope: &Scope) -> Result<TaskHandle, Error<A>> {
        let uri = scope.uri.as_ref().ok_or(Error::MissingUri("scope"))?;
        let submitted = self
            .oneview
            .appliance()
            .update(uri, scope.etag.as_ref(), scope)
            .await;
        self.oneview.complete(submitted).await
    }

    /// Delete the scope named `name`. Returns `false` if there is no such
    /// scope.
    ///
    /// # Errors
    ///
    /// Returns an error if an appliance request fails or the task does not
    /// succeed.
    pub async fn delete(&self, name: &str) -> Result<bool, Error<A>> {
        let Some(scope) = self.get_by_name(name).await? else {
            info!(scope = name, "scope not found, nothing to delete");
            return Ok(false);
        };
        let uri = scope.uri.as_ref().ok_or(Error::MissingUri("scope"))?;
        let submitted = self
            .oneview
            .appliance()
            .delete(uri, scope.etag.as_ref())
            .await;
        self.oneview.complete(submitted).await?;
        Ok(true)
    }

    /// Scopes assigned to the resource at `resource`.
    ///
    /// # Errors
    ///
    /// Returns an error if the appliance request fails.
    pub async fn get_for_resource(
        &self,
        resource: &ResourceUri,
    ) -> Result<ResourceScope, Error<A>> {
        self.oneview
            .appliance()
            .get(&resource_scope_uri(resource))
            .await
            .map_err(Error::Appliance)
    }

    /// Replace the scope assignment of a resource and wait for the task.
    ///
    /// # Errors
    ///
    /// Returns an error if `resource_uri` is not set, the submission fails or
    /// the task does not succeed.
    pub async fn update_for_resource(
        &self,
        scopes: &ResourceScope,
    ) -> Result<TaskHandle, Error<A>> {
        let resource = scopes
            .resource_uri
            .as_ref()
            .ok_or(Error::MissingUri("scoped resource"))?;
        let submitted = self
            .oneview
            .appliance()
            .update(&resource_scope_uri(resource), scopes.etag.as_ref(), scopes)
            .await;
        self.oneview.complete(submitted).await
    }
}
