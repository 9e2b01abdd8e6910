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

//! OneView appliance client abstraction
//!
//! This module defines the transport-agnostic [`Appliance`] trait, a minimal
//! interface for interacting with the OneView REST API. Implementors provide
//! asynchronous operations to retrieve resources and collections, and to
//! submit create/update/delete requests.
//!
//! Key concepts:
//! - Resource identity: every resource is identified by its `uri` ([`crate::ResourceUri`]).
//! - Collections: list requests return one [`crate::ResourceList`] page and
//!   accept a [`crate::query::ListQuery`].
//! - Submissions: mutating requests never wait for the appliance to finish.
//!   They return a [`crate::TaskHandle`] right away; the caller decides when
//!   to wait on it.
//!
//! Operation semantics:
//! - `get` fetches the resource at the given URI.
//! - `list` fetches one page of the collection at the given URI.
//! - `create` performs a POST to a collection.
//! - `update` performs a PUT of the whole resource.
//! - `delete` removes the resource.
//!
//! Notes for implementors:
//! - The trait is `Send + Sync` and returns `Send` futures to support use in
//!   async runtimes and multithreaded contexts.
//! - Session handling (login, refresh) is an implementation detail hidden
//!   behind the trait.
//! - Submission errors are returned as is; retrying is left to the caller.

use crate::query::ListQuery;
use crate::ETag;
use crate::ResourceList;
use crate::ResourceUri;
use crate::TaskHandle;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error as StdError;
use std::future::Future;

/// Access to a OneView appliance over its REST API.
pub trait Appliance: Send + Sync {
    /// Appliance Error.
    type Error: StdError + Send + Sync + 'static;

    /// Get the resource at `uri`.
    ///
    /// `T` is structure that is used for return type.
    fn get<T: DeserializeOwned + Send + Sync>(
        &self,
        uri: &ResourceUri,
    ) -> impl Future<Output = Result<T, Self::Error>> + Send;

    /// Get one page of the collection at `uri`.
    fn list<T: DeserializeOwned + Send + Sync>(
        &self,
        uri: &ResourceUri,
        query: &ListQuery,
    ) -> impl Future<Output = Result<ResourceList<T>, Self::Error>> + Send;

    /// Submit creation of a collection element.
    ///
    /// `V` is structure that is used for create.
    fn create<V: Serialize + Send + Sync>(
        &self,
        uri: &ResourceUri,
        body: &V,
    ) -> impl Future<Output = Result<TaskHandle, Self::Error>> + Send;

    /// Submit replacement of a resource.
    ///
    /// `etag` guards the update; implementations fall back to their
    /// configured default when it is `None`.
    fn update<V: Serialize + Send + Sync>(
        &self,
        uri: &ResourceUri,
        etag: Option<&ETag>,
        body: &V,
    ) -> impl Future<Output = Result<TaskHandle, Self::Error>> + Send;

    /// Submit deletion of a resource.
    fn delete(
        &self,
        uri: &ResourceUri,
        etag: Option<&ETag>,
    ) -> impl Future<Output = Result<TaskHandle, Self::Error>> + Send;
}
