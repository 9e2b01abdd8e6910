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

//! Core types of the OneView client.
//!
//! - [`Appliance`]: transport-agnostic access to the REST API.
//! - [`ResourceUri`], [`ETag`], [`ApiVersion`]: identifiers.
//! - [`ResourceList`] and [`query::ListQuery`]: collections.
//! - [`Task`] and [`TaskHandle`]: asynchronous operations.

pub mod appliance;
pub mod list;
pub mod query;
pub mod task;
pub mod uri;

#[doc(inline)]
pub use appliance::Appliance;
#[doc(inline)]
pub use list::ResourceList;
#[doc(inline)]
pub use query::Filter;
#[doc(inline)]
pub use query::ListQuery;
#[doc(inline)]
pub use query::SortOrder;
#[doc(inline)]
pub use task::Reply;
#[doc(inline)]
pub use task::Task;
#[doc(inline)]
pub use task::TaskHandle;
#[doc(inline)]
pub use task::TaskState;
#[doc(inline)]
pub use uri::ApiVersion;
#[doc(inline)]
pub use uri::ETag;
#[doc(inline)]
pub use uri::Resource;
#[doc(inline)]
pub use uri::ResourceUri;
