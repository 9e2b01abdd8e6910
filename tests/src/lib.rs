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

//! This is tests support lib.

/// Errors used in tests.
pub mod error;

#[doc(inline)]
pub use error::TestError;

use oneview::WaitPolicy;
use oneview_core::ListQuery;
use oneview_mock::Appliance as MockAppliance;
use oneview_mock::Expect as MockExpect;
use serde_json::json;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use std::time::Duration;

pub type Appliance = MockAppliance<TestError>;
pub type Expect = MockExpect<TestError>;
pub type OneView = oneview::OneView<Appliance>;

/// Client over `appliance` that polls tasks without delay.
pub fn oneview(appliance: &Arc<Appliance>) -> OneView {
    OneView::new(appliance.clone()).with_wait_policy(WaitPolicy::new().interval(Duration::ZERO))
}

/// Task record in the given state.
pub fn task(uri: &str, state: &str) -> JsonValue {
    json!({
        "type": "TaskResourceV2",
        "category": "tasks",
        "uri": uri,
        "name": "Test task",
        "taskState": state,
    })
}

/// Collection page with `members`.
pub fn page(category: &str, members: JsonValue) -> JsonValue {
    let count = members.as_array().map_or(0, Vec::len);
    json!({
        "category": category,
        "start": 0,
        "count": count,
        "total": count,
        "members": members,
    })
}

/// Query string of a lookup by name.
pub fn by_name(name: &str) -> String {
    ListQuery::by_name(name).to_query_string()
}

/// Task accepted by the appliance and still running.
pub fn running(uri: &str) -> JsonValue {
    task(uri, "Running")
}

/// Expect one poll of `task_uri` that finds the task completed.
pub fn expect_completion(appliance: &Appliance, task_uri: &str) {
    appliance.expect(Expect::get(task_uri, task(task_uri, "Completed")));
}
