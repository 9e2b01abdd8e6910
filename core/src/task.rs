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

//! Appliance tasks.
//!
//! Mutating requests (create, update, delete, power changes) are
//! executed asynchronously by the appliance. The immediate reply carries a
//! task, or at least a `Location` header pointing at one, and the caller
//! polls `GET <task uri>` until the task reaches a terminal state.
//!
//! This module defines the [`Task`] record as returned by the appliance and
//! the [`TaskHandle`] that a submission produces. Waiting on a handle is
//! implemented on top of an [`crate::Appliance`] by the high-level crate.

use crate::ResourceUri;
use core::fmt::Display;
use core::fmt::Formatter;
use core::fmt::Result as FmtResult;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// State of an appliance task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskState {
    New,
    Pending,
    Starting,
    Running,
    Suspended,
    Stopping,
    Completed,
    Warning,
    Error,
    Killed,
    Terminated,
    Interrupted,
    Unknown,
}

impl TaskState {
    /// Task will not change state anymore.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Completed
                | Self::Warning
                | Self::Error
                | Self::Killed
                | Self::Terminated
                | Self::Interrupted
        )
    }

    /// Task finished and its operation took effect.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Completed | Self::Warning)
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Pending => "Pending",
            Self::Starting => "Starting",
            Self::Running => "Running",
            Self::Suspended => "Suspended",
            Self::Stopping => "Stopping",
            Self::Completed => "Completed",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Killed => "Killed",
            Self::Terminated => "Terminated",
            Self::Interrupted => "Interrupted",
            Self::Unknown => "Unknown",
        }
    }
}

impl From<String> for TaskState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "New" => Self::New,
            "Pending" => Self::Pending,
            "Starting" => Self::Starting,
            "Running" => Self::Running,
            "Suspended" => Self::Suspended,
            "Stopping" => Self::Stopping,
            "Completed" => Self::Completed,
            "Warning" => Self::Warning,
            "Error" => Self::Error,
            "Killed" => Self::Killed,
            "Terminated" => Self::Terminated,
            "Interrupted" => Self::Interrupted,
            _ => Self::Unknown,
        }
    }
}

impl From<TaskState> for String {
    fn from(value: TaskState) -> Self {
        value.as_str().to_string()
    }
}

impl Display for TaskState {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Error reported by a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommended_actions: Vec<String>,
}

impl Display for TaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.message.as_deref().unwrap_or("unknown task error"))?;
        if !self.recommended_actions.is_empty() {
            write!(f, " ({})", self.recommended_actions.join(" "))?;
        }
        Ok(())
    }
}

/// Resource the task operates on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociatedResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_uri: Option<ResourceUri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub association_type: Option<String>,
}

/// Task record as returned by `GET /rest/tasks/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<ResourceUri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default = "unknown_state")]
    pub task_state: TaskState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_status: Option<String>,
    #[serde(default)]
    pub percent_complete: u32,
    #[serde(default)]
    pub computed_percent_complete: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub task_errors: Vec<TaskError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_resource: Option<AssociatedResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
}

const fn unknown_state() -> TaskState {
    TaskState::Unknown
}

impl Task {
    /// All task error messages joined into one description.
    #[must_use]
    pub fn error_summary(&self) -> String {
        self.task_errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Display name used in progress messages.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or_else(|| self.uri.as_ref().map(ResourceUri::as_str))
            .unwrap_or("task")
    }
}

/// Raw reply to a mutating request.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// HTTP status code.
    pub status: u16,
    /// `Location` header, if present.
    pub location: Option<ResourceUri>,
    /// JSON body, absent for empty bodies.
    pub body: Option<JsonValue>,
}

/// Handle of a submitted operation.
///
/// Produced immediately by a submission, before the operation completes.
/// The explicit done flag makes repeated waits idempotent: once the handle
/// is done, waiting returns the recorded outcome without polling.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskHandle {
    uri: Option<ResourceUri>,
    task: Option<Task>,
    resource: Option<JsonValue>,
    failure: Option<String>,
    done: bool,
}

impl TaskHandle {
    /// Handle of a task that still has to be polled.
    #[must_use]
    pub const fn pending(uri: ResourceUri) -> Self {
        Self {
            uri: Some(uri),
            task: None,
            resource: None,
            failure: None,
            done: false,
        }
    }

    /// Handle of an operation that completed synchronously.
    #[must_use]
    pub const fn completed(resource: Option<JsonValue>) -> Self {
        Self {
            uri: None,
            task: None,
            resource,
            failure: None,
            done: true,
        }
    }

    /// Build a handle from the reply to a mutating request.
    ///
    /// - A task body yields a handle on that task (done if already terminal).
    /// - Otherwise a `Location` header pointing to a task yields a pending handle.
    /// - Otherwise the operation completed synchronously and the body is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the body looks like a task but cannot be decoded.
    pub fn from_reply(reply: Reply) -> Result<Self, serde_json::Error> {
        let looks_like_task = reply.body.as_ref().is_some_and(|body| {
            body.get("category").and_then(JsonValue::as_str) == Some("tasks")
                || body.get("taskState").is_some()
        });
        if looks_like_task {
            let task: Task = serde_json::from_value(reply.body.unwrap_or(JsonValue::Null))?;
            let uri = task
                .uri
                .clone()
                .or_else(|| reply.location.filter(ResourceUri::is_task));
            let done = task.task_state.is_terminal() || uri.is_none();
            return Ok(Self {
                uri,
                task: Some(task),
                resource: None,
                failure: None,
                done,
            });
        }
        match reply.location.filter(ResourceUri::is_task) {
            Some(uri) => Ok(Self {
                resource: reply.body,
                ..Self::pending(uri)
            }),
            None => Ok(Self::completed(reply.body)),
        }
    }

    /// URI of the tracked task.
    #[must_use]
    pub fn uri(&self) -> Option<&ResourceUri> {
        self.uri.as_ref()
    }

    /// Last known task record.
    #[must_use]
    pub fn task(&self) -> Option<&Task> {
        self.task.as_ref()
    }

    /// Handle reached its final outcome.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Failure recorded when tracking was abandoned.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Handle is done and its operation took effect.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.done
            && self.failure.is_none()
            && self.task.as_ref().is_none_or(|t| t.task_state.is_success())
    }

    /// Resource returned by a synchronous completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be decoded as `T`.
    pub fn resource<T: DeserializeOwned>(&self) -> Result<Option<T>, serde_json::Error> {
        self.resource
            .clone()
            .map(serde_json::from_value)
            .transpose()
    }

    /// Record the latest task status. A terminal state marks the handle done.
    pub fn record(&mut self, task: Task) {
        if task.task_state.is_terminal() {
            self.done = true;
        }
        self.task = Some(task);
    }

    /// Stop tracking: the outcome is a failure with the given reason.
    pub fn abandon(&mut self, reason: String) {
        self.failure = Some(reason);
        self.done = true;
    }

    /// Mark the handle done without a task record.
    pub fn mark_done(&mut self) {
        self.done = true;
    }
}
