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

use crate::config::ConfigError;
use oneview_core::Appliance;
use oneview_core::TaskState;
use std::error::Error as StdError;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

/// OneView client errors.
pub enum Error<A: Appliance> {
    /// Error returned by the appliance transport.
    Appliance(A::Error),
    /// Invalid configuration.
    Config(ConfigError),
    /// Resource has no `uri`, so it cannot be addressed.
    MissingUri(&'static str),
    /// Task reached a terminal state other than success.
    TaskFailed {
        task: String,
        state: TaskState,
        message: String,
    },
    /// Task status could not be read repeatedly; tracking was abandoned.
    TaskPolling {
        task: String,
        reason: String,
    },
    /// Task did not finish within the poll budget. The handle is still
    /// pending and may be waited on again.
    TaskTimeout {
        task: String,
        polls: u32,
    },
}

impl<A: Appliance> Error<A> {
    /// Error reported by a task or task tracking.
    #[must_use]
    pub const fn is_task_error(&self) -> bool {
        matches!(
            self,
            Self::TaskFailed { .. } | Self::TaskPolling { .. } | Self::TaskTimeout { .. }
        )
    }
}

impl<A: Appliance> Display for Error<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Appliance(err) => write!(f, "appliance error: {err}"),
            Self::Config(err) => write!(f, "configuration error: {err}"),
            Self::MissingUri(kind) => write!(f, "{kind} has no uri"),
            Self::TaskFailed {
                task,
                state,
                message,
            } => {
                if message.is_empty() {
                    write!(f, "task {task} finished in state {state}")
                } else {
                    write!(f, "task {task} finished in state {state}: {message}")
                }
            }
            Self::TaskPolling { task, reason } => {
                write!(f, "cannot track task {task}: {reason}")
            }
            Self::TaskTimeout { task, polls } => {
                write!(f, "task {task} is still running after {polls} polls")
            }
        }
    }
}

impl<A: Appliance> Debug for Error<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Appliance(err) => f.debug_tuple("Appliance").field(err).finish(),
            Self::Config(err) => f.debug_tuple("Config").field(err).finish(),
            Self::MissingUri(kind) => f.debug_tuple("MissingUri").field(kind).finish(),
            Self::TaskFailed {
                task,
                state,
                message,
            } => f
                .debug_struct("TaskFailed")
                .field("task", task)
                .field("state", state)
                .field("message", message)
                .finish(),
            Self::TaskPolling { task, reason } => f
                .debug_struct("TaskPolling")
                .field("task", task)
                .field("reason", reason)
                .finish(),
            Self::TaskTimeout { task, polls } => f
                .debug_struct("TaskTimeout")
                .field("task", task)
                .field("polls", polls)
                .finish(),
        }
    }
}

impl<A: Appliance> StdError for Error<A> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Appliance(err) => Some(err),
            Self::Config(err) => Some(err),
            _ => None,
        }
    }
}
