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

//! Waiting for appliance tasks.
//!
//! A submission returns a [`TaskHandle`] right away. [`wait`] polls the task
//! until it reaches a terminal state and turns the final state into a
//! result:
//!
//! - `Completed` or `Warning`: success.
//! - Any other terminal state: [`Error::TaskFailed`].
//! - Polling errors are retried; more than
//!   [`WaitPolicy::max_poll_failures`] consecutive ones abandon the task
//!   with [`Error::TaskPolling`].
//! - Poll budget exhausted: [`Error::TaskTimeout`], the handle stays pending.
//!
//! Waiting on a done handle does not poll; it reports the recorded outcome
//! again.

use crate::Error;
use oneview_core::Appliance;
use oneview_core::Task;
use oneview_core::TaskHandle;
use oneview_core::TaskState;
use std::time::Duration;
use tracing::debug;
use tracing::info;
use tracing::warn;

/// Polling schedule of [`wait`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    /// Delay between two polls.
    pub interval: Duration,
    /// Maximum number of polls before giving up.
    pub max_polls: u32,
    /// Consecutive polling errors tolerated before the task is abandoned.
    pub max_poll_failures: u32,
}

impl Default for WaitPolicy {
    /// Poll every 10 seconds for up to 45 minutes.
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(10),
            max_polls: 270,
            max_poll_failures: 3,
        }
    }
}

impl WaitPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    #[must_use]
    pub const fn max_polls(mut self, max_polls: u32) -> Self {
        self.max_polls = max_polls;
        self
    }

    #[must_use]
    pub const fn max_poll_failures(mut self, max_poll_failures: u32) -> Self {
        self.max_poll_failures = max_poll_failures;
        self
    }
}

/// Wait until the task behind `handle` finishes.
///
/// # Errors
///
/// - [`Error::TaskFailed`] if the task ends in a failed state.
/// - [`Error::TaskPolling`] if the task status cannot be read.
/// - [`Error::TaskTimeout`] if the task is still running after
///   `policy.max_polls` polls.
pub async fn wait<A: Appliance>(
    appliance: &A,
    policy: &WaitPolicy,
    handle: &mut TaskHandle,
) -> Result<(), Error<A>> {
    if handle.is_done() {
        return outcome(handle);
    }
    let Some(uri) = handle.uri().cloned() else {
        handle.mark_done();
        return Ok(());
    };

    let mut failures = 0;
    for poll in 0..policy.max_polls {
        if poll > 0 {
            tokio::time::sleep(policy.interval).await;
        }
        match appliance.get::<Task>(&uri).await {
            Ok(task) => {
                failures = 0;
                debug!(
                    task = %uri,
                    state = %task.task_state,
                    percent = task.computed_percent_complete.max(task.percent_complete),
                    "task progress"
                );
                handle.record(task);
                if handle.is_done() {
                    report(handle);
                    return outcome(handle);
                }
            }
            Err(err) => {
                failures += 1;
                if failures > policy.max_poll_failures {
                    handle.abandon(format!(
                        "{failures} consecutive polling errors, last one: {err}"
                    ));
                    return outcome(handle);
                }
                warn!(task = %uri, attempt = failures, error = %err, "cannot read task status, retrying");
            }
        }
    }
    Err(Error::TaskTimeout {
        task: uri.to_string(),
        polls: policy.max_polls,
    })
}

fn report(handle: &TaskHandle) {
    let Some(task) = handle.task() else {
        return;
    };
    match task.task_state {
        TaskState::Completed => info!(task = task.display_name(), "task completed"),
        TaskState::Warning => warn!(
            task = task.display_name(),
            warnings = %task.error_summary(),
            "task completed with warnings"
        ),
        state => warn!(task = task.display_name(), %state, "task failed"),
    }
}

/// Result recorded in a done handle.
fn outcome<A: Appliance>(handle: &TaskHandle) -> Result<(), Error<A>> {
    let name = || {
        handle
            .task()
            .map(Task::display_name)
            .or_else(|| handle.uri().map(|uri| uri.as_str()))
            .unwrap_or("task")
            .to_string()
    };
    if let Some(reason) = handle.failure() {
        return Err(Error::TaskPolling {
            task: name(),
            reason: reason.to_string(),
        });
    }
    match handle.task() {
        Some(task) if task.task_state.is_terminal() && !task.task_state.is_success() => {
            Err(Error::TaskFailed {
                task: name(),
                state: task.task_state,
                message: task.error_summary(),
            })
        }
        _ => Ok(()),
    }
}
