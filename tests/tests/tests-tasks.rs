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

//! Integration tests of task tracking.

use oneview::Error;
use oneview::WaitPolicy;
use oneview_core::TaskHandle;
use oneview_core::TaskState;
use oneview_tests::oneview;
use oneview_tests::running;
use oneview_tests::task;
use oneview_tests::Appliance;
use oneview_tests::Expect;
use oneview_tests::OneView;
use oneview_tests::TestError;
use serde_json::json;
use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;
use tokio::test;

const TASK_URI: &str = "/rest/tasks/8D3C1F27-2A5B-4F0E-9E61-0C4B7A9D2E10";

fn pending() -> TaskHandle {
    TaskHandle::pending(TASK_URI.into())
}

fn poll_error(appliance: &Appliance, message: &str) {
    appliance.expect(Expect::get_error(TASK_URI, TestError::new(message)));
}

#[test]
async fn wait_polls_until_task_completes() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    appliance.expect(Expect::get(TASK_URI, task(TASK_URI, "New")));
    appliance.expect(Expect::get(TASK_URI, running(TASK_URI)));
    appliance.expect(Expect::get(
        TASK_URI,
        json!({
            "uri": TASK_URI,
            "name": "Create",
            "taskState": "Completed",
            "percentComplete": 100,
        }),
    ));
    let mut handle = pending();
    oneview.wait(&mut handle).await?;
    assert!(handle.is_done());
    assert!(handle.succeeded());
    assert_eq!(
        handle.task().map(|t| t.task_state),
        Some(TaskState::Completed)
    );
    assert_eq!(appliance.remaining(), 0);
    Ok(())
}

#[test]
async fn warning_counts_as_success() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    appliance.expect(Expect::get(TASK_URI, task(TASK_URI, "Warning")));
    let mut handle = pending();
    oneview.wait(&mut handle).await?;
    assert!(handle.succeeded());
    Ok(())
}

#[test]
async fn failed_task_is_reported_once_and_remembered() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    appliance.expect(Expect::get(
        TASK_URI,
        json!({
            "uri": TASK_URI,
            "name": "Delete",
            "taskState": "Error",
            "taskErrors": [{
                "errorCode": "RESOURCE_IN_USE",
                "message": "The network is used by a server profile.",
                "recommendedActions": ["Remove the network from the profile."],
            }],
        }),
    ));
    let mut handle = pending();
    let err = oneview.wait(&mut handle).await.expect_err("task failed");
    match &err {
        Error::TaskFailed {
            task,
            state,
            message,
        } => {
            assert_eq!(task, "Delete");
            assert_eq!(*state, TaskState::Error);
            assert!(message.starts_with("The network is used by a server profile."));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.is_task_error());
    assert!(handle.is_done());
    assert!(!handle.succeeded());

    // Done handle: no request is sent.
    let again = oneview.wait(&mut handle).await.expect_err("still failed");
    assert!(matches!(again, Error::TaskFailed { .. }));
    assert_eq!(appliance.remaining(), 0);
    Ok(())
}

#[test]
async fn transient_poll_errors_are_tolerated() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    poll_error(&appliance, "connection reset");
    poll_error(&appliance, "connection reset");
    appliance.expect(Expect::get(TASK_URI, running(TASK_URI)));
    poll_error(&appliance, "gateway timeout");
    poll_error(&appliance, "gateway timeout");
    poll_error(&appliance, "gateway timeout");
    appliance.expect(Expect::get(TASK_URI, task(TASK_URI, "Completed")));

    let mut handle = pending();
    oneview.wait(&mut handle).await?;
    assert!(handle.succeeded());
    assert_eq!(appliance.remaining(), 0);
    Ok(())
}

#[test]
async fn persistent_poll_errors_abandon_task() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    for _ in 0..4 {
        poll_error(&appliance, "service unavailable");
    }
    let mut handle = pending();
    let err = oneview.wait(&mut handle).await.expect_err("abandoned");
    match &err {
        Error::TaskPolling { task, reason } => {
            assert_eq!(task, TASK_URI);
            assert!(reason.contains("4 consecutive polling errors"));
            assert!(reason.contains("service unavailable"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(handle.is_done());
    assert!(handle.failure().is_some());
    assert!(!handle.succeeded());

    let again = oneview.wait(&mut handle).await.expect_err("still abandoned");
    assert!(matches!(again, Error::TaskPolling { .. }));
    assert_eq!(appliance.remaining(), 0);
    Ok(())
}

#[test]
async fn poll_budget_exhaustion_keeps_handle_pending() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = OneView::new(appliance.clone()).with_wait_policy(
        WaitPolicy::new()
            .interval(Duration::ZERO)
            .max_polls(2),
    );

    appliance.expect(Expect::get(TASK_URI, running(TASK_URI)));
    appliance.expect(Expect::get(TASK_URI, running(TASK_URI)));
    let mut handle = pending();
    let err = oneview.wait(&mut handle).await.expect_err("timed out");
    assert!(matches!(err, Error::TaskTimeout { polls: 2, .. }));
    assert!(!handle.is_done());

    appliance.expect(Expect::get(TASK_URI, task(TASK_URI, "Completed")));
    oneview.wait(&mut handle).await?;
    assert!(handle.succeeded());
    assert_eq!(appliance.remaining(), 0);
    Ok(())
}

#[test]
async fn handle_without_task_completes_immediately() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    let mut handle = TaskHandle::completed(Some(json!({ "allowSshAccess": true })));
    oneview.wait(&mut handle).await?;
    assert!(handle.succeeded());
    assert_eq!(appliance.remaining(), 0);
    Ok(())
}

#[test]
async fn submission_error_is_not_a_task_error() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    appliance.expect(
        Expect::update(
            "/rest/appliance/ssh-access",
            None,
            json!({ "allowSshAccess": false }),
            running(TASK_URI),
        )
        .failing(TestError::new("forbidden")),
    );
    let err = oneview
        .ssh_access()
        .set(&oneview::SshAccess::new(false))
        .await
        .expect_err("submission fails");
    assert!(!err.is_task_error());
    match err {
        Error::Appliance(err) => {
            let injected = err.injected().ok_or("error must be injected")?;
            assert_eq!(injected.to_string(), "injected: forbidden");
        }
        other => panic!("unexpected error: {other}"),
    }
    Ok(())
}
