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

//! Integration tests of scope operations.

use oneview::ResourceScope;
use oneview::Scope;
use oneview_core::ListQuery;
use oneview_core::ResourceUri;
use oneview_tests::by_name;
use oneview_tests::expect_completion;
use oneview_tests::oneview;
use oneview_tests::page;
use oneview_tests::running;
use oneview_tests::Appliance;
use oneview_tests::Expect;
use serde_json::json;
use std::error::Error as StdError;
use std::sync::Arc;
use tokio::test;

const SCOPES: &str = "/rest/scopes";
const SCOPE_URI: &str = "/rest/scopes/7f65ddf0-7c6e-4b84-b2bc-0f6b7e1f4a01";
const SCOPE_ETAG: &str = "\"1538761456789\"";
const ASSIGNMENT_ETAG: &str = "\"1538761500000\"";
const TASK_URI: &str = "/rest/tasks/3E4A0B21-81C3-4D1B-9C9B-5D1AC7E6A1B2";

fn scope_json(name: &str) -> serde_json::Value {
    json!({
        "type": "ScopeV3",
        "uri": SCOPE_URI,
        "category": "scopes",
        "eTag": SCOPE_ETAG,
        "name": name,
        "description": "Test from script",
        "state": "Active",
    })
}

#[test]
async fn scope_is_found_by_name() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    appliance.expect(Expect::list(
        SCOPES,
        by_name("test-scope"),
        page("scopes", json!([scope_json("test-scope")])),
    ));
    let scope = oneview
        .scopes()
        .get_by_name("test-scope")
        .await?
        .ok_or("scope must be found")?;
    assert_eq!(scope.name.as_deref(), Some("test-scope"));
    assert_eq!(scope.uri.as_ref().map(ResourceUri::as_str), Some(SCOPE_URI));
    assert_eq!(appliance.remaining(), 0);
    Ok(())
}

#[test]
async fn absent_scope_is_none() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    appliance.expect(Expect::list(SCOPES, by_name("ghost"), page("scopes", json!([]))));
    assert!(oneview.scopes().get_by_name("ghost").await?.is_none());
    Ok(())
}

#[test]
async fn scope_list_passes_query() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);
    let query = ListQuery::new().start(0).count(2).sort("name:desc");

    appliance.expect(Expect::list(
        SCOPES,
        "start=0&count=2&sort=name%3Adesc",
        page("scopes", json!([scope_json("b"), scope_json("a")])),
    ));
    let scopes = oneview.scopes().list(&query).await?;
    let names: Vec<_> = scopes
        .members
        .iter()
        .filter_map(|s| s.name.as_deref())
        .collect();
    assert_eq!(names, ["b", "a"]);
    assert_eq!(scopes.total, 2);
    Ok(())
}

#[test]
async fn scope_is_created_and_task_awaited() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    let scope = Scope {
        resource_type: Some("ScopeV3".into()),
        description: Some("Test from script".into()),
        ..Scope::new("new-scope")
    };
    appliance.expect(Expect::create(
        SCOPES,
        json!({
            "type": "ScopeV3",
            "name": "new-scope",
            "description": "Test from script",
        }),
        running(TASK_URI),
    ));
    expect_completion(&appliance, TASK_URI);
    let handle = oneview.scopes().create(&scope).await?;
    assert!(handle.is_done());
    assert!(handle.succeeded());
    assert_eq!(appliance.remaining(), 0);
    Ok(())
}

#[test]
async fn scope_update_replaces_resource() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    let mut scope: Scope = serde_json::from_value(scope_json("test-scope"))?;
    scope.name = Some("updated-scope".into());
    scope.description = Some("Updated from script".into());
    scope.added_resource_uris = vec!["/rest/fc-networks/9b26".into()];

    let mut expected = scope_json("updated-scope");
    expected["description"] = json!("Updated from script");
    expected["addedResourceUris"] = json!(["/rest/fc-networks/9b26"]);
    appliance.expect(Expect::update(
        SCOPE_URI,
        Some(SCOPE_ETAG),
        expected,
        running(TASK_URI),
    ));
    expect_completion(&appliance, TASK_URI);
    oneview.scopes().update(&scope).await?;
    assert_eq!(appliance.remaining(), 0);
    Ok(())
}

#[test]
async fn scope_without_uri_cannot_be_updated() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    let err = oneview
        .scopes()
        .update(&Scope::new("never-created"))
        .await
        .expect_err("update must fail");
    assert!(matches!(err, oneview::Error::MissingUri(_)));
    Ok(())
}

#[test]
async fn deleting_absent_scope_is_noop() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    appliance.expect(Expect::list(SCOPES, by_name("ghost"), page("scopes", json!([]))));
    assert!(!oneview.scopes().delete("ghost").await?);
    assert_eq!(appliance.remaining(), 0);
    Ok(())
}

#[test]
async fn existing_scope_is_deleted() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    appliance.expect(Expect::list(
        SCOPES,
        by_name("test-scope"),
        page("scopes", json!([scope_json("test-scope")])),
    ));
    appliance.expect(Expect::delete(SCOPE_URI, Some(SCOPE_ETAG), running(TASK_URI)));
    expect_completion(&appliance, TASK_URI);
    assert!(oneview.scopes().delete("test-scope").await?);
    assert_eq!(appliance.remaining(), 0);
    Ok(())
}

#[test]
async fn resource_scopes_are_read_and_replaced() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);
    let network: ResourceUri = "/rest/ethernet-networks/6d0f4c5a".into();
    let assignment = "/rest/scopes/resources/rest/ethernet-networks/6d0f4c5a";

    appliance.expect(Expect::get(
        assignment,
        json!({
            "type": "ScopedResource",
            "uri": assignment,
            "eTag": ASSIGNMENT_ETAG,
            "resourceUri": network.as_str(),
            "scopeUris": [SCOPE_URI],
        }),
    ));
    let mut scopes: ResourceScope = oneview.scopes().get_for_resource(&network).await?;
    assert_eq!(scopes.scope_uris.len(), 1);

    scopes.scope_uris.clear();
    appliance.expect(Expect::update(
        assignment,
        Some(ASSIGNMENT_ETAG),
        json!({
            "type": "ScopedResource",
            "uri": assignment,
            "eTag": ASSIGNMENT_ETAG,
            "resourceUri": network.as_str(),
            "scopeUris": [],
        }),
        running(TASK_URI),
    ));
    expect_completion(&appliance, TASK_URI);
    oneview.scopes().update_for_resource(&scopes).await?;
    assert_eq!(appliance.remaining(), 0);
    Ok(())
}
