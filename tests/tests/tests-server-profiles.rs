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

//! Integration tests of server profile and server hardware operations.

use oneview::PowerState;
use oneview::ServerHardware;
use oneview::ServerProfile;
use oneview_core::Filter;
use oneview_core::ListQuery;
use oneview_core::SortOrder;
use oneview_tests::by_name;
use oneview_tests::expect_completion;
use oneview_tests::oneview;
use oneview_tests::page;
use oneview_tests::running;
use oneview_tests::Appliance;
use oneview_tests::Expect;
use oneview_tests::TestError;
use serde_json::json;
use serde_json::Value as JsonValue;
use std::error::Error as StdError;
use std::sync::Arc;
use tokio::test;

const SERVER_PROFILES: &str = "/rest/server-profiles";
const PROFILE_URI: &str = "/rest/server-profiles/1d3b0b6c-9c5e-4a30-8f4e-54c2a6d1e9a7";
const HARDWARE_URI: &str = "/rest/server-hardware/30373237-3132-4D32-3235-303930524D57";
const PROFILE_ETAG: &str = "1441036118675/9";
const POWER_TASK_URI: &str = "/rest/tasks/6A1F2C33-7D2E-4B0F-8C6E-1E5D2B9A0C77";
const TASK_URI: &str = "/rest/tasks/F2B9C0D4-3E1A-47A5-9D2B-6C8E0A4F1B35";

fn template_json() -> JsonValue {
    json!({
        "type": "ServerProfileV5",
        "uri": "/rest/server-profiles/0aa6c6b4-1b4e-4d0e-a7c1-e6d59b3f8a21",
        "category": "server-profiles",
        "eTag": "1441036118675/8",
        "name": "docker-template",
        "description": "Docker Machine",
        "affinity": "Bay",
        "serialNumber": "2M25090RMW",
        "serialNumberType": "Virtual",
        "uuid": "30373237-3132-4D32-3235-303930524D57",
        "macType": "Virtual",
        "wwnType": "Virtual",
        "enclosureGroupUri": "/rest/enclosure-groups/56ad0069-8362-42fd-b4e3-f5c5a69af039",
        "state": "Normal",
        "status": "OK",
    })
}

fn profile_json(hardware: Option<&str>) -> JsonValue {
    let mut profile = json!({
        "type": "ServerProfileV5",
        "uri": PROFILE_URI,
        "eTag": PROFILE_ETAG,
        "name": "docker-node-1",
        "description": "Docker Machine docker-node-1",
        "serialNumber": "VCGE9KB041",
        "state": "Normal",
    });
    if let Some(uri) = hardware {
        profile["serverHardwareUri"] = json!(uri);
    }
    profile
}

fn hardware_json(power_state: &str) -> JsonValue {
    json!({
        "type": "server-hardware-4",
        "uri": HARDWARE_URI,
        "category": "server-hardware",
        "name": "Encl1, bay 1",
        "model": "ProLiant BL460c Gen9",
        "serialNumber": "2M25090RMW",
        "powerState": power_state,
        "serverProfileUri": PROFILE_URI,
    })
}

fn expect_profile_lookup(appliance: &Appliance, profile: JsonValue) {
    appliance.expect(Expect::list(
        SERVER_PROFILES,
        by_name("docker-node-1"),
        page("server-profiles", json!([profile])),
    ));
}

#[test]
async fn profile_is_created_from_template() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    let template: ServerProfile = serde_json::from_value(template_json())?;
    let blade: ServerHardware = serde_json::from_value(hardware_json("Off"))?;
    appliance.expect(Expect::create(
        SERVER_PROFILES,
        json!({
            "type": "ServerProfileV5",
            "name": "docker-node-1",
            "description": "Docker Machine docker-node-1",
            "affinity": "Bay",
            "serialNumberType": "Virtual",
            "macType": "Virtual",
            "wwnType": "Virtual",
            "enclosureGroupUri": "/rest/enclosure-groups/56ad0069-8362-42fd-b4e3-f5c5a69af039",
            "serverHardwareUri": HARDWARE_URI,
        }),
        running(TASK_URI),
    ));
    expect_completion(&appliance, TASK_URI);
    let handle = oneview
        .server_profiles()
        .create_from_template("docker-node-1", &template, &blade)
        .await?;
    assert!(handle.succeeded());
    assert_eq!(appliance.remaining(), 0);
    Ok(())
}

#[test]
async fn submitted_profile_can_be_awaited_later() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    let profile = ServerProfile {
        name: Some("bare".into()),
        ..ServerProfile::default()
    };
    appliance.expect(Expect::create(
        SERVER_PROFILES,
        json!({ "name": "bare" }),
        running(TASK_URI),
    ));
    let mut handle = oneview.server_profiles().submit_new(&profile).await?;
    assert!(!handle.is_done());
    assert_eq!(handle.uri().map(|u| u.as_str()), Some(TASK_URI));

    expect_completion(&appliance, TASK_URI);
    oneview.wait(&mut handle).await?;
    assert!(handle.succeeded());
    Ok(())
}

#[test]
async fn profile_is_found_by_serial_number() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    let query = ListQuery::new()
        .filter(Filter::matches("serialNumber", "VCGE9KB041"))
        .sort_by("name", SortOrder::Asc);
    appliance.expect(Expect::list(
        SERVER_PROFILES,
        query.to_query_string(),
        page("server-profiles", json!([profile_json(None)])),
    ));
    let profile = oneview
        .server_profiles()
        .get_by_serial_number("VCGE9KB041")
        .await?
        .ok_or("profile expected")?;
    assert_eq!(profile.name.as_deref(), Some("docker-node-1"));
    Ok(())
}

#[test]
async fn profile_delete_powers_server_off_first() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    expect_profile_lookup(&appliance, profile_json(Some(HARDWARE_URI)));
    appliance.expect(Expect::get(HARDWARE_URI, hardware_json("On")));
    appliance.expect(Expect::update(
        format!("{HARDWARE_URI}/powerState"),
        None,
        json!({ "powerState": "Off", "powerControl": "PressAndHold" }),
        running(POWER_TASK_URI),
    ));
    expect_completion(&appliance, POWER_TASK_URI);
    appliance.expect(Expect::delete(PROFILE_URI, Some(PROFILE_ETAG), running(TASK_URI)));
    expect_completion(&appliance, TASK_URI);

    assert!(oneview.server_profiles().delete("docker-node-1").await?);
    assert_eq!(appliance.remaining(), 0);
    Ok(())
}

#[test]
async fn profile_delete_skips_power_off_of_stopped_server() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    expect_profile_lookup(&appliance, profile_json(Some(HARDWARE_URI)));
    appliance.expect(Expect::get(HARDWARE_URI, hardware_json("Off")));
    appliance.expect(Expect::delete(PROFILE_URI, Some(PROFILE_ETAG), running(TASK_URI)));
    expect_completion(&appliance, TASK_URI);

    assert!(oneview.server_profiles().delete("docker-node-1").await?);
    assert_eq!(appliance.remaining(), 0);
    Ok(())
}

#[test]
async fn profile_delete_survives_hardware_lookup_failure() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    expect_profile_lookup(&appliance, profile_json(Some(HARDWARE_URI)));
    appliance.expect(Expect::get_error(
        HARDWARE_URI,
        TestError::new("server hardware is being refreshed"),
    ));
    appliance.expect(Expect::delete(PROFILE_URI, Some(PROFILE_ETAG), running(TASK_URI)));
    expect_completion(&appliance, TASK_URI);

    assert!(oneview.server_profiles().delete("docker-node-1").await?);
    assert_eq!(appliance.remaining(), 0);
    Ok(())
}

#[test]
async fn profile_delete_survives_power_off_failure() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    expect_profile_lookup(&appliance, profile_json(Some(HARDWARE_URI)));
    appliance.expect(Expect::get(HARDWARE_URI, hardware_json("On")));
    appliance.expect(
        Expect::update(
            format!("{HARDWARE_URI}/powerState"),
            None,
            json!({ "powerState": "Off", "powerControl": "PressAndHold" }),
            running(POWER_TASK_URI),
        )
        .failing(TestError::new("server is locked")),
    );
    appliance.expect(Expect::delete(PROFILE_URI, Some(PROFILE_ETAG), running(TASK_URI)));
    expect_completion(&appliance, TASK_URI);

    assert!(oneview.server_profiles().delete("docker-node-1").await?);
    assert_eq!(appliance.remaining(), 0);
    Ok(())
}

#[test]
async fn profile_delete_skips_power_off_of_unnamed_server() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    let mut hardware = hardware_json("On");
    hardware["name"] = json!("");
    expect_profile_lookup(&appliance, profile_json(Some(HARDWARE_URI)));
    appliance.expect(Expect::get(HARDWARE_URI, hardware));
    appliance.expect(Expect::delete(PROFILE_URI, Some(PROFILE_ETAG), running(TASK_URI)));
    expect_completion(&appliance, TASK_URI);

    assert!(oneview.server_profiles().delete("docker-node-1").await?);
    assert_eq!(appliance.remaining(), 0);
    Ok(())
}

#[test]
async fn unassigned_profile_is_deleted_directly() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    expect_profile_lookup(&appliance, profile_json(None));
    appliance.expect(Expect::delete(PROFILE_URI, Some(PROFILE_ETAG), running(TASK_URI)));
    expect_completion(&appliance, TASK_URI);

    assert!(oneview.server_profiles().delete("docker-node-1").await?);
    assert_eq!(appliance.remaining(), 0);
    Ok(())
}

#[test]
async fn deleting_absent_profile_is_noop() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    appliance.expect(Expect::list(
        SERVER_PROFILES,
        by_name("docker-node-1"),
        page("server-profiles", json!([])),
    ));
    assert!(!oneview.server_profiles().delete("docker-node-1").await?);
    assert_eq!(appliance.remaining(), 0);
    Ok(())
}

#[test]
async fn profile_without_uri_needs_no_delete_request() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    let profile = ServerProfile {
        name: Some("never-created".into()),
        ..ServerProfile::default()
    };
    let mut handle = oneview.server_profiles().submit_delete(&profile).await?;
    assert!(handle.is_done());
    oneview.wait(&mut handle).await?;
    assert!(handle.succeeded());
    assert_eq!(appliance.remaining(), 0);
    Ok(())
}

#[test]
async fn server_is_powered_off_once() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    appliance.expect(Expect::list(
        "/rest/server-hardware",
        by_name("Encl1, bay 1"),
        page("server-hardware", json!([hardware_json("On")])),
    ));
    let server = oneview
        .server_hardware()
        .get_by_name("Encl1, bay 1")
        .await?
        .ok_or("server expected")?;
    assert_eq!(server.power_state, Some(PowerState::On));

    appliance.expect(Expect::update(
        format!("{HARDWARE_URI}/powerState"),
        None,
        json!({ "powerState": "Off", "powerControl": "PressAndHold" }),
        running(POWER_TASK_URI),
    ));
    expect_completion(&appliance, POWER_TASK_URI);
    assert!(oneview.server_hardware().power_off(&server).await?);

    let stopped: ServerHardware = serde_json::from_value(hardware_json("Off"))?;
    assert!(!oneview.server_hardware().power_off(&stopped).await?);
    assert_eq!(appliance.remaining(), 0);
    Ok(())
}
