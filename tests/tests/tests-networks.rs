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

//! Integration tests of network and appliance settings operations.

use oneview::FcNetwork;
use oneview::SshAccess;
use oneview_core::ListQuery;
use oneview_tests::by_name;
use oneview_tests::expect_completion;
use oneview_tests::oneview;
use oneview_tests::page;
use oneview_tests::running;
use oneview_tests::Appliance;
use oneview_tests::Expect;
use serde_json::json;
use serde_json::Value as JsonValue;
use std::error::Error as StdError;
use std::sync::Arc;
use tokio::test;

const FC_NETWORKS: &str = "/rest/fc-networks";
const FC_NETWORK_URI: &str = "/rest/fc-networks/9b26b7a8-c3b8-4e5b-8b9f-2b0f1c1b7d55";
const FC_NETWORK_ETAG: &str = "\"1538762345678\"";
const ETHERNET_NETWORKS: &str = "/rest/ethernet-networks";
const SSH_ACCESS: &str = "/rest/appliance/ssh-access";
const TASK_URI: &str = "/rest/tasks/1C0E7A2B-5B4D-4E62-A0C8-7A0D1C9E3F44";

fn fc_network_json(name: &str) -> JsonValue {
    json!({
        "type": "fc-networkV4",
        "uri": FC_NETWORK_URI,
        "category": "fc-networks",
        "eTag": FC_NETWORK_ETAG,
        "name": name,
        "fabricType": "FabricAttach",
        "autoLoginRedistribution": true,
        "linkStabilityTime": 30,
        "connectionTemplateUri": "/rest/connection-templates/4c2f",
    })
}

#[test]
async fn fc_network_is_created() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    let network = FcNetwork {
        resource_type: Some("fc-networkV4".into()),
        name: Some("OneViewSDK Test FC Network".into()),
        fabric_type: Some("FabricAttach".into()),
        auto_login_redistribution: Some(true),
        link_stability_time: Some(30),
        ..FcNetwork::default()
    };
    appliance.expect(Expect::create(
        FC_NETWORKS,
        json!({
            "type": "fc-networkV4",
            "name": "OneViewSDK Test FC Network",
            "fabricType": "FabricAttach",
            "autoLoginRedistribution": true,
            "linkStabilityTime": 30,
        }),
        running(TASK_URI),
    ));
    expect_completion(&appliance, TASK_URI);
    let handle = oneview.fc_networks().create(&network).await?;
    assert!(handle.succeeded());
    assert_eq!(appliance.remaining(), 0);
    Ok(())
}

#[test]
async fn fc_networks_are_listed_sorted() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    appliance.expect(Expect::list(
        FC_NETWORKS,
        "sort=name%3Aasc",
        page("fc-networks", json!([fc_network_json("fc-a")])),
    ));
    let networks = oneview
        .fc_networks()
        .list(&ListQuery::new().sort("name:asc"))
        .await?;
    let first = networks.first().ok_or("one network expected")?;
    assert_eq!(first.fabric_type.as_deref(), Some("FabricAttach"));
    assert_eq!(first.link_stability_time, Some(30));
    Ok(())
}

#[test]
async fn fc_network_is_updated_and_deleted() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    appliance.expect(Expect::list(
        FC_NETWORKS,
        by_name("fc-a"),
        page("fc-networks", json!([fc_network_json("fc-a")])),
    ));
    let mut network = oneview
        .fc_networks()
        .get_by_name("fc-a")
        .await?
        .ok_or("network expected")?;
    network.name = Some("fc-b".into());

    appliance.expect(Expect::update(
        FC_NETWORK_URI,
        Some(FC_NETWORK_ETAG),
        fc_network_json("fc-b"),
        running(TASK_URI),
    ));
    expect_completion(&appliance, TASK_URI);
    oneview.fc_networks().update(&network).await?;

    appliance.expect(Expect::list(
        FC_NETWORKS,
        by_name("fc-b"),
        page("fc-networks", json!([fc_network_json("fc-b")])),
    ));
    appliance.expect(Expect::delete(FC_NETWORK_URI, Some(FC_NETWORK_ETAG), running(TASK_URI)));
    expect_completion(&appliance, TASK_URI);
    assert!(oneview.fc_networks().delete("fc-b").await?);

    appliance.expect(Expect::list(
        FC_NETWORKS,
        by_name("fc-b"),
        page("fc-networks", json!([])),
    ));
    assert!(!oneview.fc_networks().delete("fc-b").await?);
    assert_eq!(appliance.remaining(), 0);
    Ok(())
}

#[test]
async fn ethernet_network_is_found_by_name() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    appliance.expect(Expect::list(
        ETHERNET_NETWORKS,
        by_name("Prod VLAN 1101"),
        page(
            "ethernet-networks",
            json!([{
                "type": "ethernet-networkV4",
                "uri": "/rest/ethernet-networks/6d0f4c5a",
                "name": "Prod VLAN 1101",
                "vlanId": 1101,
                "purpose": "General",
                "ethernetNetworkType": "Tagged",
                "smartLink": true,
                "privateNetwork": false,
            }]),
        ),
    ));
    let network = oneview
        .ethernet_networks()
        .get_by_name("Prod VLAN 1101")
        .await?
        .ok_or("network expected")?;
    assert_eq!(network.vlan_id, Some(1101));
    assert_eq!(network.purpose.as_deref(), Some("General"));
    Ok(())
}

#[test]
async fn ssh_access_is_read_and_changed() -> Result<(), Box<dyn StdError>> {
    let appliance = Arc::new(Appliance::default());
    let oneview = oneview(&appliance);

    appliance.expect(Expect::get(
        SSH_ACCESS,
        json!({
            "type": "SshAccess",
            "uri": SSH_ACCESS,
            "category": "appliance",
            "allowSshAccess": true,
        }),
    ));
    let access = oneview.ssh_access().get().await?;
    assert!(access.allow_ssh_access);

    appliance.expect(Expect::update(
        SSH_ACCESS,
        None,
        json!({ "allowSshAccess": false }),
        running(TASK_URI),
    ));
    expect_completion(&appliance, TASK_URI);
    let handle = oneview.ssh_access().set(&SshAccess::new(false)).await?;
    assert!(handle.succeeded());
    assert_eq!(appliance.remaining(), 0);
    Ok(())
}
