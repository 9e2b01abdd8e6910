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

//! Scopes and resource assignments.

use anyhow::Context;
use clap::Parser;
use oneview::ListQuery;
use oneview::Scope;
use oneview::SortOrder;
use oneview_demos::init_tracing;
use oneview_demos::print_names;
use oneview_demos::ConnectArgs;

#[derive(Parser, Debug)]
#[command(name = "scopes", about = "Assign an Ethernet network to scopes")]
struct Cli {
    #[command(flatten)]
    connect: ConnectArgs,

    /// Ethernet network added to the new scope.
    #[arg(long, default_value = "Auto-ethernet_network")]
    network: String,
}

const SCOPE_TEST: &str = "ScopeTest";
const AUTO_SCOPE: &str = "Auto-Scope";
const NEW_SCOPE: &str = "new-scope";
const UPDATED_SCOPE: &str = "update-scope";

fn test_scope(name: &str) -> Scope {
    Scope {
        resource_type: Some("ScopeV3".into()),
        description: Some("Test from script".into()),
        ..Scope::new(name)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let oneview = cli.connect.connect()?;
    let scopes = oneview.scopes();
    let by_name_desc = ListQuery::new().sort_by("name", SortOrder::Desc);

    for name in [SCOPE_TEST, AUTO_SCOPE] {
        if let Err(err) = scopes.create(&test_scope(name)).await {
            println!("Error Creating Scope: {err}");
        }
    }

    println!("#................... Scope by Name ...............#");
    let scope_test = match scopes.get_by_name(SCOPE_TEST).await {
        Ok(scope) => scope,
        Err(err) => {
            println!("{err}");
            None
        }
    };
    println!("{scope_test:?}");

    match scopes.list(&by_name_desc).await {
        Ok(list) => print_names("Scopes List", &list, |s| s.name.as_deref()),
        Err(err) => println!("{err}"),
    }

    let network = match oneview.ethernet_networks().get_by_name(&cli.network).await {
        Ok(network) => network,
        Err(err) => {
            println!("{err}");
            None
        }
    };
    let network_uri = network.and_then(|n| n.uri);

    let scope = Scope {
        initial_scope_uris: scope_test.and_then(|s| s.uri).into_iter().collect(),
        added_resource_uris: network_uri.clone().into_iter().collect(),
        ..test_scope(NEW_SCOPE)
    };
    match scopes.create(&scope).await {
        Ok(_) => println!("# ................... Scope Created Successfully.................#"),
        Err(err) => println!("............... Scope Creation Failed: {err}"),
    }

    match scopes.get_by_name(NEW_SCOPE).await {
        Ok(Some(mut created)) => {
            created.name = Some(UPDATED_SCOPE.into());
            scopes.update(&created).await?;
            println!("#.................... Scope after Updating ...........#");
        }
        Ok(None) => println!("scope {NEW_SCOPE} not found"),
        Err(err) => println!("{err}"),
    }
    let updated = scopes.list(&by_name_desc).await?;
    print_names("Scopes List", &updated, |s| s.name.as_deref());

    let first_uri = updated
        .first()
        .and_then(|s| s.uri.clone())
        .context("appliance has no scope")?;

    let mut assignment = None;
    if let Some(uri) = &network_uri {
        match scopes.get_for_resource(uri).await {
            Ok(scopes_of_resource) => {
                println!("#.................Scopes assigned to a resource ..............#");
                println!("{scopes_of_resource:?}");
                assignment = Some(scopes_of_resource);
            }
            Err(err) => println!("{err}"),
        }
    }

    if let Ok(scope) = scopes.get_by_uri(&first_uri).await {
        println!("#.................Scope by Uri ..............#");
        println!("{scope:?}");
    }

    if let Some(mut assignment) = assignment {
        assignment.scope_uris = vec![first_uri];
        match scopes.update_for_resource(&assignment).await {
            Ok(_) => println!(
                "resource {} updated",
                assignment
                    .resource_uri
                    .as_ref()
                    .map_or("<unknown>", |uri| uri.as_str())
            ),
            Err(err) => println!("{err}"),
        }
    }

    scopes.delete(UPDATED_SCOPE).await?;
    Ok(())
}
