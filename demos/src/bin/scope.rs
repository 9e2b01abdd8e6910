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

//! Scope lifecycle: look up, list, create, rename and delete a scope.

use clap::Parser;
use oneview::ListQuery;
use oneview::ResourceUri;
use oneview::Scope;
use oneview::SortOrder;
use oneview_demos::init_tracing;
use oneview_demos::print_names;
use oneview_demos::ConnectArgs;

#[derive(Parser, Debug)]
#[command(name = "scope", about = "Create, rename and delete a scope")]
struct Cli {
    #[command(flatten)]
    connect: ConnectArgs,

    /// Existing scope to look up.
    #[arg(long, default_value = "updated-SD2")]
    lookup: String,

    #[arg(long, default_value = "new-scope")]
    name: String,

    /// Name given to the scope after creation.
    #[arg(long, default_value = "update-scope")]
    rename: String,

    /// Scopes the new scope is assigned to.
    #[arg(long = "initial-scope")]
    initial_scopes: Vec<String>,

    /// Resources added to the new scope.
    #[arg(long = "add-resource")]
    added_resources: Vec<String>,
}

fn uris(values: &[String]) -> Vec<ResourceUri> {
    values.iter().map(|uri| ResourceUri::from(uri.as_str())).collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let oneview = cli.connect.connect()?;
    let scopes = oneview.scopes();
    let by_name_desc = ListQuery::new().sort_by("name", SortOrder::Desc);

    println!("#................... Scope by Name ...............#");
    match scopes.get_by_name(&cli.lookup).await {
        Ok(scope) => println!("{scope:?}"),
        Err(err) => println!("{err}"),
    }

    match scopes.list(&by_name_desc).await {
        Ok(list) => print_names("Scopes List", &list, |s| s.name.as_deref()),
        Err(err) => println!("{err}"),
    }

    let scope = Scope {
        resource_type: Some("ScopeV3".into()),
        description: Some("Test from script".into()),
        initial_scope_uris: uris(&cli.initial_scopes),
        added_resource_uris: uris(&cli.added_resources),
        ..Scope::new(cli.name.as_str())
    };
    match scopes.create(&scope).await {
        Ok(_) => println!("# ................... Scope Created Successfully.................#"),
        Err(err) => println!("............... Scope Creation Failed: {err}"),
    }

    match scopes.get_by_name(&cli.name).await {
        Ok(Some(mut created)) => {
            created.name = Some(cli.rename.clone());
            scopes.update(&created).await?;
            println!("#.................... Scope after Updating ...........#");
        }
        Ok(None) => println!("scope {} not found", cli.name),
        Err(err) => println!("{err}"),
    }
    let list = scopes.list(&by_name_desc).await?;
    print_names("Scopes List", &list, |s| s.name.as_deref());

    scopes.delete(&cli.rename).await?;
    println!("#...................... Deleted Scope Successfully .....#");

    match scopes.list(&by_name_desc).await {
        Ok(list) => print_names("Scopes List", &list, |s| s.name.as_deref()),
        Err(err) => println!("{err}"),
    }
    Ok(())
}
