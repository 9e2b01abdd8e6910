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

//! FC network lifecycle driven by a configuration file.

use clap::Parser;
use oneview::config::DEFAULT_CONFIG_FILE;
use oneview::Config;
use oneview::FcNetwork;
use oneview::ListQuery;
use oneview::ResourceUri;
use oneview::SortOrder;
use oneview_demos::connect;
use oneview_demos::init_tracing;
use oneview_demos::print_names;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fc-config", about = "Create, rename and delete an FC network")]
struct Cli {
    /// JSON configuration file.
    #[arg(short = 'c', long = "config", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[arg(long, default_value = "TestFCNetworkRust")]
    name: String,

    /// Name given to the network after creation.
    #[arg(long, default_value = "RenamedFCNetwork")]
    rename: String,

    /// Scopes the new network is assigned to.
    #[arg(long = "initial-scope")]
    initial_scopes: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = match Config::load_file(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            println!("{err}");
            Config::from_env()?
        }
    };
    let oneview = connect(&config)?;
    let networks = oneview.fc_networks();

    let network = FcNetwork {
        resource_type: Some("fc-networkV4".into()),
        name: Some(cli.name.clone()),
        description: Some("Test FC Network".into()),
        fabric_type: Some("FabricAttach".into()),
        auto_login_redistribution: Some(false),
        link_stability_time: Some(30),
        initial_scope_uris: cli
            .initial_scopes
            .iter()
            .map(|uri| ResourceUri::from(uri.as_str()))
            .collect(),
        ..FcNetwork::default()
    };
    println!("{network:?}");
    match networks.create(&network).await {
        Ok(_) => println!("Fc Network created successfully..."),
        Err(err) => println!("Fc Network Creation Failed: {err}"),
    }

    let sorted = networks
        .list(&ListQuery::new().sort_by("name", SortOrder::Desc))
        .await?;
    print_names(
        "Get Fc Networks sorted by name in descending order",
        &sorted,
        |n| n.name.as_deref(),
    );

    let Some(mut created) = networks.get_by_name(&cli.name).await? else {
        anyhow::bail!("fc network {} not found", cli.name);
    };
    println!("#-------------Get FCNetworks by name----------------#");
    println!("{created:?}");

    created.name = Some(cli.rename.clone());
    networks.update(&created).await?;
    println!("FCNetwork has been updated with name: {}", cli.rename);

    networks.delete(&cli.rename).await?;
    println!("Deleted FCNetworks successfully...");
    Ok(())
}
