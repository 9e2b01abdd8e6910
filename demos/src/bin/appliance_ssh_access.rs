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

//! Read and disable SSH access to the appliance.

use clap::Parser;
use oneview::SshAccess;
use oneview_demos::init_tracing;
use oneview_demos::ConnectArgs;

#[derive(Parser, Debug)]
#[command(name = "appliance-ssh-access", about = "Toggle SSH access to the appliance")]
struct Cli {
    #[command(flatten)]
    connect: ConnectArgs,

    /// Allow SSH logins instead of disabling them.
    #[arg(long)]
    allow: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let oneview = cli.connect.connect()?;
    let ssh = oneview.ssh_access();

    let current = ssh.get().await?;
    println!("#--- Got the Appliance SSH access ---#");
    println!("{current:?}");

    let access = SshAccess::new(cli.allow);
    println!("{access:?}");
    match ssh.set(&access).await {
        Ok(_) => println!("Appliance SSH access set successfully..."),
        Err(err) => println!("Appliance SSH access set failed: {err}"),
    }
    Ok(())
}
