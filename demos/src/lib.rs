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

//! Shared setup of the demo programs.
//!
//! Every program connects with the configuration file given by `--config`
//! (or `ONEVIEW_CONFIG`), falling back to the `ONEVIEW_*` environment
//! variables.

use clap::Args;
use oneview::Config;
use oneview::ConfigError;
use oneview::HttpOneView;
use oneview_core::ResourceList;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Connection options shared by all demos.
#[derive(Args, Debug)]
pub struct ConnectArgs {
    /// JSON configuration file. The `ONEVIEW_*` environment variables are
    /// used when absent.
    #[arg(short = 'c', long = "config", env = "ONEVIEW_CONFIG")]
    pub config: Option<PathBuf>,
}

impl ConnectArgs {
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be read.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        match &self.config {
            Some(path) => Config::load_file(path),
            None => Config::from_env(),
        }
    }

    /// Load the configuration and build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn connect(&self) -> anyhow::Result<HttpOneView> {
        connect(&self.load_config()?)
    }
}

/// # Errors
///
/// Returns an error if the endpoint is invalid or the HTTP client cannot be
/// built.
pub fn connect(config: &Config) -> anyhow::Result<HttpOneView> {
    info!(
        endpoint = %config.endpoint,
        api_version = config.api_version,
        "connecting to appliance"
    );
    Ok(HttpOneView::connect(config)?)
}

/// Log to stderr, filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
}

/// Print a banner followed by the name of every member.
pub fn print_names<T>(title: &str, list: &ResourceList<T>, name: impl Fn(&T) -> Option<&str>) {
    println!("# ................... {title} .................#");
    for member in &list.members {
        println!("{}", name(member).unwrap_or("<unnamed>"));
    }
}
