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

//! Appliance login credentials.

use std::fmt;

/// Credentials used to open a session on the appliance.
///
/// Security notes:
/// - `Debug`/`Display` redact the password.
/// - Prefer short-lived instances and avoid logging credentials.
#[derive(Clone)]
pub struct Credentials {
    /// User name to log in with.
    pub username: String,
    /// Authentication directory (`authLoginDomain`); empty means the
    /// appliance default.
    pub domain: String,
    password: String,
}

impl Credentials {
    /// Create new credentials for the local domain.
    #[must_use]
    pub const fn new(username: String, password: String) -> Self {
        Self {
            username,
            domain: String::new(),
            password,
        }
    }

    /// Set the login domain.
    #[must_use]
    pub fn with_domain(mut self, domain: String) -> Self {
        self.domain = domain;
        self
    }

    /// Get password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("domain", &self.domain)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Credentials(username: {}, domain: {}, password: [REDACTED])",
            self.username, self.domain
        )
    }
}
