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

#![allow(dead_code)]

#[cfg(feature = "reqwest")]
pub mod test_utils {
    use oneview_http::reqwest::Client;
    use oneview_http::Credentials;
    use oneview_http::HttpAppliance;
    use oneview_http::SessionSettings;
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::body_json;
    use wiremock::matchers::method;
    use wiremock::matchers::path;
    use wiremock::Mock;
    use wiremock::MockServer;
    use wiremock::ResponseTemplate;

    pub const USER: &str = "Administrator";
    pub const PASSWORD: &str = "password";
    pub const SESSION: &str = "session-1";

    pub fn create_test_appliance(server: &MockServer) -> HttpAppliance<Client> {
        create_test_appliance_with(server, SessionSettings::default())
    }

    pub fn create_test_appliance_with(
        server: &MockServer,
        settings: SessionSettings,
    ) -> HttpAppliance<Client> {
        let client = Client::new().expect("client builds");
        let endpoint = Url::parse(&server.uri()).expect("valid mock server url");
        HttpAppliance::new(
            client,
            endpoint,
            Credentials::new(USER.into(), PASSWORD.into()),
            settings,
        )
    }

    /// Mount a login answering with `session`, `times` times at most.
    pub async fn mount_login(server: &MockServer, session: &str, times: u64) {
        Mock::given(method("POST"))
            .and(path("/rest/login-sessions"))
            .and(body_json(json!({
                "userName": USER,
                "password": PASSWORD,
                "loginMsgAck": "true",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "sessionID": session })))
            .up_to_n_times(times)
            .expect(times)
            .mount(server)
            .await;
    }
}
