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

//! Expectations for the appliance mock.

use oneview_core::ETag;
use oneview_core::ResourceUri;
use serde_json::from_str;
use serde_json::Value as JsonValue;
use std::fmt::Display;

pub type Response<E> = Result<JsonValue, E>;

/// Request expected by the appliance.
#[derive(Debug)]
pub enum ExpectedRequest {
    /// Expected Get.
    Get { uri: ResourceUri },
    /// Expected List with its query string.
    List { uri: ResourceUri, query: String },
    /// Expected Create.
    Create { uri: ResourceUri, request: JsonValue },
    /// Expected Update with its `If-Match` entity tag.
    Update {
        uri: ResourceUri,
        etag: Option<ETag>,
        request: JsonValue,
    },
    /// Expected Delete with its `If-Match` entity tag.
    Delete {
        uri: ResourceUri,
        etag: Option<ETag>,
    },
}

/// Expectation for the tests.
///
/// For mutating requests the response is the body of the appliance reply
/// (usually a task).
#[derive(Debug)]
pub struct Expect<E> {
    pub request: ExpectedRequest,
    pub response: Response<E>,
}

fn json(value: impl Display) -> JsonValue {
    from_str(&value.to_string()).expect("invalid json")
}

impl<E> Expect<E> {
    pub fn get(uri: impl Display, response: impl Display) -> Self {
        Expect {
            request: ExpectedRequest::Get {
                uri: uri.to_string().into(),
            },
            response: Ok(json(response)),
        }
    }

    pub fn list(uri: impl Display, query: impl Display, response: impl Display) -> Self {
        Expect {
            request: ExpectedRequest::List {
                uri: uri.to_string().into(),
                query: query.to_string(),
            },
            response: Ok(json(response)),
        }
    }

    pub fn create(uri: impl Display, request: impl Display, response: impl Display) -> Self {
        Expect {
            request: ExpectedRequest::Create {
                uri: uri.to_string().into(),
                request: json(request),
            },
            response: Ok(json(response)),
        }
    }

    /// Update sent with `etag`; `None` means no explicit entity tag.
    pub fn update(
        uri: impl Display,
        etag: Option<&str>,
        request: impl Display,
        response: impl Display,
    ) -> Self {
        Expect {
            request: ExpectedRequest::Update {
                uri: uri.to_string().into(),
                etag: etag.map(ETag::from),
                request: json(request),
            },
            response: Ok(json(response)),
        }
    }

    pub fn delete(uri: impl Display, etag: Option<&str>, response: impl Display) -> Self {
        Expect {
            request: ExpectedRequest::Delete {
                uri: uri.to_string().into(),
                etag: etag.map(ETag::from),
            },
            response: Ok(json(response)),
        }
    }

    /// Get answered with an appliance error.
    pub fn get_error(uri: impl Display, err: E) -> Self {
        Expect {
            request: ExpectedRequest::Get {
                uri: uri.to_string().into(),
            },
            response: Err(err),
        }
    }

    /// Replace the response with an appliance error.
    #[must_use]
    pub fn failing(self, err: E) -> Self {
        Expect {
            request: self.request,
            response: Err(err),
        }
    }
}
