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

//! Scripted [`Appliance`](oneview_core::Appliance) for tests.
//!
//! Requests are checked against a queue of [`Expect`]ations in order. Each
//! request consumes the head of the queue; a mismatch is reported as an
//! error carrying what was expected.

pub mod expect;

#[doc(inline)]
pub use expect::Expect;
pub use expect::ExpectedRequest;

use expect::Response;

use oneview_core::Appliance as OneViewAppliance;
use oneview_core::ETag;
use oneview_core::ListQuery;
use oneview_core::Reply;
use oneview_core::ResourceList;
use oneview_core::ResourceUri;
use oneview_core::TaskHandle;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::from_value;
use serde_json::to_value;
use serde_json::Error as JsonError;
use serde_json::Value as JsonValue;
use std::collections::VecDeque;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::sync::Mutex;
use std::sync::PoisonError;

#[derive(Debug)]
pub enum Error {
    ErrorResponse(Box<dyn StdError + Send + Sync>),
    MutexLock(String),
    NothingIsExpected,
    BadRequestJson(JsonError),
    BadResponseJson(JsonError),
    UnexpectedGet(ResourceUri, ExpectedRequest),
    UnexpectedList(ResourceUri, String, ExpectedRequest),
    UnexpectedCreate(ResourceUri, String, ExpectedRequest),
    UnexpectedUpdate(ResourceUri, Option<ETag>, String, ExpectedRequest),
    UnexpectedDelete(ResourceUri, Option<ETag>, ExpectedRequest),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::ErrorResponse(err) => write!(f, "response: {err}"),
            Self::MutexLock(err) => write!(f, "lock error: {err}"),
            Self::NothingIsExpected => {
                write!(f, "nothing is expected to happen but something happened")
            }
            Self::BadRequestJson(err) => write!(f, "bad json request: {err}"),
            Self::BadResponseJson(err) => write!(f, "bad json response: {err}"),
            Self::UnexpectedGet(uri, expected) => {
                write!(f, "unexpected get: {uri}; expected: {expected:?}")
            }
            Self::UnexpectedList(uri, query, expected) => {
                write!(
                    f,
                    "unexpected list: {uri}?{query}; expected: {expected:?}"
                )
            }
            Self::UnexpectedCreate(uri, json, expected) => {
                write!(
                    f,
                    "unexpected create: {uri}; json: {json} expected: {expected:?}"
                )
            }
            Self::UnexpectedUpdate(uri, etag, json, expected) => {
                write!(
                    f,
                    "unexpected update: {uri}; etag: {etag:?}; json: {json} expected: {expected:?}"
                )
            }
            Self::UnexpectedDelete(uri, etag, expected) => {
                write!(
                    f,
                    "unexpected delete: {uri}; etag: {etag:?}; expected: {expected:?}"
                )
            }
        }
    }
}

impl StdError for Error {}

impl Error {
    pub fn mutex_lock<T>(err: PoisonError<T>) -> Self {
        Self::MutexLock(err.to_string())
    }

    /// Error injected by the expectation, if this is one.
    #[must_use]
    pub fn injected(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self {
            Self::ErrorResponse(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

pub struct Appliance<E> {
    expect: Mutex<VecDeque<Expect<E>>>,
}

impl<E> Default for Appliance<E> {
    fn default() -> Self {
        Self {
            expect: Mutex::new(VecDeque::new()),
        }
    }
}

impl<E> Appliance<E> {
    /// Queue an expectation after the already queued ones.
    pub fn expect(&self, exp: Expect<E>) {
        self.expect.lock().expect("not poisoned").push_back(exp);
    }

    /// Number of expectations not consumed yet.
    pub fn remaining(&self) -> usize {
        self.expect.lock().expect("not poisoned").len()
    }

    fn next(&self) -> Result<Expect<E>, Error> {
        self.expect
            .lock()
            .map_err(Error::mutex_lock)?
            .pop_front()
            .ok_or(Error::NothingIsExpected)
    }
}

fn respond<E>(response: Response<E>) -> Result<JsonValue, Error>
where
    E: StdError + Send + Sync + 'static,
{
    response.map_err(|err| Error::ErrorResponse(Box::new(err)))
}

/// Mutations are answered with `202 Accepted` and the expected body.
fn reply(body: JsonValue) -> Result<TaskHandle, Error> {
    TaskHandle::from_reply(Reply {
        status: 202,
        location: None,
        body: Some(body),
    })
    .map_err(Error::BadResponseJson)
}

impl<E> OneViewAppliance for Appliance<E>
where
    E: StdError + Send + Sync + 'static,
{
    type Error = Error;

    async fn get<T: DeserializeOwned + Send + Sync>(
        &self,
        in_uri: &ResourceUri,
    ) -> Result<T, Self::Error> {
        let expect = self.next()?;
        match expect {
            Expect {
                request: ExpectedRequest::Get { uri },
                response,
            } if uri == *in_uri => {
                from_value(respond(response)?).map_err(Error::BadResponseJson)
            }
            _ => Err(Error::UnexpectedGet(in_uri.clone(), expect.request)),
        }
    }

    async fn list<T: DeserializeOwned + Send + Sync>(
        &self,
        in_uri: &ResourceUri,
        in_query: &ListQuery,
    ) -> Result<ResourceList<T>, Self::Error> {
        let expect = self.next()?;
        let in_query = in_query.to_query_string();
        match expect {
            Expect {
                request: ExpectedRequest::List { uri, query },
                response,
            } if uri == *in_uri && query == in_query => {
                from_value(respond(response)?).map_err(Error::BadResponseJson)
            }
            _ => Err(Error::UnexpectedList(
                in_uri.clone(),
                in_query,
                expect.request,
            )),
        }
    }

    async fn create<V: Serialize + Send + Sync>(
        &self,
        in_uri: &ResourceUri,
        body: &V,
    ) -> Result<TaskHandle, Self::Error> {
        let expect = self.next()?;
        let in_request = to_value(body).map_err(Error::BadRequestJson)?;
        match expect {
            Expect {
                request: ExpectedRequest::Create { uri, request },
                response,
            } if uri == *in_uri && request == in_request => reply(respond(response)?),
            _ => Err(Error::UnexpectedCreate(
                in_uri.clone(),
                in_request.to_string(),
                expect.request,
            )),
        }
    }

    async fn update<V: Serialize + Send + Sync>(
        &self,
        in_uri: &ResourceUri,
        in_etag: Option<&ETag>,
        body: &V,
    ) -> Result<TaskHandle, Self::Error> {
        let expect = self.next()?;
        let in_request = to_value(body).map_err(Error::BadRequestJson)?;
        match expect {
            Expect {
                request:
                    ExpectedRequest::Update {
                        uri,
                        etag,
                        request,
                    },
                response,
            } if uri == *in_uri && etag.as_ref() == in_etag && request == in_request => {
                reply(respond(response)?)
            }
            _ => Err(Error::UnexpectedUpdate(
                in_uri.clone(),
                in_etag.cloned(),
                in_request.to_string(),
                expect.request,
            )),
        }
    }

    async fn delete(
        &self,
        in_uri: &ResourceUri,
        in_etag: Option<&ETag>,
    ) -> Result<TaskHandle, Self::Error> {
        let expect = self.next()?;
        match expect {
            Expect {
                request: ExpectedRequest::Delete { uri, etag },
                response,
            } if uri == *in_uri && etag.as_ref() == in_etag => reply(respond(response)?),
            _ => Err(Error::UnexpectedDelete(
                in_uri.clone(),
                in_etag.cloned(),
                expect.request,
            )),
        }
    }
}
