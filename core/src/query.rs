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

//! Query parameter builders for OneView collection requests.
//!
//! Collection endpoints (`/rest/scopes`, `/rest/fc-networks`, ...) accept
//! the same family of parameters:
//!
//! | Parameter | Meaning | Example |
//! |-----------|---------|---------|
//! | `start`   | Index of the first member returned | `start=0` |
//! | `count`   | Maximum number of members returned | `count=25` |
//! | `filter`  | Filter expression, repeatable (members match all) | `filter=name matches 'web%'` |
//! | `query`   | Free-form query expression | `query=name eq 'x'` |
//! | `sort`    | Sort field and order | `sort=name:asc` |
//!
//! ```rust
//! use oneview_core::query::{Filter, ListQuery, SortOrder};
//!
//! let query = ListQuery::new()
//!     .filter(Filter::matches("name", "web%"))
//!     .sort_by("name", SortOrder::Desc);
//! assert_eq!(
//!     query.to_query_string(),
//!     "filter=name+matches+%27web%25%27&sort=name%3Adesc"
//! );
//! ```

use core::fmt::Display;
use core::fmt::Formatter;
use core::fmt::Result as FmtResult;
use url::form_urlencoded::Serializer;

/// Literal value types supported in filter expressions
#[derive(Debug, Clone)]
pub enum FilterLiteral {
    /// String literal value
    String(String),
    /// Integer literal value
    Integer(i64),
    /// Boolean literal value
    Boolean(bool),
}

impl Display for FilterLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Self::Integer(i) => i.fmt(f),
            Self::Boolean(b) => b.fmt(f),
        }
    }
}

/// Trait for types that can be converted to filter literals
pub trait ToFilterLiteral {
    /// Convert this value to a filter literal
    fn to_filter_literal(self) -> FilterLiteral;
}

impl ToFilterLiteral for &str {
    fn to_filter_literal(self) -> FilterLiteral {
        FilterLiteral::String(self.to_string())
    }
}

impl ToFilterLiteral for String {
    fn to_filter_literal(self) -> FilterLiteral {
        FilterLiteral::String(self)
    }
}

impl ToFilterLiteral for &String {
    fn to_filter_literal(self) -> FilterLiteral {
        FilterLiteral::String(self.clone())
    }
}

impl ToFilterLiteral for i64 {
    fn to_filter_literal(self) -> FilterLiteral {
        FilterLiteral::Integer(self)
    }
}

impl ToFilterLiteral for u32 {
    fn to_filter_literal(self) -> FilterLiteral {
        FilterLiteral::Integer(i64::from(self))
    }
}

impl ToFilterLiteral for bool {
    fn to_filter_literal(self) -> FilterLiteral {
        FilterLiteral::Boolean(self)
    }
}

/// A single filter expression: `property operator literal`.
///
/// Free-form expressions are accepted through [`Filter::raw`].
#[derive(Debug, Clone)]
pub struct Filter(String);

impl Filter {
    fn comparison<V: ToFilterLiteral>(property: &str, operator: &str, value: V) -> Self {
        Self(format!(
            "{property} {operator} {}",
            value.to_filter_literal()
        ))
    }

    /// `property = value`
    pub fn eq<V: ToFilterLiteral>(property: &str, value: V) -> Self {
        Self::comparison(property, "=", value)
    }

    /// `property <> value`
    pub fn ne<V: ToFilterLiteral>(property: &str, value: V) -> Self {
        Self::comparison(property, "<>", value)
    }

    /// `property matches value`, where `%` in the value is a wildcard.
    pub fn matches<V: ToFilterLiteral>(property: &str, value: V) -> Self {
        Self::comparison(property, "matches", value)
    }

    /// Expression passed as is.
    pub fn raw<S: Into<String>>(expr: S) -> Self {
        Self(expr.into())
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

/// Builder for collection query parameters.
///
/// An empty query produces no parameters at all, so the request goes to the
/// bare collection URI.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    start: Option<u32>,
    count: Option<u32>,
    filters: Vec<Filter>,
    query: Option<String>,
    sort: Option<String>,
}

impl ListQuery {
    /// Create an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the first member.
    #[must_use]
    pub const fn start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    /// Maximum number of members.
    #[must_use]
    pub const fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Add a filter. Members must match every filter.
    #[must_use]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set the `query` expression.
    #[must_use]
    pub fn query<S: Into<String>>(mut self, query: S) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Set raw sort expression such as `name:desc`.
    #[must_use]
    pub fn sort<S: Into<String>>(mut self, sort: S) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Sort by field in the given order.
    #[must_use]
    pub fn sort_by(self, field: &str, order: SortOrder) -> Self {
        self.sort(format!("{field}:{order}"))
    }

    /// Query that looks a resource up by name.
    #[must_use]
    pub fn by_name(name: &str) -> Self {
        Self::new()
            .filter(Filter::matches("name", name))
            .sort_by("name", SortOrder::Asc)
    }

    /// No parameter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start.is_none()
            && self.count.is_none()
            && self.filters.is_empty()
            && self.query.is_none()
            && self.sort.is_none()
    }

    /// Parameters as name/value pairs in a stable order.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(start) = self.start {
            pairs.push(("start", start.to_string()));
        }
        if let Some(count) = self.count {
            pairs.push(("count", count.to_string()));
        }
        for filter in &self.filters {
            pairs.push(("filter", filter.to_string()));
        }
        if let Some(query) = &self.query {
            pairs.push(("query", query.clone()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        pairs
    }

    /// Form-urlencoded query string (without leading `?`).
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut serializer = Serializer::new(String::new());
        for (name, value) in self.to_pairs() {
            serializer.append_pair(name, &value);
        }
        serializer.finish()
    }
}
