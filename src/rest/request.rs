/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::{FlickrError, MediaFilter, Operation, SizeLabel};
use std::collections::BTreeMap;
use strum_macros::IntoStaticStr;

/// A single request parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Int(i64),
    List(Vec<String>),
    Flag(bool),
}

impl ParamValue {
    /// The value as it is sent over the wire
    pub fn to_wire(&self) -> String {
        match self {
            ParamValue::Text(s) => s.clone(),
            ParamValue::Int(i) => i.to_string(),
            ParamValue::List(items) => items.join(","),
            ParamValue::Flag(b) => if *b { "1" } else { "0" }.to_string(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Text(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => ParamValue::Int(i),
            Err(_) => ParamValue::Text(value.to_string()),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Flag(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::List(value)
    }
}

impl From<&[&str]> for ParamValue {
    fn from(value: &[&str]) -> Self {
        ParamValue::List(value.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ParamValue {
    fn from(value: [&str; N]) -> Self {
        ParamValue::List(value.iter().map(|s| s.to_string()).collect())
    }
}

/// Parameters passed to a remote procedure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, builder style
    pub fn with(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<ParamValue>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.0.iter()
    }

    /// Merges `other` into these params. Values in `other` win.
    pub fn merge(&mut self, other: Params) {
        self.0.extend(other.0);
    }

    /// The parameters as they are sent over the wire
    pub fn to_wire(&self) -> BTreeMap<String, String> {
        self.0
            .iter()
            .map(|(k, v)| (k.clone(), v.to_wire()))
            .collect()
    }
}

impl<K: AsRef<str>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.set(k.as_ref(), v);
        }
        params
    }
}

/// Formats tags the way Flickr expects them: space separated, multi-word tags quoted
pub fn tag_list<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(|t| {
            let t = t.as_ref();
            if t.contains(char::is_whitespace) {
                format!("\"{t}\"")
            } else {
                t.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The extras that return a url for every size
pub fn size_extras() -> Vec<String> {
    SizeLabel::ALL.iter().map(|s| s.url_extra()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

/// A fully parameterized request ready for a [`Transport`](crate::rest::Transport)
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    operation: Operation,
    method: HttpMethod,
    params: BTreeMap<String, String>,
}

impl Request {
    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// All wire parameters, including `method` and `format`
    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// Translates an [`Operation`] and its parameters into a [`Request`].
///
/// Parameters set with [`param`](Self::param) are the operation's own (ids taken from the object
/// the call is made on). Caller supplied [`params`](Self::params) are merged over them.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    operation: Operation,
    required: Params,
    overrides: Params,
    media: Option<MediaFilter>,
    extras: Vec<String>,
    include_sizes: bool,
    page: Option<u64>,
}

impl RequestBuilder {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            required: Params::new(),
            overrides: Params::new(),
            media: None,
            extras: Vec::new(),
            include_sizes: false,
            page: None,
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Sets an operation specific parameter
    pub fn param(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.required.set(key, value);
        self
    }

    /// Merges in caller supplied parameters. These win over [`param`](Self::param).
    pub fn params(mut self, params: Params) -> Self {
        self.overrides.merge(params);
        self
    }

    /// Restricts the result to photos or videos, for operations that support it
    pub fn media(mut self, filter: MediaFilter) -> Self {
        self.media = Some(filter);
        self
    }

    /// Requests optional fields
    pub fn extras<S: AsRef<str>>(mut self, extras: &[S]) -> Self {
        self.extras
            .extend(extras.iter().map(|e| e.as_ref().to_string()));
        self
    }

    /// Also request the url of every size
    pub fn include_sizes(mut self, include: bool) -> Self {
        self.include_sizes = include;
        self
    }

    /// Forces the page to request, overriding any caller supplied page
    pub fn page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn build(self) -> Result<Request, FlickrError> {
        let operation = self.operation;
        let mut params = Params::new()
            .with("method", operation.name())
            .with("format", "json")
            .with("nojsoncallback", 1);

        if let Some(filter) = self.media {
            if operation.accepts_media_filter() {
                params.set("media", filter.to_string());
            }
        }
        params.merge(self.required);

        let mut overrides = self.overrides;
        let include_sizes = match overrides.remove("include_sizes") {
            Some(ParamValue::Flag(b)) => b || self.include_sizes,
            Some(other) => other.to_wire() == "1" || self.include_sizes,
            None => self.include_sizes,
        };

        let mut extras = self.extras;
        if let Some(caller_extras) = overrides.remove("extras") {
            match caller_extras {
                ParamValue::List(items) => extras.extend(items),
                other => extras.extend(
                    other
                        .to_wire()
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string),
                ),
            }
        }
        if include_sizes {
            extras.extend(size_extras());
        }
        let mut deduped: Vec<String> = Vec::with_capacity(extras.len());
        for extra in extras {
            if !deduped.contains(&extra) {
                deduped.push(extra);
            }
        }
        if !deduped.is_empty() {
            params.set("extras", deduped);
        }

        params.merge(overrides);
        // Fixed by the operation, never by the caller
        params.set("method", operation.name());
        params.set("format", "json");
        params.set("nojsoncallback", 1);
        if let Some(page) = self.page {
            params.set("page", page);
        }

        let wire = params.to_wire();
        for required in operation.required_params() {
            if wire.get(*required).is_none_or(|v| v.is_empty()) {
                return Err(FlickrError::MissingParameter {
                    operation: operation.name(),
                    parameter: *required,
                });
            }
        }

        Ok(Request {
            operation,
            method: operation.http_method(),
            params: wire,
        })
    }
}
