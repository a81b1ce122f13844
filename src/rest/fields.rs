/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::{Client, FlickrError, ObjectKind};
use serde_json::{Map, Value};

/// The decoded response fragment an object was built from
pub type RawFields = Map<String, Value>;

// What `object["missing"]` resolves to
pub(crate) static NULL: Value = Value::Null;

/// Behavior shared by every object mapped from a response.
///
/// Objects are read-only views over their [`RawFields`]. The optional [`Client`] is only needed
/// by methods that go back to the API.
pub trait FlickrObject: Sized {
    /// Builds the object from a response fragment
    fn from_fields(fields: RawFields, client: Option<Client>) -> Self;

    /// Which kind of object this is
    fn kind(&self) -> ObjectKind;

    /// The fields this object was built from
    fn fields(&self) -> &RawFields;

    /// The client used for further requests, if any
    fn client(&self) -> Option<&Client>;

    /// Raw passthrough for fields without a named accessor
    fn raw(&self, key: &str) -> Option<&Value> {
        self.fields().get(key)
    }

    /// The bound client, or [`FlickrError::UnboundEntity`]
    fn bound_client(&self) -> Result<&Client, FlickrError> {
        self.client().ok_or(FlickrError::UnboundEntity(self.kind()))
    }
}

/// Recursively merges `other` into `base`. Nested mappings are merged, everything else in
/// `other` replaces what is in `base`.
pub fn deep_merge(mut base: RawFields, other: RawFields) -> RawFields {
    for (key, value) in other {
        let merged = match (base.remove(&key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                Value::Object(deep_merge(existing, incoming))
            }
            (_, incoming) => incoming,
        };
        base.insert(key, merged);
    }
    base
}

/// Copy of `fields` without the given keys
pub fn except(fields: &RawFields, keys: &[&str]) -> RawFields {
    fields
        .iter()
        .filter(|(k, _)| !keys.contains(&k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}
