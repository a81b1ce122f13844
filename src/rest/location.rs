/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::macros::flickr_object;
use crate::rest::parsers::{float, non_empty_text, text, uint};
use crate::rest::{Client, FlickrObject, ObjectKind, RawFields};
use serde_json::Value;

/// A named place in a location's hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub name: Option<String>,
    pub place_id: Option<String>,
    pub woeid: Option<String>,
}

impl Place {
    // Either `{"_content": "...", "place_id": ..., "woeid": ...}` or a bare name
    fn from_value(value: &Value) -> Option<Self> {
        let place = match value {
            Value::Object(fields) => Self {
                name: fields.get("_content").and_then(non_empty_text),
                place_id: fields.get("place_id").and_then(non_empty_text),
                woeid: fields.get("woeid").and_then(non_empty_text),
            },
            other => Self {
                name: non_empty_text(other),
                place_id: None,
                woeid: None,
            },
        };
        (place.name.is_some() || place.place_id.is_some() || place.woeid.is_some())
            .then_some(place)
    }
}

/// Where a photo was taken
#[derive(Debug, Clone)]
pub struct Location {
    client: Option<Client>,
    fields: RawFields,
}

flickr_object!(Location, ObjectKind::Location);

impl Location {
    pub fn latitude(&self) -> Option<f64> {
        self.raw("latitude").and_then(float)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.raw("longitude").and_then(float)
    }

    /// Recorded accuracy, 1 (world) to 16 (street)
    pub fn accuracy(&self) -> Option<u64> {
        self.raw("accuracy").and_then(uint)
    }

    /// 0 not defined, 1 indoors, 2 outdoors
    pub fn context(&self) -> Option<u64> {
        self.raw("context").and_then(uint)
    }

    pub fn place_id(&self) -> Option<String> {
        self.raw("place_id").and_then(non_empty_text)
    }

    pub fn woeid(&self) -> Option<String> {
        self.raw("woeid").and_then(text)
    }

    pub fn neighbourhood(&self) -> Option<Place> {
        self.place("neighbourhood")
    }

    pub fn locality(&self) -> Option<Place> {
        self.place("locality")
    }

    pub fn county(&self) -> Option<Place> {
        self.place("county")
    }

    pub fn region(&self) -> Option<Place> {
        self.place("region")
    }

    pub fn country(&self) -> Option<Place> {
        self.place("country")
    }

    fn place(&self, key: &str) -> Option<Place> {
        self.raw(key).and_then(Place::from_value)
    }
}
