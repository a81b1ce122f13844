/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::macros::flickr_object;
use crate::rest::parsers::{time, uint};
use crate::rest::{Client, FlickrObject, ObjectKind, RawFields};
use chrono::{DateTime, Utc};

/// Number of photos in a date range, as returned by `flickr.photos.getCounts`.
///
/// Ranges requested with `dates` are unix timestamps and ranges requested with `taken_dates` are
/// calendar dates. Both come back as the same time type.
#[derive(Debug, Clone)]
pub struct MediaCount {
    client: Option<Client>,
    fields: RawFields,
}

flickr_object!(MediaCount, ObjectKind::MediaCount);

impl MediaCount {
    pub fn count(&self) -> Option<u64> {
        self.raw("count").and_then(uint)
    }

    pub fn from(&self) -> Option<DateTime<Utc>> {
        self.raw("fromdate").and_then(time)
    }

    pub fn to(&self) -> Option<DateTime<Utc>> {
        self.raw("todate").and_then(time)
    }
}
