/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::macros::flickr_object;
use crate::rest::parsers::{non_empty_text, text};
use crate::rest::{Client, FlickrObject, ObjectKind, RawFields};

/// One EXIF/TIFF/GPS tag from `flickr.photos.getExif`
#[derive(Debug, Clone)]
pub struct ExifEntry {
    client: Option<Client>,
    fields: RawFields,
}

flickr_object!(ExifEntry, ObjectKind::Exif);

impl ExifEntry {
    pub fn tagspace(&self) -> Option<String> {
        self.raw("tagspace").and_then(non_empty_text)
    }

    pub fn tagspace_id(&self) -> Option<String> {
        self.raw("tagspaceid").and_then(non_empty_text)
    }

    pub fn tag(&self) -> Option<String> {
        self.raw("tag").and_then(non_empty_text)
    }

    pub fn label(&self) -> Option<String> {
        self.raw("label").and_then(non_empty_text)
    }

    /// The value as stored in the file
    pub fn raw_value(&self) -> Option<String> {
        self.raw("raw").and_then(text)
    }

    /// Human readable form of the value, when Flickr provides one
    pub fn clean(&self) -> Option<String> {
        self.raw("clean").and_then(text)
    }
}
