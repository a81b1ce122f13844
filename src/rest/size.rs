/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::macros::flickr_object;
use crate::rest::parsers::{non_empty_text, uint};
use crate::rest::{Client, FlickrObject, MediaKind, ObjectKind, RawFields, SizeLabel};
use std::str::FromStr;

/// One rendering of a photo or video, from `flickr.photos.getSizes` or the `url_*` extras
#[derive(Debug, Clone)]
pub struct Size {
    client: Option<Client>,
    fields: RawFields,
}

flickr_object!(Size, ObjectKind::Size);

impl Size {
    /// The label as Flickr sends it, including ones without a [`SizeLabel`] (video renderings)
    pub fn label_text(&self) -> Option<String> {
        self.raw("label").and_then(non_empty_text)
    }

    pub fn label(&self) -> Option<SizeLabel> {
        self.label_text()
            .and_then(|label| SizeLabel::from_str(&label).ok())
    }

    pub fn width(&self) -> Option<u64> {
        self.raw("width").and_then(uint)
    }

    pub fn height(&self) -> Option<u64> {
        self.raw("height").and_then(uint)
    }

    /// Url of the file itself
    pub fn source_url(&self) -> Option<String> {
        self.raw("source").and_then(non_empty_text)
    }

    /// Url of the page showing this size
    pub fn page_url(&self) -> Option<String> {
        self.raw("url").and_then(non_empty_text)
    }

    pub fn media(&self) -> Option<MediaKind> {
        self.raw("media")
            .and_then(non_empty_text)
            .and_then(|m| MediaKind::from_str(&m).ok())
    }
}
