/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::macros::flickr_object;
use crate::rest::parsers::{non_empty_text, uint};
use crate::rest::{
    Client, Collection, FlickrError, FlickrObject, ObjectKind, Operation, RawFields,
    RequestBuilder, list,
};

/// A license media can be published under
#[derive(Debug, Clone)]
pub struct License {
    client: Option<Client>,
    fields: RawFields,
}

flickr_object!(License, ObjectKind::License);

impl License {
    /// Every license Flickr knows about
    pub async fn list(client: Client) -> Result<Collection<License>, FlickrError> {
        list::fetch_list(
            &client,
            RequestBuilder::new(Operation::PhotosLicensesGetInfo),
            "license",
        )
        .await
    }

    pub fn id(&self) -> Option<u64> {
        self.raw("id").and_then(uint)
    }

    pub fn name(&self) -> Option<String> {
        self.raw("name").and_then(non_empty_text)
    }

    /// Link to the license text. Absent for "All Rights Reserved".
    pub fn url(&self) -> Option<String> {
        self.raw("url").and_then(non_empty_text)
    }
}
