/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::parsers::{at, text, uint};
use crate::rest::{
    Client, FlickrError, FlickrObject, Media, MediaFilter, ObjectKind, RawFields, RequestBuilder,
    mapper,
};
use async_stream::try_stream;
use futures::Stream;
use std::ops::Deref;

/// Paging information returned alongside a list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub per_page: u64,
    pub pages: u64,
    pub total: u64,
}

impl Pagination {
    /// All four values or nothing. Lists that aren't paged (licenses, tickets, ...) have none.
    pub fn from_fields(fields: &RawFields) -> Option<Self> {
        Some(Self {
            page: at(fields, &["page"]).and_then(uint)?,
            per_page: at(fields, &["perpage"])
                .or_else(|| at(fields, &["per_page"]))
                .and_then(uint)?,
            pages: at(fields, &["pages"]).and_then(uint)?,
            total: at(fields, &["total"]).and_then(uint)?,
        })
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.pages
    }
}

/// Objects returned by a list operation, in the order the API returned them
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    pagination: Option<Pagination>,
}

impl<T> Collection<T> {
    pub fn new(items: Vec<T>, pagination: Option<Pagination>) -> Self {
        Self { items, pagination }
    }

    pub fn pagination(&self) -> Option<Pagination> {
        self.pagination
    }

    pub fn page(&self) -> Option<u64> {
        self.pagination.map(|p| p.page)
    }

    pub fn per_page(&self) -> Option<u64> {
        self.pagination.map(|p| p.per_page)
    }

    pub fn pages(&self) -> Option<u64> {
        self.pagination.map(|p| p.pages)
    }

    pub fn total(&self) -> Option<u64> {
        self.pagination.map(|p| p.total)
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    pub(crate) fn retain(mut self, keep: impl FnMut(&T) -> bool) -> Self {
        self.items.retain(keep);
        self
    }
}

impl<T: FlickrObject + Clone> Collection<T> {
    /// Finds an object by its id
    pub fn find(&self, id: &str) -> Option<&T> {
        self.items
            .iter()
            .find(|o| o.raw("id").and_then(text).as_deref() == Some(id))
    }

    /// The objects of one kind. Paging information is kept.
    pub fn of_kind(&self, kind: ObjectKind) -> Collection<T> {
        Collection::new(
            self.items
                .iter()
                .filter(|o| o.kind() == kind)
                .cloned()
                .collect(),
            self.pagination,
        )
    }
}

impl Collection<Media> {
    pub fn photos(&self) -> Collection<Media> {
        self.of_kind(ObjectKind::Photo)
    }

    pub fn videos(&self) -> Collection<Media> {
        self.of_kind(ObjectKind::Video)
    }
}

impl<T> Deref for Collection<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// Sends a list request and maps the objects under `item_key` of the operation's payload
pub(crate) async fn fetch_list<T: FlickrObject>(
    client: &Client,
    builder: RequestBuilder,
    item_key: &str,
) -> Result<Collection<T>, FlickrError> {
    let operation = builder.operation();
    let key = operation
        .payload_key()
        .ok_or_else(|| FlickrError::ResponseMissing(operation.to_string()))?;
    let envelope = client.fetch(builder).await?;
    let container = mapper::payload(&envelope, key)?;
    Ok(mapper::collection(&container, item_key, Some(client.clone())))
}

// Same as `fetch_list` for photo and video lists, filtered on both ends
pub(crate) async fn fetch_media(
    client: &Client,
    builder: RequestBuilder,
    filter: MediaFilter,
) -> Result<Collection<Media>, FlickrError> {
    let operation = builder.operation();
    let key = operation
        .payload_key()
        .ok_or_else(|| FlickrError::ResponseMissing(operation.to_string()))?;
    let envelope = client.fetch(builder.media(filter)).await?;
    let container = mapper::payload(&envelope, key)?;
    Ok(mapper::media_collection(
        &container,
        filter,
        Some(client.clone()),
    ))
}

// Requests page after page until the last one, yielding each object
pub(crate) fn stream_pages<T: FlickrObject>(
    client: Client,
    builder: RequestBuilder,
    container_key: &'static str,
    item_key: &'static str,
) -> impl Stream<Item = Result<T, FlickrError>> {
    try_stream! {
        let mut page: u64 = 1;
        loop {
            let envelope = client.fetch(builder.clone().page(page)).await?;
            let container = mapper::payload(&envelope, container_key)?;
            let items: Collection<T> =
                mapper::collection(&container, item_key, Some(client.clone()));

            let next_page = items
                .pagination()
                .filter(|p| p.has_next_page() && !items.is_empty())
                .map(|p| p.page + 1);

            for item in items {
                yield item;
            }

            match next_page {
                Some(next) => page = next,
                None => break,
            }
        }
    }
}
