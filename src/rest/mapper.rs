/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Turns decoded responses into objects.
//!
//! Every response is an envelope: `{"stat": "ok", "<key>": {...}}` on success and
//! `{"stat": "fail", "code": n, "message": "..."}` otherwise. Nothing is mapped from a failed
//! envelope.

use crate::rest::parsers::{self, non_empty_text, text, uint};
use crate::rest::{
    Client, Collection, FlickrError, FlickrObject, Media, MediaContext, MediaFilter, MediaKind,
    Pagination, RawFields,
};
use serde_json::Value;
use std::str::FromStr;

/// Checks the envelope status and returns the remaining fields
pub fn check_envelope(body: Value) -> Result<RawFields, FlickrError> {
    let Value::Object(mut envelope) = body else {
        return Err(FlickrError::ApiResponseMalformed(
            "response is not a JSON object".to_string(),
        ));
    };
    let stat = envelope.remove("stat");
    match stat.as_ref().and_then(Value::as_str) {
        Some("ok") => Ok(envelope),
        Some(_) => Err(FlickrError::Api {
            code: envelope
                .get("code")
                .and_then(uint)
                .and_then(|c| u32::try_from(c).ok()),
            message: envelope.get("message").and_then(text).unwrap_or_default(),
        }),
        None => Err(FlickrError::ApiResponseMalformed(
            "response has no stat".to_string(),
        )),
    }
}

/// The mapping nested under `key`
pub fn payload(envelope: &RawFields, key: &str) -> Result<RawFields, FlickrError> {
    envelope
        .get(key)
        .and_then(Value::as_object)
        .cloned()
        .ok_or_else(|| FlickrError::ResponseMissing(key.to_string()))
}

/// Maps the payload nested under `key` into a single object
pub fn object<T: FlickrObject>(
    envelope: &RawFields,
    key: &str,
    client: Option<Client>,
) -> Result<T, FlickrError> {
    Ok(T::from_fields(payload(envelope, key)?, client))
}

/// Maps the list under `item_key` of a list container, with the container's paging information
pub fn collection<T: FlickrObject>(
    container: &RawFields,
    item_key: &str,
    client: Option<Client>,
) -> Collection<T> {
    let items = container
        .get(item_key)
        .and_then(parsers::items)
        .unwrap_or_default()
        .into_iter()
        .filter_map(Value::as_object)
        .map(|fields| T::from_fields(fields.clone(), client.clone()))
        .collect();
    Collection::new(items, Pagination::from_fields(container))
}

/// Maps a list of photos and videos, keeping only what passes `filter`
pub fn media_collection(
    container: &RawFields,
    filter: MediaFilter,
    client: Option<Client>,
) -> Collection<Media> {
    collection::<Media>(container, "photo", client).retain(|m| filter.accepts(m.media_kind()))
}

/// Drops the photos or videos `filter` rejects from the `photo` list under `key`, in place
pub fn retain_media(envelope: &mut RawFields, key: &str, filter: MediaFilter) {
    if filter == MediaFilter::All {
        return;
    }
    let Some(items) = envelope
        .get_mut(key)
        .and_then(Value::as_object_mut)
        .and_then(|container| container.get_mut("photo"))
    else {
        return;
    };
    let drop_single =
        matches!(&*items, Value::Object(fields) if !filter.accepts(media_kind(fields)));
    if let Value::Array(list) = &mut *items {
        list.retain(|item| {
            item.as_object()
                .is_some_and(|fields| filter.accepts(media_kind(fields)))
        });
    } else if drop_single {
        *items = Value::Array(Vec::new());
    }
}

/// Decides whether a media item is a photo or a video.
///
/// The `media` extra is authoritative when present. Otherwise anything carrying video
/// information (`video` block or a `duration`) is a video.
pub fn media_kind(fields: &RawFields) -> MediaKind {
    if let Some(kind) = fields
        .get("media")
        .and_then(Value::as_str)
        .and_then(|s| MediaKind::from_str(s).ok())
    {
        return kind;
    }
    if fields.contains_key("video") || fields.contains_key("duration") {
        MediaKind::Video
    } else {
        MediaKind::Photo
    }
}

/// One object or a list of them
#[derive(Debug, Clone)]
pub enum Mapped<T> {
    One(T),
    Many(Collection<T>),
}

/// Maps a bare mapping or sequence into objects of kind `T`
pub fn map<T: FlickrObject>(value: Value, client: Option<Client>) -> Result<Mapped<T>, FlickrError> {
    match value {
        Value::Object(fields) => Ok(Mapped::One(T::from_fields(fields, client))),
        Value::Array(items) => Ok(Mapped::Many(Collection::new(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::Object(fields) => Some(T::from_fields(fields, client.clone())),
                    _ => None,
                })
                .collect(),
            None,
        ))),
        other => Err(FlickrError::ApiResponseMalformed(format!(
            "cannot map {other} to an object"
        ))),
    }
}

/// Maps a `getContext` style response. A neighbour with id "0" marks the end of the sequence.
pub fn context(envelope: &RawFields, client: Option<Client>) -> MediaContext {
    let neighbour = |key: &str| {
        envelope
            .get(key)
            .and_then(Value::as_object)
            .filter(|f| {
                f.get("id")
                    .and_then(non_empty_text)
                    .is_some_and(|id| id != "0")
            })
            .map(|f| Media::from_fields(f.clone(), client.clone()))
    };
    MediaContext {
        previous: neighbour("prevphoto"),
        next: neighbour("nextphoto"),
        count: envelope.get("count").and_then(uint),
        set: None,
    }
}
