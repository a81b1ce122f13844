/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::macros::flickr_object;
use crate::rest::parsers::{flag, non_empty_text, text};
use crate::rest::{Client, FlickrObject, ObjectKind, RawFields};

/// A tag on a photo.
///
/// Tags from `flickr.photos.getInfo` carry their author and raw form. Tags from the `tags` extra
/// are plain words, only [`content`](Self::content) and [`raw`](Self::raw) are set for those.
#[derive(Debug, Clone)]
pub struct Tag {
    client: Option<Client>,
    fields: RawFields,
}

flickr_object!(Tag, ObjectKind::Tag);

impl Tag {
    pub(crate) fn from_word(word: &str) -> Self {
        let mut fields = RawFields::new();
        fields.insert("_content".to_string(), word.into());
        fields.insert("raw".to_string(), word.into());
        Self::from_fields(fields, None)
    }

    /// Id used by `flickr.photos.removeTag`
    pub fn id(&self) -> Option<String> {
        self.raw("id").and_then(non_empty_text)
    }

    pub fn author(&self) -> Option<String> {
        self.raw("author").and_then(non_empty_text)
    }

    pub fn author_name(&self) -> Option<String> {
        self.raw("authorname").and_then(non_empty_text)
    }

    /// The tag as it was entered
    pub fn raw_text(&self) -> Option<String> {
        self.raw("raw").and_then(text)
    }

    /// The normalized tag
    pub fn content(&self) -> Option<String> {
        self.raw("_content").and_then(text)
    }

    pub fn is_machine_tag(&self) -> Option<bool> {
        match self.raw("machine_tag").and_then(flag) {
            Some(machine_tag) => Some(machine_tag),
            None => self.raw_text().map(|raw| is_machine_tag(&raw)),
        }
    }
}

// namespace:predicate=value
pub(crate) fn is_machine_tag(tag: &str) -> bool {
    tag.split_once(':')
        .and_then(|(namespace, rest)| rest.split_once('=').map(|(p, _)| (namespace, p)))
        .is_some_and(|(namespace, predicate)| !namespace.is_empty() && !predicate.is_empty())
}
