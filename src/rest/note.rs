/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::macros::flickr_object;
use crate::rest::parsers::{non_empty_text, text, uint};
use crate::rest::{
    Client, FlickrError, FlickrObject, ObjectKind, Operation, RawFields, RequestBuilder,
};

/// Position and size of a note, in pixels of the 500px (Medium) rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl NoteBox {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .param("note_x", self.x)
            .param("note_y", self.y)
            .param("note_w", self.width)
            .param("note_h", self.height)
    }
}

/// A note drawn on a photo
#[derive(Debug, Clone)]
pub struct Note {
    client: Option<Client>,
    fields: RawFields,
}

flickr_object!(Note, ObjectKind::Note);

impl Note {
    pub fn id(&self) -> Option<String> {
        self.raw("id").and_then(non_empty_text)
    }

    pub fn author(&self) -> Option<String> {
        self.raw("author").and_then(non_empty_text)
    }

    pub fn author_name(&self) -> Option<String> {
        self.raw("authorname").and_then(non_empty_text)
    }

    pub fn x(&self) -> Option<u32> {
        self.dimension("x")
    }

    pub fn y(&self) -> Option<u32> {
        self.dimension("y")
    }

    pub fn width(&self) -> Option<u32> {
        self.dimension("w")
    }

    pub fn height(&self) -> Option<u32> {
        self.dimension("h")
    }

    /// All four dimensions, when the note carries them
    pub fn bounds(&self) -> Option<NoteBox> {
        Some(NoteBox::new(self.x()?, self.y()?, self.width()?, self.height()?))
    }

    pub fn content(&self) -> Option<String> {
        self.raw("_content").and_then(text)
    }

    /// Moves, resizes or rewrites the note
    pub async fn edit(&self, bounds: NoteBox, note_text: &str) -> Result<(), FlickrError> {
        let builder = RequestBuilder::new(Operation::PhotosNotesEdit)
            .param("note_id", self.id().unwrap_or_default())
            .param("note_text", note_text);
        self.bound_client()?.fetch(bounds.apply(builder)).await?;
        Ok(())
    }

    pub async fn delete(&self) -> Result<(), FlickrError> {
        let builder = RequestBuilder::new(Operation::PhotosNotesDelete)
            .param("note_id", self.id().unwrap_or_default());
        self.bound_client()?.fetch(builder).await?;
        Ok(())
    }

    fn dimension(&self, key: &str) -> Option<u32> {
        self.raw(key)
            .and_then(uint)
            .and_then(|v| u32::try_from(v).ok())
    }
}
