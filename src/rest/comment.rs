/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::macros::raw_index;
use crate::rest::parsers::{epoch, non_empty_text, text};
use crate::rest::{
    Client, FlickrError, FlickrObject, ObjectKind, Operation, Person, RawFields, RequestBuilder,
};
use chrono::{DateTime, Utc};

/// What a comment was made on. Photo and set comments are edited through different methods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommentTarget {
    #[default]
    Media,
    Set,
}

/// A comment on a photo, video or set
#[derive(Debug, Clone)]
pub struct Comment {
    client: Option<Client>,
    fields: RawFields,
    target: CommentTarget,
}

impl FlickrObject for Comment {
    fn from_fields(fields: RawFields, client: Option<Client>) -> Self {
        Self {
            client,
            fields,
            target: CommentTarget::default(),
        }
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Comment
    }

    fn fields(&self) -> &RawFields {
        &self.fields
    }

    fn client(&self) -> Option<&Client> {
        self.client.as_ref()
    }
}

raw_index!(Comment);

impl Comment {
    pub(crate) fn on(mut self, target: CommentTarget) -> Self {
        self.target = target;
        self
    }

    pub fn target(&self) -> CommentTarget {
        self.target
    }

    pub fn id(&self) -> Option<String> {
        self.raw("id").and_then(non_empty_text)
    }

    /// The commenter, built from the `author*` fields
    pub fn author(&self) -> Option<Person> {
        let nsid = self.raw("author").and_then(non_empty_text)?;
        let mut fields = RawFields::new();
        fields.insert("nsid".to_string(), nsid.into());
        for (from, to) in [
            ("authorname", "username"),
            ("realname", "realname"),
            ("iconserver", "iconserver"),
            ("iconfarm", "iconfarm"),
            ("path_alias", "path_alias"),
        ] {
            if let Some(value) = self.raw(from) {
                fields.insert(to.to_string(), value.clone());
            }
        }
        Some(Person::from_fields(fields, self.client.clone()))
    }

    pub fn author_name(&self) -> Option<String> {
        self.raw("authorname").and_then(non_empty_text)
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.raw("datecreate").and_then(epoch)
    }

    pub fn permalink(&self) -> Option<String> {
        self.raw("permalink").and_then(non_empty_text)
    }

    pub fn content(&self) -> Option<String> {
        self.raw("_content").and_then(text)
    }

    pub async fn edit(&self, comment_text: &str) -> Result<(), FlickrError> {
        let operation = match self.target {
            CommentTarget::Media => Operation::PhotosCommentsEditComment,
            CommentTarget::Set => Operation::PhotosetsCommentsEditComment,
        };
        let builder = RequestBuilder::new(operation)
            .param("comment_id", self.id().unwrap_or_default())
            .param("comment_text", comment_text);
        self.bound_client()?.fetch(builder).await?;
        Ok(())
    }

    pub async fn delete(&self) -> Result<(), FlickrError> {
        let operation = match self.target {
            CommentTarget::Media => Operation::PhotosCommentsDeleteComment,
            CommentTarget::Set => Operation::PhotosetsCommentsDeleteComment,
        };
        let builder =
            RequestBuilder::new(operation).param("comment_id", self.id().unwrap_or_default());
        self.bound_client()?.fetch(builder).await?;
        Ok(())
    }
}
