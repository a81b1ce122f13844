/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::macros::flickr_object;
use crate::rest::parsers::{epoch, flag, non_empty_text, uint};
use crate::rest::{
    Client, Collection, Comment, CommentTarget, FlickrError, FlickrObject, Media, MediaContext,
    MediaFilter, ObjectKind, Operation, Params, Person, RawFields, RequestBuilder, list, mapper,
};
use chrono::{DateTime, Utc};

/// A photoset (album).
///
/// See [Flickr API Docs](https://www.flickr.com/services/api/flickr.photosets.getInfo.html) for
/// more details on the individual fields.
#[derive(Debug, Clone)]
pub struct Set {
    client: Option<Client>,
    fields: RawFields,
}

flickr_object!(Set, ObjectKind::Set);

impl Set {
    /// Returns information for the specified set id
    pub async fn from_id(client: Client, set_id: &str) -> Result<Set, FlickrError> {
        let builder =
            RequestBuilder::new(Operation::PhotosetsGetInfo).param("photoset_id", set_id);
        let envelope = client.fetch(builder).await?;
        mapper::object(&envelope, "photoset", Some(client))
    }

    /// Creates a set. A set always has a primary photo.
    pub async fn create(
        client: Client,
        title: &str,
        primary_media_id: &str,
        description: Option<&str>,
    ) -> Result<Set, FlickrError> {
        let mut builder = RequestBuilder::new(Operation::PhotosetsCreate)
            .param("title", title)
            .param("primary_photo_id", primary_media_id);
        if let Some(description) = description {
            builder = builder.param("description", description);
        }
        let envelope = client.fetch(builder).await?;
        mapper::object(&envelope, "photoset", Some(client))
    }

    /// Sets of the calling user, or of `user_id` when given in `params`
    pub async fn list(client: Client, params: Params) -> Result<Collection<Set>, FlickrError> {
        let builder = RequestBuilder::new(Operation::PhotosetsGetList).params(params);
        list::fetch_list(&client, builder, "photoset").await
    }

    /// Orders the calling user's sets. Sets not listed are moved to the end.
    pub async fn order<S: AsRef<str>>(client: Client, set_ids: &[S]) -> Result<(), FlickrError> {
        let builder =
            RequestBuilder::new(Operation::PhotosetsOrderSets).param("photoset_ids", ids(set_ids));
        client.fetch(builder).await?;
        Ok(())
    }

    pub fn id(&self) -> Option<String> {
        self.raw("id").and_then(non_empty_text)
    }

    pub fn title(&self) -> Option<String> {
        self.raw("title").and_then(non_empty_text)
    }

    pub fn description(&self) -> Option<String> {
        self.raw("description").and_then(non_empty_text)
    }

    pub fn primary_media_id(&self) -> Option<String> {
        self.raw("primary").and_then(non_empty_text)
    }

    pub fn secret(&self) -> Option<String> {
        self.raw("secret").and_then(non_empty_text)
    }

    pub fn server(&self) -> Option<String> {
        self.raw("server").and_then(non_empty_text)
    }

    pub fn farm(&self) -> Option<u64> {
        self.raw("farm").and_then(uint)
    }

    /// Url of the primary photo
    pub fn primary_url(&self) -> Option<String> {
        Some(format!(
            "https://farm{}.staticflickr.com/{}/{}_{}.jpg",
            self.farm()?,
            self.server()?,
            self.primary_media_id()?,
            self.secret()?
        ))
    }

    pub fn photo_count(&self) -> Option<u64> {
        self.raw("count_photos")
            .or_else(|| self.raw("photos"))
            .and_then(uint)
    }

    pub fn video_count(&self) -> Option<u64> {
        self.raw("count_videos")
            .or_else(|| self.raw("videos"))
            .and_then(uint)
    }

    /// Photos and videos together
    pub fn media_count(&self) -> Option<u64> {
        match (self.photo_count(), self.video_count()) {
            (None, None) => self.raw("total").and_then(uint),
            (photos, videos) => Some(photos.unwrap_or(0) + videos.unwrap_or(0)),
        }
    }

    pub fn views(&self) -> Option<u64> {
        self.raw("count_views").and_then(uint)
    }

    pub fn comments_count(&self) -> Option<u64> {
        self.raw("count_comments").and_then(uint)
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.raw("date_create").and_then(epoch)
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.raw("date_update").and_then(epoch)
    }

    pub fn owner(&self) -> Option<Person> {
        let nsid = self.raw("owner").and_then(non_empty_text)?;
        let mut fields = RawFields::new();
        fields.insert("nsid".to_string(), nsid.into());
        if let Some(name) = self.raw("username").or_else(|| self.raw("ownername")) {
            fields.insert("username".to_string(), name.clone());
        }
        Some(Person::from_fields(fields, self.client.clone()))
    }

    pub fn can_comment(&self) -> Option<bool> {
        self.raw("can_comment").and_then(flag)
    }

    /// Whether the caller can see the set at all
    pub fn can_see(&self) -> Option<bool> {
        self.raw("visibility_can_see_set").and_then(flag)
    }

    /// Url of the set's page
    pub fn url(&self) -> Option<String> {
        self.raw("url").and_then(non_empty_text).or_else(|| {
            Some(format!(
                "{}/photos/{}/sets/{}/",
                crate::rest::WEB_ORIGIN,
                self.raw("owner").and_then(non_empty_text)?,
                self.id()?
            ))
        })
    }

    pub async fn get_info(&self) -> Result<Set, FlickrError> {
        Set::from_id(self.bound_client()?.clone(), &self.id().unwrap_or_default()).await
    }

    /// Photos and videos in the set, in set order
    pub async fn get_media(&self, params: Params) -> Result<Collection<Media>, FlickrError> {
        self.media_list(MediaFilter::All, params).await
    }

    pub async fn get_photos(&self, params: Params) -> Result<Collection<Media>, FlickrError> {
        self.media_list(MediaFilter::Photos, params).await
    }

    pub async fn get_videos(&self, params: Params) -> Result<Collection<Media>, FlickrError> {
        self.media_list(MediaFilter::Videos, params).await
    }

    pub async fn add_media(&self, media_id: &str) -> Result<(), FlickrError> {
        self.send(self.request(Operation::PhotosetsAddPhoto).param("photo_id", media_id))
            .await
    }

    pub async fn remove_media(&self, media_id: &str) -> Result<(), FlickrError> {
        self.send(self.request(Operation::PhotosetsRemovePhoto).param("photo_id", media_id))
            .await
    }

    pub async fn remove_media_many<S: AsRef<str>>(&self, media_ids: &[S]) -> Result<(), FlickrError> {
        self.send(self.request(Operation::PhotosetsRemovePhotos).param("photo_ids", ids(media_ids)))
            .await
    }

    /// Moves the given media to the front of the set, in the given order
    pub async fn reorder_media<S: AsRef<str>>(&self, media_ids: &[S]) -> Result<(), FlickrError> {
        self.send(self.request(Operation::PhotosetsReorderPhotos).param("photo_ids", ids(media_ids)))
            .await
    }

    pub async fn set_primary(&self, media_id: &str) -> Result<(), FlickrError> {
        self.send(self.request(Operation::PhotosetsSetPrimaryPhoto).param("photo_id", media_id))
            .await
    }

    pub async fn edit_meta(&self, title: &str, description: Option<&str>) -> Result<(), FlickrError> {
        let mut builder = self.request(Operation::PhotosetsEditMeta).param("title", title);
        if let Some(description) = description {
            builder = builder.param("description", description);
        }
        self.send(builder).await
    }

    /// Replaces the content of the set. `primary_media_id` must be one of `media_ids`.
    pub async fn edit_media<S: AsRef<str>>(
        &self,
        primary_media_id: &str,
        media_ids: &[S],
    ) -> Result<(), FlickrError> {
        self.send(
            self.request(Operation::PhotosetsEditPhotos)
                .param("primary_photo_id", primary_media_id)
                .param("photo_ids", ids(media_ids)),
        )
        .await
    }

    pub async fn delete(&self) -> Result<(), FlickrError> {
        self.send(self.request(Operation::PhotosetsDelete)).await
    }

    /// Neighbours of a photo within this set
    pub async fn get_context(&self, media_id: &str) -> Result<MediaContext, FlickrError> {
        let client = self.bound_client()?;
        let builder = self
            .request(Operation::PhotosetsGetContext)
            .param("photo_id", media_id);
        let envelope = client.fetch(builder).await?;
        let mut context = mapper::context(&envelope, Some(client.clone()));
        context.set = Some(self.clone());
        Ok(context)
    }

    pub async fn get_comments(&self) -> Result<Collection<Comment>, FlickrError> {
        let client = self.bound_client()?;
        let comments: Collection<Comment> =
            list::fetch_list(client, self.request(Operation::PhotosetsCommentsGetList), "comment")
                .await?;
        let pagination = comments.pagination();
        Ok(Collection::new(
            comments
                .into_iter()
                .map(|c| c.on(CommentTarget::Set))
                .collect(),
            pagination,
        ))
    }

    /// Adds a comment and returns it (only the id and permalink are filled in)
    pub async fn add_comment(&self, comment_text: &str) -> Result<Comment, FlickrError> {
        let client = self.bound_client()?;
        let builder = self
            .request(Operation::PhotosetsCommentsAddComment)
            .param("comment_text", comment_text);
        let envelope = client.fetch(builder).await?;
        let comment: Comment = mapper::object(&envelope, "comment", Some(client.clone()))?;
        Ok(comment.on(CommentTarget::Set))
    }

    fn request(&self, operation: Operation) -> RequestBuilder {
        RequestBuilder::new(operation).param("photoset_id", self.id().unwrap_or_default())
    }

    async fn send(&self, builder: RequestBuilder) -> Result<(), FlickrError> {
        self.bound_client()?.fetch(builder).await?;
        Ok(())
    }

    async fn media_list(
        &self,
        filter: MediaFilter,
        params: Params,
    ) -> Result<Collection<Media>, FlickrError> {
        let client = self.bound_client()?;
        let builder = self.request(Operation::PhotosetsGetPhotos).params(params);
        list::fetch_media(client, builder, filter).await
    }
}

fn ids<S: AsRef<str>>(ids: &[S]) -> Vec<String> {
    ids.iter().map(|id| id.as_ref().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn set(v: serde_json::Value) -> Set {
        Set::from_fields(v.as_object().cloned().unwrap(), None)
    }

    #[test]
    fn set_fields() {
        let set = set(json!({
            "id": "72157624618609504",
            "owner": "12037949754@N01",
            "username": "bees",
            "primary": "4847770787",
            "secret": "6abe6a5f4e",
            "server": "4153",
            "farm": 5,
            "count_views": "25",
            "count_comments": "0",
            "count_photos": 18,
            "count_videos": "2",
            "title": {"_content": "Chicago"},
            "description": {"_content": ""},
            "can_comment": 1,
            "date_create": "1280530593",
            "date_update": "1308091378",
        }));
        assert_eq!(set.title().as_deref(), Some("Chicago"));
        assert_eq!(set.description(), None);
        assert_eq!(set.media_count(), Some(20));
        assert_eq!(
            set.primary_url().as_deref(),
            Some("https://farm5.staticflickr.com/4153/4847770787_6abe6a5f4e.jpg")
        );
        assert_eq!(
            set.url().as_deref(),
            Some("https://www.flickr.com/photos/12037949754@N01/sets/72157624618609504/")
        );
        assert_eq!(set.owner().and_then(|o| o.username()).as_deref(), Some("bees"));
        assert_eq!(set.can_comment(), Some(true));
        assert_eq!(set.created_at().map(|t| t.timestamp()), Some(1280530593));
    }

    #[test]
    fn list_style_counts() {
        let set = set(json!({"id": "1", "photos": "5", "videos": 0}));
        assert_eq!(set.photo_count(), Some(5));
        assert_eq!(set.media_count(), Some(5));
        assert_eq!(self::set(json!({})).media_count(), None);
    }

    #[tokio::test]
    async fn unbound_set() {
        let set = set(json!({"id": "1"}));
        assert!(matches!(
            set.get_media(Params::new()).await,
            Err(FlickrError::UnboundEntity(ObjectKind::Set))
        ));
    }
}
