/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Photos and videos.
//!
//! Flickr returns both from the same methods, so both are a [`Media`]. Use
//! [`Media::media_kind`] to tell them apart. Video-only accessors return `None` for photos.

use crate::rest::macros::raw_index;
use crate::rest::parsers::{
    at, calendar, epoch, flag, float, int, items, non_empty_text, time, uint, words,
};
use crate::rest::permissions::section;
use crate::rest::tag::is_machine_tag;
use crate::rest::{
    Client, Collection, Comment, ContentType, DateGranularity, Editability, ExifEntry,
    FlickrError, FlickrObject, GeoPermissions, Location, MediaContext, MediaCount, MediaFilter,
    MediaKind, Note, NoteBox, ObjectKind, Operation, Params, Permissions, Person, RawFields,
    RequestBuilder, SafetyLevel, Set, Size, SizeLabel, Tag, Usage, Visibility, WEB_ORIGIN, list,
    mapper, tag_list,
};
use chrono::{DateTime, Utc};
use futures::Stream;
use serde_json::{Value, json};

/// A photo or a video
#[derive(Debug, Clone)]
pub struct Media {
    client: Option<Client>,
    fields: RawFields,
}

impl FlickrObject for Media {
    fn from_fields(fields: RawFields, client: Option<Client>) -> Self {
        Self { client, fields }
    }

    fn kind(&self) -> ObjectKind {
        self.media_kind().into()
    }

    fn fields(&self) -> &RawFields {
        &self.fields
    }

    fn client(&self) -> Option<&Client> {
        self.client.as_ref()
    }
}

raw_index!(Media);

// Entry points
impl Media {
    /// Returns information for the specified photo or video id
    pub async fn from_id(client: Client, media_id: &str) -> Result<Media, FlickrError> {
        let builder = RequestBuilder::new(Operation::PhotosGetInfo).param("photo_id", media_id);
        let envelope = client.fetch(builder).await?;
        mapper::object(&envelope, "photo", Some(client))
    }

    /// `flickr.photos.search`
    pub async fn search(client: Client, params: Params) -> Result<Collection<Media>, FlickrError> {
        Self::list(client, Operation::PhotosSearch, params).await
    }

    /// Every page of a search, one request per page
    pub fn search_all(
        client: Client,
        params: Params,
    ) -> impl Stream<Item = Result<Media, FlickrError>> {
        let builder = RequestBuilder::new(Operation::PhotosSearch).params(params);
        list::stream_pages(client, builder, "photos", "photo")
    }

    /// Latest public uploads
    pub async fn recent(client: Client, params: Params) -> Result<Collection<Media>, FlickrError> {
        Self::list(client, Operation::PhotosGetRecent, params).await
    }

    /// Explore: the most interesting photos of a day
    pub async fn interesting(
        client: Client,
        params: Params,
    ) -> Result<Collection<Media>, FlickrError> {
        Self::list(client, Operation::InterestingnessGetList, params).await
    }

    pub async fn untagged(client: Client, params: Params) -> Result<Collection<Media>, FlickrError> {
        Self::list(client, Operation::PhotosGetUntagged, params).await
    }

    pub async fn not_in_set(
        client: Client,
        params: Params,
    ) -> Result<Collection<Media>, FlickrError> {
        Self::list(client, Operation::PhotosGetNotInSet, params).await
    }

    pub async fn with_geo_data(
        client: Client,
        params: Params,
    ) -> Result<Collection<Media>, FlickrError> {
        Self::list(client, Operation::PhotosGetWithGeoData, params).await
    }

    pub async fn without_geo_data(
        client: Client,
        params: Params,
    ) -> Result<Collection<Media>, FlickrError> {
        Self::list(client, Operation::PhotosGetWithoutGeoData, params).await
    }

    /// The caller's media changed since `since`
    pub async fn recently_updated(
        client: Client,
        since: DateTime<Utc>,
        params: Params,
    ) -> Result<Collection<Media>, FlickrError> {
        let builder = RequestBuilder::new(Operation::PhotosRecentlyUpdated)
            .param("min_date", since.timestamp())
            .params(params);
        list::fetch_media(&client, builder, MediaFilter::All).await
    }

    /// Recent media from the caller's contacts
    pub async fn contacts(client: Client, params: Params) -> Result<Collection<Media>, FlickrError> {
        Self::list(client, Operation::PhotosGetContactsPhotos, params).await
    }

    /// Recent public media from the contacts of `user_id`
    pub async fn contacts_public(
        client: Client,
        user_id: &str,
        params: Params,
    ) -> Result<Collection<Media>, FlickrError> {
        let builder = RequestBuilder::new(Operation::PhotosGetContactsPublicPhotos)
            .param("user_id", user_id)
            .params(params);
        list::fetch_media(&client, builder, MediaFilter::All).await
    }

    /// Photo counts for date ranges, given as `dates` or `taken_dates` in `params`
    pub async fn counts(client: Client, params: Params) -> Result<Collection<MediaCount>, FlickrError> {
        let builder = RequestBuilder::new(Operation::PhotosGetCounts).params(params);
        list::fetch_list(&client, builder, "photocount").await
    }

    async fn list(
        client: Client,
        operation: Operation,
        params: Params,
    ) -> Result<Collection<Media>, FlickrError> {
        let builder = RequestBuilder::new(operation).params(params);
        list::fetch_media(&client, builder, MediaFilter::All).await
    }
}

// Accessors
impl Media {
    pub fn media_kind(&self) -> MediaKind {
        mapper::media_kind(&self.fields)
    }

    pub fn is_photo(&self) -> bool {
        self.media_kind() == MediaKind::Photo
    }

    pub fn is_video(&self) -> bool {
        self.media_kind() == MediaKind::Video
    }

    pub fn id(&self) -> Option<String> {
        self.raw("id").and_then(non_empty_text)
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

    pub fn title(&self) -> Option<String> {
        self.raw("title").and_then(non_empty_text)
    }

    pub fn description(&self) -> Option<String> {
        self.raw("description").and_then(non_empty_text)
    }

    pub fn license_id(&self) -> Option<u64> {
        self.raw("license").and_then(uint)
    }

    pub fn safety_level(&self) -> Option<SafetyLevel> {
        // getInfo counts from 0, the extras and setSafetyLevel from 1
        let level = self.raw("safety_level").and_then(uint)?;
        let level = if self.raw("dateuploaded").is_some() {
            level + 1
        } else {
            level
        };
        u8::try_from(level)
            .ok()
            .and_then(|l| SafetyLevel::try_from(l).ok())
    }

    pub fn rotation(&self) -> Option<i64> {
        self.raw("rotation").and_then(int)
    }

    pub fn original_secret(&self) -> Option<String> {
        self.raw("originalsecret").and_then(non_empty_text)
    }

    pub fn original_format(&self) -> Option<String> {
        self.raw("originalformat").and_then(non_empty_text)
    }

    pub fn views(&self) -> Option<u64> {
        self.raw("views").and_then(uint)
    }

    pub fn comments_count(&self) -> Option<u64> {
        self.raw("comments")
            .or_else(|| self.raw("count_comments"))
            .and_then(uint)
    }

    pub fn favorites_count(&self) -> Option<u64> {
        self.raw("count_faves").and_then(uint)
    }

    pub fn media_status(&self) -> Option<String> {
        self.raw("media_status").and_then(non_empty_text)
    }

    /// Whether the caller has this as a favorite
    pub fn is_favorite(&self) -> Option<bool> {
        self.raw("isfavorite").and_then(flag)
    }

    pub fn uploaded_at(&self) -> Option<DateTime<Utc>> {
        self.raw("dateuploaded")
            .or_else(|| self.raw("dateupload"))
            .and_then(epoch)
    }

    pub fn posted_at(&self) -> Option<DateTime<Utc>> {
        at(&self.fields, &["dates", "posted"])
            .and_then(epoch)
            .or_else(|| self.uploaded_at())
    }

    /// When the photo was taken, in the camera's local time
    pub fn taken_at(&self) -> Option<DateTime<Utc>> {
        at(&self.fields, &["dates", "taken"])
            .or_else(|| self.raw("datetaken"))
            .and_then(calendar)
    }

    pub fn taken_granularity(&self) -> Option<DateGranularity> {
        at(&self.fields, &["dates", "takengranularity"])
            .or_else(|| self.raw("datetakengranularity"))
            .and_then(uint)
            .and_then(|g| u8::try_from(g).ok())
            .and_then(|g| DateGranularity::try_from(g).ok())
    }

    pub fn taken_unknown(&self) -> Option<bool> {
        at(&self.fields, &["dates", "takenunknown"])
            .or_else(|| self.raw("datetakenunknown"))
            .and_then(flag)
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        at(&self.fields, &["dates", "lastupdate"])
            .or_else(|| self.raw("lastupdate"))
            .and_then(time)
    }

    /// The owner, from the `owner` mapping of getInfo or the flat owner extras of lists
    pub fn owner(&self) -> Option<Person> {
        match self.raw("owner")? {
            Value::Object(owner) => Some(Person::from_fields(owner.clone(), self.client.clone())),
            owner => {
                let nsid = non_empty_text(owner)?;
                let mut fields = RawFields::new();
                fields.insert("nsid".to_string(), nsid.into());
                for (from, to) in [
                    ("ownername", "username"),
                    ("iconserver", "iconserver"),
                    ("iconfarm", "iconfarm"),
                    ("pathalias", "path_alias"),
                ] {
                    if let Some(value) = self.raw(from) {
                        fields.insert(to.to_string(), value.clone());
                    }
                }
                Some(Person::from_fields(fields, self.client.clone()))
            }
        }
    }

    pub fn visibility(&self) -> Option<Visibility> {
        section(&self.fields, "visibility")
            .and_then(Visibility::from_fields)
            .or_else(|| Visibility::from_fields(&self.fields))
    }

    pub fn permissions(&self) -> Option<Permissions> {
        section(&self.fields, "permissions").and_then(Permissions::from_fields)
    }

    pub fn editability(&self) -> Option<Editability> {
        section(&self.fields, "editability").and_then(Editability::from_fields)
    }

    pub fn public_editability(&self) -> Option<Editability> {
        section(&self.fields, "publiceditability").and_then(Editability::from_fields)
    }

    pub fn usage(&self) -> Option<Usage> {
        section(&self.fields, "usage").and_then(Usage::from_fields)
    }

    pub fn geo_permissions(&self) -> Option<GeoPermissions> {
        section(&self.fields, "geoperms").and_then(GeoPermissions::from_fields)
    }

    /// The location, from the `location` mapping or the `geo` extras.
    ///
    /// The extras report 0,0 for media without a location, which is treated as absent.
    pub fn location(&self) -> Option<Location> {
        if let Some(location) = section(&self.fields, "location") {
            return Some(Location::from_fields(location.clone(), self.client.clone()));
        }
        let latitude = self.raw("latitude").and_then(float)?;
        let longitude = self.raw("longitude").and_then(float)?;
        if latitude == 0.0 && longitude == 0.0 {
            return None;
        }
        let mut fields = RawFields::new();
        for key in ["latitude", "longitude", "accuracy", "context", "place_id", "woeid"] {
            if let Some(value) = self.raw(key) {
                fields.insert(key.to_string(), value.clone());
            }
        }
        Some(Location::from_fields(fields, self.client.clone()))
    }

    /// Tags from getInfo, or the words of the `tags` extra
    pub fn tags(&self) -> Option<Vec<Tag>> {
        match self.raw("tags")? {
            Value::Object(tags) => Some(
                tags.get("tag")
                    .and_then(items)
                    .unwrap_or_default()
                    .into_iter()
                    .filter_map(Value::as_object)
                    .map(|tag| Tag::from_fields(tag.clone(), self.client.clone()))
                    .collect(),
            ),
            value => words(value).map(|words| words.iter().map(|w| Tag::from_word(w)).collect()),
        }
    }

    /// Tags of the form `namespace:predicate=value`
    pub fn machine_tags(&self) -> Option<Vec<String>> {
        if let Some(machine_tags) = self.raw("machine_tags").and_then(words) {
            return Some(machine_tags);
        }
        self.tags().map(|tags| {
            tags.iter()
                .filter(|t| t.is_machine_tag() == Some(true))
                .filter_map(|t| t.raw_text())
                .filter(|raw| is_machine_tag(raw))
                .collect()
        })
    }

    pub fn notes(&self) -> Option<Vec<Note>> {
        let notes = at(&self.fields, &["notes", "note"]);
        if notes.is_none() && self.raw("notes").is_none() {
            return None;
        }
        Some(
            notes
                .and_then(items)
                .unwrap_or_default()
                .into_iter()
                .filter_map(Value::as_object)
                .map(|note| Note::from_fields(note.clone(), self.client.clone()))
                .collect(),
        )
    }

    pub fn has_people(&self) -> Option<bool> {
        at(&self.fields, &["people", "haspeople"]).and_then(flag)
    }

    /// Url of the photo page
    pub fn page_url(&self) -> Option<String> {
        let listed = at(&self.fields, &["urls", "url"])
            .and_then(items)
            .unwrap_or_default()
            .into_iter()
            .find(|u| u.get("type").and_then(Value::as_str) == Some("photopage"))
            .and_then(non_empty_text);
        listed.or_else(|| {
            let owner = self.owner()?;
            let who = owner.path_alias().or_else(|| owner.id())?;
            Some(format!("{WEB_ORIGIN}/photos/{who}/{}/", self.id()?))
        })
    }

    /// Url of the default (Medium 500) rendering
    pub fn url(&self) -> Option<String> {
        self.static_url(&self.secret()?, None, "jpg")
    }

    /// Url of the file for a size. The `url_*` extras are used when present.
    pub fn source_url(&self, size: SizeLabel) -> Option<String> {
        if let Some(url) = self.raw(&size.url_extra()).and_then(non_empty_text) {
            return Some(url);
        }
        match size {
            SizeLabel::Original => self.static_url(
                &self.original_secret()?,
                size.url_suffix(),
                &self.original_format()?,
            ),
            _ => self.static_url(&self.secret()?, size.url_suffix(), "jpg"),
        }
    }

    /// Width of a size, from the `url_*` extras
    pub fn width(&self, size: SizeLabel) -> Option<u64> {
        self.dimension("width", size)
    }

    /// Height of a size, from the `url_*` extras
    pub fn height(&self, size: SizeLabel) -> Option<u64> {
        self.dimension("height", size)
    }

    /// The sizes listed by the `url_*` extras, smallest first
    pub fn sizes(&self) -> Vec<Size> {
        SizeLabel::ALL
            .iter()
            .filter_map(|size| {
                let source = self.raw(&size.url_extra()).and_then(non_empty_text)?;
                let mut fields = json!({
                    "label": size.to_string(),
                    "source": source,
                    "media": self.media_kind(),
                });
                if let Some(fields) = fields.as_object_mut() {
                    if let Some(width) = self.width(*size) {
                        fields.insert("width".to_string(), width.into());
                    }
                    if let Some(height) = self.height(*size) {
                        fields.insert("height".to_string(), height.into());
                    }
                }
                match fields {
                    Value::Object(fields) => Some(Size::from_fields(fields, self.client.clone())),
                    _ => None,
                }
            })
            .collect()
    }

    pub fn available_sizes(&self) -> Vec<SizeLabel> {
        self.sizes().iter().filter_map(Size::label).collect()
    }

    pub fn largest_size(&self) -> Option<SizeLabel> {
        self.available_sizes().into_iter().max()
    }

    /// Camera model, from getExif
    pub fn camera(&self) -> Option<String> {
        self.raw("camera").and_then(non_empty_text)
    }

    /// EXIF entries, from getExif
    pub fn exif(&self) -> Option<Vec<ExifEntry>> {
        self.object_list("exif", ExifEntry::from_fields)
    }

    /// Users who favorited this media, from getFavorites
    pub fn favorites(&self) -> Option<Vec<Person>> {
        self.object_list("person", Person::from_fields)
    }

    /// When each user in [`favorites`](Self::favorites) added it, in the same order
    pub fn favorited_at(&self) -> Option<Vec<Option<DateTime<Utc>>>> {
        self.raw("person").and_then(items).map(|people| {
            people
                .into_iter()
                .map(|p| p.get("favedate").and_then(epoch))
                .collect()
        })
    }

    // Video only

    /// Length in seconds
    pub fn duration(&self) -> Option<u64> {
        self.video_field("duration").and_then(uint)
    }

    pub fn is_ready(&self) -> Option<bool> {
        self.video_field("ready").and_then(flag)
    }

    pub fn has_failed(&self) -> Option<bool> {
        self.video_field("failed").and_then(flag)
    }

    pub fn is_pending(&self) -> Option<bool> {
        self.video_field("pending").and_then(flag)
    }

    pub fn video_width(&self) -> Option<u64> {
        self.video_field("width").and_then(uint)
    }

    pub fn video_height(&self) -> Option<u64> {
        self.video_field("height").and_then(uint)
    }

    fn video_field(&self, key: &str) -> Option<&Value> {
        if !self.is_video() {
            return None;
        }
        at(&self.fields, &["video", key]).or_else(|| match key {
            "duration" => self.raw("duration"),
            _ => None,
        })
    }

    // https://farm{farm}.staticflickr.com/{server}/{id}_{secret}[_{suffix}].{format}
    fn static_url(&self, secret: &str, suffix: Option<&str>, format: &str) -> Option<String> {
        let suffix = suffix.map(|s| format!("_{s}")).unwrap_or_default();
        Some(format!(
            "https://farm{}.staticflickr.com/{}/{}_{}{}.{}",
            self.farm()?,
            self.server()?,
            self.id()?,
            secret,
            suffix,
            format
        ))
    }

    fn dimension(&self, axis: &str, size: SizeLabel) -> Option<u64> {
        let key = format!("{axis}_{}", size.abbreviation());
        self.raw(&key)
            .or_else(|| match size {
                SizeLabel::Original => self.raw(&format!("o_{axis}")),
                _ => None,
            })
            .and_then(uint)
    }

    fn object_list<T>(
        &self,
        key: &str,
        build: impl Fn(RawFields, Option<Client>) -> T,
    ) -> Option<Vec<T>> {
        self.raw(key).and_then(items).map(|list| {
            list.into_iter()
                .filter_map(Value::as_object)
                .map(|fields| build(fields.clone(), self.client.clone()))
                .collect()
        })
    }
}

// Remote calls
impl Media {
    pub async fn get_info(&self) -> Result<Media, FlickrError> {
        let client = self.bound_client()?;
        let envelope = client.fetch(self.request(Operation::PhotosGetInfo)).await?;
        mapper::object(&envelope, "photo", Some(client.clone()))
    }

    /// Every size Flickr has rendered
    pub async fn get_sizes(&self) -> Result<Vec<Size>, FlickrError> {
        let client = self.bound_client()?;
        let sizes: Collection<Size> =
            list::fetch_list(client, self.request(Operation::PhotosGetSizes), "size").await?;
        Ok(sizes.into_vec())
    }

    /// Fetches the EXIF data. Read it through [`camera`](Self::camera) and [`exif`](Self::exif).
    pub async fn get_exif(&self) -> Result<Media, FlickrError> {
        let client = self.bound_client()?;
        let envelope = client.fetch(self.request(Operation::PhotosGetExif)).await?;
        mapper::object(&envelope, "photo", Some(client.clone()))
    }

    /// Fetches who favorited this. Read it through [`favorites`](Self::favorites).
    pub async fn get_favorites(&self, params: Params) -> Result<Media, FlickrError> {
        let client = self.bound_client()?;
        let builder = self.request(Operation::PhotosGetFavorites).params(params);
        let envelope = client.fetch(builder).await?;
        mapper::object(&envelope, "photo", Some(client.clone()))
    }

    /// Neighbours in the owner's photostream
    pub async fn get_context(&self) -> Result<MediaContext, FlickrError> {
        let client = self.bound_client()?;
        let envelope = client.fetch(self.request(Operation::PhotosGetContext)).await?;
        Ok(mapper::context(&envelope, Some(client.clone())))
    }

    /// Neighbours in a user's favorites
    pub async fn get_favorites_context(&self, user_id: &str) -> Result<MediaContext, FlickrError> {
        let client = self.bound_client()?;
        let builder = self
            .request(Operation::FavoritesGetContext)
            .param("user_id", user_id);
        let envelope = client.fetch(builder).await?;
        Ok(mapper::context(&envelope, Some(client.clone())))
    }

    /// The sets this media belongs to
    pub async fn get_sets(&self) -> Result<Collection<Set>, FlickrError> {
        let client = self.bound_client()?;
        let envelope = client
            .fetch(self.request(Operation::PhotosGetAllContexts))
            .await?;
        Ok(mapper::collection(&envelope, "set", Some(client.clone())))
    }

    /// Who can see and comment on this. The caller must be the owner.
    pub async fn get_perms(&self) -> Result<(Visibility, Permissions), FlickrError> {
        let client = self.bound_client()?;
        let envelope = client.fetch(self.request(Operation::PhotosGetPerms)).await?;
        let perms = mapper::payload(&envelope, "perms")?;
        Ok((
            Visibility::from_fields(&perms).unwrap_or_default(),
            Permissions::from_fields(&perms).unwrap_or_default(),
        ))
    }

    pub async fn get_comments(&self, params: Params) -> Result<Collection<Comment>, FlickrError> {
        let client = self.bound_client()?;
        let builder = self.request(Operation::PhotosCommentsGetList).params(params);
        list::fetch_list(client, builder, "comment").await
    }

    pub async fn get_location(&self) -> Result<Option<Location>, FlickrError> {
        let client = self.bound_client()?;
        let envelope = client
            .fetch(self.request(Operation::PhotosGeoGetLocation))
            .await?;
        let media: Media = mapper::object(&envelope, "photo", Some(client.clone()))?;
        Ok(media.location())
    }

    pub async fn add_tags<S: AsRef<str>>(&self, tags: &[S]) -> Result<(), FlickrError> {
        self.send(self.request(Operation::PhotosAddTags).param("tags", tag_list(tags)))
            .await
    }

    /// Replaces all tags
    pub async fn set_tags<S: AsRef<str>>(&self, tags: &[S]) -> Result<(), FlickrError> {
        self.send(self.request(Operation::PhotosSetTags).param("tags", tag_list(tags)))
            .await
    }

    /// Removes a tag by its [`Tag::id`]
    pub async fn remove_tag(&self, tag_id: &str) -> Result<(), FlickrError> {
        let builder = RequestBuilder::new(Operation::PhotosRemoveTag).param("tag_id", tag_id);
        self.send(builder).await
    }

    pub async fn delete(&self) -> Result<(), FlickrError> {
        self.send(self.request(Operation::PhotosDelete)).await
    }

    pub async fn set_meta(&self, title: &str, description: &str) -> Result<(), FlickrError> {
        self.send(
            self.request(Operation::PhotosSetMeta)
                .param("title", title)
                .param("description", description),
        )
        .await
    }

    /// Sets the posted and/or taken dates
    pub async fn set_dates(
        &self,
        posted: Option<DateTime<Utc>>,
        taken: Option<DateTime<Utc>>,
        taken_granularity: Option<DateGranularity>,
    ) -> Result<(), FlickrError> {
        let mut builder = self.request(Operation::PhotosSetDates);
        if let Some(posted) = posted {
            builder = builder.param("date_posted", posted.timestamp());
        }
        if let Some(taken) = taken {
            builder = builder.param("date_taken", taken.format("%Y-%m-%d %H:%M:%S").to_string());
        }
        if let Some(granularity) = taken_granularity {
            builder = builder.param("date_taken_granularity", granularity as u32);
        }
        self.send(builder).await
    }

    pub async fn set_perms(
        &self,
        is_public: bool,
        is_friend: bool,
        is_family: bool,
        permissions: Permissions,
    ) -> Result<(), FlickrError> {
        let mut builder = self
            .request(Operation::PhotosSetPerms)
            .param("is_public", is_public)
            .param("is_friend", is_friend)
            .param("is_family", is_family);
        if let Some(comment) = permissions.comment {
            builder = builder.param("perm_comment", comment as u32);
        }
        if let Some(add_meta) = permissions.add_meta {
            builder = builder.param("perm_addmeta", add_meta as u32);
        }
        self.send(builder).await
    }

    pub async fn set_safety_level(
        &self,
        level: SafetyLevel,
        hidden: Option<bool>,
    ) -> Result<(), FlickrError> {
        let mut builder = self
            .request(Operation::PhotosSetSafetyLevel)
            .param("safety_level", level as u32);
        if let Some(hidden) = hidden {
            builder = builder.param("hidden", hidden);
        }
        self.send(builder).await
    }

    pub async fn set_content_type(&self, content_type: ContentType) -> Result<(), FlickrError> {
        self.send(
            self.request(Operation::PhotosSetContentType)
                .param("content_type", content_type as u32),
        )
        .await
    }

    pub async fn set_license(&self, license_id: u32) -> Result<(), FlickrError> {
        self.send(
            self.request(Operation::PhotosLicensesSetLicense)
                .param("license_id", license_id),
        )
        .await
    }

    /// Adds a comment and returns it (only the id and permalink are filled in)
    pub async fn add_comment(&self, comment_text: &str) -> Result<Comment, FlickrError> {
        let client = self.bound_client()?;
        let builder = self
            .request(Operation::PhotosCommentsAddComment)
            .param("comment_text", comment_text);
        let envelope = client.fetch(builder).await?;
        mapper::object(&envelope, "comment", Some(client.clone()))
    }

    /// Adds a note and returns it (only the id is filled in)
    pub async fn add_note(&self, bounds: NoteBox, note_text: &str) -> Result<Note, FlickrError> {
        let client = self.bound_client()?;
        let builder = bounds.apply(
            self.request(Operation::PhotosNotesAdd)
                .param("note_text", note_text),
        );
        let envelope = client.fetch(builder).await?;
        mapper::object(&envelope, "note", Some(client.clone()))
    }

    pub async fn set_location(
        &self,
        latitude: f64,
        longitude: f64,
        accuracy: Option<u32>,
    ) -> Result<(), FlickrError> {
        let mut builder = self
            .request(Operation::PhotosGeoSetLocation)
            .param("lat", latitude.to_string())
            .param("lon", longitude.to_string());
        if let Some(accuracy) = accuracy {
            builder = builder.param("accuracy", accuracy);
        }
        self.send(builder).await
    }

    pub async fn remove_location(&self) -> Result<(), FlickrError> {
        self.send(self.request(Operation::PhotosGeoRemoveLocation))
            .await
    }

    /// Rotates clockwise by 90, 180 or 270 degrees
    pub async fn rotate(&self, degrees: u32) -> Result<(), FlickrError> {
        self.send(
            self.request(Operation::PhotosTransformRotate)
                .param("degrees", degrees),
        )
        .await
    }

    pub async fn add_favorite(&self) -> Result<(), FlickrError> {
        self.send(self.request(Operation::FavoritesAdd)).await
    }

    pub async fn remove_favorite(&self) -> Result<(), FlickrError> {
        self.send(self.request(Operation::FavoritesRemove)).await
    }

    fn request(&self, operation: Operation) -> RequestBuilder {
        RequestBuilder::new(operation).param("photo_id", self.id().unwrap_or_default())
    }

    async fn send(&self, builder: RequestBuilder) -> Result<(), FlickrError> {
        self.bound_client()?.fetch(builder).await?;
        Ok(())
    }
}
