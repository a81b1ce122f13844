/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::macros::flickr_object;
use crate::rest::parsers::{at, calendar, epoch, flag, non_empty_text, uint};
use crate::rest::{
    Client, Collection, FlickrError, FlickrObject, Media, MediaFilter, ObjectKind, Operation,
    Params, RawFields, RequestBuilder, Set, WEB_ORIGIN, list, mapper,
};
use chrono::{DateTime, Utc};

const DEFAULT_BUDDY_ICON: &str = "https://www.flickr.com/images/buddyicon.gif";

/// A Flickr user.
///
/// Built from `flickr.people.getInfo` (`person`), the `user` results of the lookup methods, or
/// the owner and author fields of other objects.
#[derive(Debug, Clone)]
pub struct Person {
    client: Option<Client>,
    fields: RawFields,
}

flickr_object!(Person, ObjectKind::User);

impl Person {
    /// Returns information for the specified user id
    pub async fn from_id(client: Client, user_id: &str) -> Result<Person, FlickrError> {
        let builder = RequestBuilder::new(Operation::PeopleGetInfo).param("user_id", user_id);
        let envelope = client.fetch(builder).await?;
        mapper::object(&envelope, "person", Some(client))
    }

    pub async fn find_by_email(client: Client, email: &str) -> Result<Person, FlickrError> {
        let builder =
            RequestBuilder::new(Operation::PeopleFindByEmail).param("find_email", email);
        let envelope = client.fetch(builder).await?;
        mapper::object(&envelope, "user", Some(client))
    }

    pub async fn find_by_username(client: Client, username: &str) -> Result<Person, FlickrError> {
        let builder =
            RequestBuilder::new(Operation::PeopleFindByUsername).param("username", username);
        let envelope = client.fetch(builder).await?;
        mapper::object(&envelope, "user", Some(client))
    }

    /// The user the access token belongs to
    pub async fn test_login(client: Client) -> Result<Person, FlickrError> {
        let envelope = client
            .fetch(RequestBuilder::new(Operation::TestLogin))
            .await?;
        mapper::object(&envelope, "user", Some(client))
    }

    /// The authenticated user, including bandwidth and file size limits
    pub async fn upload_status(client: Client) -> Result<Person, FlickrError> {
        let envelope = client
            .fetch(RequestBuilder::new(Operation::PeopleGetUploadStatus))
            .await?;
        mapper::object(&envelope, "user", Some(client))
    }

    /// The NSID
    pub fn id(&self) -> Option<String> {
        self.raw("nsid")
            .or_else(|| self.raw("id"))
            .and_then(non_empty_text)
    }

    pub fn username(&self) -> Option<String> {
        self.raw("username").and_then(non_empty_text)
    }

    pub fn real_name(&self) -> Option<String> {
        self.raw("realname").and_then(non_empty_text)
    }

    pub fn location(&self) -> Option<String> {
        self.raw("location").and_then(non_empty_text)
    }

    pub fn path_alias(&self) -> Option<String> {
        self.raw("path_alias")
            .or_else(|| self.raw("pathalias"))
            .and_then(non_empty_text)
    }

    pub fn is_pro(&self) -> Option<bool> {
        self.raw("ispro").and_then(flag)
    }

    pub fn icon_server(&self) -> Option<u64> {
        self.raw("iconserver").and_then(uint)
    }

    pub fn icon_farm(&self) -> Option<u64> {
        self.raw("iconfarm").and_then(uint)
    }

    /// The buddy icon. Users without one (icon server 0) get Flickr's default icon.
    pub fn buddy_icon_url(&self) -> Option<String> {
        let server = self.icon_server()?;
        if server == 0 {
            return Some(DEFAULT_BUDDY_ICON.to_string());
        }
        Some(format!(
            "https://farm{}.staticflickr.com/{}/buddyicons/{}.jpg",
            self.icon_farm()?,
            server,
            self.id()?
        ))
    }

    pub fn photos_url(&self) -> Option<String> {
        self.raw("photosurl")
            .and_then(non_empty_text)
            .or_else(|| {
                let who = self.path_alias().or_else(|| self.id())?;
                Some(format!("{WEB_ORIGIN}/photos/{who}/"))
            })
    }

    pub fn profile_url(&self) -> Option<String> {
        self.raw("profileurl")
            .and_then(non_empty_text)
            .or_else(|| Some(format!("{WEB_ORIGIN}/people/{}/", self.id()?)))
    }

    pub fn mobile_url(&self) -> Option<String> {
        self.raw("mobileurl").and_then(non_empty_text)
    }

    /// Number of photos and videos
    pub fn media_count(&self) -> Option<u64> {
        at(&self.fields, &["photos", "count"]).and_then(uint)
    }

    pub fn views(&self) -> Option<u64> {
        at(&self.fields, &["photos", "views"]).and_then(uint)
    }

    pub fn first_upload(&self) -> Option<DateTime<Utc>> {
        at(&self.fields, &["photos", "firstdate"]).and_then(epoch)
    }

    pub fn first_taken(&self) -> Option<DateTime<Utc>> {
        at(&self.fields, &["photos", "firstdatetaken"]).and_then(calendar)
    }

    // Upload status
    pub fn bandwidth_max(&self) -> Option<u64> {
        at(&self.fields, &["bandwidth", "maxbytes"]).and_then(uint)
    }

    pub fn bandwidth_used(&self) -> Option<u64> {
        at(&self.fields, &["bandwidth", "usedbytes"]).and_then(uint)
    }

    pub fn bandwidth_remaining(&self) -> Option<u64> {
        at(&self.fields, &["bandwidth", "remainingbytes"]).and_then(uint)
    }

    pub fn has_unlimited_bandwidth(&self) -> Option<bool> {
        at(&self.fields, &["bandwidth", "unlimited"]).and_then(flag)
    }

    pub fn filesize_max(&self) -> Option<u64> {
        at(&self.fields, &["filesize", "maxbytes"]).and_then(uint)
    }

    pub fn video_filesize_max(&self) -> Option<u64> {
        at(&self.fields, &["videosize", "maxbytes"]).and_then(uint)
    }

    /// Fetches the full profile
    pub async fn get_info(&self) -> Result<Person, FlickrError> {
        Person::from_id(self.bound_client()?.clone(), &self.id().unwrap_or_default()).await
    }

    /// Photos and videos of this user visible to the caller
    pub async fn get_media(&self, params: Params) -> Result<Collection<Media>, FlickrError> {
        self.media_list(Operation::PeopleGetPhotos, MediaFilter::All, params)
            .await
    }

    pub async fn get_photos(&self, params: Params) -> Result<Collection<Media>, FlickrError> {
        self.media_list(Operation::PeopleGetPhotos, MediaFilter::Photos, params)
            .await
    }

    pub async fn get_videos(&self, params: Params) -> Result<Collection<Media>, FlickrError> {
        self.media_list(Operation::PeopleGetPhotos, MediaFilter::Videos, params)
            .await
    }

    pub async fn get_public_media(
        &self,
        params: Params,
    ) -> Result<Collection<Media>, FlickrError> {
        self.media_list(Operation::PeopleGetPublicPhotos, MediaFilter::All, params)
            .await
    }

    pub async fn get_public_photos(
        &self,
        params: Params,
    ) -> Result<Collection<Media>, FlickrError> {
        self.media_list(Operation::PeopleGetPublicPhotos, MediaFilter::Photos, params)
            .await
    }

    pub async fn get_public_videos(
        &self,
        params: Params,
    ) -> Result<Collection<Media>, FlickrError> {
        self.media_list(Operation::PeopleGetPublicPhotos, MediaFilter::Videos, params)
            .await
    }

    /// Photos and videos this user appears in
    pub async fn get_media_of(&self, params: Params) -> Result<Collection<Media>, FlickrError> {
        self.media_list(Operation::PeopleGetPhotosOf, MediaFilter::All, params)
            .await
    }

    pub async fn get_photos_of(&self, params: Params) -> Result<Collection<Media>, FlickrError> {
        self.media_list(Operation::PeopleGetPhotosOf, MediaFilter::Photos, params)
            .await
    }

    pub async fn get_videos_of(&self, params: Params) -> Result<Collection<Media>, FlickrError> {
        self.media_list(Operation::PeopleGetPhotosOf, MediaFilter::Videos, params)
            .await
    }

    /// This user's favorites visible to the caller
    pub async fn get_favorites(&self, params: Params) -> Result<Collection<Media>, FlickrError> {
        self.media_list(Operation::FavoritesGetList, MediaFilter::All, params)
            .await
    }

    pub async fn get_public_favorites(
        &self,
        params: Params,
    ) -> Result<Collection<Media>, FlickrError> {
        self.media_list(Operation::FavoritesGetPublicList, MediaFilter::All, params)
            .await
    }

    pub async fn get_sets(&self, params: Params) -> Result<Collection<Set>, FlickrError> {
        let client = self.bound_client()?;
        let builder = RequestBuilder::new(Operation::PhotosetsGetList)
            .param("user_id", self.id().unwrap_or_default())
            .params(params);
        list::fetch_list(client, builder, "photoset").await
    }

    async fn media_list(
        &self,
        operation: Operation,
        filter: MediaFilter,
        params: Params,
    ) -> Result<Collection<Media>, FlickrError> {
        let client = self.bound_client()?;
        let builder = RequestBuilder::new(operation)
            .param("user_id", self.id().unwrap_or_default())
            .params(params);
        list::fetch_media(client, builder, filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn person(v: serde_json::Value) -> Person {
        Person::from_fields(v.as_object().cloned().unwrap(), None)
    }

    #[test]
    fn profile_fields() {
        let bees = person(json!({
            "id": "12037949754@N01",
            "nsid": "12037949754@N01",
            "ispro": 0,
            "iconserver": "122",
            "iconfarm": 1,
            "path_alias": "bees",
            "username": {"_content": "bees"},
            "realname": {"_content": "Cal Henderson"},
            "photosurl": {"_content": "https://www.flickr.com/photos/bees/"},
            "photos": {
                "firstdatetaken": {"_content": "1900-09-02 09:11:24"},
                "firstdate": {"_content": "1093566950"},
                "count": {"_content": 449},
                "views": {"_content": "12"},
            },
        }));
        assert_eq!(bees.id().as_deref(), Some("12037949754@N01"));
        assert_eq!(bees.username().as_deref(), Some("bees"));
        assert_eq!(bees.is_pro(), Some(false));
        assert_eq!(
            bees.buddy_icon_url().as_deref(),
            Some("https://farm1.staticflickr.com/122/buddyicons/12037949754@N01.jpg")
        );
        assert_eq!(bees.photos_url().as_deref(), Some("https://www.flickr.com/photos/bees/"));
        assert_eq!(
            bees.profile_url().as_deref(),
            Some("https://www.flickr.com/people/12037949754@N01/")
        );
        assert_eq!(bees.media_count(), Some(449));
        assert_eq!(bees.first_upload().map(|t| t.timestamp()), Some(1093566950));
        assert_eq!(bees.first_taken().map(|t| t.timestamp()), Some(-2187874116));
    }

    #[test]
    fn default_buddy_icon() {
        let nobody = person(json!({"nsid": "1@N01", "iconserver": "0", "iconfarm": 0}));
        assert_eq!(nobody.buddy_icon_url().as_deref(), Some(DEFAULT_BUDDY_ICON));
        assert_eq!(person(json!({})).buddy_icon_url(), None);
    }

    #[test]
    fn upload_status_limits() {
        let me = person(json!({
            "id": "1@N01",
            "bandwidth": {"maxbytes": "2147483648", "usedbytes": 383724, "remainingbytes": "2147099924", "unlimited": 1},
            "filesize": {"maxbytes": "1073741824"},
        }));
        assert_eq!(me.bandwidth_max(), Some(2147483648));
        assert_eq!(me.has_unlimited_bandwidth(), Some(true));
        assert_eq!(me.filesize_max(), Some(1073741824));
        assert_eq!(me.video_filesize_max(), None);
    }
}
