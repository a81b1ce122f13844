/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::{FlickrError, HttpMethod, MediaFilter};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// The remote procedures this library knows how to call.
///
/// The string form is the Flickr method name. See the
/// [Flickr API Docs](https://www.flickr.com/services/api/) for the individual methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum Operation {
    #[strum(to_string = "flickr.test.echo")]
    TestEcho,
    #[strum(to_string = "flickr.test.login")]
    TestLogin,
    #[strum(to_string = "flickr.test.null")]
    TestNull,

    #[strum(to_string = "flickr.people.findByEmail")]
    PeopleFindByEmail,
    #[strum(to_string = "flickr.people.findByUsername")]
    PeopleFindByUsername,
    #[strum(to_string = "flickr.people.getInfo")]
    PeopleGetInfo,
    #[strum(to_string = "flickr.people.getPhotos")]
    PeopleGetPhotos,
    #[strum(to_string = "flickr.people.getPhotosOf")]
    PeopleGetPhotosOf,
    #[strum(to_string = "flickr.people.getPublicPhotos")]
    PeopleGetPublicPhotos,
    #[strum(to_string = "flickr.people.getUploadStatus")]
    PeopleGetUploadStatus,

    #[strum(to_string = "flickr.photos.addTags")]
    PhotosAddTags,
    #[strum(to_string = "flickr.photos.delete")]
    PhotosDelete,
    #[strum(to_string = "flickr.photos.getAllContexts")]
    PhotosGetAllContexts,
    #[strum(to_string = "flickr.photos.getContactsPhotos")]
    PhotosGetContactsPhotos,
    #[strum(to_string = "flickr.photos.getContactsPublicPhotos")]
    PhotosGetContactsPublicPhotos,
    #[strum(to_string = "flickr.photos.getContext")]
    PhotosGetContext,
    #[strum(to_string = "flickr.photos.getCounts")]
    PhotosGetCounts,
    #[strum(to_string = "flickr.photos.getExif")]
    PhotosGetExif,
    #[strum(to_string = "flickr.photos.getFavorites")]
    PhotosGetFavorites,
    #[strum(to_string = "flickr.photos.getInfo")]
    PhotosGetInfo,
    #[strum(to_string = "flickr.photos.getNotInSet")]
    PhotosGetNotInSet,
    #[strum(to_string = "flickr.photos.getPerms")]
    PhotosGetPerms,
    #[strum(to_string = "flickr.photos.getRecent")]
    PhotosGetRecent,
    #[strum(to_string = "flickr.photos.getSizes")]
    PhotosGetSizes,
    #[strum(to_string = "flickr.photos.getUntagged")]
    PhotosGetUntagged,
    #[strum(to_string = "flickr.photos.getWithGeoData")]
    PhotosGetWithGeoData,
    #[strum(to_string = "flickr.photos.getWithoutGeoData")]
    PhotosGetWithoutGeoData,
    #[strum(to_string = "flickr.photos.recentlyUpdated")]
    PhotosRecentlyUpdated,
    #[strum(to_string = "flickr.photos.removeTag")]
    PhotosRemoveTag,
    #[strum(to_string = "flickr.photos.search")]
    PhotosSearch,
    #[strum(to_string = "flickr.photos.setContentType")]
    PhotosSetContentType,
    #[strum(to_string = "flickr.photos.setDates")]
    PhotosSetDates,
    #[strum(to_string = "flickr.photos.setMeta")]
    PhotosSetMeta,
    #[strum(to_string = "flickr.photos.setPerms")]
    PhotosSetPerms,
    #[strum(to_string = "flickr.photos.setSafetyLevel")]
    PhotosSetSafetyLevel,
    #[strum(to_string = "flickr.photos.setTags")]
    PhotosSetTags,

    #[strum(to_string = "flickr.photos.comments.addComment")]
    PhotosCommentsAddComment,
    #[strum(to_string = "flickr.photos.comments.deleteComment")]
    PhotosCommentsDeleteComment,
    #[strum(to_string = "flickr.photos.comments.editComment")]
    PhotosCommentsEditComment,
    #[strum(to_string = "flickr.photos.comments.getList")]
    PhotosCommentsGetList,

    #[strum(to_string = "flickr.photos.geo.getLocation")]
    PhotosGeoGetLocation,
    #[strum(to_string = "flickr.photos.geo.removeLocation")]
    PhotosGeoRemoveLocation,
    #[strum(to_string = "flickr.photos.geo.setLocation")]
    PhotosGeoSetLocation,

    #[strum(to_string = "flickr.photos.licenses.getInfo")]
    PhotosLicensesGetInfo,
    #[strum(to_string = "flickr.photos.licenses.setLicense")]
    PhotosLicensesSetLicense,

    #[strum(to_string = "flickr.photos.notes.add")]
    PhotosNotesAdd,
    #[strum(to_string = "flickr.photos.notes.delete")]
    PhotosNotesDelete,
    #[strum(to_string = "flickr.photos.notes.edit")]
    PhotosNotesEdit,

    #[strum(to_string = "flickr.photos.transform.rotate")]
    PhotosTransformRotate,

    #[strum(to_string = "flickr.photos.upload.checkTickets")]
    PhotosUploadCheckTickets,

    #[strum(to_string = "flickr.photosets.addPhoto")]
    PhotosetsAddPhoto,
    #[strum(to_string = "flickr.photosets.create")]
    PhotosetsCreate,
    #[strum(to_string = "flickr.photosets.delete")]
    PhotosetsDelete,
    #[strum(to_string = "flickr.photosets.editMeta")]
    PhotosetsEditMeta,
    #[strum(to_string = "flickr.photosets.editPhotos")]
    PhotosetsEditPhotos,
    #[strum(to_string = "flickr.photosets.getContext")]
    PhotosetsGetContext,
    #[strum(to_string = "flickr.photosets.getInfo")]
    PhotosetsGetInfo,
    #[strum(to_string = "flickr.photosets.getList")]
    PhotosetsGetList,
    #[strum(to_string = "flickr.photosets.getPhotos")]
    PhotosetsGetPhotos,
    #[strum(to_string = "flickr.photosets.orderSets")]
    PhotosetsOrderSets,
    #[strum(to_string = "flickr.photosets.removePhoto")]
    PhotosetsRemovePhoto,
    #[strum(to_string = "flickr.photosets.removePhotos")]
    PhotosetsRemovePhotos,
    #[strum(to_string = "flickr.photosets.reorderPhotos")]
    PhotosetsReorderPhotos,
    #[strum(to_string = "flickr.photosets.setPrimaryPhoto")]
    PhotosetsSetPrimaryPhoto,

    #[strum(to_string = "flickr.photosets.comments.addComment")]
    PhotosetsCommentsAddComment,
    #[strum(to_string = "flickr.photosets.comments.deleteComment")]
    PhotosetsCommentsDeleteComment,
    #[strum(to_string = "flickr.photosets.comments.editComment")]
    PhotosetsCommentsEditComment,
    #[strum(to_string = "flickr.photosets.comments.getList")]
    PhotosetsCommentsGetList,

    #[strum(to_string = "flickr.favorites.add")]
    FavoritesAdd,
    #[strum(to_string = "flickr.favorites.remove")]
    FavoritesRemove,
    #[strum(to_string = "flickr.favorites.getList")]
    FavoritesGetList,
    #[strum(to_string = "flickr.favorites.getPublicList")]
    FavoritesGetPublicList,
    #[strum(to_string = "flickr.favorites.getContext")]
    FavoritesGetContext,

    #[strum(to_string = "flickr.interestingness.getList")]
    InterestingnessGetList,
}

impl Operation {
    /// The Flickr method name
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Operations that change state are sent as POST
    pub fn is_write(&self) -> bool {
        use Operation as O;
        matches!(
            self,
            O::PhotosAddTags
                | O::PhotosDelete
                | O::PhotosRemoveTag
                | O::PhotosSetContentType
                | O::PhotosSetDates
                | O::PhotosSetMeta
                | O::PhotosSetPerms
                | O::PhotosSetSafetyLevel
                | O::PhotosSetTags
                | O::PhotosCommentsAddComment
                | O::PhotosCommentsDeleteComment
                | O::PhotosCommentsEditComment
                | O::PhotosGeoRemoveLocation
                | O::PhotosGeoSetLocation
                | O::PhotosLicensesSetLicense
                | O::PhotosNotesAdd
                | O::PhotosNotesDelete
                | O::PhotosNotesEdit
                | O::PhotosTransformRotate
                | O::PhotosetsAddPhoto
                | O::PhotosetsCreate
                | O::PhotosetsDelete
                | O::PhotosetsEditMeta
                | O::PhotosetsEditPhotos
                | O::PhotosetsOrderSets
                | O::PhotosetsRemovePhoto
                | O::PhotosetsRemovePhotos
                | O::PhotosetsReorderPhotos
                | O::PhotosetsSetPrimaryPhoto
                | O::PhotosetsCommentsAddComment
                | O::PhotosetsCommentsDeleteComment
                | O::PhotosetsCommentsEditComment
                | O::FavoritesAdd
                | O::FavoritesRemove
        )
    }

    pub fn http_method(&self) -> HttpMethod {
        if self.is_write() {
            HttpMethod::Post
        } else {
            HttpMethod::Get
        }
    }

    /// Parameters that must be present for the request to be sent
    pub fn required_params(&self) -> &'static [&'static str] {
        use Operation as O;
        match self {
            O::PeopleFindByEmail => &["find_email"],
            O::PeopleFindByUsername => &["username"],
            O::PeopleGetInfo
            | O::PeopleGetPhotos
            | O::PeopleGetPhotosOf
            | O::PeopleGetPublicPhotos
            | O::PhotosGetContactsPublicPhotos
            | O::FavoritesGetPublicList => &["user_id"],
            O::PhotosAddTags | O::PhotosSetTags => &["photo_id", "tags"],
            O::PhotosDelete
            | O::PhotosGetAllContexts
            | O::PhotosGetContext
            | O::PhotosGetExif
            | O::PhotosGetFavorites
            | O::PhotosGetInfo
            | O::PhotosGetPerms
            | O::PhotosGetSizes
            | O::PhotosSetDates
            | O::PhotosSetMeta
            | O::PhotosSetSafetyLevel
            | O::PhotosCommentsGetList
            | O::PhotosGeoGetLocation
            | O::PhotosGeoRemoveLocation
            | O::FavoritesAdd
            | O::FavoritesRemove => &["photo_id"],
            O::PhotosRecentlyUpdated => &["min_date"],
            O::PhotosRemoveTag => &["tag_id"],
            O::PhotosSetContentType => &["photo_id", "content_type"],
            O::PhotosSetPerms => &["photo_id", "is_public", "is_friend", "is_family"],
            O::PhotosCommentsAddComment => &["photo_id", "comment_text"],
            O::PhotosCommentsDeleteComment | O::PhotosetsCommentsDeleteComment => &["comment_id"],
            O::PhotosCommentsEditComment | O::PhotosetsCommentsEditComment => {
                &["comment_id", "comment_text"]
            }
            O::PhotosGeoSetLocation => &["photo_id", "lat", "lon"],
            O::PhotosLicensesSetLicense => &["photo_id", "license_id"],
            O::PhotosNotesAdd => &["photo_id", "note_x", "note_y", "note_w", "note_h", "note_text"],
            O::PhotosNotesDelete => &["note_id"],
            O::PhotosNotesEdit => &["note_id", "note_x", "note_y", "note_w", "note_h", "note_text"],
            O::PhotosTransformRotate => &["photo_id", "degrees"],
            O::PhotosUploadCheckTickets => &["tickets"],
            O::PhotosetsAddPhoto
            | O::PhotosetsRemovePhoto
            | O::PhotosetsSetPrimaryPhoto
            | O::PhotosetsGetContext => &["photoset_id", "photo_id"],
            O::PhotosetsCreate => &["title", "primary_photo_id"],
            O::PhotosetsDelete
            | O::PhotosetsGetInfo
            | O::PhotosetsGetPhotos
            | O::PhotosetsCommentsGetList => &["photoset_id"],
            O::PhotosetsEditMeta => &["photoset_id", "title"],
            O::PhotosetsEditPhotos => &["photoset_id", "primary_photo_id", "photo_ids"],
            O::PhotosetsOrderSets => &["photoset_ids"],
            O::PhotosetsRemovePhotos | O::PhotosetsReorderPhotos => &["photoset_id", "photo_ids"],
            O::PhotosetsCommentsAddComment => &["photoset_id", "comment_text"],
            O::FavoritesGetContext => &["photo_id", "user_id"],
            O::TestEcho
            | O::TestLogin
            | O::TestNull
            | O::PeopleGetUploadStatus
            | O::PhotosGetContactsPhotos
            | O::PhotosGetCounts
            | O::PhotosGetNotInSet
            | O::PhotosGetRecent
            | O::PhotosGetUntagged
            | O::PhotosGetWithGeoData
            | O::PhotosGetWithoutGeoData
            | O::PhotosSearch
            | O::PhotosLicensesGetInfo
            | O::PhotosetsGetList
            | O::FavoritesGetList
            | O::InterestingnessGetList => &[],
        }
    }

    /// Key the response payload is nested under, for operations that return one
    pub fn payload_key(&self) -> Option<&'static str> {
        use Operation as O;
        match self {
            O::TestLogin
            | O::PeopleFindByEmail
            | O::PeopleFindByUsername
            | O::PeopleGetUploadStatus => Some("user"),
            O::PeopleGetInfo => Some("person"),
            O::PeopleGetPhotos
            | O::PeopleGetPhotosOf
            | O::PeopleGetPublicPhotos
            | O::PhotosGetContactsPhotos
            | O::PhotosGetContactsPublicPhotos
            | O::PhotosGetNotInSet
            | O::PhotosGetRecent
            | O::PhotosGetUntagged
            | O::PhotosGetWithGeoData
            | O::PhotosGetWithoutGeoData
            | O::PhotosRecentlyUpdated
            | O::PhotosSearch
            | O::FavoritesGetList
            | O::FavoritesGetPublicList
            | O::InterestingnessGetList => Some("photos"),
            O::PhotosGetExif
            | O::PhotosGetFavorites
            | O::PhotosGetInfo
            | O::PhotosGeoGetLocation => Some("photo"),
            O::PhotosGetCounts => Some("photocounts"),
            O::PhotosGetPerms => Some("perms"),
            O::PhotosGetSizes => Some("sizes"),
            O::PhotosCommentsAddComment | O::PhotosetsCommentsAddComment => Some("comment"),
            O::PhotosCommentsGetList | O::PhotosetsCommentsGetList => Some("comments"),
            O::PhotosLicensesGetInfo => Some("licenses"),
            O::PhotosNotesAdd => Some("note"),
            O::PhotosUploadCheckTickets => Some("uploader"),
            O::PhotosetsCreate | O::PhotosetsGetInfo | O::PhotosetsGetPhotos => Some("photoset"),
            O::PhotosetsGetList => Some("photosets"),
            _ => None,
        }
    }

    /// Operations that filter by the `media` parameter on the server side
    pub fn accepts_media_filter(&self) -> bool {
        use Operation as O;
        matches!(
            self,
            O::PeopleGetPhotos
                | O::PhotosGetNotInSet
                | O::PhotosGetUntagged
                | O::PhotosGetWithGeoData
                | O::PhotosGetWithoutGeoData
                | O::PhotosSearch
                | O::PhotosetsGetPhotos
        )
    }
}

/// An operation name resolved through the alias table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub operation: Operation,
    /// Set for the pluralized names (`photos.search`, `people.get_videos`, ...)
    pub media: Option<MediaFilter>,
}

// `{}` is expanded to media, photos and videos
const MEDIA_ALIASES: &[(&str, Operation)] = &[
    ("{}.search", Operation::PhotosSearch),
    ("{}.get_recent", Operation::PhotosGetRecent),
    ("{}.get_interesting", Operation::InterestingnessGetList),
    ("{}.get_untagged", Operation::PhotosGetUntagged),
    ("{}.get_not_in_set", Operation::PhotosGetNotInSet),
    ("{}.get_with_geo_data", Operation::PhotosGetWithGeoData),
    ("{}.get_without_geo_data", Operation::PhotosGetWithoutGeoData),
    ("{}.recently_updated", Operation::PhotosRecentlyUpdated),
    ("{}.get_from_contacts", Operation::PhotosGetContactsPhotos),
    ("{}.get_public_from_contacts", Operation::PhotosGetContactsPublicPhotos),
    ("people.get_{}", Operation::PeopleGetPhotos),
    ("people.get_public_{}", Operation::PeopleGetPublicPhotos),
    ("people.get_{}_of", Operation::PeopleGetPhotosOf),
    ("people.get_favorite_{}", Operation::FavoritesGetList),
    ("people.get_public_favorite_{}", Operation::FavoritesGetPublicList),
    ("sets.get_{}", Operation::PhotosetsGetPhotos),
    ("favorites.get_{}", Operation::FavoritesGetList),
];

// `{}` is expanded to media, photo and video
const SINGULAR_ALIASES: &[(&str, Operation)] = &[
    ("{}.get_info", Operation::PhotosGetInfo),
    ("{}.get_sizes", Operation::PhotosGetSizes),
    ("{}.get_exif", Operation::PhotosGetExif),
    ("{}.get_favorites", Operation::PhotosGetFavorites),
    ("{}.get_context", Operation::PhotosGetContext),
    ("{}.get_perms", Operation::PhotosGetPerms),
    ("{}.delete", Operation::PhotosDelete),
    ("{}.add_tags", Operation::PhotosAddTags),
    ("{}.set_tags", Operation::PhotosSetTags),
    ("{}.remove_tag", Operation::PhotosRemoveTag),
    ("{}.set_meta", Operation::PhotosSetMeta),
    ("{}.set_dates", Operation::PhotosSetDates),
    ("{}.set_perms", Operation::PhotosSetPerms),
    ("{}.set_safety_level", Operation::PhotosSetSafetyLevel),
    ("{}.set_content_type", Operation::PhotosSetContentType),
    ("{}.set_license", Operation::PhotosLicensesSetLicense),
    ("{}.get_comments", Operation::PhotosCommentsGetList),
    ("{}.add_comment", Operation::PhotosCommentsAddComment),
    ("{}.add_note", Operation::PhotosNotesAdd),
    ("sets.add_{}", Operation::PhotosetsAddPhoto),
    ("sets.remove_{}", Operation::PhotosetsRemovePhoto),
];

const ALIASES: &[(&str, Operation)] = &[
    ("test.login", Operation::TestLogin),
    ("people.find_by_email", Operation::PeopleFindByEmail),
    ("people.find_by_username", Operation::PeopleFindByUsername),
    ("people.get_info", Operation::PeopleGetInfo),
    ("people.get_upload_status", Operation::PeopleGetUploadStatus),
    ("people.get_sets", Operation::PhotosetsGetList),
    ("media.get_counts", Operation::PhotosGetCounts),
    ("sets.create", Operation::PhotosetsCreate),
    ("sets.delete", Operation::PhotosetsDelete),
    ("sets.get_info", Operation::PhotosetsGetInfo),
    ("sets.get_list", Operation::PhotosetsGetList),
    ("sets.edit_meta", Operation::PhotosetsEditMeta),
    ("sets.edit_media", Operation::PhotosetsEditPhotos),
    ("sets.remove_media_many", Operation::PhotosetsRemovePhotos),
    ("sets.reorder_media", Operation::PhotosetsReorderPhotos),
    ("sets.set_primary", Operation::PhotosetsSetPrimaryPhoto),
    ("sets.get_context", Operation::PhotosetsGetContext),
    ("sets.order", Operation::PhotosetsOrderSets),
    ("sets.get_comments", Operation::PhotosetsCommentsGetList),
    ("sets.add_comment", Operation::PhotosetsCommentsAddComment),
    ("comments.edit", Operation::PhotosCommentsEditComment),
    ("comments.delete", Operation::PhotosCommentsDeleteComment),
    ("notes.edit", Operation::PhotosNotesEdit),
    ("notes.delete", Operation::PhotosNotesDelete),
    ("licenses.get_list", Operation::PhotosLicensesGetInfo),
    ("upload_tickets.check", Operation::PhotosUploadCheckTickets),
];

// Old names kept working, mapped onto the name that replaced them
const DEPRECATED: &[(&str, &str)] = &[
    ("people.find", "people.get_info"),
    ("photos.find", "photo.get_info"),
    ("videos.find", "video.get_info"),
    ("sets.find", "sets.get_info"),
    ("photos.get_list", "photos.search"),
    ("licenses.list", "licenses.get_list"),
    ("upload_tickets.get", "upload_tickets.check"),
];

static ALIAS_TABLE: LazyLock<HashMap<String, Resolved>> = LazyLock::new(build_alias_table);

fn build_alias_table() -> HashMap<String, Resolved> {
    let mut table = HashMap::new();

    for operation in Operation::iter() {
        let resolved = Resolved {
            operation,
            media: None,
        };
        let name = operation.name();
        table.insert(name.to_string(), resolved);
        if let Some(short) = name.strip_prefix("flickr.") {
            table.insert(short.to_string(), resolved);
        }
    }

    // Inserted after the short names so `photos.search` is the photos-only helper.
    // The full `flickr.photos.search` stays unfiltered.
    for (template, operation) in MEDIA_ALIASES {
        for (word, filter) in [
            ("media", MediaFilter::All),
            ("photos", MediaFilter::Photos),
            ("videos", MediaFilter::Videos),
        ] {
            table.insert(
                template.replace("{}", word),
                Resolved {
                    operation: *operation,
                    media: Some(filter),
                },
            );
        }
    }

    for (template, operation) in SINGULAR_ALIASES {
        for word in ["media", "photo", "video"] {
            table.insert(
                template.replace("{}", word),
                Resolved {
                    operation: *operation,
                    media: None,
                },
            );
        }
    }

    for (name, operation) in ALIASES {
        table.insert(
            name.to_string(),
            Resolved {
                operation: *operation,
                media: None,
            },
        );
    }

    for (old, new) in DEPRECATED {
        if let Some(resolved) = table.get(*new).copied() {
            table.insert(old.to_string(), resolved);
        }
    }

    table
}

/// Resolves an operation name, alias or deprecated name.
///
/// Where a short name (`photos.search`) collides with a pluralized helper the helper wins and
/// carries its media filter. Use the full `flickr.*` name to call the operation unfiltered.
pub fn resolve(name: &str) -> Result<Resolved, FlickrError> {
    if let Some(resolved) = ALIAS_TABLE.get(name) {
        return Ok(*resolved);
    }
    Operation::from_str(name)
        .map(|operation| Resolved {
            operation,
            media: None,
        })
        .map_err(|_| FlickrError::UnknownOperation(name.to_string()))
}
