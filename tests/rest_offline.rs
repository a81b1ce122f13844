/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers::{self, FakeTransport, FakeUploader};
    use flickr::rest::{
        Client, Comment, ExifEntry, FlickrError, FlickrObject, HttpMethod, License, Location,
        Media, MediaCount, MediaKind, Note, ObjectKind, Operation, Params, Person, RawFields, Set,
        Size, SizeLabel, Tag, Ticket, UploadKind, UploadOutcome, UploadParams, UploadSource,
    };
    use futures::{StreamExt, pin_mut};
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn fields(v: Value) -> RawFields {
        v.as_object().cloned().unwrap()
    }

    fn search_page(page: u64, pages: u64, ids: &[&str]) -> Value {
        let photos: Vec<Value> = ids
            .iter()
            .map(|id| json!({"id": id, "secret": "abc", "server": "7049", "farm": 8}))
            .collect();
        json!({
            "stat": "ok",
            "photos": {"page": page, "pages": pages, "perpage": ids.len(), "total": "5", "photo": photos},
        })
    }

    #[test]
    fn blank_entities_have_nothing_to_say() {
        let blank = RawFields::new();

        let media = Media::from_fields(blank.clone(), None);
        assert_eq!(media.id(), None);
        assert_eq!(media.title(), None);
        assert_eq!(media.url(), None);
        assert_eq!(media.source_url(SizeLabel::Original), None);
        assert_eq!(media.owner().map(|o| o.id()), None);
        assert_eq!(media.visibility(), None);
        assert_eq!(media.permissions(), None);
        assert!(media.location().is_none());
        assert!(media.tags().is_none());
        assert_eq!(media.machine_tags(), None);
        assert!(media.notes().is_none());
        assert_eq!(media.taken_at(), None);
        assert_eq!(media.uploaded_at(), None);
        assert_eq!(media.is_favorite(), None);
        assert_eq!(media.page_url(), None);
        assert!(media.sizes().is_empty());
        assert_eq!(media.largest_size(), None);
        assert!(media.exif().is_none());
        assert!(media.favorites().is_none());
        assert_eq!(media.duration(), None);
        assert_eq!(media.media_kind(), MediaKind::Photo);
        assert!(media["id"].is_null());

        let person = Person::from_fields(blank.clone(), None);
        assert_eq!(person.id(), None);
        assert_eq!(person.username(), None);
        assert_eq!(person.buddy_icon_url(), None);
        assert_eq!(person.photos_url(), None);
        assert_eq!(person.profile_url(), None);
        assert_eq!(person.media_count(), None);
        assert_eq!(person.first_taken(), None);

        let set = Set::from_fields(blank.clone(), None);
        assert_eq!(set.id(), None);
        assert_eq!(set.primary_url(), None);
        assert_eq!(set.media_count(), None);
        assert_eq!(set.url(), None);
        assert!(set.owner().is_none());

        let comment = Comment::from_fields(blank.clone(), None);
        assert!(comment.author().is_none());
        assert_eq!(comment.content(), None);
        assert_eq!(comment.created_at(), None);

        let note = Note::from_fields(blank.clone(), None);
        assert_eq!(note.bounds(), None);

        let tag = Tag::from_fields(blank.clone(), None);
        assert_eq!(tag.content(), None);
        assert_eq!(tag.is_machine_tag(), None);

        let location = Location::from_fields(blank.clone(), None);
        assert_eq!(location.latitude(), None);
        assert_eq!(location.locality(), None);

        assert_eq!(License::from_fields(blank.clone(), None).url(), None);
        assert_eq!(Ticket::from_fields(blank.clone(), None).status(), None);
        assert_eq!(MediaCount::from_fields(blank.clone(), None).from(), None);
        assert_eq!(Size::from_fields(blank.clone(), None).label(), None);
        assert_eq!(ExifEntry::from_fields(blank, None).clean(), None);
    }

    #[test]
    fn raw_passthrough_returns_every_field() {
        let fragment = fields(json!({
            "id": "2733",
            "title": {"_content": "orford_castle_taster"},
            "views": "12",
            "custom_field": [1, 2, 3],
            "nothing": null,
        }));
        let media = Media::from_fields(fragment.clone(), None);
        for (key, value) in &fragment {
            assert_eq!(&media[key.as_str()], value);
            assert_eq!(media.raw(key), Some(value));
        }
        assert!(media["missing"].is_null());
        assert_eq!(media.fields(), &fragment);
    }

    #[test]
    fn mapping_twice_gives_the_same_answers() {
        let fragment = fields(json!({
            "id": "5", "secret": "abc", "server": "7049", "farm": 8,
            "dateupload": "1360416623", "tags": "beach sunset", "media": "video",
            "ispublic": 1, "isfriend": 0, "isfamily": 0,
        }));
        let first = Media::from_fields(fragment.clone(), None);
        let second = Media::from_fields(fragment, None);
        assert_eq!(first, second);
        assert_eq!(first.url(), second.url());
        assert_eq!(first.uploaded_at(), second.uploaded_at());
        assert_eq!(first.visibility(), second.visibility());
        assert_eq!(first.kind(), second.kind());
        assert_eq!(first.kind(), ObjectKind::Video);
    }

    #[test]
    fn static_url_template() {
        let photo = Media::from_fields(
            fields(json!({"server": "7049", "farm": 8, "id": "123", "secret": "abc"})),
            None,
        );
        assert_eq!(
            photo.url().as_deref(),
            Some("https://farm8.staticflickr.com/7049/123_abc.jpg")
        );

        let no_farm = Media::from_fields(
            fields(json!({"server": "7049", "id": "123", "secret": "abc"})),
            None,
        );
        assert_eq!(no_farm.url(), None);
    }

    #[tokio::test]
    async fn failed_envelope_is_one_remote_error() {
        let (client, transport) = helpers::fake_client(FakeTransport::default().respond(
            Operation::PhotosGetInfo,
            json!({"stat": "fail", "message": "Photo not found"}),
        ));

        match Media::from_id(client, "404").await {
            Err(FlickrError::Api { message, .. }) => assert_eq!(message, "Photo not found"),
            other => panic!("expected a remote error, got {other:?}"),
        }
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn media_dispatch_through_filtered_views() {
        let (client, _) = helpers::fake_client(FakeTransport::default().respond(
            Operation::PhotosSearch,
            json!({
                "stat": "ok",
                "photos": {
                    "page": 1, "pages": 1, "perpage": 100, "total": 3,
                    "photo": [
                        {"id": "1", "title": "photo"},
                        {"id": "2", "title": "clip", "duration": "34"},
                        {"id": "3", "title": "another photo"},
                    ],
                },
            }),
        ));

        let results = Media::search(client, Params::new().with("text", "beach"))
            .await
            .unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results.total(), Some(3));

        let videos = results.videos();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].id().as_deref(), Some("2"));
        assert_eq!(videos.page(), Some(1));

        let photo_ids: Vec<_> = results.photos().iter().filter_map(|m| m.id()).collect();
        assert_eq!(photo_ids, vec!["1", "3"]);
    }

    #[tokio::test]
    async fn request_wire_form() {
        let (client, transport) = helpers::fake_client(
            FakeTransport::default().respond(Operation::PhotosSearch, search_page(1, 1, &["1"])),
        );

        Media::search(
            client,
            Params::new()
                .with("tags", "beach")
                .with("extras", "url_q,date_taken")
                .with("include_sizes", true),
        )
        .await
        .unwrap();

        let request = transport.last_request();
        assert_eq!(request.method(), HttpMethod::Get);
        assert_eq!(request.param("method"), Some("flickr.photos.search"));
        assert_eq!(request.param("format"), Some("json"));
        assert_eq!(request.param("nojsoncallback"), Some("1"));
        assert_eq!(request.param("tags"), Some("beach"));
        assert_eq!(request.param("include_sizes"), None);
        let extras: Vec<_> = request.param("extras").unwrap().split(',').collect();
        assert_eq!(&extras[..2], &["url_q", "date_taken"]);
        assert!(extras.contains(&"url_o"));
        assert_eq!(extras.iter().filter(|e| **e == "url_q").count(), 1);
    }

    #[tokio::test]
    async fn pluralized_aliases_filter_by_media() {
        let (client, transport) = helpers::fake_client(FakeTransport::default().respond(
            Operation::PeopleGetPublicPhotos,
            json!({
                "stat": "ok",
                "photos": {
                    "page": 1, "pages": 1, "perpage": 2, "total": 2,
                    "photo": [{"id": "1", "media": "photo"}, {"id": "2", "media": "video"}],
                },
            }),
        ));

        let videos = client
            .call_media(
                "people.get_public_videos",
                Params::new().with("user_id", "12037949754@N01"),
            )
            .await
            .unwrap();
        assert_eq!(videos.len(), 1);
        assert!(videos[0].is_video());
        // getPublicPhotos has no media parameter, the result is filtered locally
        assert_eq!(transport.last_request().param("media"), None);

        let (client, transport) = helpers::fake_client(
            FakeTransport::default().respond(Operation::PhotosSearch, search_page(1, 1, &["1"])),
        );
        client
            .call_media("videos.search", Params::new().with("text", "surf"))
            .await
            .unwrap();
        assert_eq!(transport.last_request().param("media"), Some("videos"));

        // Deprecated names keep working
        client
            .call("photos.get_list", Params::new().with("text", "surf"))
            .await
            .unwrap();
        assert_eq!(
            transport.last_request().param("method"),
            Some("flickr.photos.search")
        );
    }

    #[tokio::test]
    async fn pluralized_calls_filter_the_envelope_locally() {
        let (client, transport) = helpers::fake_client(FakeTransport::default().respond(
            Operation::PhotosGetRecent,
            json!({
                "stat": "ok",
                "photos": {
                    "page": 1, "pages": 1, "perpage": 2, "total": 2,
                    "photo": [{"id": "1", "media": "photo"}, {"id": "2", "media": "video"}],
                },
            }),
        ));

        let envelope = client
            .call("videos.get_recent", Params::new())
            .await
            .unwrap();
        // getRecent has no media parameter
        assert_eq!(transport.last_request().param("media"), None);
        assert_eq!(
            envelope["photos"]["photo"],
            json!([{"id": "2", "media": "video"}])
        );

        let envelope = client
            .call("flickr.photos.getRecent", Params::new())
            .await
            .unwrap();
        assert_eq!(envelope["photos"]["photo"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unknown_names_and_missing_parameters() {
        let (client, transport) = helpers::fake_client(FakeTransport::default());

        assert!(matches!(
            client.call("photos.teleport", Params::new()).await,
            Err(FlickrError::UnknownOperation(name)) if name == "photos.teleport"
        ));
        assert!(matches!(
            client.call("flickr.photos.getInfo", Params::new()).await,
            Err(FlickrError::MissingParameter { parameter: "photo_id", .. })
        ));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn caller_params_win_over_operation_params() {
        let (client, transport) = helpers::fake_client(FakeTransport::default().respond(
            Operation::PhotosetsGetPhotos,
            json!({"stat": "ok", "photoset": {"id": "7", "photo": [], "page": 1, "pages": 1, "per_page": 500, "total": 0}}),
        ));
        let set = Set::from_fields(fields(json!({"id": "7"})), Some(client));

        let media = set
            .get_photos(Params::new().with("photoset_id", "8"))
            .await
            .unwrap();
        assert!(media.is_empty());
        assert_eq!(media.per_page(), Some(500));

        let request = transport.last_request();
        assert_eq!(request.param("photoset_id"), Some("8"));
        assert_eq!(request.param("media"), Some("photos"));
    }

    #[tokio::test]
    async fn one_request_per_page() {
        let (client, transport) = helpers::fake_client(
            FakeTransport::default()
                .respond(Operation::PhotosSearch, search_page(1, 2, &["1", "2", "3"]))
                .respond(Operation::PhotosSearch, search_page(2, 2, &["4", "5"])),
        );

        let stream = Media::search_all(client, Params::new().with("user_id", "me"));
        pin_mut!(stream);
        let mut ids = Vec::new();
        while let Some(media) = stream.next().await {
            ids.push(media.unwrap().id().unwrap());
        }

        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
        let pages: Vec<_> = transport
            .requests()
            .iter()
            .map(|r| r.param("page").map(str::to_string))
            .collect();
        assert_eq!(pages, vec![Some("1".to_string()), Some("2".to_string())]);
    }

    #[tokio::test]
    async fn remote_accessors_return_fresh_objects() {
        let (client, transport) = helpers::fake_client(
            FakeTransport::default()
                .respond(
                    Operation::PhotosGetInfo,
                    json!({"stat": "ok", "photo": {"id": "2733", "secret": "123456", "server": "12", "farm": 1,
                           "title": {"_content": "orford_castle_taster"}}}),
                )
                .respond(
                    Operation::PhotosGetSizes,
                    json!({"stat": "ok", "sizes": {"canblog": 1, "size": [
                        {"label": "Square", "width": 75, "height": 75, "source": "https://live.staticflickr.com/12/2733_123456_s.jpg"},
                        {"label": "Original", "width": "2400", "height": "1600", "source": "https://live.staticflickr.com/12/2733_999_o.jpg"},
                    ]}}),
                )
                .respond(
                    Operation::PhotosGetContext,
                    json!({"stat": "ok", "count": {"_content": 2},
                           "prevphoto": {"id": "0"},
                           "nextphoto": {"id": "2734", "secret": "x", "server": "12", "farm": 1}}),
                ),
        );

        let stub = Media::from_fields(fields(json!({"id": "2733"})), Some(client));
        let info = stub.get_info().await.unwrap();
        assert_eq!(info.title().as_deref(), Some("orford_castle_taster"));
        assert_eq!(
            info.url().as_deref(),
            Some("https://farm1.staticflickr.com/12/2733_123456.jpg")
        );
        assert!(info.client().is_some());

        let sizes = info.get_sizes().await.unwrap();
        assert_eq!(sizes.len(), 2);
        assert_eq!(sizes[1].label(), Some(SizeLabel::Original));
        assert_eq!(sizes[1].width(), Some(2400));

        let context = info.get_context().await.unwrap();
        assert!(context.is_first());
        assert_eq!(context.next.and_then(|m| m.id()).as_deref(), Some("2734"));
        assert_eq!(context.count, Some(2));

        let sent: Vec<_> = transport.requests().iter().map(|r| r.operation()).collect();
        assert_eq!(
            sent,
            vec![
                Operation::PhotosGetInfo,
                Operation::PhotosGetSizes,
                Operation::PhotosGetContext
            ]
        );
    }

    #[tokio::test]
    async fn writes_are_posted() {
        let (client, transport) = helpers::fake_client(
            FakeTransport::default()
                .respond(Operation::PhotosAddTags, json!({"stat": "ok"}))
                .respond(
                    Operation::PhotosCommentsAddComment,
                    json!({"stat": "ok", "comment": {"id": "97777-72057594037941949-72057594037942602", "permalink": "https://www.flickr.com/photos/bees/2733/#comment72057594037942602"}}),
                )
                .respond(Operation::PhotosCommentsDeleteComment, json!({"stat": "ok"})),
        );
        let photo = Media::from_fields(fields(json!({"id": "2733"})), Some(client));

        photo.add_tags(&["beach", "north shore"]).await.unwrap();
        let request = transport.last_request();
        assert_eq!(request.method(), HttpMethod::Post);
        assert_eq!(request.param("tags"), Some("beach \"north shore\""));
        assert_eq!(request.param("photo_id"), Some("2733"));

        let comment = photo.add_comment("Nice!").await.unwrap();
        assert!(comment.permalink().is_some());
        comment.delete().await.unwrap();
        assert_eq!(
            transport.last_request().param("comment_id"),
            Some("97777-72057594037941949-72057594037942602")
        );
    }

    #[tokio::test]
    async fn person_lookups() {
        let (client, _) = helpers::fake_client(
            FakeTransport::default()
                .respond(
                    Operation::PeopleFindByUsername,
                    json!({"stat": "ok", "user": {"id": "12037949754@N01", "nsid": "12037949754@N01", "username": {"_content": "bees"}}}),
                )
                .respond(
                    Operation::PhotosetsGetList,
                    json!({"stat": "ok", "photosets": {"page": 1, "pages": 1, "perpage": 2, "total": 2, "photoset": [
                        {"id": "1", "title": {"_content": "One"}, "photos": 3, "videos": 0},
                        {"id": "2", "title": {"_content": "Two"}, "photos": "1", "videos": "1"},
                    ]}}),
                ),
        );

        let bees = Person::find_by_username(client, "bees").await.unwrap();
        assert_eq!(bees.id().as_deref(), Some("12037949754@N01"));
        assert_eq!(bees.username().as_deref(), Some("bees"));

        let sets = bees.get_sets(Params::new()).await.unwrap();
        assert_eq!(sets.len(), 2);
        assert_eq!(sets.find("2").and_then(|s| s.media_count()), Some(2));
        assert!(sets.find("2").unwrap().client().is_some());
    }

    #[tokio::test]
    async fn licenses_and_tickets_lists() {
        let (client, _) = helpers::fake_client(
            FakeTransport::default()
                .respond(
                    Operation::PhotosLicensesGetInfo,
                    json!({"stat": "ok", "licenses": {"license": [
                        {"id": 0, "name": "All Rights Reserved", "url": ""},
                        {"id": "4", "name": "Attribution License", "url": "https://creativecommons.org/licenses/by/2.0/"},
                    ]}}),
                )
                .respond(
                    Operation::PhotosUploadCheckTickets,
                    json!({"stat": "ok", "uploader": {"ticket": {"id": "128", "complete": "2"}}}),
                ),
        );

        let licenses = License::list(client.clone()).await.unwrap();
        assert_eq!(licenses.len(), 2);
        assert!(licenses.pagination().is_none());
        assert_eq!(licenses[0].url(), None);
        assert_eq!(licenses[1].id(), Some(4));

        let tickets = Ticket::check(client, &["128"]).await.unwrap();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].has_failed(), Some(true));
    }

    #[tokio::test]
    async fn uploads_go_through_the_uploader() {
        let transport = Arc::new(FakeTransport::default());
        let uploader = Arc::new(FakeUploader::new(
            r#"<?xml version="1.0" encoding="utf-8" ?><rsp stat="ok"><photoid>1234</photoid></rsp>"#,
        ));
        let client = Client::from_parts(transport.clone(), uploader.clone());

        let outcome = client
            .upload(
                UploadSource::from_bytes("beach.jpg", vec![0u8; 16]),
                UploadParams::default().with_title("Beach").with_tags(&["sand"]),
            )
            .await
            .unwrap();
        assert_eq!(outcome, UploadOutcome::Media("1234".to_string()));

        client
            .replace("1234", UploadSource::from_bytes("beach2.jpg", vec![1u8; 8]), false)
            .await
            .unwrap();

        let sent = uploader.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].kind, UploadKind::Upload);
        assert_eq!(sent[0].file_name, "beach.jpg");
        assert_eq!(sent[0].size, 16);
        assert_eq!(sent[0].params["title"], "Beach");
        assert_eq!(sent[1].kind, UploadKind::Replace);
        assert_eq!(sent[1].params["photo_id"], "1234");
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn upload_failures_are_remote_errors() {
        let uploader = Arc::new(FakeUploader::new(
            r#"<rsp stat="fail"><err code="3" msg="General upload failure" /></rsp>"#,
        ));
        let client = Client::from_parts(Arc::new(FakeTransport::default()), uploader);

        let err = client
            .upload(
                UploadSource::from_bytes("x.jpg", vec![0u8; 1]),
                UploadParams::default().with_async(true),
            )
            .await
            .unwrap_err();
        assert!(err.is_remote());
        assert!(matches!(err, FlickrError::Api { code: Some(3), .. }));
    }
}
