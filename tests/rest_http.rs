/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

#[cfg(test)]
mod test {
    use flickr::rest::{
        Client, ClientConfig, Creds, FlickrError, FlickrObject, Media, RawFields, UploadOutcome,
        UploadParams, UploadSource,
    };
    use serde_json::json;
    use wiremock::matchers::{
        body_string_contains, header_exists, header_regex, method, path, query_param,
    };
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, creds: Creds) -> Client {
        let config = ClientConfig::default()
            .with_rest_endpoint(format!("{}/services/rest/", server.uri()))
            .with_upload_base(&server.uri());
        Client::with_config(creds, config).unwrap()
    }

    fn read_only() -> Creds {
        Creds::from_tokens("k3y", None, None, None)
    }

    fn signed() -> Creds {
        Creds::from_tokens("k3y", Some("s3cr3t"), Some("t0k3n"), Some("shh"))
    }

    #[tokio::test]
    async fn reads_are_sent_as_query_strings() {
        let _ = env_logger::builder().is_test(true).try_init();
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/services/rest/"))
            .and(query_param("method", "flickr.photos.getInfo"))
            .and(query_param("photo_id", "2733"))
            .and(query_param("api_key", "k3y"))
            .and(query_param("format", "json"))
            .and(query_param("nojsoncallback", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "stat": "ok",
                "photo": {"id": "2733", "secret": "123456", "server": "12", "farm": 1, "media": "photo"},
            })))
            .expect(1)
            .mount(&server)
            .await;

        let media = Media::from_id(client_for(&server, read_only()), "2733")
            .await
            .unwrap();
        assert_eq!(
            media.url().as_deref(),
            Some("https://farm1.staticflickr.com/12/2733_123456.jpg")
        );
    }

    #[tokio::test]
    async fn writes_are_signed_form_posts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/services/rest/"))
            .and(body_string_contains("method=flickr.photos.delete"))
            .and(body_string_contains("photo_id=2733"))
            .and(header_regex("authorization", r#"^OAuth .*oauth_token="t0k3n""#))
            .and(header_regex(
                "authorization",
                r#"oauth_signature_method="HMAC-SHA1""#,
            ))
            .and(header_regex("authorization", "oauth_signature="))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"stat": "ok"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, signed());
        let mut fields = RawFields::new();
        fields.insert("id".to_string(), json!("2733"));
        Media::from_fields(fields, Some(client))
            .delete()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn service_errors_keep_their_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/services/rest/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "stat": "fail", "code": 100, "message": "Invalid API Key (Key has invalid format)",
            })))
            .mount(&server)
            .await;

        let err = Media::from_id(client_for(&server, read_only()), "1")
            .await
            .unwrap_err();
        assert_eq!(
            err.api_error_code(),
            Some(flickr::rest::ApiErrorCodes::InvalidApiKey)
        );
        match err {
            FlickrError::Api { message, .. } => {
                assert_eq!(message, "Invalid API Key (Key has invalid format)")
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn transport_failures_pass_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/services/rest/"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = Media::from_id(client_for(&server, read_only()), "1")
            .await
            .unwrap_err();
        assert!(matches!(err, FlickrError::Request(_)));
        assert!(!err.is_remote());
    }

    #[tokio::test]
    async fn non_json_bodies_are_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/services/rest/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("jsonFlickrApi({})"))
            .mount(&server)
            .await;

        let err = Media::from_id(client_for(&server, read_only()), "1")
            .await
            .unwrap_err();
        assert!(matches!(err, FlickrError::ApiResponseMalformed(_)));
    }

    #[tokio::test]
    async fn uploads_are_multipart_posts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/services/upload/"))
            .and(body_string_contains("name=\"title\""))
            .and(body_string_contains("filename=\"beach.jpg\""))
            .and(body_string_contains("not really a jpeg"))
            .and(header_exists("authorization"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<?xml version="1.0" encoding="utf-8" ?><rsp stat="ok"><ticketid>1234-5678</ticketid></rsp>"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = client_for(&server, signed())
            .upload(
                UploadSource::from_bytes("beach.jpg", b"not really a jpeg".to_vec()),
                UploadParams::default().with_title("Beach").with_async(true),
            )
            .await
            .unwrap();
        assert_eq!(outcome, UploadOutcome::Ticket("1234-5678".to_string()));
    }

    #[tokio::test]
    async fn uploads_need_an_access_token() {
        let server = MockServer::start().await;
        let err = client_for(&server, read_only())
            .upload(
                UploadSource::from_bytes("beach.jpg", vec![0u8; 4]),
                UploadParams::default(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, FlickrError::Config(_)));
        assert!(server.received_requests().await.unwrap_or_default().is_empty());
    }
}
