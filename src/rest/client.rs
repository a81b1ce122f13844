/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::upload::{self, UploadKind};
use crate::rest::{
    ClientConfig, Collection, Creds, FlickrError, HttpTransport, HttpUploader, Media, Params,
    RawFields, Request, RequestBuilder, Transport, UploadOutcome, UploadParams, UploadSource,
    Uploader, list, mapper, operations,
};
use log::warn;
use std::sync::Arc;

/// Handle used to talk to Flickr.
///
/// Cheap to clone. Objects returned by the API keep a clone so they can make further requests.
///
/// ```no_run
/// # async fn run() -> Result<(), flickr::rest::FlickrError> {
/// use flickr::rest::{Client, Creds, Media, Params};
///
/// let client = Client::new(Creds::from_tokens("api-key", None, None, None))?;
/// let recent = Media::recent(client.clone(), Params::new()).await?;
/// for media in &recent {
///     println!("{:?}", media.title());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    uploader: Arc<dyn Uploader>,
}

impl Client {
    /// Client using the default endpoints and timeouts
    pub fn new(creds: Creds) -> Result<Self, FlickrError> {
        Self::with_config(creds, ClientConfig::default())
    }

    pub fn with_config(creds: Creds, config: ClientConfig) -> Result<Self, FlickrError> {
        Ok(Self {
            transport: Arc::new(HttpTransport::new(creds.clone(), &config)?),
            uploader: Arc::new(HttpUploader::new(creds, &config)?),
        })
    }

    /// Client over caller supplied transports
    pub fn from_parts(transport: Arc<dyn Transport>, uploader: Arc<dyn Uploader>) -> Self {
        Self {
            transport,
            uploader,
        }
    }

    /// Sends a request and returns the envelope with its status checked
    pub async fn execute(&self, request: &Request) -> Result<RawFields, FlickrError> {
        let body = self.transport.execute(request).await?;
        mapper::check_envelope(body)
            .inspect_err(|e| warn!("{} failed: {}", request.operation(), e))
    }

    /// Builds and sends a request
    pub async fn fetch(&self, builder: RequestBuilder) -> Result<RawFields, FlickrError> {
        self.execute(&builder.build()?).await
    }

    /// Calls an operation by its Flickr name, short name or alias.
    ///
    /// Returns the checked envelope. Pluralized aliases (`videos.search`) set the `media`
    /// parameter for operations that support it, and the returned list only holds the
    /// requested kind either way.
    pub async fn call(&self, name: &str, params: Params) -> Result<RawFields, FlickrError> {
        let resolved = operations::resolve(name)?;
        let mut builder = RequestBuilder::new(resolved.operation).params(params);
        if let Some(filter) = resolved.media {
            builder = builder.media(filter);
        }
        let mut envelope = self.fetch(builder).await?;
        if let (Some(filter), Some(key)) = (resolved.media, resolved.operation.payload_key()) {
            mapper::retain_media(&mut envelope, key, filter);
        }
        Ok(envelope)
    }

    /// Calls a list operation by name and maps the photos and videos it returns.
    ///
    /// Pluralized aliases also filter the result, so `people.get_videos` only ever yields videos
    /// even where Flickr itself has no `media` parameter.
    pub async fn call_media(
        &self,
        name: &str,
        params: Params,
    ) -> Result<Collection<Media>, FlickrError> {
        let resolved = operations::resolve(name)?;
        list::fetch_media(
            self,
            RequestBuilder::new(resolved.operation).params(params),
            resolved.media.unwrap_or_default(),
        )
        .await
    }

    /// Uploads a new photo or video
    pub async fn upload(
        &self,
        source: UploadSource,
        params: UploadParams,
    ) -> Result<UploadOutcome, FlickrError> {
        let body = self
            .uploader
            .upload(UploadKind::Upload, source, params.to_params())
            .await?;
        upload::parse_upload_response(&body)
            .inspect_err(|e| warn!("upload failed: {}", e))
    }

    /// Replaces the file of an existing photo
    pub async fn replace(
        &self,
        media_id: &str,
        source: UploadSource,
        is_async: bool,
    ) -> Result<UploadOutcome, FlickrError> {
        let mut params = UploadParams::default().with_async(is_async).to_params();
        params.insert("photo_id".to_string(), media_id.to_string());
        let body = self
            .uploader
            .upload(UploadKind::Replace, source, params)
            .await?;
        upload::parse_upload_response(&body)
            .inspect_err(|e| warn!("replace of {} failed: {}", media_id, e))
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("transport", &self.transport)
            .field("uploader", &self.uploader)
            .finish()
    }
}
