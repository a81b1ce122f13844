/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::{ClientConfig, ContentType, Creds, FlickrError, HttpMethod, SafetyLevel};
use async_trait::async_trait;
use bytes::Bytes;
use log::{debug, trace};
use reqwest::multipart;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// New media or a replacement for existing media
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Upload,
    Replace,
}

/// Sends file contents to the upload endpoints and returns the raw response body.
///
/// Uploads are kept apart from [`Transport`](crate::rest::Transport) since they go to another
/// host, use multipart bodies and answer in XML.
#[async_trait]
pub trait Uploader: Send + Sync + std::fmt::Debug {
    async fn upload(
        &self,
        kind: UploadKind,
        source: UploadSource,
        params: BTreeMap<String, String>,
    ) -> Result<String, FlickrError>;
}

/// The file to upload
#[derive(Debug, Clone)]
pub struct UploadSource {
    pub file_name: String,
    pub data: Bytes,
}

impl UploadSource {
    pub fn from_bytes(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            data: data.into(),
        }
    }

    /// Reads the whole file into memory
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FlickrError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::from_bytes(file_name, std::fs::read(path)?))
    }
}

/// Optional metadata sent along with an upload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub is_public: Option<bool>,
    pub is_friend: Option<bool>,
    pub is_family: Option<bool>,
    pub safety_level: Option<SafetyLevel>,
    pub content_type: Option<ContentType>,
    /// Hide from public searches
    pub hidden: Option<bool>,
    /// Return a ticket right away instead of waiting for processing
    pub is_async: bool,
}

impl UploadParams {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags<S: AsRef<str>>(mut self, tags: &[S]) -> Self {
        self.tags = tags.iter().map(|t| t.as_ref().to_string()).collect();
        self
    }

    pub fn with_visibility(mut self, is_public: bool, is_friend: bool, is_family: bool) -> Self {
        self.is_public = Some(is_public);
        self.is_friend = Some(is_friend);
        self.is_family = Some(is_family);
        self
    }

    pub fn with_safety_level(mut self, level: SafetyLevel) -> Self {
        self.safety_level = Some(level);
        self
    }

    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = Some(hidden);
        self
    }

    pub fn with_async(mut self, is_async: bool) -> Self {
        self.is_async = is_async;
        self
    }

    /// The form fields sent next to the file
    pub fn to_params(&self) -> BTreeMap<String, String> {
        let flag = |b: bool| if b { "1" } else { "0" }.to_string();
        let mut params = BTreeMap::new();
        if let Some(title) = &self.title {
            params.insert("title".to_string(), title.clone());
        }
        if let Some(description) = &self.description {
            params.insert("description".to_string(), description.clone());
        }
        if !self.tags.is_empty() {
            params.insert("tags".to_string(), crate::rest::tag_list(&self.tags));
        }
        for (key, value) in [
            ("is_public", self.is_public),
            ("is_friend", self.is_friend),
            ("is_family", self.is_family),
        ] {
            if let Some(value) = value {
                params.insert(key.to_string(), flag(value));
            }
        }
        if let Some(level) = self.safety_level {
            params.insert("safety_level".to_string(), (level as u8).to_string());
        }
        if let Some(content_type) = self.content_type {
            params.insert("content_type".to_string(), (content_type as u8).to_string());
        }
        // 1 shows the upload in global search results, 2 hides it
        if let Some(hidden) = self.hidden {
            let value = if hidden { "2" } else { "1" };
            params.insert("hidden".to_string(), value.to_string());
        }
        if self.is_async {
            params.insert("async".to_string(), "1".to_string());
        }
        params
    }
}

/// What an upload produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The id of the uploaded media
    Media(String),
    /// Ticket to poll with [`Ticket::check`](crate::rest::Ticket::check) for async uploads
    Ticket(String),
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(rename = "@stat")]
    stat: String,
    photoid: Option<XmlText>,
    ticketid: Option<XmlText>,
    err: Option<UploadError>,
}

#[derive(Debug, Deserialize)]
struct XmlText {
    #[serde(rename = "$text")]
    value: String,
}

#[derive(Debug, Deserialize)]
struct UploadError {
    #[serde(rename = "@code")]
    code: Option<u32>,
    #[serde(rename = "@msg")]
    msg: Option<String>,
}

/// Parses the `<rsp>` document returned by the upload endpoints
pub fn parse_upload_response(body: &str) -> Result<UploadOutcome, FlickrError> {
    let rsp: UploadResponse = quick_xml::de::from_str(body)?;
    if rsp.stat != "ok" {
        let (code, message) = rsp
            .err
            .map(|e| (e.code, e.msg.unwrap_or_default()))
            .unwrap_or_default();
        return Err(FlickrError::Api { code, message });
    }
    if let Some(id) = rsp.photoid {
        return Ok(UploadOutcome::Media(id.value.trim().to_string()));
    }
    if let Some(id) = rsp.ticketid {
        return Ok(UploadOutcome::Ticket(id.value.trim().to_string()));
    }
    Err(FlickrError::ResponseMissing("photoid".to_string()))
}

/// [`Uploader`] posting multipart forms with reqwest
#[derive(Clone)]
pub struct HttpUploader {
    creds: Creds,
    upload_endpoint: url::Url,
    replace_endpoint: url::Url,
    https_client: reqwest::Client,
}

impl HttpUploader {
    pub fn new(creds: Creds, config: &ClientConfig) -> Result<Self, FlickrError> {
        let https_client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.upload_timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self {
            creds,
            upload_endpoint: url::Url::parse(&config.upload_endpoint)?,
            replace_endpoint: url::Url::parse(&config.replace_endpoint)?,
            https_client,
        })
    }
}

#[async_trait]
impl Uploader for HttpUploader {
    async fn upload(
        &self,
        kind: UploadKind,
        source: UploadSource,
        mut params: BTreeMap<String, String>,
    ) -> Result<String, FlickrError> {
        if !self.creds.is_authenticated() {
            return Err(FlickrError::Config(
                "uploads require an access token".to_string(),
            ));
        }
        let endpoint = match kind {
            UploadKind::Upload => &self.upload_endpoint,
            UploadKind::Replace => &self.replace_endpoint,
        };
        // The file itself is not part of the signature
        let authorization = self
            .creds
            .authorize(HttpMethod::Post, endpoint.as_str(), &mut params);
        debug!(
            "{:?} {} ({} bytes) to {}",
            kind,
            source.file_name,
            source.data.len(),
            endpoint
        );

        let mut form = multipart::Form::new();
        for (key, value) in params {
            form = form.text(key, value);
        }
        let length = source.data.len() as u64;
        let file = multipart::Part::stream_with_length(reqwest::Body::from(source.data), length)
            .file_name(source.file_name);
        form = form.part("photo", file);

        let mut builder = self.https_client.post(endpoint.clone()).multipart(form);
        if let Some(value) = authorization {
            builder = builder.header(reqwest::header::AUTHORIZATION, value);
        }
        let body = builder
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        trace!("upload response: {}", body);
        Ok(body)
    }
}

impl std::fmt::Debug for HttpUploader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpUploader")
            .field("upload_endpoint", &self.upload_endpoint.as_str())
            .field("replace_endpoint", &self.replace_endpoint.as_str())
            .finish()
    }
}
