/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use async_trait::async_trait;
use flickr::rest::{
    Client, Creds, FlickrError, Operation, Request, Transport, UploadKind, UploadSource, Uploader,
};
use serde_json::{Value, json};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::{Arc, Mutex};

#[allow(dead_code)]
pub(crate) fn get_full_auth_tokens() -> anyhow::Result<Creds> {
    let api_key = std::env::var("FLICKR_API_KEY")?;
    let api_secret = std::env::var("FLICKR_API_SECRET")?;
    let access_token = std::env::var("FLICKR_ACCESS_TOKEN")?;
    let access_secret = std::env::var("FLICKR_ACCESS_SECRET")?;

    Ok(Creds::from_tokens(
        &api_key,
        Some(&api_secret),
        Some(&access_token),
        Some(&access_secret),
    ))
}

#[allow(dead_code)]
pub(crate) fn get_read_only_auth_tokens() -> anyhow::Result<Creds> {
    let api_key = std::env::var("FLICKR_API_KEY")?;

    Ok(Creds::from_tokens(&api_key, None, None, None))
}

/// Answers requests with canned bodies, per operation, and remembers what was asked
#[derive(Debug, Default)]
pub(crate) struct FakeTransport {
    responses: Mutex<HashMap<Operation, VecDeque<Value>>>,
    requests: Mutex<Vec<Request>>,
}

#[allow(dead_code)]
impl FakeTransport {
    /// Queues a body. The last body queued for an operation keeps being returned.
    pub(crate) fn respond(self, operation: Operation, body: Value) -> Self {
        if let Ok(mut responses) = self.responses.lock() {
            responses.entry(operation).or_default().push_back(body);
        }
        self
    }

    pub(crate) fn requests(&self) -> Vec<Request> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub(crate) fn last_request(&self) -> Request {
        self.requests().pop().expect("no request was sent")
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn execute(&self, request: &Request) -> Result<Value, FlickrError> {
        self.requests.lock().unwrap().push(request.clone());
        let mut responses = self.responses.lock().unwrap();
        let queued = responses.entry(request.operation()).or_default();
        let body = if queued.len() > 1 {
            queued.pop_front()
        } else {
            queued.front().cloned()
        };
        Ok(body.unwrap_or_else(|| {
            json!({"stat": "fail", "code": 112, "message": "Method not found"})
        }))
    }
}

/// A recorded upload
#[derive(Debug, Clone)]
pub(crate) struct SentUpload {
    pub(crate) kind: UploadKind,
    pub(crate) file_name: String,
    pub(crate) size: usize,
    pub(crate) params: BTreeMap<String, String>,
}

/// Answers every upload with the same XML document
#[derive(Debug)]
pub(crate) struct FakeUploader {
    body: String,
    sent: Mutex<Vec<SentUpload>>,
}

#[allow(dead_code)]
impl FakeUploader {
    pub(crate) fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn sent(&self) -> Vec<SentUpload> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Uploader for FakeUploader {
    async fn upload(
        &self,
        kind: UploadKind,
        source: UploadSource,
        params: BTreeMap<String, String>,
    ) -> Result<String, FlickrError> {
        self.sent.lock().unwrap().push(SentUpload {
            kind,
            file_name: source.file_name,
            size: source.data.len(),
            params,
        });
        Ok(self.body.clone())
    }
}

/// Client over a fake transport, keeping a handle on the fake to inspect requests
#[allow(dead_code)]
pub(crate) fn fake_client(transport: FakeTransport) -> (Client, Arc<FakeTransport>) {
    let transport = Arc::new(transport);
    let uploader = Arc::new(FakeUploader::new(
        r#"<rsp stat="fail"><err code="0" msg="uploads not expected" /></rsp>"#,
    ));
    (Client::from_parts(transport.clone(), uploader), transport)
}
