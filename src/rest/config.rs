/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::{REPLACE_ENDPOINT, REST_ENDPOINT, UPLOAD_ENDPOINT};
use std::time::Duration;

/// Settings for the HTTP transports. These are fixed for the life of a [`Client`](crate::rest::Client).
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// REST endpoint every operation is sent to
    pub rest_endpoint: String,
    /// Endpoint for new uploads
    pub upload_endpoint: String,
    /// Endpoint for replacing existing media
    pub replace_endpoint: String,
    /// Time allowed to establish a connection
    pub connect_timeout: Duration,
    /// Overall time allowed for a REST request
    pub timeout: Duration,
    /// Overall time allowed for an upload
    pub upload_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rest_endpoint: REST_ENDPOINT.to_string(),
            upload_endpoint: UPLOAD_ENDPOINT.to_string(),
            replace_endpoint: REPLACE_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            timeout: Duration::from_secs(60),
            upload_timeout: Duration::from_secs(600),
            user_agent: format!("flickr-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Points the REST requests somewhere else, e.g. a test server
    pub fn with_rest_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.rest_endpoint = endpoint.into();
        self
    }

    /// Points uploads and replacements at `base`, using the usual `upload/` and `replace/` paths
    pub fn with_upload_base(mut self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        self.upload_endpoint = format!("{base}/services/upload/");
        self.replace_endpoint = format!("{base}/services/replace/");
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_upload_timeout(mut self, timeout: Duration) -> Self {
        self.upload_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
