/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::{ClientConfig, FlickrError, HttpMethod, Request};
use async_trait::async_trait;
use log::{debug, trace};
use num_enum::TryFromPrimitive;
use oauth1_request::request::ParameterList;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::collections::BTreeMap;

/// Root Flickr REST endpoint
pub const REST_ENDPOINT: &str = "https://api.flickr.com/services/rest/";

/// Endpoint for new uploads
pub const UPLOAD_ENDPOINT: &str = "https://up.flickr.com/services/upload/";

/// Endpoint for replacing an existing photo
pub const REPLACE_ENDPOINT: &str = "https://up.flickr.com/services/replace/";

/// Flickr website, used for page urls
pub const WEB_ORIGIN: &str = "https://www.flickr.com";

/// Sends a [`Request`] and returns the decoded JSON body.
///
/// The body is returned as is. Checking the envelope status is left to the caller, so an
/// implementation only reports transport level failures.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    async fn execute(&self, request: &Request) -> Result<Value, FlickrError>;
}

/// [`Transport`] over HTTPS using reqwest
#[derive(Clone)]
pub struct HttpTransport {
    creds: Creds,
    endpoint: url::Url,
    https_client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(creds: Creds, config: &ClientConfig) -> Result<Self, FlickrError> {
        let https_client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self {
            creds,
            endpoint: url::Url::parse(&config.rest_endpoint)?,
            https_client,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: &Request) -> Result<Value, FlickrError> {
        let mut params = request.params().clone();
        let authorization =
            self.creds
                .authorize(request.method(), self.endpoint.as_str(), &mut params);
        debug!(
            "{:?} {} ({})",
            request.method(),
            request.operation(),
            self.endpoint
        );

        let builder = match request.method() {
            HttpMethod::Get => {
                let req_url = url::Url::parse_with_params(self.endpoint.as_str(), &params)?;
                self.https_client.get(req_url)
            }
            HttpMethod::Post => {
                let body = url::form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(&params)
                    .finish();
                self.https_client
                    .post(self.endpoint.clone())
                    .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(body)
            }
        };

        let builder = match authorization {
            Some(value) => builder.header(AUTHORIZATION, value),
            None => builder,
        };
        let resp = builder
            .header(ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?;
        let body = resp.text().await?;
        trace!("{} response: {}", request.operation(), body);
        serde_json::from_str(&body).map_err(|e| FlickrError::ApiResponseMalformed(e.to_string()))
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("endpoint", &self.endpoint.as_str())
            .field("creds", &self.creds)
            .finish()
    }
}

/// Common error codes per the Flickr API site. Codes below 95 are method specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u32)]
pub enum ApiErrorCodes {
    SslRequired = 95,
    InvalidSignature = 96,
    MissingSignature = 97,
    LoginFailed = 98,
    InsufficientPermissions = 99,
    InvalidApiKey = 100,
    ServiceUnavailable = 105,
    WriteOperationFailed = 106,
    FormatNotFound = 111,
    MethodNotFound = 112,
    InvalidSoapEnvelope = 114,
    InvalidXmlRpcCall = 115,
    BadUrlFound = 116,
}

/// API key plus the optional OAuth access token.
///
/// Public data only needs the API key. Anything done on behalf of a user needs all four values;
/// obtaining the access token is left to the consumer of this library.
#[derive(Default, Clone)]
pub struct Creds {
    api_key: String,
    api_secret: Option<String>,
    access_token: Option<String>,
    token_secret: Option<String>,
}

impl Creds {
    pub fn from_tokens(
        api_key: &str,
        api_secret: Option<&str>,
        access_token: Option<&str>,
        token_secret: Option<&str>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.map(Into::into),
            access_token: access_token.map(Into::into),
            token_secret: token_secret.map(Into::into),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// True when requests can be signed on behalf of a user
    pub fn is_authenticated(&self) -> bool {
        self.signing_keys().is_some()
    }

    fn signing_keys(&self) -> Option<(&str, &str, &str)> {
        Some((
            self.api_secret.as_deref()?,
            self.access_token.as_deref()?,
            self.token_secret.as_deref()?,
        ))
    }

    /// Prepares `params` for sending.
    ///
    /// Without an access token only the api key is added. Otherwise the returned OAuth 1.0a
    /// (HMAC-SHA1) `Authorization` value signs `params` as they are.
    pub(crate) fn authorize(
        &self,
        method: HttpMethod,
        url: &str,
        params: &mut BTreeMap<String, String>,
    ) -> Option<String> {
        let Some((api_secret, access_token, token_secret)) = self.signing_keys() else {
            params.insert("api_key".to_string(), self.api_key.clone());
            return None;
        };
        let token = oauth1_request::Token::from_parts(
            self.api_key.as_str(),
            api_secret,
            access_token,
            token_secret,
        );
        // BTreeMap iteration keeps the list sorted by key
        let request = ParameterList::new(
            params
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect::<Vec<_>>(),
        );
        Some(match method {
            HttpMethod::Get => {
                oauth1_request::get(url, &request, &token, oauth1_request::HMAC_SHA1)
            }
            HttpMethod::Post => {
                oauth1_request::post(url, &request, &token, oauth1_request::HMAC_SHA1)
            }
        })
    }
}

impl std::fmt::Debug for Creds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Creds")
            .field("api_key", &"xxx")
            .field("api_secret", &"xxx")
            .field("access_token", &"xxx")
            .field("token_secret", &"xxx")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creds_debug_is_redacted() {
        let creds = Creds::from_tokens("k3y", Some("s3cr3t"), Some("t0k3n"), Some("shh"));
        let printed = format!("{:?}", creds);
        for value in ["k3y", "s3cr3t", "t0k3n", "shh"] {
            assert!(!printed.contains(value));
        }
        assert!(creds.is_authenticated());
        assert!(!Creds::from_tokens("key", Some("secret"), None, None).is_authenticated());
    }

    #[test]
    fn read_only_creds_send_the_api_key() {
        let creds = Creds::from_tokens("key", None, None, None);
        let mut params = BTreeMap::new();
        let header = creds.authorize(HttpMethod::Get, REST_ENDPOINT, &mut params);
        assert_eq!(header, None);
        assert_eq!(params.get("api_key").map(String::as_str), Some("key"));
    }

    #[test]
    fn full_creds_sign_with_an_authorization_header() {
        let creds = Creds::from_tokens("key", Some("secret"), Some("token"), Some("token-secret"));
        let mut params = BTreeMap::from([
            ("method".to_string(), "flickr.photos.delete".to_string()),
            ("photo_id".to_string(), "2733".to_string()),
        ]);
        let header = creds
            .authorize(HttpMethod::Post, REST_ENDPOINT, &mut params)
            .unwrap();
        assert!(header.starts_with("OAuth "));
        assert!(header.contains(r#"oauth_consumer_key="key""#));
        assert!(header.contains(r#"oauth_token="token""#));
        assert!(header.contains(r#"oauth_signature_method="HMAC-SHA1""#));
        assert!(header.contains("oauth_signature="));
        assert!(!header.contains("token-secret"));
        // The signed values travel unchanged, the key is part of the header
        assert_eq!(params.len(), 2);
    }
}
