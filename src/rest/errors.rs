/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::rest::{ApiErrorCodes, ObjectKind};
use std::io;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum FlickrError {
    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),

    #[error("XML deserialization error")]
    Xml(#[from] quick_xml::DeError),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("API Response was error: {code:?}, msg: {message}")]
    Api { code: Option<u32>, message: String },

    #[error("{0} is not bound to a client")]
    UnboundEntity(ObjectKind),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Operation {operation} requires parameter `{parameter}`")]
    MissingParameter {
        operation: &'static str,
        parameter: &'static str,
    },

    #[error("Expected response missing: {0}")]
    ResponseMissing(String),

    #[error("API Response is malformed: {0}")]
    ApiResponseMalformed(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FlickrError {
    /// Classifies the service provided error code, when there is one the API documents
    pub fn api_error_code(&self) -> Option<ApiErrorCodes> {
        match self {
            FlickrError::Api { code: Some(code), .. } => ApiErrorCodes::try_from(*code).ok(),
            _ => None,
        }
    }

    /// True when the service reported a failure (as opposed to transport or local errors)
    pub fn is_remote(&self) -> bool {
        matches!(self, FlickrError::Api { .. })
    }
}
