/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod api;
pub mod client;
pub mod config;
pub mod errors;
pub mod fields;
pub mod list;
pub(crate) mod macros;
pub mod mapper;
pub mod operations;
pub mod parsers;
pub mod properties;
pub mod request;
pub mod upload;

pub mod comment;
pub mod context;
pub mod exif;
pub mod license;
pub mod location;
pub mod media;
pub mod media_count;
pub mod note;
pub mod permissions;
pub mod person;
pub mod set;
pub mod size;
pub mod tag;
pub mod ticket;

pub use api::*;
pub use client::*;
pub use config::*;
pub use errors::*;
pub use fields::*;
pub use list::{Collection, Pagination};
pub use operations::*;
pub use properties::*;
pub use request::*;
pub use upload::{
    HttpUploader, UploadKind, UploadOutcome, UploadParams, UploadSource, Uploader,
    parse_upload_response,
};

pub use comment::*;
pub use context::*;
pub use exif::*;
pub use license::*;
pub use location::*;
pub use media::*;
pub use media_count::*;
pub use note::*;
pub use permissions::{Editability, GeoPermissions, Permissions, Usage, Visibility};
pub use person::*;
pub use set::*;
pub use size::*;
pub use tag::*;
pub use ticket::*;
