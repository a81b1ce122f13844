/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::parsers::{flag, uint};
use crate::rest::{PermissionLevel, RawFields};
use serde_json::Value;

fn flag_of(fields: &RawFields, key: &str) -> Option<bool> {
    fields.get(key).and_then(flag)
}

fn level_of(fields: &RawFields, key: &str) -> Option<PermissionLevel> {
    fields
        .get(key)
        .and_then(uint)
        .and_then(|v| u8::try_from(v).ok())
        .and_then(|v| PermissionLevel::try_from(v).ok())
}

/// Who can see a photo, or where the photo's location is visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Visibility {
    pub is_public: Option<bool>,
    pub is_friend: Option<bool>,
    pub is_family: Option<bool>,
}

impl Visibility {
    pub(crate) fn from_fields(fields: &RawFields) -> Option<Self> {
        let visibility = Self {
            is_public: flag_of(fields, "ispublic"),
            is_friend: flag_of(fields, "isfriend"),
            is_family: flag_of(fields, "isfamily"),
        };
        (visibility != Self::default()).then_some(visibility)
    }
}

/// Who can see a photo's location
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeoPermissions {
    pub is_public: Option<bool>,
    pub is_contact: Option<bool>,
    pub is_friend: Option<bool>,
    pub is_family: Option<bool>,
}

impl GeoPermissions {
    pub(crate) fn from_fields(fields: &RawFields) -> Option<Self> {
        let perms = Self {
            is_public: flag_of(fields, "ispublic"),
            is_contact: flag_of(fields, "iscontact"),
            is_friend: flag_of(fields, "isfriend"),
            is_family: flag_of(fields, "isfamily"),
        };
        (perms != Self::default()).then_some(perms)
    }
}

/// Who may comment on, or add notes and tags to, a photo
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Permissions {
    pub comment: Option<PermissionLevel>,
    pub add_meta: Option<PermissionLevel>,
}

impl Permissions {
    pub(crate) fn from_fields(fields: &RawFields) -> Option<Self> {
        let perms = Self {
            comment: level_of(fields, "permcomment"),
            add_meta: level_of(fields, "permaddmeta"),
        };
        (perms != Self::default()).then_some(perms)
    }
}

/// What the calling user may do with a photo
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Editability {
    pub can_comment: Option<bool>,
    pub can_add_meta: Option<bool>,
}

impl Editability {
    pub(crate) fn from_fields(fields: &RawFields) -> Option<Self> {
        let editability = Self {
            can_comment: flag_of(fields, "cancomment"),
            can_add_meta: flag_of(fields, "canaddmeta"),
        };
        (editability != Self::default()).then_some(editability)
    }
}

/// What the owner allows others to do with a photo
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Usage {
    pub can_download: Option<bool>,
    pub can_blog: Option<bool>,
    pub can_print: Option<bool>,
    pub can_share: Option<bool>,
}

impl Usage {
    pub(crate) fn from_fields(fields: &RawFields) -> Option<Self> {
        let usage = Self {
            can_download: flag_of(fields, "candownload"),
            can_blog: flag_of(fields, "canblog"),
            can_print: flag_of(fields, "canprint"),
            can_share: flag_of(fields, "canshare"),
        };
        (usage != Self::default()).then_some(usage)
    }
}

// Sub-mapping lookup shared by the accessors building these
pub(crate) fn section<'a>(fields: &'a RawFields, key: &str) -> Option<&'a RawFields> {
    fields.get(key).and_then(Value::as_object)
}
