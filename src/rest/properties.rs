/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use num_enum::TryFromPrimitive;
use serde::Serialize;
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Kinds of objects the mapper can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum ObjectKind {
    Photo,
    Video,
    Set,
    User,
    Comment,
    Ticket,
    License,
    MediaCount,
    Note,
    Tag,
    Location,
    Size,
    Exif,
}

/// Discriminates the two kinds of media the API returns side by side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Photo,
    Video,
}

impl From<MediaKind> for ObjectKind {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Photo => ObjectKind::Photo,
            MediaKind::Video => ObjectKind::Video,
        }
    }
}

/// Value of the `media` request parameter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum MediaFilter {
    #[default]
    All,
    Photos,
    Videos,
}

impl MediaFilter {
    /// Whether media of the given kind passes this filter
    pub fn accepts(&self, kind: MediaKind) -> bool {
        match self {
            MediaFilter::All => true,
            MediaFilter::Photos => kind == MediaKind::Photo,
            MediaFilter::Videos => kind == MediaKind::Video,
        }
    }
}

/// The fixed set of sizes Flickr renders for every photo.
///
/// The string form is the label returned by `flickr.photos.getSizes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, IntoStaticStr)]
pub enum SizeLabel {
    #[strum(to_string = "Square", serialize = "Square 75")]
    Square75,
    #[strum(to_string = "Large Square", serialize = "Square 150")]
    Square150,
    #[strum(to_string = "Thumbnail")]
    Thumbnail,
    #[strum(to_string = "Small", serialize = "Small 240")]
    Small240,
    #[strum(to_string = "Small 320")]
    Small320,
    #[strum(to_string = "Small 400")]
    Small400,
    #[strum(to_string = "Medium", serialize = "Medium 500")]
    Medium500,
    #[strum(to_string = "Medium 640")]
    Medium640,
    #[strum(to_string = "Medium 800")]
    Medium800,
    #[strum(to_string = "Large", serialize = "Large 1024")]
    Large1024,
    #[strum(to_string = "Large 1600")]
    Large1600,
    #[strum(to_string = "Large 2048")]
    Large2048,
    #[strum(to_string = "Original")]
    Original,
}

impl SizeLabel {
    /// Every size, smallest first
    pub const ALL: [SizeLabel; 13] = [
        SizeLabel::Square75,
        SizeLabel::Square150,
        SizeLabel::Thumbnail,
        SizeLabel::Small240,
        SizeLabel::Small320,
        SizeLabel::Small400,
        SizeLabel::Medium500,
        SizeLabel::Medium640,
        SizeLabel::Medium800,
        SizeLabel::Large1024,
        SizeLabel::Large1600,
        SizeLabel::Large2048,
        SizeLabel::Original,
    ];

    /// Abbreviation used by the `url_*`, `width_*` and `height_*` extras
    pub fn abbreviation(&self) -> &'static str {
        match self {
            SizeLabel::Square75 => "sq",
            SizeLabel::Square150 => "q",
            SizeLabel::Thumbnail => "t",
            SizeLabel::Small240 => "s",
            SizeLabel::Small320 => "n",
            SizeLabel::Small400 => "w",
            SizeLabel::Medium500 => "m",
            SizeLabel::Medium640 => "z",
            SizeLabel::Medium800 => "c",
            SizeLabel::Large1024 => "l",
            SizeLabel::Large1600 => "h",
            SizeLabel::Large2048 => "k",
            SizeLabel::Original => "o",
        }
    }

    /// Suffix appended to the static file name. Medium 500 is the unsuffixed default.
    pub fn url_suffix(&self) -> Option<&'static str> {
        match self {
            SizeLabel::Square75 => Some("s"),
            SizeLabel::Square150 => Some("q"),
            SizeLabel::Thumbnail => Some("t"),
            SizeLabel::Small240 => Some("m"),
            SizeLabel::Small320 => Some("n"),
            SizeLabel::Small400 => Some("w"),
            SizeLabel::Medium500 => None,
            SizeLabel::Medium640 => Some("z"),
            SizeLabel::Medium800 => Some("c"),
            SizeLabel::Large1024 => Some("b"),
            SizeLabel::Large1600 => Some("h"),
            SizeLabel::Large2048 => Some("k"),
            SizeLabel::Original => Some("o"),
        }
    }

    /// Name of the extras field carrying the url for this size
    pub fn url_extra(&self) -> String {
        format!("url_{}", self.abbreviation())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoStaticStr)]
#[repr(u8)]
pub enum SafetyLevel {
    Safe = 1,
    Moderate = 2,
    Restricted = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoStaticStr)]
#[repr(u8)]
pub enum ContentType {
    Photo = 1,
    Screenshot = 2,
    Other = 3,
}

/// Who may comment on or add meta information to a photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoStaticStr)]
#[repr(u8)]
pub enum PermissionLevel {
    Nobody = 0,
    FriendsAndFamily = 1,
    Contacts = 2,
    Everybody = 3,
}

/// State of an asynchronous upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoStaticStr)]
#[repr(u8)]
pub enum TicketStatus {
    Pending = 0,
    Complete = 1,
    Failed = 2,
}

/// Accuracy of a photo's "taken" date
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoStaticStr)]
#[repr(u8)]
pub enum DateGranularity {
    Second = 0,
    Month = 4,
    Year = 6,
    Circa = 8,
}
