/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::{Media, Set};

/// Position of a photo within a sequence: the photostream, a set or a user's favorites.
///
/// The ends of the sequence have no previous or next media.
#[derive(Debug, Clone)]
pub struct MediaContext {
    pub previous: Option<Media>,
    pub next: Option<Media>,
    /// Number of media in the sequence, when Flickr reports it
    pub count: Option<u64>,
    /// The set this context was requested for
    pub set: Option<Set>,
}

impl MediaContext {
    pub fn is_first(&self) -> bool {
        self.previous.is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}
