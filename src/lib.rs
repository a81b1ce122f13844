/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Flickr
//!
//! This library was created for working with the Flickr REST API.
//!
//! For further details on the API refer to the [Flickr API Docs](https://www.flickr.com/services/api/)
//!
//! ## Features
//!
//! - Photos and videos
//!     - Search, recent, interesting, untagged, geotagged lists
//!     - Info, sizes, EXIF, favorites, comments, notes, tags and location
//!     - Editing meta data, dates, permissions, licenses and safety levels
//! - Users
//!     - Lookup by id, email or username
//!     - Photostreams, favorites and sets
//! - Sets (photosets)
//!     - Create, edit, reorder and delete
//!     - List the photos and videos contained in a set
//! - Uploads, synchronous or ticketed, and replacing existing photos
//! - Lower level interface calling any method by name or alias
//!
//! Responses are kept as returned by Flickr. Typed accessors read from them on demand, returning
//! `None` for anything missing or malformed.
//!
//! *Flickr uses OAuth1 for calls made on behalf of a user. This library handles the request
//! signing. Getting the Access Token/Secret is left up to the consumer of this library*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! flickr = "0.3.0"
//! ```
//!
//! ## Usage
//!
//! **You will need to acquire an API key/secret from Flickr prior to using the API**
//!
//! ```rust,no_run
//! use flickr::rest::{Client, Creds, Media, Params, Person};
//! use futures::{pin_mut, StreamExt};
//!
//! async fn titles_of_sunsets(
//!     api_key: &str,
//!     username: &str,
//! ) -> anyhow::Result<Vec<String>> {
//!     // Public data only needs the API key
//!     let client = Client::new(Creds::from_tokens(api_key, None, None, None))?;
//!
//!     let person = Person::find_by_username(client.clone(), username).await?;
//!     let params = Params::new()
//!         .with("user_id", person.id().unwrap_or_default())
//!         .with("tags", "sunset")
//!         .with("extras", ["date_taken", "url_l"]);
//!
//!     // Walks every page of the results
//!     let results = Media::search_all(client, params);
//!     pin_mut!(results);
//!     let mut titles = Vec::new();
//!     while let Some(media) = results.next().await {
//!         if let Some(title) = media?.title() {
//!             titles.push(title);
//!         }
//!     }
//!     Ok(titles)
//! }
//! ```
//!
pub mod rest;
