/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

// Implements FlickrObject for a `{ client: Option<Client>, fields: RawFields }` struct
macro_rules! flickr_object {
    ( $t:ident, $kind:expr ) => {
        impl $crate::rest::FlickrObject for $t {
            fn from_fields(
                fields: $crate::rest::RawFields,
                client: Option<$crate::rest::Client>,
            ) -> Self {
                Self { client, fields }
            }

            fn kind(&self) -> $crate::rest::ObjectKind {
                $kind
            }

            fn fields(&self) -> &$crate::rest::RawFields {
                &self.fields
            }

            fn client(&self) -> Option<&$crate::rest::Client> {
                self.client.as_ref()
            }
        }

        $crate::rest::macros::raw_index!($t);
    };
}

// `object["key"]` passthrough, yielding null for absent keys, and equality on the raw fields
macro_rules! raw_index {
    ( $t:ident ) => {
        impl std::ops::Index<&str> for $t {
            type Output = serde_json::Value;

            fn index(&self, key: &str) -> &Self::Output {
                self.fields.get(key).unwrap_or(&$crate::rest::fields::NULL)
            }
        }

        impl PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                self.fields == other.fields
            }
        }
    };
}

pub(crate) use {flickr_object, raw_index};
