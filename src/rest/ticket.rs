/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::macros::flickr_object;
use crate::rest::parsers::{epoch, flag, non_empty_text, uint};
use crate::rest::{
    Client, Collection, FlickrError, FlickrObject, ObjectKind, Operation, RawFields,
    RequestBuilder, TicketStatus, list,
};
use chrono::{DateTime, Utc};

/// An asynchronous upload being processed
#[derive(Debug, Clone)]
pub struct Ticket {
    client: Option<Client>,
    fields: RawFields,
}

flickr_object!(Ticket, ObjectKind::Ticket);

impl Ticket {
    /// Status of the given upload tickets
    pub async fn check<S: AsRef<str>>(
        client: Client,
        ticket_ids: &[S],
    ) -> Result<Collection<Ticket>, FlickrError> {
        let ids: Vec<String> = ticket_ids.iter().map(|t| t.as_ref().to_string()).collect();
        list::fetch_list(
            &client,
            RequestBuilder::new(Operation::PhotosUploadCheckTickets).param("tickets", ids),
            "ticket",
        )
        .await
    }

    pub fn id(&self) -> Option<String> {
        self.raw("id").and_then(non_empty_text)
    }

    pub fn status(&self) -> Option<TicketStatus> {
        self.raw("complete")
            .and_then(uint)
            .and_then(|v| u8::try_from(v).ok())
            .and_then(|v| TicketStatus::try_from(v).ok())
    }

    pub fn is_complete(&self) -> Option<bool> {
        self.status().map(|s| s == TicketStatus::Complete)
    }

    pub fn has_failed(&self) -> Option<bool> {
        self.status().map(|s| s == TicketStatus::Failed)
    }

    /// Id of the uploaded media, once complete
    pub fn media_id(&self) -> Option<String> {
        self.raw("photoid").and_then(non_empty_text)
    }

    /// Set when the ticket id is not known
    pub fn is_invalid(&self) -> Option<bool> {
        self.raw("invalid").and_then(flag)
    }

    pub fn imported_at(&self) -> Option<DateTime<Utc>> {
        self.raw("imported").and_then(epoch)
    }
}
