/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate flickr;

use anyhow::{Result, bail};
use dotenvy::dotenv;
use flickr::rest::{
    Client, Creds, Media, Params, Set, Ticket, UploadOutcome, UploadParams, UploadSource,
};
use std::time::Duration;

// Waits for an async upload to be processed and returns the media id
async fn wait_for_ticket(client: Client, ticket_id: &str) -> Result<String> {
    for _ in 0..30 {
        let tickets = Ticket::check(client.clone(), &[ticket_id]).await?;
        if let Some(ticket) = tickets.first() {
            if ticket.has_failed() == Some(true) || ticket.is_invalid() == Some(true) {
                bail!("upload ticket {ticket_id} failed");
            }
            if let Some(media_id) = ticket.media_id() {
                return Ok(media_id);
            }
        }
        tokio::time::sleep(Duration::from_secs(2)).await;
    }
    bail!("upload ticket {ticket_id} is still pending")
}

// Adds the media to the set with the given title, creating the set when needed
async fn add_to_set(client: Client, title: &str, media_id: &str) -> Result<Set> {
    let sets = Set::list(client.clone(), Params::new()).await?;
    if let Some(set) = sets.iter().find(|s| s.title().as_deref() == Some(title)) {
        set.add_media(media_id).await?;
        return Ok(set.clone());
    }
    println!("Creating set {title}");
    Ok(Set::create(client, title, media_id, Some("Uploaded from flickr-rs")).await?)
}

// main
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(path), Some(set_title)) = (args.next(), args.next()) else {
        bail!("usage: upload_to_set <file> <set title>");
    };

    // Uploads act on behalf of a user so the OAuth access token is needed.
    // Obtaining it is left to the OAuth1 authorization flow.
    let api_key = std::env::var("FLICKR_API_KEY")?;
    let api_secret = std::env::var("FLICKR_API_SECRET")?;
    let access_token = std::env::var("FLICKR_ACCESS_TOKEN")?;
    let token_secret = std::env::var("FLICKR_ACCESS_SECRET")?;
    let client = Client::new(Creds::from_tokens(
        &api_key,
        Some(api_secret.as_str()),
        Some(access_token.as_str()),
        Some(token_secret.as_str()),
    ))?;

    let source = UploadSource::from_path(&path)?;
    let params = UploadParams::default()
        .with_title(source.file_name.clone())
        .with_tags(&["flickr-rs"])
        .with_visibility(false, false, false)
        .with_async(true);

    let media_id = match client.upload(source, params).await? {
        UploadOutcome::Media(id) => id,
        UploadOutcome::Ticket(ticket) => wait_for_ticket(client.clone(), &ticket).await?,
    };
    println!("Uploaded {path} as {media_id}");

    let set = add_to_set(client.clone(), &set_title, &media_id).await?;
    println!("Added to set {:?} ({:?})", set.title(), set.url());

    let media = Media::from_id(client, &media_id).await?;
    println!("{:?}", media.page_url());
    Ok(())
}
