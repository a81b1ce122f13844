/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate flickr;

use anyhow::Result;
use dotenvy::dotenv;
use flickr::rest::{Client, Creds, Media, Params, SizeLabel};
use futures::{pin_mut, StreamExt};

// Prints the latest public uploads with their largest available size
async fn print_recent(client: Client) -> Result<()> {
    let recent = Media::recent(
        client,
        Params::new().with("per_page", 20).with("include_sizes", true),
    )
    .await?;

    println!(
        "Page {:?} of {:?}, {:?} photos and videos in total",
        recent.page(),
        recent.pages(),
        recent.total()
    );
    for media in &recent {
        let largest = media.largest_size().unwrap_or(SizeLabel::Medium500);
        println!(
            "{} [{}] {:?} {:?}",
            media.id().unwrap_or_default(),
            media.media_kind(),
            media.title(),
            media.source_url(largest)
        );
    }
    println!("{} of them are videos", recent.videos().len());
    Ok(())
}

// Walks every page of a tag search, stopping after `limit` results
async fn print_tagged(client: Client, tag: &str, limit: usize) -> Result<()> {
    let results = Media::search_all(
        client,
        Params::new().with("tags", tag).with("extras", &["owner_name", "date_taken"][..]),
    );

    pin_mut!(results);
    let mut seen = 0;
    while let Some(media) = results.next().await {
        let media = media?;
        println!(
            "{:?} by {:?} taken {:?}",
            media.title(),
            media.owner().and_then(|o| o.username()),
            media.taken_at()
        );
        seen += 1;
        if seen >= limit {
            break;
        }
    }
    Ok(())
}

// main
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    // The API key is the only required field for reading public data.
    let api_key = std::env::var("FLICKR_API_KEY")?;
    let client = Client::new(Creds::from_tokens(&api_key, None, None, None))?;

    print_recent(client.clone()).await?;
    print_tagged(client, "sunset", 50).await?;
    Ok(())
}
