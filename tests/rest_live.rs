/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

// These talk to Flickr and need FLICKR_* credentials in the environment or a .env file
#[cfg(test)]
mod test {
    use crate::helpers;
    use dotenvy::dotenv;
    use flickr::rest::{Client, License, Media, Params, Person};

    #[tokio::test]
    #[ignore]
    async fn recent_photos() {
        dotenv().ok();
        let creds = helpers::get_read_only_auth_tokens().unwrap();
        let client = Client::new(creds).unwrap();
        let recent = Media::recent(client, Params::new().with("per_page", 10))
            .await
            .unwrap();
        for media in &recent {
            println!("{:?}: {:?}", media.id(), media.url());
        }
        assert!(recent.total().is_some());
    }

    #[tokio::test]
    #[ignore]
    async fn license_list() {
        dotenv().ok();
        let creds = helpers::get_read_only_auth_tokens().unwrap();
        let client = Client::new(creds).unwrap();
        let licenses = License::list(client).await.unwrap();
        assert!(!licenses.is_empty());
    }

    #[tokio::test]
    #[ignore]
    async fn authenticated_user_info() {
        dotenv().ok();
        let creds = helpers::get_full_auth_tokens().unwrap();
        let client = Client::new(creds).unwrap();
        let me = Person::test_login(client).await.unwrap();
        let info = me.get_info().await.unwrap();
        println!("User info: {:?}", info);
    }
}
