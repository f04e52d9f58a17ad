/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate behance;

use anyhow::Result;
use behance::v2::{Client, ClientConfig, Scope};
use dotenvy::dotenv;
use futures::{StreamExt, pin_mut};
use std::io::BufRead;

// Walks through the authorization code flow on the command line and then reads a few entries
// of the authorized user's activity feed.
// NOTE: The redirect uri must match the one registered for the application.
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let client_id = std::env::var("BEHANCE_CLIENT_ID")?;
    let client_secret = std::env::var("BEHANCE_CLIENT_SECRET")?;
    let redirect_uri = std::env::var("BEHANCE_REDIRECT_URI")?;

    let config = ClientConfig::new(&client_id)
        .with_client_secret(&client_secret)
        .with_debug(true);
    let mut client = Client::new(config)?;

    let redirect = client.authorization_redirect(
        &redirect_uri,
        &[Scope::ActivityRead, Scope::ProjectRead],
        None,
    );
    println!("Open this url and authorize the application:\n{}", redirect.location);
    println!("Paste the `code` query parameter from the redirect:");

    let mut code = String::new();
    std::io::stdin().lock().read_line(&mut code)?;

    let token = client
        .exchange_code_for_token(code.trim(), &redirect_uri, None, None)
        .await?;
    println!("Got access token ({} chars)", token.len());
    if let Some(user) = client.authenticated_user() {
        println!("Authorized as: {}", user["username"]);
    }

    // The feed is paged by timestamp, only look at the most recent entries
    let activity = client.user_activity_stream().take(10);
    pin_mut!(activity);
    while let Some(entry) = activity.next().await {
        println!("{}", entry);
    }
    Ok(())
}
