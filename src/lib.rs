/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Behance
//!
//! This Behance library was created for working with the Behance API v2 interface.
//!
//! For further details on the Rest API refer to the [Behance API Docs](https://www.behance.net/dev/api/endpoints/)
//!
//! ## Features
//!
//! - Projects
//!     - Search, comments, views and appreciations
//! - Users
//!     - Profile, projects, followers/following, feedback circle, stats
//! - Works in Progress
//!     - Search, upload new ones and revisions, edit and delete them
//! - Collections
//!     - Search, create, edit and manage the projects in them
//! - Activity feed and creative fields
//! - OAuth2 authorization code exchange
//! - Lower level interface for handling the raw communication
//!
//! *Resource calls never fail. Anything that goes wrong comes back as `None` or an empty list,
//! turn on [`v2::ClientConfig::with_debug`] to get the failures logged.*
//!
//! *If you want to use this library for more that is currently implemented, the
//! [`v2::ApiClient`] is a way to make request/responses in a more direct way*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! behance = "0.1.0"
//! ```
//!
//! ## Usage
//!
//! **You will need to register an application with Behance to get a client id**
//!
//! ```rust,no_run
//! use behance::v2::{Client, ClientConfig, Scope, BehanceError};
//! use futures::{pin_mut, StreamExt};
//!
//!async fn print_portfolio(client_id: &str, username: &str) -> Result<(), BehanceError> {
//!    let client = Client::new(ClientConfig::new(client_id))?;
//!
//!    // Public profile information
//!    if let Some(user) = client.get_user(username).await {
//!        println!("{}", user);
//!    }
//!
//!    // Every project of the user, fetched page by page
//!    let projects = client.user_projects_stream(username, &[]);
//!    pin_mut!(projects);
//!    while let Some(project) = projects.next().await {
//!        println!("{}", project);
//!    }
//!    Ok(())
//!}
//!
//!async fn authorize(
//!    client_id: &str,
//!    client_secret: &str,
//!    code: &str,
//!) -> Result<String, BehanceError> {
//!    let mut client = Client::new(ClientConfig::new(client_id).with_client_secret(client_secret))?;
//!
//!    // Send the user's browser here first, the code comes back on the redirect uri
//!    let redirect = client.authorization_redirect(
//!        "https://example.com/callback",
//!        &[Scope::ProjectRead, Scope::CollectionRead],
//!        None,
//!    );
//!    println!("Redirect to {}", redirect.location);
//!
//!    client
//!        .exchange_code_for_token(code, "https://example.com/callback", None, None)
//!        .await
//!}
//! ```
//!
pub mod v2;
