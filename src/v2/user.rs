/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::http::{Method, RequestBody};
use crate::v2::parsers::from_empty_str_to_none;
use crate::v2::query::{ApiParams, QueryParams, endpoint_path, to_query_params};
use crate::v2::transport::Transport;
use crate::v2::{Client, Collection, Project, Wip};
use chrono::{DateTime, Utc};
use futures::Stream;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

pub const ENDPOINT_USERS: &str = "/users";

/// Holds information returned from the Users API.
///
/// See [Behance API Docs](https://www.behance.net/dev/api/endpoints/2) for more
/// details on the individual fields. Fields not modeled here end up in `extra`.
#[derive(Deserialize, Debug, Clone)]
pub struct User {
    pub id: u64,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub display_name: String,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub city: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub state: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub country: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub location: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub company: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub occupation: Option<String>,

    #[serde(default)]
    pub url: String,

    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_on: Option<DateTime<Utc>>,

    /// Creative fields the user works in
    #[serde(default)]
    pub fields: Vec<String>,

    /// Avatar urls keyed by pixel size
    #[serde(default)]
    pub images: BTreeMap<String, String>,

    #[serde(default)]
    pub stats: Option<UserStats>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct UserStats {
    #[serde(default)]
    pub followers: u64,

    #[serde(default)]
    pub following: u64,

    #[serde(default)]
    pub appreciations: u64,

    #[serde(default)]
    pub views: u64,

    #[serde(default)]
    pub comments: u64,
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "username: {}, id: {}", self.username, self.id)
    }
}

impl<T: Transport> Client<T> {
    /// Retrieves a full User, based on either their ID or username
    pub async fn get_user(&self, id_or_username: &str) -> Option<User> {
        let endpoint = endpoint_path(ENDPOINT_USERS, &[id_or_username]);
        self.fetch_one(&endpoint, QueryParams::new(), "user").await
    }

    /// Search users, by these `params`. Empty params returns featured users.
    pub async fn search_users(&self, params: &ApiParams<'_>) -> Vec<User> {
        self.fetch_list(ENDPOINT_USERS, to_query_params(params), "users")
            .await
    }

    /// Retrieves a list of the user's projects, `params` such as `per_page` and `page` pass through
    pub async fn get_user_projects(&self, id_or_username: &str, params: &ApiParams<'_>) -> Vec<Project> {
        let endpoint = endpoint_path(ENDPOINT_USERS, &[id_or_username, "projects"]);
        self.fetch_list(&endpoint, to_query_params(params), "projects")
            .await
    }

    /// Streams all of the user's projects, one page at a time
    pub fn user_projects_stream<'a>(
        &'a self,
        id_or_username: &str,
        params: &ApiParams<'_>,
    ) -> impl Stream<Item = Project> + use<'a, T> {
        let endpoint = endpoint_path(ENDPOINT_USERS, &[id_or_username, "projects"]);
        self.paged(endpoint, "projects", to_query_params(params))
    }

    /// Retrieves the projects the user has appreciated
    pub async fn get_user_appreciations(&self, id_or_username: &str) -> Vec<Value> {
        let endpoint = endpoint_path(ENDPOINT_USERS, &[id_or_username, "appreciations"]);
        self.fetch_list(&endpoint, QueryParams::new(), "appreciations")
            .await
    }

    /// Retrieves the users the given user follows
    pub async fn get_user_follows(&self, id_or_username: &str, params: &ApiParams<'_>) -> Vec<User> {
        let endpoint = endpoint_path(ENDPOINT_USERS, &[id_or_username, "following"]);
        self.fetch_list(&endpoint, to_query_params(params), "following")
            .await
    }

    /// Retrieves the users following the given user. Sends the access token when one is set.
    pub async fn get_user_followers(&self, id_or_username: &str, params: &ApiParams<'_>) -> Vec<User> {
        let endpoint = endpoint_path(ENDPOINT_USERS, &[id_or_username, "followers"]);
        self.fetch_list(&endpoint, self.authed_params(params), "followers")
            .await
    }

    /// Retrieves the users in the given user's feedback circle
    pub async fn get_user_feedback_circle(
        &self,
        id_or_username: &str,
        params: &ApiParams<'_>,
    ) -> Vec<User> {
        let endpoint = endpoint_path(ENDPOINT_USERS, &[id_or_username, "feedback"]);
        self.fetch_list(&endpoint, to_query_params(params), "feedback_circle")
            .await
    }

    /// Retrieves the user's works in progress
    pub async fn get_user_wips(&self, id_or_username: &str, params: &ApiParams<'_>) -> Vec<Wip> {
        let endpoint = endpoint_path(ENDPOINT_USERS, &[id_or_username, "wips"]);
        self.fetch_list(&endpoint, to_query_params(params), "wips")
            .await
    }

    pub async fn get_user_collections(&self, id_or_username: &str) -> Vec<Collection> {
        let endpoint = endpoint_path(ENDPOINT_USERS, &[id_or_username, "collections"]);
        self.fetch_list(&endpoint, QueryParams::new(), "collections")
            .await
    }

    /// Retrieves the user's statistics
    pub async fn get_user_stats(&self, id_or_username: &str) -> Option<Value> {
        let endpoint = endpoint_path(ENDPOINT_USERS, &[id_or_username, "stats"]);
        self.fetch(&endpoint, QueryParams::new(), "stats").await
    }

    pub async fn follow_user(&self, id_or_username: &str) -> Option<Value> {
        let endpoint = endpoint_path(ENDPOINT_USERS, &[id_or_username, "follow"]);
        self.send(Method::Post, &endpoint, RequestBody::None, &[])
            .await
    }

    pub async fn unfollow_user(&self, id_or_username: &str) -> Option<Value> {
        let endpoint = endpoint_path(ENDPOINT_USERS, &[id_or_username, "follow"]);
        self.send(Method::Delete, &endpoint, RequestBody::None, &[])
            .await
    }
}
