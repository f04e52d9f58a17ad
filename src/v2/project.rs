/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::http::{Method, RequestBody};
use crate::v2::parsers::{from_empty_str_to_none, from_flag, from_owner_list};
use crate::v2::query::{ApiParams, QueryParams, endpoint_path, to_query_params};
use crate::v2::transport::Transport;
use crate::v2::{Client, User};
use chrono::{DateTime, Utc};
use futures::Stream;
use serde::Deserialize;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

pub const ENDPOINT_PROJECTS: &str = "/projects";

/// Holds information returned from the Projects API.
///
/// See [Behance API Docs](https://www.behance.net/dev/api/endpoints/1) for more
/// details on the individual fields. Fields not modeled here end up in `extra`.
#[derive(Deserialize, Debug, Clone)]
pub struct Project {
    pub id: u64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub url: String,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub privacy: Option<String>,

    /// Creative fields the project is listed under
    #[serde(default)]
    pub fields: Vec<String>,

    /// Cover image urls keyed by pixel width
    #[serde(default)]
    pub covers: BTreeMap<String, String>,

    #[serde(default, deserialize_with = "from_flag")]
    pub mature_content: bool,

    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub published_on: Option<DateTime<Utc>>,

    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_on: Option<DateTime<Utc>>,

    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub modified_on: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "from_owner_list")]
    pub owners: Vec<User>,

    #[serde(default)]
    pub stats: Option<ProjectStats>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ProjectStats {
    #[serde(default)]
    pub views: u64,

    #[serde(default)]
    pub appreciations: u64,

    #[serde(default)]
    pub comments: u64,
}

/// A comment left on a project
#[derive(Deserialize, Debug, Clone)]
pub struct Comment {
    #[serde(default)]
    pub user: Option<User>,

    #[serde(default)]
    pub comment: String,

    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_on: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Project {}

impl Hash for Project {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.id.hash(state);
    }
}

impl PartialOrd for Project {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Project {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl std::fmt::Display for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "name: {}, id: {}", self.name, self.id)
    }
}

impl<T: Transport> Client<T> {
    /// Retrieves a full Project, by ID
    pub async fn get_project(&self, id: &str) -> Option<Project> {
        let endpoint = endpoint_path(ENDPOINT_PROJECTS, &[id]);
        self.fetch_one(&endpoint, QueryParams::new(), "project").await
    }

    /// Retrieves a project's comments
    pub async fn get_project_comments(&self, id: &str) -> Vec<Comment> {
        let endpoint = endpoint_path(ENDPOINT_PROJECTS, &[id, "comments"]);
        self.fetch_list(&endpoint, QueryParams::new(), "comments")
            .await
    }

    /// Search projects, by these `params`. Empty params returns featured projects.
    ///
    /// ```rust,no_run
    /// # use behance::v2::{Client, SortMethod, TimeFilter};
    /// # async fn f(client: Client) {
    /// let sort: &str = SortMethod::Appreciations.into();
    /// let time: &str = TimeFilter::Week.into();
    /// let params = [("sort", sort), ("time", time), ("per_page", "5")];
    /// let projects = client.search_projects(&params).await;
    /// # }
    /// ```
    pub async fn search_projects(&self, params: &ApiParams<'_>) -> Vec<Project> {
        self.fetch_list(ENDPOINT_PROJECTS, to_query_params(params), "projects")
            .await
    }

    /// Streams every project matching `params`, one page at a time
    pub fn search_projects_stream<'a>(
        &'a self,
        params: &ApiParams<'_>,
    ) -> impl Stream<Item = Project> + use<'a, T> {
        self.paged(ENDPOINT_PROJECTS.to_string(), "projects", to_query_params(params))
    }

    /// Increments the project's view counter, returns the user's appreciation info for it
    pub async fn view_project(&self, id: &str) -> Option<Value> {
        let endpoint = endpoint_path(ENDPOINT_PROJECTS, &[id, "view"]);
        self.send(Method::Post, &endpoint, RequestBody::None, &[])
            .await
    }

    pub async fn appreciate_project(&self, id: &str) -> Option<Value> {
        let endpoint = endpoint_path(ENDPOINT_PROJECTS, &[id, "appreciate"]);
        self.send(Method::Post, &endpoint, RequestBody::None, &[])
            .await
    }

    pub async fn post_project_comment(&self, id: &str, comment: &str) -> Option<Value> {
        let endpoint = endpoint_path(ENDPOINT_PROJECTS, &[id, "comments"]);
        self.send(
            Method::Post,
            &endpoint,
            RequestBody::form(&[("comment", comment)]),
            &[],
        )
        .await
    }
}
