/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::http::{Method, RequestBody};
use crate::v2::parsers::{from_flag, from_owner_list};
use crate::v2::query::{ApiParams, QueryParams, endpoint_path, to_query_params};
use crate::v2::transport::Transport;
use crate::v2::{Client, Project, User};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

pub const ENDPOINT_COLLECTIONS: &str = "/collections";

/// Holds information returned from the Collections API.
#[derive(Deserialize, Debug, Clone)]
pub struct Collection {
    pub id: u64,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub url: String,

    #[serde(default, deserialize_with = "from_flag")]
    pub public: bool,

    #[serde(default, deserialize_with = "from_owner_list")]
    pub owners: Vec<User>,

    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_on: Option<DateTime<Utc>>,

    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub modified_on: Option<DateTime<Utc>>,

    #[serde(default)]
    pub stats: Option<Value>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl<T: Transport> Client<T> {
    /// Retrieves a collection, by ID
    pub async fn get_collection(&self, id: &str) -> Option<Collection> {
        let endpoint = endpoint_path(ENDPOINT_COLLECTIONS, &[id]);
        self.fetch_one(&endpoint, QueryParams::new(), "collection")
            .await
    }

    /// Search collections, by these `params`. Empty params returns featured collections.
    pub async fn search_collections(&self, params: &ApiParams<'_>) -> Vec<Collection> {
        self.fetch_list(ENDPOINT_COLLECTIONS, to_query_params(params), "collections")
            .await
    }

    pub async fn get_collection_projects(&self, id: &str) -> Vec<Project> {
        let endpoint = endpoint_path(ENDPOINT_COLLECTIONS, &[id, "projects"]);
        self.fetch_list(&endpoint, QueryParams::new(), "projects")
            .await
    }

    /// Creates a new collection, optionally seeded with projects
    pub async fn create_collection(&self, title: &str, project_ids: &[&str]) -> Option<Value> {
        let projects = project_ids.join("|");
        let mut fields = vec![("title", title)];
        if !project_ids.is_empty() {
            fields.push(("projects", projects.as_str()));
        }
        self.send(Method::Post, ENDPOINT_COLLECTIONS, RequestBody::form(&fields), &[])
            .await
    }

    /// Renames a collection
    pub async fn update_collection(&self, id: &str, title: &str) -> Option<Value> {
        let endpoint = endpoint_path(ENDPOINT_COLLECTIONS, &[id]);
        self.send(Method::Put, &endpoint, RequestBody::form(&[("title", title)]), &[])
            .await
    }

    pub async fn delete_collection(&self, id: &str) -> Option<Value> {
        let endpoint = endpoint_path(ENDPOINT_COLLECTIONS, &[id]);
        self.send(Method::Delete, &endpoint, RequestBody::None, &[])
            .await
    }

    pub async fn add_projects_to_collection(&self, id: &str, project_ids: &[&str]) -> Option<Value> {
        let endpoint = endpoint_path(ENDPOINT_COLLECTIONS, &[id, "projects"]);
        let projects = project_ids.join("|");
        self.send(
            Method::Post,
            &endpoint,
            RequestBody::form(&[("projects", projects.as_str())]),
            &[],
        )
        .await
    }

    pub async fn remove_project_from_collection(&self, id: &str, project_id: &str) -> Option<Value> {
        let endpoint = endpoint_path(ENDPOINT_COLLECTIONS, &[id, "projects", project_id]);
        self.send(Method::Delete, &endpoint, RequestBody::None, &[])
            .await
    }

    pub async fn follow_collection(&self, id: &str) -> Option<Value> {
        let endpoint = endpoint_path(ENDPOINT_COLLECTIONS, &[id, "follow"]);
        self.send(Method::Post, &endpoint, RequestBody::None, &[])
            .await
    }

    pub async fn unfollow_collection(&self, id: &str) -> Option<Value> {
        let endpoint = endpoint_path(ENDPOINT_COLLECTIONS, &[id, "follow"]);
        self.send(Method::Delete, &endpoint, RequestBody::None, &[])
            .await
    }
}
