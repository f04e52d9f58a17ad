/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::http::{CONTENT_TYPE_MULTIPART, FILE_MARKER, Method, RequestBody};
use crate::v2::parsers::from_tag_list;
use crate::v2::query::{ApiParams, QueryParams, endpoint_path, to_query_params};
use crate::v2::transport::Transport;
use crate::v2::{Client, User};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

pub const ENDPOINT_WIPS: &str = "/wips";

/// Holds information returned from the Works in Progress API.
#[derive(Deserialize, Debug, Clone)]
pub struct Wip {
    pub id: u64,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub url: String,

    #[serde(default, deserialize_with = "from_tag_list")]
    pub tags: Vec<String>,

    #[serde(default)]
    pub owner: Option<User>,

    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_on: Option<DateTime<Utc>>,

    /// Revisions as returned by the API, keyed by revision id
    #[serde(default)]
    pub revisions: Value,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

// Multipart body shared by WIP creation and new revisions
fn upload_body(image_path: &Path, title: &str, tags: &[&str], description: &str) -> RequestBody {
    let image = format!("{}{}", FILE_MARKER, image_path.display());
    let tags = tags.join("|");
    RequestBody::form(&[
        ("tags", tags.as_str()),
        ("image", image.as_str()),
        ("title", title),
        ("description", description),
    ])
}

impl<T: Transport> Client<T> {
    /// Retrieves a full Work In Progress, by ID
    pub async fn get_work_in_progress(&self, id: &str) -> Option<Wip> {
        let endpoint = endpoint_path(ENDPOINT_WIPS, &[id]);
        self.fetch_one(&endpoint, QueryParams::new(), "wip").await
    }

    /// Search works in progress, by these `params`. Empty params returns featured ones.
    pub async fn search_wips(&self, params: &ApiParams<'_>) -> Vec<Wip> {
        self.fetch_list(ENDPOINT_WIPS, to_query_params(params), "wips")
            .await
    }

    /// Creates a new Work in Progress from the image at `image_path`.
    ///
    /// The default transport reads the image with a blocking read while building the request,
    /// keep large uploads off latency sensitive executor threads.
    pub async fn create_user_wip(
        &self,
        image_path: &Path,
        title: &str,
        tags: &[&str],
        description: &str,
    ) -> Option<Value> {
        self.send(
            Method::Post,
            ENDPOINT_WIPS,
            upload_body(image_path, title, tags, description),
            &[("Content-Type", CONTENT_TYPE_MULTIPART)],
        )
        .await
    }

    /// Adds a revision to an existing Work in Progress
    pub async fn create_user_wip_revision(
        &self,
        wip_id: &str,
        image_path: &Path,
        title: &str,
        tags: &[&str],
        description: &str,
    ) -> Option<Value> {
        let endpoint = endpoint_path(ENDPOINT_WIPS, &[wip_id]);
        self.send(
            Method::Post,
            &endpoint,
            upload_body(image_path, title, tags, description),
            &[("Content-Type", CONTENT_TYPE_MULTIPART)],
        )
        .await
    }

    pub async fn update_user_wip_title(&self, wip_id: &str, title: &str) -> Option<Value> {
        let endpoint = endpoint_path(ENDPOINT_WIPS, &[wip_id]);
        self.send(Method::Put, &endpoint, RequestBody::form(&[("title", title)]), &[])
            .await
    }

    pub async fn update_user_wip_revision_description(
        &self,
        wip_id: &str,
        revision_id: &str,
        description: &str,
    ) -> Option<Value> {
        let endpoint = endpoint_path(ENDPOINT_WIPS, &[wip_id, revision_id]);
        self.send(
            Method::Put,
            &endpoint,
            RequestBody::form(&[("description", description)]),
            &[],
        )
        .await
    }

    pub async fn update_user_wip_revision_tags(
        &self,
        wip_id: &str,
        revision_id: &str,
        tags: &[&str],
    ) -> Option<Value> {
        let endpoint = endpoint_path(ENDPOINT_WIPS, &[wip_id, revision_id]);
        let tags = tags.join("|");
        self.send(Method::Put, &endpoint, RequestBody::form(&[("tags", tags.as_str())]), &[])
            .await
    }

    pub async fn post_wip_comment(&self, wip_id: &str, revision_id: &str, comment: &str) -> Option<Value> {
        let endpoint = endpoint_path(ENDPOINT_WIPS, &[wip_id, revision_id, "comments"]);
        self.send(
            Method::Post,
            &endpoint,
            RequestBody::form(&[("comment", comment)]),
            &[],
        )
        .await
    }

    pub async fn delete_user_wip(&self, wip_id: &str) -> Option<Value> {
        let endpoint = endpoint_path(ENDPOINT_WIPS, &[wip_id]);
        self.send(Method::Delete, &endpoint, RequestBody::None, &[])
            .await
    }

    pub async fn delete_user_wip_revision(&self, wip_id: &str, revision_id: &str) -> Option<Value> {
        let endpoint = endpoint_path(ENDPOINT_WIPS, &[wip_id, revision_id]);
        self.send(Method::Delete, &endpoint, RequestBody::None, &[])
            .await
    }
}
