/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::Client;
use crate::v2::query::QueryParams;
use crate::v2::transport::Transport;
use serde_json::Value;

pub const ENDPOINT_FIELDS: &str = "/fields";

impl<T: Transport> Client<T> {
    /// Retrieves the creative fields, both the popular ones and the full list
    pub async fn get_fields(&self) -> Option<Value> {
        self.fetch(ENDPOINT_FIELDS, QueryParams::new(), "").await
    }
}
