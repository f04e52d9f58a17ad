/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::Client;
use crate::v2::envelope::is_empty_value;
use crate::v2::transport::Transport;
use async_stream::stream;
use futures::Stream;
use serde_json::Value;

pub const ENDPOINT_ACTIVITY: &str = "/activity";

// Offset for the next feed page, sent back as a number or a numeric string
fn earliest_ts(page: &Value) -> Option<i64> {
    match page.get("earliest_ts")? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

impl<T: Transport> Client<T> {
    /// Retrieves the authenticated user's activity feed.
    ///
    /// `offset_ts` pages backwards: only entries older than that unix timestamp are returned.
    pub async fn get_user_activity(&self, offset_ts: Option<i64>) -> Vec<Value> {
        let offset = offset_ts.map(|ts| ts.to_string());
        let params = match offset.as_deref() {
            Some(ts) => self.authed_params(&[("offset_ts", ts)]),
            None => self.authed_params(&[]),
        };
        self.fetch_list(ENDPOINT_ACTIVITY, params, "activity").await
    }

    /// Streams the whole activity feed, following `has_more`/`earliest_ts` from page to page
    pub fn user_activity_stream<'a>(&'a self) -> impl Stream<Item = Value> + use<'a, T> {
        stream! {
            let mut offset: Option<i64> = None;
            loop {
                let params = match offset {
                    Some(ts) => self.authed_params(&[("offset_ts", ts.to_string().as_str())]),
                    None => self.authed_params(&[]),
                };
                let mut page = match self.fetch(ENDPOINT_ACTIVITY, params, "").await {
                    Some(doc) => doc,
                    None => break,
                };

                if let Some(Value::Array(entries)) = page.get_mut("activity").map(Value::take) {
                    for entry in entries {
                        yield entry;
                    }
                }

                if page.get("has_more").is_none_or(is_empty_value) {
                    break;
                }
                match earliest_ts(&page) {
                    Some(ts) if Some(ts) != offset => offset = Some(ts),
                    _ => break,
                }
            }
        }
    }
}
