/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use std::collections::BTreeMap;

/// Query string key the application identifier is sent under
pub const CLIENT_ID_KEY: &str = "client_id";

/// This can be filter types as well as other parameters the specific API expects
pub type ApiParams<'a> = [(&'a str, &'a str)];

/// Key ordered query parameters. Later inserts of the same key replace earlier ones.
pub type QueryParams = BTreeMap<String, String>;

/// Collects the caller's parameters into a [`QueryParams`] map
pub fn to_query_params(params: &ApiParams<'_>) -> QueryParams {
    params
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Builds `api_root + endpoint + "?" + query`, always carrying the application's `client_id`.
///
/// The client id is inserted last so a caller supplied `client_id` never survives and the key
/// shows up exactly once.
pub fn build_url(api_root: &str, endpoint: &str, params: &ApiParams<'_>, client_id: &str) -> String {
    build_url_from_map(api_root, endpoint, to_query_params(params), client_id)
}

/// Same as [`build_url`] for parameters that were already collected into a map
pub fn build_url_from_map(
    api_root: &str,
    endpoint: &str,
    mut params: QueryParams,
    client_id: &str,
) -> String {
    params.insert(CLIENT_ID_KEY.to_string(), client_id.to_string());
    format!("{}{}?{}", api_root, endpoint, encode_pairs(&params))
}

/// Standard `application/x-www-form-urlencoded` serialization of the pairs
pub fn encode_pairs(params: &QueryParams) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter())
        .finish()
}

/// Joins path segments onto an endpoint constant, percent-encoding each segment
pub fn endpoint_path(base: &str, segments: &[&str]) -> String {
    segments.iter().fold(base.to_string(), |mut path, segment| {
        path.push('/');
        path.push_str(&urlencoding::encode(segment));
        path
    })
}
