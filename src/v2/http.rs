/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Requests and raw responses described as plain data.
//!
//! A [`RequestSpec`] is what the caller asks for. [`RequestSpec::prepare`] applies the per verb
//! body encoding rules and default headers, producing the [`PreparedRequest`] a
//! [`Transport`](crate::v2::Transport) puts on the wire. The transport hands back a
//! [`RawTransportResponse`] which [`extract_body`] and [`classify_status`] turn into a body or
//! an error.

use crate::v2::errors::BehanceError;
use crate::v2::query::{QueryParams, encode_pairs};
use bytes::Bytes;
use std::path::PathBuf;
use std::str::FromStr;
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Leading marker on a multipart field value that makes it a file attachment
pub const FILE_MARKER: char = '@';

pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";
pub const CONTENT_TYPE_MULTIPART: &str = "multipart/form-data";

const HEADER_BOUNDARY: &[u8] = b"\r\n\r\n";
const CONTINUE_STATUS_LINE: &[u8] = b"HTTP/1.1 100 Continue";

/// The verbs the API is called with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Body of an outgoing request before encoding
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    None,
    /// Sent verbatim
    Text(String),
    /// Flat field map, form encoded or turned into multipart parts
    Form(QueryParams),
}

impl RequestBody {
    /// Builds a form body from string pairs
    pub fn form(fields: &[(&str, &str)]) -> Self {
        RequestBody::Form(
            fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

/// A single request as asked for by the caller
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub method: Method,
    pub url: String,
    pub body: RequestBody,
    pub headers: Vec<(String, String)>,
}

impl RequestSpec {
    pub fn new(method: Method, url: &str) -> Self {
        Self {
            method,
            url: url.to_string(),
            body: RequestBody::None,
            headers: Vec::new(),
        }
    }

    /// Parses the verb, failing with [`BehanceError::UnsupportedMethod`] for anything but
    /// GET, POST, PUT and DELETE.
    pub fn from_verb(verb: &str, url: &str) -> Result<Self, BehanceError> {
        let method = Method::from_str(verb)
            .map_err(|_| BehanceError::UnsupportedMethod(verb.to_uppercase()))?;
        Ok(Self::new(method, url))
    }

    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Applies default headers and encodes the body the way this verb expects
    pub fn prepare(self) -> PreparedRequest {
        let mut headers = default_headers();
        for (name, value) in self.headers {
            set_header(&mut headers, &name, value);
        }

        let multipart = header_value(&headers, "Content-Type")
            .is_some_and(|v| v.to_ascii_lowercase().starts_with(CONTENT_TYPE_MULTIPART));

        let body = match (self.method, self.body) {
            (Method::Get, _) => PreparedBody::Empty,
            (_, RequestBody::None) => PreparedBody::Empty,
            (_, RequestBody::Text(text)) => PreparedBody::Bytes(Bytes::from(text)),
            (Method::Post, RequestBody::Form(fields)) if multipart => {
                PreparedBody::Multipart(fields.into_iter().map(MultipartField::from).collect())
            }
            (Method::Delete, RequestBody::Form(fields)) if fields.is_empty() => PreparedBody::Empty,
            (_, RequestBody::Form(fields)) => PreparedBody::Bytes(Bytes::from(encode_pairs(&fields))),
        };

        match (&body, self.method) {
            // The transport writes its own boundary into the content type
            (PreparedBody::Multipart(_), _) => remove_header(&mut headers, "Content-Type"),
            (PreparedBody::Bytes(bytes), Method::Post | Method::Put) => {
                set_header(&mut headers, "Content-Length", bytes.len().to_string())
            }
            (PreparedBody::Empty, Method::Put) => set_header(&mut headers, "Content-Length", "0".to_string()),
            _ => (),
        }

        PreparedRequest {
            method: self.method,
            url: self.url,
            headers,
            body,
        }
    }
}

/// A request ready for the wire
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: PreparedBody,
}

impl PreparedRequest {
    /// Case insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        header_value(&self.headers, name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PreparedBody {
    Empty,
    Bytes(Bytes),
    Multipart(Vec<MultipartField>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultipartField {
    pub name: String,
    pub value: MultipartValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MultipartValue {
    Text(String),
    File(PathBuf),
}

impl From<(String, String)> for MultipartField {
    fn from((name, value): (String, String)) -> Self {
        let value = match value.strip_prefix(FILE_MARKER) {
            Some(path) => MultipartValue::File(PathBuf::from(path)),
            None => MultipartValue::Text(value),
        };
        Self { name, value }
    }
}

/// What the transport saw: every header block plus the body in one buffer.
#[derive(Debug, Clone)]
pub struct RawTransportResponse {
    pub status: u16,
    pub full: Bytes,
    pub header_len: usize,
    /// Content length announced by the transport, zero or less when unknown
    pub declared_body_len: i64,
}

impl RawTransportResponse {
    pub fn new(status: u16, full: impl Into<Bytes>, header_len: usize, declared_body_len: i64) -> Self {
        Self {
            status,
            full: full.into(),
            header_len,
            declared_body_len,
        }
    }

    /// Lays out a status line, headers and body the way they arrived on the connection
    pub fn assemble(
        status: u16,
        status_line: &str,
        headers: &[(String, String)],
        body: &[u8],
        declared_body_len: i64,
    ) -> Self {
        let mut head = String::from(status_line);
        for (name, value) in headers {
            head.push_str("\r\n");
            head.push_str(name);
            head.push_str(": ");
            head.push_str(value);
        }
        head.push_str("\r\n\r\n");

        let header_len = head.len();
        let mut full = head.into_bytes();
        full.extend_from_slice(body);
        Self::new(status, full, header_len, declared_body_len)
    }
}

/// Pulls the response body out of the raw transport buffer.
///
/// With an unknown content length the buffer is split on blank lines, interim
/// `HTTP/1.1 100 Continue` blocks are dropped, and the segment following the real header block
/// is the body. With a known length the trailing bytes are the body. A body that still starts
/// with `HTTP` means the split failed, one that is not UTF-8 is rejected as well.
pub fn extract_body(raw: &RawTransportResponse) -> Result<String, BehanceError> {
    let full = raw.full.as_ref();
    let body: &[u8] = if raw.declared_body_len <= 0 {
        split_on_boundary(full)
            .into_iter()
            .skip_while(|segment| *segment == CONTINUE_STATUS_LINE)
            .nth(1)
            .unwrap_or(&[])
    } else {
        let declared = usize::try_from(raw.declared_body_len).unwrap_or(usize::MAX);
        &full[full.len().saturating_sub(declared)..]
    };

    let body = String::from_utf8(body.to_vec()).map_err(|err| {
        BehanceError::MalformedResponse(String::from_utf8_lossy(err.as_bytes()).into_owned())
    })?;
    if body.starts_with("HTTP") {
        return Err(BehanceError::MalformedResponse(body));
    }
    Ok(body)
}

/// Only the 2xx class counts as success.
///
/// The status is reduced to its hundreds place, so 299 passes while 199 and 301 fail.
pub fn classify_status(status: u16, body: &str) -> Result<(), BehanceError> {
    if status / 100 * 100 != 200 {
        return Err(BehanceError::HttpStatus(status, body.to_string()));
    }
    Ok(())
}

fn split_on_boundary(buf: &[u8]) -> Vec<&[u8]> {
    let mut segments = Vec::new();
    let mut rest = buf;
    while let Some(pos) = rest
        .windows(HEADER_BOUNDARY.len())
        .position(|w| w == HEADER_BOUNDARY)
    {
        segments.push(&rest[..pos]);
        rest = &rest[pos + HEADER_BOUNDARY.len()..];
    }
    segments.push(rest);
    segments
}

fn default_headers() -> Vec<(String, String)> {
    vec![
        ("Accept".to_string(), "application/json".to_string()),
        ("Content-Type".to_string(), CONTENT_TYPE_FORM.to_string()),
        // Blank Expect keeps servers from answering with 100 Continue first
        ("Expect".to_string(), String::new()),
    ]
}

fn header_value<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: String) {
    remove_header(headers, name);
    headers.push((name.to_string(), value));
}

fn remove_header(headers: &mut Vec<(String, String)>, name: &str) {
    headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
}
