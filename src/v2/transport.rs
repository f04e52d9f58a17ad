/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::errors::BehanceError;
use crate::v2::http::{MultipartField, MultipartValue, PreparedBody, PreparedRequest, RawTransportResponse};
use crate::v2::ClientConfig;
use log::warn;
use reqwest::multipart::{Form, Part};
use std::future::Future;

/// Puts a prepared request on the wire and returns everything that came back.
///
/// Exactly one round trip per call. Implementations must not retry.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: PreparedRequest,
    ) -> impl Future<Output = Result<RawTransportResponse, BehanceError>> + Send;
}

/// User agent sent with every request
pub fn user_agent(client_id: &str) -> String {
    format!("Behance API/Rust (App {})", client_id)
}

/// Default [`Transport`] backed by `reqwest`.
#[derive(Clone)]
pub struct HttpsTransport {
    https_client: reqwest::Client,
}

impl HttpsTransport {
    /// Builds the underlying client with the configured timeout and user agent.
    ///
    /// Certificate verification stays on unless the configuration explicitly opts out.
    /// Redirects are never followed, a 3xx reaches the status check as is.
    pub fn new(config: &ClientConfig) -> Result<Self, BehanceError> {
        let mut builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(config.timeout())
            .user_agent(user_agent(config.client_id()));
        if config.accepts_invalid_certs() {
            warn!("TLS certificate verification is disabled for {}", config.api_root());
            builder = builder.danger_accept_invalid_certs(true);
        }
        Ok(Self {
            https_client: builder.build()?,
        })
    }
}

impl std::fmt::Debug for HttpsTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpsTransport").finish()
    }
}

impl Transport for HttpsTransport {
    async fn send(&self, request: PreparedRequest) -> Result<RawTransportResponse, BehanceError> {
        let PreparedRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut req = self.https_client.request(method.into(), url.as_str());
        for (name, value) in &headers {
            req = req.header(name.as_str(), value.as_str());
        }
        req = match body {
            PreparedBody::Empty => req,
            PreparedBody::Bytes(bytes) => req.body(bytes),
            PreparedBody::Multipart(fields) => req.multipart(multipart_form(fields)?),
        };

        let resp = req.send().await?;
        let status = resp.status();
        let status_line = format!("{:?} {}", resp.version(), status);
        let resp_headers: Vec<(String, String)> = resp
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let declared_body_len = resp
            .content_length()
            .map_or(-1, |len| i64::try_from(len).unwrap_or(i64::MAX));
        let body = resp.bytes().await?;

        Ok(RawTransportResponse::assemble(
            status.as_u16(),
            &status_line,
            &resp_headers,
            &body,
            declared_body_len,
        ))
    }
}

// Reads attachments from disk and lays the fields out as multipart parts.
// The read is synchronous and blocks the calling task until the whole file is in memory.
fn multipart_form(fields: Vec<MultipartField>) -> Result<Form, BehanceError> {
    let mut form = Form::new();
    for field in fields {
        form = match field.value {
            MultipartValue::Text(text) => form.text(field.name, text),
            MultipartValue::File(path) => {
                let contents = std::fs::read(&path)?;
                let file_name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("upload")
                    .to_string();
                form.part(field.name, Part::bytes(contents).file_name(file_name))
            }
        };
    }
    Ok(form)
}
