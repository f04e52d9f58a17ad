/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::errors::BehanceError;
use crate::v2::http::{Method, RequestBody, RequestSpec, classify_status, extract_body};
use crate::v2::transport::{HttpsTransport, Transport};
use log::debug;

// Root Behance API
pub const API_ORIGIN: &str = "https://www.behance.net/v2";

pub const TIMEOUT_DEFAULT_SEC: u64 = 30;

/// Directly communicates with the API.
///
/// Every call is one round trip through the [`Transport`]; the returned string is the extracted
/// response body of a 2xx response.
pub struct ApiClient<T = HttpsTransport> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Executes the request and returns the response body
    pub async fn execute(&self, spec: RequestSpec) -> Result<String, BehanceError> {
        debug!("{} {}", spec.method, strip_query(&spec.url));

        let raw = self.transport.send(spec.prepare()).await?;
        let body = extract_body(&raw)?;
        classify_status(raw.status, &body)?;
        Ok(body)
    }

    /// Performs a get request to the Behance API
    pub async fn get(&self, url: &str) -> Result<String, BehanceError> {
        self.execute(RequestSpec::new(Method::Get, url)).await
    }

    /// Performs a post request, `headers` can switch the body over to multipart
    pub async fn post(
        &self,
        url: &str,
        body: RequestBody,
        headers: &[(&str, &str)],
    ) -> Result<String, BehanceError> {
        let spec = headers
            .iter()
            .fold(RequestSpec::new(Method::Post, url).with_body(body), |spec, (n, v)| {
                spec.with_header(n, v)
            });
        self.execute(spec).await
    }

    pub async fn put(&self, url: &str, body: RequestBody) -> Result<String, BehanceError> {
        self.execute(RequestSpec::new(Method::Put, url).with_body(body))
            .await
    }

    pub async fn delete(&self, url: &str, body: RequestBody) -> Result<String, BehanceError> {
        self.execute(RequestSpec::new(Method::Delete, url).with_body(body))
            .await
    }
}

impl<T> std::fmt::Debug for ApiClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").finish()
    }
}

// Query strings can carry the access token, keep them out of the logs
fn strip_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(path, _)| path)
}
