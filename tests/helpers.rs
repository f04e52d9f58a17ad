/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use behance::v2::{BehanceError, Client, ClientConfig, PreparedRequest, RawTransportResponse, Transport};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[allow(dead_code)]
pub(crate) const CLIENT_ID: &str = "test-client";
#[allow(dead_code)]
pub(crate) const CLIENT_SECRET: &str = "test-secret";

/// Replays canned responses in order and keeps every request it was handed
#[allow(dead_code)]
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    responses: Arc<Mutex<VecDeque<RawTransportResponse>>>,
    requests: Arc<Mutex<Vec<PreparedRequest>>>,
}

#[allow(dead_code)]
impl MockTransport {
    pub(crate) fn replying(responses: Vec<RawTransportResponse>) -> Self {
        let transport = Self::default();
        for resp in responses {
            transport.push(resp);
        }
        transport
    }

    pub(crate) fn push(&self, resp: RawTransportResponse) {
        self.responses.lock().unwrap().push_back(resp);
    }

    pub(crate) fn requests(&self) -> Vec<PreparedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> PreparedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: PreparedRequest) -> Result<RawTransportResponse, BehanceError> {
        self.requests.lock().unwrap().push(request);
        let next = self.responses.lock().unwrap().pop_front();
        next.ok_or_else(|| BehanceError::Transport("connection refused".to_string()))
    }
}

/// Raw response with a known content length
#[allow(dead_code)]
pub(crate) fn status(code: u16, body: &str) -> RawTransportResponse {
    RawTransportResponse::assemble(
        code,
        &format!("HTTP/1.1 {} Status", code),
        &[
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Content-Length".to_string(), body.len().to_string()),
        ],
        body.as_bytes(),
        body.len() as i64,
    )
}

#[allow(dead_code)]
pub(crate) fn ok_json(body: &str) -> RawTransportResponse {
    status(200, body)
}

/// Raw response the transport could not announce a length for
#[allow(dead_code)]
pub(crate) fn chunked(code: u16, body: &str) -> RawTransportResponse {
    RawTransportResponse::assemble(
        code,
        &format!("HTTP/1.1 {} Status", code),
        &[("Transfer-Encoding".to_string(), "chunked".to_string())],
        body.as_bytes(),
        -1,
    )
}

#[allow(dead_code)]
pub(crate) fn mock_config() -> ClientConfig {
    ClientConfig::new(CLIENT_ID).with_client_secret(CLIENT_SECRET)
}

/// Client wired to a mock transport, plus a handle on that transport
#[allow(dead_code)]
pub(crate) fn mock_client(responses: Vec<RawTransportResponse>) -> (Client<MockTransport>, MockTransport) {
    let transport = MockTransport::replying(responses);
    let client = Client::with_transport(mock_config(), transport.clone());
    (client, transport)
}

#[allow(dead_code)]
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub(crate) fn get_client_config() -> anyhow::Result<ClientConfig> {
    let client_id = std::env::var("BEHANCE_CLIENT_ID")?;
    let config = ClientConfig::new(&client_id);
    Ok(match std::env::var("BEHANCE_CLIENT_SECRET") {
        Ok(secret) => config.with_client_secret(&secret),
        Err(_) => config,
    })
}

#[allow(dead_code)]
pub(crate) fn get_authenticated_client() -> anyhow::Result<Client> {
    let access_token = std::env::var("BEHANCE_ACCESS_TOKEN")?;
    let mut client = Client::new(get_client_config()?)?;
    client.set_access_token(&access_token);
    Ok(client)
}
