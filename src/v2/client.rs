/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v2::api::{API_ORIGIN, ApiClient, TIMEOUT_DEFAULT_SEC};
use crate::v2::auth::{AuthState, Session};
use crate::v2::envelope::unwrap_envelope;
use crate::v2::errors::BehanceError;
use crate::v2::http::{Method, RequestBody, RequestSpec};
use crate::v2::query::{ApiParams, QueryParams, build_url_from_map, to_query_params};
use crate::v2::transport::{HttpsTransport, Transport};
use async_stream::stream;
use futures::Stream;
use log::{trace, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Page size used when paging through list endpoints and the caller did not pick one
pub const PER_PAGE: usize = 12;
pub const PER_PAGE_STRING: &str = "12";

/// Application registration and connection settings.
///
/// The client id and secret are obtained by registering an application at
/// <https://www.behance.net/dev/apps>. The secret is only needed for
/// [`Client::exchange_code_for_token`].
#[derive(Clone)]
pub struct ClientConfig {
    client_id: String,
    client_secret: Option<String>,
    debug: bool,
    api_root: String,
    access_token_key: String,
    timeout: Duration,
    accept_invalid_certs: bool,
}

impl ClientConfig {
    pub fn new(client_id: &str) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: None,
            debug: false,
            api_root: API_ORIGIN.into(),
            access_token_key: "access_token".into(),
            timeout: Duration::from_secs(TIMEOUT_DEFAULT_SEC),
            accept_invalid_certs: false,
        }
    }

    pub fn with_client_secret(mut self, client_secret: &str) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Log failures that resource calls swallow
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Protocol + host (+ path prefix) to use instead of the public API
    pub fn with_api_root(mut self, api_root: &str) -> Self {
        self.api_root = normalize_api_root(api_root);
        self
    }

    /// Query string key the access token is sent under
    pub fn with_access_token_key(mut self, key: &str) -> Self {
        self.access_token_key = key.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Skips TLS certificate verification. Only meant for test servers.
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    pub fn access_token_key(&self) -> &str {
        &self.access_token_key
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn accepts_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"xxx")
            .field("debug", &self.debug)
            .field("api_root", &self.api_root)
            .field("access_token_key", &self.access_token_key)
            .field("timeout", &self.timeout)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}

// Every endpoint constant starts with a slash
fn normalize_api_root(api_root: &str) -> String {
    api_root.trim_end_matches('/').to_string()
}

/// Entry point to the Behance API.
///
/// Resource methods never fail: anything that goes wrong comes back as `None` or an empty
/// `Vec` (and is logged when the configuration has debug on). Only the token exchange reports
/// errors.
///
/// ```rust,no_run
/// use behance::v2::{Client, ClientConfig};
///
/// async fn featured(client_id: &str) -> Result<(), behance::v2::BehanceError> {
///     let client = Client::new(ClientConfig::new(client_id))?;
///     for project in client.search_projects(&[("sort", "featured_date")]).await {
///         println!("{}", project.name);
///     }
///     Ok(())
/// }
/// ```
pub struct Client<T = HttpsTransport> {
    config: ClientConfig,
    session: Session,
    api_client: Arc<ApiClient<T>>,
}

impl Client {
    /// Creates a client talking to the API over HTTPS
    pub fn new(config: ClientConfig) -> Result<Self, BehanceError> {
        let transport = HttpsTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client on top of a custom [`Transport`]
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            config,
            session: Session::default(),
            api_client: Arc::new(ApiClient::new(transport)),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The low level request executor shared by all clones of this client
    pub fn api_client(&self) -> &ApiClient<T> {
        &self.api_client
    }

    pub fn api_root(&self) -> &str {
        self.config.api_root()
    }

    /// Changes the root of the API, mostly for testing purposes. Trailing slashes are dropped.
    pub fn set_api_root(&mut self, api_root: &str) -> Result<(), BehanceError> {
        url::Url::parse(api_root)?;
        self.config.api_root = normalize_api_root(api_root);
        Ok(())
    }

    pub fn set_access_token_key(&mut self, key: &str) {
        self.config.access_token_key = key.into();
    }

    /// The access token set manually or by the last successful exchange
    pub fn access_token(&self) -> Option<&str> {
        self.session.access_token()
    }

    /// Stores an access token obtained outside of this client
    pub fn set_access_token(&mut self, access_token: &str) {
        self.session.set_access_token(access_token);
    }

    /// The user returned by the last successful exchange
    pub fn authenticated_user(&self) -> Option<&Value> {
        self.session.user()
    }

    pub fn set_authenticated_user(&mut self, user: Value) {
        self.session.set_user(Some(user));
    }

    pub fn auth_state(&self) -> AuthState {
        self.session.state()
    }

    pub(crate) fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Full url for an endpoint, the client id is always added
    pub(crate) fn url_for(&self, endpoint: &str, params: QueryParams) -> String {
        build_url_from_map(self.config.api_root(), endpoint, params, self.config.client_id())
    }

    /// Caller params plus the access token when one is set
    pub(crate) fn authed_params(&self, params: &ApiParams<'_>) -> QueryParams {
        let mut query = to_query_params(params);
        if let Some(token) = self.session.access_token() {
            query.insert(self.config.access_token_key().to_string(), token.to_string());
        }
        query
    }

    /// GETs the endpoint and returns the field under `root`
    pub(crate) async fn fetch(&self, endpoint: &str, params: QueryParams, root: &str) -> Option<Value> {
        let url = self.url_for(endpoint, params);
        match self.api_client.get(&url).await {
            Ok(body) => unwrap_envelope(&body, root),
            Err(err) => {
                self.report(endpoint, &err);
                None
            }
        }
    }

    pub(crate) async fn fetch_one<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: QueryParams,
        root: &str,
    ) -> Option<R> {
        let payload = self.fetch(endpoint, params, root).await?;
        self.decode(endpoint, payload)
    }

    pub(crate) async fn fetch_list<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: QueryParams,
        root: &str,
    ) -> Vec<R> {
        match self.fetch(endpoint, params, root).await {
            // Records that do not decode are reported and skipped, the rest of the page is kept
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| self.decode(endpoint, item))
                .collect(),
            Some(payload) => self.decode(endpoint, payload).unwrap_or_default(),
            None => Vec::new(),
        }
    }

    /// Sends an authenticated write and returns the decoded response document
    pub(crate) async fn send(
        &self,
        method: Method,
        endpoint: &str,
        body: RequestBody,
        headers: &[(&str, &str)],
    ) -> Option<Value> {
        let url = self.url_for(endpoint, self.authed_params(&[]));
        let spec = headers
            .iter()
            .fold(RequestSpec::new(method, &url).with_body(body), |spec, (n, v)| {
                spec.with_header(n, v)
            });

        match self.api_client.execute(spec).await {
            Ok(body) if body.trim().is_empty() => None,
            Ok(body) => serde_json::from_str(&body)
                .map_err(|err| self.report(endpoint, &BehanceError::from(err)))
                .ok(),
            Err(err) => {
                self.report(endpoint, &err);
                None
            }
        }
    }

    /// Pages through a list endpoint until a short page comes back
    pub(crate) fn paged<'a, R: DeserializeOwned + 'a>(
        &'a self,
        endpoint: String,
        root: &'static str,
        mut params: QueryParams,
    ) -> impl Stream<Item = R> + use<'a, R, T> {
        let per_page = match params.get("per_page").and_then(|v| v.parse::<usize>().ok()) {
            Some(n) if n > 0 => n,
            _ => {
                params.insert("per_page".to_string(), PER_PAGE_STRING.to_string());
                PER_PAGE
            }
        };
        let first_page = params
            .get("page")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(1);

        stream! {
            let mut page = first_page;
            loop {
                let mut page_params = params.clone();
                page_params.insert("page".to_string(), page.to_string());

                let items: Vec<R> = self.fetch_list(&endpoint, page_params, root).await;
                let is_done = items.len() < per_page;

                for item in items {
                    yield item;
                }

                if is_done {
                    break;
                }
                page += 1;
            }
        }
    }

    fn decode<R: DeserializeOwned>(&self, endpoint: &str, payload: Value) -> Option<R> {
        serde_json::from_value(payload)
            .map_err(|err| self.report(endpoint, &BehanceError::from(err)))
            .ok()
    }

    // The only trace a swallowed failure leaves
    pub(crate) fn report(&self, endpoint: &str, err: &BehanceError) {
        if self.config.is_debug() {
            warn!("{} failed: {}", endpoint, err);
        } else {
            trace!("{} failed: {}", endpoint, err);
        }
    }
}

impl<T> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            session: self.session.clone(),
            api_client: self.api_client.clone(),
        }
    }
}

impl<T> std::fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .field("session", &self.session)
            .finish()
    }
}
