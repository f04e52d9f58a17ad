/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Authorization code flow.
//!
//! 1. [`Client::authorization_redirect`] produces the url the user's browser is sent to. The
//!    user accepts or rejects the requested [`Scope`]s there.
//! 2. Behance sends the browser back to the redirect uri with a `code` query parameter.
//! 3. [`Client::exchange_code_for_token`] trades that code for an access token, which the client
//!    keeps and sends with every authenticated call from then on.
//!
//! See <http://www.behance.net/dev/authentication#step-by-step>

use crate::v2::envelope::is_empty_value;
use crate::v2::errors::BehanceError;
use crate::v2::http::RequestBody;
use crate::v2::properties::{Scope, join_scopes};
use crate::v2::query::{QueryParams, build_url_from_map};
use crate::v2::transport::Transport;
use crate::v2::Client;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use log::info;
use serde::Deserialize;
use serde_json::Value;

pub const ENDPOINT_AUTHENTICATE: &str = "/oauth/authenticate";
pub const ENDPOINT_TOKEN: &str = "/oauth/token";

const COULD_NOT_GET_TOKEN: &str = "Could not get token";

/// Where a client is in the authorization flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    AwaitingCode,
    Authenticated,
}

/// Per client authorization state
#[derive(Default, Clone)]
pub struct Session {
    access_token: Option<String>,
    user: Option<Value>,
    pending_state: Option<String>,
}

impl Session {
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn set_access_token(&mut self, access_token: &str) {
        self.access_token = Some(access_token.into());
    }

    pub fn user(&self) -> Option<&Value> {
        self.user.as_ref()
    }

    pub fn set_user(&mut self, user: Option<Value>) {
        self.user = user;
    }

    /// State token sent with the last authorization redirect
    pub fn pending_state(&self) -> Option<&str> {
        self.pending_state.as_deref()
    }

    pub fn state(&self) -> AuthState {
        match (&self.access_token, &self.pending_state) {
            (Some(_), _) => AuthState::Authenticated,
            (None, Some(_)) => AuthState::AwaitingCode,
            (None, None) => AuthState::Unauthenticated,
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &self.access_token.as_ref().map(|_| "xxx"))
            .field("user", &self.user.is_some())
            .field("pending_state", &self.pending_state)
            .finish()
    }
}

/// Redirect the host application has to send the user's browser to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationRedirect {
    pub location: String,
    /// Anti forgery token, comes back on the redirect uri
    pub state: String,
}

impl AuthorizationRedirect {
    pub fn status_code(&self) -> u16 {
        302
    }
}

/// Random URL safe state token
pub fn generate_state() -> String {
    URL_SAFE_NO_PAD.encode(rand::random::<u128>().to_le_bytes())
}

/// Builds the authorization url; `client_id` is always part of it
pub fn authorization_url(
    api_root: &str,
    client_id: &str,
    redirect_uri: &str,
    scopes: &[Scope],
    state: &str,
) -> String {
    let params: QueryParams = [
        ("redirect_uri", redirect_uri.to_string()),
        ("scope", join_scopes(scopes)),
        ("state", state.to_string()),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();
    build_url_from_map(api_root, ENDPOINT_AUTHENTICATE, params, client_id)
}

// Expected response from the token endpoint
#[derive(Deserialize, Debug)]
struct TokenResponse {
    #[serde(default)]
    valid: Value,

    #[serde(default)]
    errors: Value,

    #[serde(default)]
    access_token: Option<String>,

    #[serde(default)]
    user: Option<Value>,
}

/// Reads the token endpoint's answer into the access token and authenticated user
pub fn parse_token_response(body: &str) -> Result<(String, Option<Value>), BehanceError> {
    let not_granted = || BehanceError::AuthExchange(COULD_NOT_GET_TOKEN.to_string());
    if body.trim().is_empty() {
        return Err(not_granted());
    }
    let resp: TokenResponse = serde_json::from_str(body).map_err(|_| not_granted())?;

    if is_empty_value(&resp.valid) {
        let message = match resp.errors {
            ref e if is_empty_value(e) => COULD_NOT_GET_TOKEN.to_string(),
            Value::String(s) => s,
            other => other.to_string(),
        };
        return Err(BehanceError::AuthExchange(message));
    }

    let token = resp
        .access_token
        .filter(|t| !t.is_empty())
        .ok_or_else(not_granted)?;
    Ok((token, resp.user))
}

impl<T: Transport> Client<T> {
    /// Starts the authorization flow.
    ///
    /// Returns the url to redirect the user to and the state token that goes with it. An empty
    /// or missing `state` is replaced by a freshly generated one. The host application performs
    /// the redirect and ends its current request.
    pub fn authorization_redirect(
        &mut self,
        redirect_uri: &str,
        scopes: &[Scope],
        state: Option<&str>,
    ) -> AuthorizationRedirect {
        let state = state
            .filter(|s| !s.is_empty())
            .map_or_else(generate_state, str::to_string);
        let location = authorization_url(
            self.api_root(),
            self.config().client_id(),
            redirect_uri,
            scopes,
            &state,
        );
        self.session_mut().pending_state = Some(state.clone());
        AuthorizationRedirect { location, state }
    }

    /// Exchanges the code returned on the redirect uri for an access token.
    ///
    /// On success the token and the authenticated user are stored on this client and the token
    /// is returned. `state` defaults to the one from [`Client::authorization_redirect`], or a new
    /// one when there was none.
    pub async fn exchange_code_for_token(
        &mut self,
        code: &str,
        redirect_uri: &str,
        state: Option<&str>,
        grant_type: Option<&str>,
    ) -> Result<String, BehanceError> {
        let client_secret = self
            .config()
            .client_secret()
            .ok_or(BehanceError::MissingClientSecret())?;

        let state = state
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .or_else(|| self.session().pending_state().map(str::to_string))
            .unwrap_or_else(generate_state);

        let mut fields = vec![
            ("client_id", self.config().client_id()),
            ("client_secret", client_secret),
            ("redirect_uri", redirect_uri),
            ("code", code),
            ("state", state.as_str()),
        ];
        if let Some(grant_type) = grant_type.filter(|g| !g.is_empty()) {
            fields.push(("grant_type", grant_type));
        }

        let url = self.url_for(ENDPOINT_TOKEN, QueryParams::new());
        let body = match self
            .api_client()
            .post(&url, RequestBody::form(&fields), &[])
            .await
        {
            Ok(body) => body,
            Err(err) => {
                self.report(ENDPOINT_TOKEN, &err);
                String::new()
            }
        };

        let (token, user) = parse_token_response(&body)?;
        info!("Exchanged authorization code for an access token");

        let session = self.session_mut();
        session.set_access_token(&token);
        session.set_user(user);
        session.pending_state = None;
        Ok(token)
    }
}
