/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use std::io;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum BehanceError {
    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response body: {0:?}")]
    MalformedResponse(String),

    #[error("Unsuccessful Request, response ({0}): {1}")]
    HttpStatus(u16, String),

    #[error("Authorization error. {0}")]
    AuthExchange(String),

    #[error("Unhandled method: [{0}]")]
    UnsupportedMethod(String),

    #[error("A client secret is required to exchange an authorization code")]
    MissingClientSecret(),

    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),
}

impl BehanceError {
    /// HTTP status code behind this error, 0 when the failure happened before
    /// or outside of an HTTP exchange.
    pub fn status_code(&self) -> u16 {
        match self {
            BehanceError::HttpStatus(code, _) => *code,
            _ => 0,
        }
    }

    /// True for failures reported by the network layer itself
    pub fn is_transport(&self) -> bool {
        matches!(self, BehanceError::Request(_) | BehanceError::Transport(_))
    }
}
