/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod activity;
pub mod api;
pub mod auth;
pub mod client;
pub mod collection;
pub mod envelope;
pub mod errors;
pub mod fields;
pub mod http;
mod parsers;
pub mod project;
pub mod properties;
pub mod query;
pub mod transport;
pub mod user;
pub mod wip;

pub use activity::*;
pub use api::*;
pub use auth::*;
pub use client::*;
pub use collection::*;
pub use envelope::*;
pub use errors::*;
pub use fields::*;
pub use http::*;
pub use project::*;
pub use properties::*;
pub use query::*;
pub use transport::*;
pub use user::*;
pub use wip::*;
