/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Permissions an application can ask the user for during authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Scope {
    ActivityRead,
    CollectionRead,
    CollectionWrite,
    WipRead,
    WipWrite,
    ProjectRead,
    InvitationsRead,
    InvitationsWrite,
    PostAs,
}

/// Values for the `sort` search parameter
#[derive(Debug, Clone, Copy, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum SortMethod {
    FeaturedDate,
    Appreciations,
    Views,
    Comments,
    PublishedDate,
    Followed,
}

/// Values for the `time` search parameter
#[derive(Debug, Clone, Copy, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum TimeFilter {
    All,
    Today,
    Week,
    Month,
}

/// Joins scopes with the pipe separator the authorization endpoint expects
pub fn join_scopes(scopes: &[Scope]) -> String {
    scopes
        .iter()
        .map(|s| <&'static str>::from(*s))
        .collect::<Vec<_>>()
        .join("|")
}
