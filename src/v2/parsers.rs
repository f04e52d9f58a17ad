/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::User;
use crate::v2::envelope::is_empty_value;
use serde::Deserialize;
use serde_json::Value;

// Parses strings that may be "" or null and sets to None
pub fn from_empty_str_to_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}

// Flags come back as 0/1, "0"/"1" or true/false depending on the endpoint
pub fn from_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v: Value = Deserialize::deserialize(deserializer)?;
    Ok(!is_empty_value(&v))
}

// Owners are either a list or an object keyed by user id
pub fn from_owner_list<'de, D>(deserializer: D) -> Result<Vec<User>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v: Value = Deserialize::deserialize(deserializer)?;
    let owners = match v {
        Value::Array(items) => items,
        Value::Object(by_id) => by_id.into_iter().map(|(_, user)| user).collect(),
        _ => Vec::new(),
    };
    owners
        .into_iter()
        .map(|owner| serde_json::from_value(owner).map_err(serde::de::Error::custom))
        .collect()
}

// Tags are either a list or a single pipe separated string
pub fn from_tag_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v: Value = Deserialize::deserialize(deserializer)?;
    Ok(match v {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|t| match t {
                Value::String(s) => Some(s),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect(),
        Value::String(s) => s
            .split('|')
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    })
}
