/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decodes `json_text` and returns the top level field named `root`.
///
/// An empty `root` returns the whole document. Unparsable text and fields that are missing or
/// hold an "empty" value (see [`is_empty_value`]) come back as `None`.
pub fn unwrap_envelope(json_text: &str, root: &str) -> Option<Value> {
    if json_text.trim().is_empty() {
        return None;
    }
    let document: Value = match serde_json::from_str(json_text) {
        Ok(v) => v,
        Err(err) => {
            debug!("Response is not JSON: {}", err);
            return None;
        }
    };
    if document.is_null() {
        return None;
    }
    if root.is_empty() {
        return Some(document);
    }
    match document {
        Value::Object(mut fields) => fields.remove(root).filter(|v| !is_empty_value(v)),
        _ => None,
    }
}

/// Typed form of [`unwrap_envelope`]; a payload that does not fit `T` is also `None`
pub fn unwrap_envelope_as<T: DeserializeOwned>(json_text: &str, root: &str) -> Option<T> {
    let payload = unwrap_envelope(json_text, root)?;
    serde_json::from_value(payload)
        .map_err(|err| debug!("Envelope field {:?} did not decode: {}", root, err))
        .ok()
}

/// Values the API uses to mean "nothing here": null, false, zero, "", "0" and empty
/// arrays/objects.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}
