/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

#[cfg(test)]
mod test {
    use behance::v2::{Project, is_empty_value, unwrap_envelope, unwrap_envelope_as};
    use serde_json::json;

    #[test]
    fn root_field_is_returned() {
        let payload = unwrap_envelope(r#"{"projects":[{"id":1}]}"#, "projects").unwrap();
        assert_eq!(payload, json!([{"id": 1}]));
    }

    #[test]
    fn empty_root_field_is_none() {
        assert_eq!(unwrap_envelope(r#"{"projects":[]}"#, "projects"), None);
        assert_eq!(unwrap_envelope(r#"{"wip":{}}"#, "wip"), None);
        assert_eq!(unwrap_envelope(r#"{"user":null}"#, "user"), None);
        assert_eq!(unwrap_envelope(r#"{"stats":"0"}"#, "stats"), None);
    }

    #[test]
    fn missing_root_field_is_none() {
        assert_eq!(unwrap_envelope(r#"{"http_code":200}"#, "project"), None);
    }

    #[test]
    fn unparsable_text_is_none() {
        assert_eq!(unwrap_envelope("", "projects"), None);
        assert_eq!(unwrap_envelope("<html>oops</html>", "projects"), None);
        assert_eq!(unwrap_envelope("[1,2]", "projects"), None);
    }

    #[test]
    fn no_root_returns_document() {
        let doc = unwrap_envelope(r#"{"popular":[],"fields":[{"id":1}]}"#, "").unwrap();
        assert_eq!(doc["fields"][0]["id"], 1);
    }

    #[test]
    fn typed_unwrap() {
        let projects: Vec<Project> =
            unwrap_envelope_as(r#"{"projects":[{"id":3,"name":"Poster"}]}"#, "projects").unwrap();
        assert_eq!(projects[0].name, "Poster");

        // Shape that does not fit the type
        let bad: Option<Vec<Project>> = unwrap_envelope_as(r#"{"projects":"x"}"#, "projects");
        assert!(bad.is_none());
    }

    #[test]
    fn falsy_values() {
        for value in [
            json!(null),
            json!(false),
            json!(0),
            json!(0.0),
            json!(""),
            json!("0"),
            json!([]),
            json!({}),
        ] {
            assert!(is_empty_value(&value), "{} should be empty", value);
        }
        for value in [json!(true), json!(1), json!("a"), json!([0]), json!({"a": null})] {
            assert!(!is_empty_value(&value), "{} should not be empty", value);
        }
    }
}
