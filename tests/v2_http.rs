/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers::{self, MockTransport};
    use behance::v2::{
        ApiClient, BehanceError, Method, MultipartValue, PreparedBody, RawTransportResponse,
        RequestBody, RequestSpec, classify_status, extract_body,
    };
    use std::path::PathBuf;

    const URL: &str = "https://www.behance.net/v2/projects?client_id=test-client";

    #[tokio::test]
    async fn every_verb_returns_body() {
        let transport = MockTransport::replying(vec![
            helpers::ok_json("{}"),
            helpers::ok_json("{}"),
            helpers::ok_json("{}"),
            helpers::ok_json("{}"),
        ]);
        let api = ApiClient::new(transport.clone());

        assert_eq!(api.get(URL).await.unwrap(), "{}");
        assert_eq!(api.post(URL, RequestBody::None, &[]).await.unwrap(), "{}");
        assert_eq!(api.put(URL, RequestBody::None).await.unwrap(), "{}");
        assert_eq!(api.delete(URL, RequestBody::None).await.unwrap(), "{}");

        let methods: Vec<Method> = transport.requests().iter().map(|r| r.method).collect();
        assert_eq!(methods, vec![Method::Get, Method::Post, Method::Put, Method::Delete]);
    }

    #[tokio::test]
    async fn unsuccessful_status_fails() {
        for code in [403u16, 500, 301] {
            let api = ApiClient::new(MockTransport::replying(vec![helpers::status(code, "{}")]));
            match api.get(URL).await {
                Err(BehanceError::HttpStatus(status, body)) => {
                    assert_eq!(status, code);
                    assert_eq!(body, "{}");
                }
                other => panic!("expected an HttpStatus error for {}, got {:?}", code, other),
            }
        }
    }

    #[tokio::test]
    async fn transport_failure_is_reported() {
        let api = ApiClient::new(MockTransport::default());
        let err = api.get(URL).await.unwrap_err();
        assert!(err.is_transport());
        assert_eq!(err.status_code(), 0);
    }

    #[test]
    fn classify_by_hundreds() {
        assert!(classify_status(200, "").is_ok());
        assert!(classify_status(201, "").is_ok());
        assert!(classify_status(299, "").is_ok());
        assert!(classify_status(199, "").is_err());
        assert!(classify_status(301, "").is_err());
        assert_eq!(classify_status(404, "nope").unwrap_err().status_code(), 404);
    }

    #[test]
    fn body_after_continue_block() {
        let full = "HTTP/1.1 100 Continue\r\n\r\nHTTP/1.1 200 OK\r\nContent-Type: application/json\r\n\r\n{\"user\":{}}";
        let raw = RawTransportResponse::new(200, full, 0, -1);
        assert_eq!(extract_body(&raw).unwrap(), "{\"user\":{}}");
    }

    #[test]
    fn body_from_declared_length() {
        let full = "HTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\n{}";
        let raw = RawTransportResponse::new(200, full, full.len() - 2, 2);
        assert_eq!(extract_body(&raw).unwrap(), "{}");
    }

    #[test]
    fn body_from_unknown_length() {
        let raw = helpers::chunked(200, "{\"projects\":[]}");
        assert_eq!(extract_body(&raw).unwrap(), "{\"projects\":[]}");

        // Nothing after the header block
        let raw = RawTransportResponse::new(204, "HTTP/1.1 204 No Content\r\n\r\n", 0, 0);
        assert_eq!(extract_body(&raw).unwrap(), "");
    }

    #[test]
    fn leftover_status_line_is_malformed() {
        let full = "HTTP/1.1 200 OK\r\n\r\nHTTP/1.1 200 OK\r\nX: y";
        let raw = RawTransportResponse::new(200, full, 0, -1);
        assert!(matches!(
            extract_body(&raw),
            Err(BehanceError::MalformedResponse(_))
        ));
    }

    #[test]
    fn non_utf8_body_is_malformed() {
        let mut full = b"HTTP/1.1 200 OK\r\nContent-Length: 4\r\n\r\n".to_vec();
        full.extend_from_slice(&[b'{', 0xff, 0xfe, b'}']);
        let raw = RawTransportResponse::new(200, full, 0, 4);
        match extract_body(&raw) {
            Err(BehanceError::MalformedResponse(body)) => assert!(body.contains('\u{fffd}')),
            other => panic!("expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn unknown_verb_is_rejected() {
        match RequestSpec::from_verb("PATCH", URL) {
            Err(BehanceError::UnsupportedMethod(verb)) => assert_eq!(verb, "PATCH"),
            other => panic!("expected UnsupportedMethod, got {:?}", other),
        }
        let spec = RequestSpec::from_verb("delete", URL).unwrap();
        assert_eq!(spec.method, Method::Delete);
    }

    #[test]
    fn default_headers() {
        let prepared = RequestSpec::new(Method::Get, URL).prepare();
        assert_eq!(prepared.header("accept"), Some("application/json"));
        assert_eq!(
            prepared.header("Content-Type"),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(prepared.header("Expect"), Some(""));
        assert_eq!(prepared.body, PreparedBody::Empty);
    }

    #[test]
    fn caller_headers_override_defaults() {
        let prepared = RequestSpec::new(Method::Get, URL)
            .with_header("accept", "text/plain")
            .prepare();
        assert_eq!(prepared.header("Accept"), Some("text/plain"));
        assert_eq!(
            prepared.headers.iter().filter(|(n, _)| n.eq_ignore_ascii_case("accept")).count(),
            1
        );
    }

    #[test]
    fn post_form_is_urlencoded() {
        let prepared = RequestSpec::new(Method::Post, URL)
            .with_body(RequestBody::form(&[("comment", "nice work"), ("a", "1")]))
            .prepare();
        match &prepared.body {
            PreparedBody::Bytes(bytes) => assert_eq!(bytes.as_ref(), b"a=1&comment=nice+work"),
            other => panic!("expected a form body, got {:?}", other),
        }
        assert_eq!(prepared.header("Content-Length"), Some("21"));
    }

    #[test]
    fn put_without_body_sends_zero_length() {
        let prepared = RequestSpec::new(Method::Put, URL).prepare();
        assert_eq!(prepared.body, PreparedBody::Empty);
        assert_eq!(prepared.header("Content-Length"), Some("0"));
    }

    #[test]
    fn put_text_body_is_sent_verbatim() {
        let prepared = RequestSpec::new(Method::Put, URL)
            .with_body(RequestBody::Text("title=New".to_string()))
            .prepare();
        assert_eq!(prepared.body, PreparedBody::Bytes("title=New".into()));
        assert_eq!(prepared.header("Content-Length"), Some("9"));
    }

    #[test]
    fn delete_with_empty_form_has_no_body() {
        let prepared = RequestSpec::new(Method::Delete, URL)
            .with_body(RequestBody::form(&[]))
            .prepare();
        assert_eq!(prepared.body, PreparedBody::Empty);

        let prepared = RequestSpec::new(Method::Delete, URL)
            .with_body(RequestBody::form(&[("projects", "1")]))
            .prepare();
        assert_eq!(prepared.body, PreparedBody::Bytes("projects=1".into()));
    }

    #[test]
    fn get_never_carries_a_body() {
        let prepared = RequestSpec::new(Method::Get, URL)
            .with_body(RequestBody::form(&[("ignored", "1")]))
            .prepare();
        assert_eq!(prepared.body, PreparedBody::Empty);
    }

    #[test]
    fn multipart_post_keeps_file_marker_fields() {
        let prepared = RequestSpec::new(Method::Post, URL)
            .with_header("Content-Type", "multipart/form-data")
            .with_body(RequestBody::form(&[("image", "@/tmp/sketch.png"), ("title", "Sketch")]))
            .prepare();

        let fields = match prepared.body {
            PreparedBody::Multipart(ref fields) => fields,
            ref other => panic!("expected multipart, got {:?}", other),
        };
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "image");
        assert_eq!(
            fields[0].value,
            MultipartValue::File(PathBuf::from("/tmp/sketch.png"))
        );
        assert_eq!(fields[1].value, MultipartValue::Text("Sketch".to_string()));
        // The transport supplies the boundary
        assert_eq!(prepared.header("Content-Type"), None);
    }
}
