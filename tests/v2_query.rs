/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

#[cfg(test)]
mod test {
    use behance::v2::{
        API_ORIGIN, ENDPOINT_PROJECTS, Scope, SortMethod, authorization_url, build_url,
        endpoint_path, join_scopes,
    };
    use std::str::FromStr;

    #[test]
    fn url_carries_client_id() {
        let url = build_url(API_ORIGIN, ENDPOINT_PROJECTS, &[], "abc");
        assert_eq!(url, "https://www.behance.net/v2/projects?client_id=abc");
    }

    #[test]
    fn client_id_appears_once() {
        let url = build_url(
            API_ORIGIN,
            ENDPOINT_PROJECTS,
            &[("client_id", "spoofed"), ("q", "poster")],
            "abc",
        );
        assert_eq!(url.matches("client_id=").count(), 1);
        assert!(url.contains("client_id=abc"));
        assert!(!url.contains("spoofed"));
    }

    #[test]
    fn params_are_encoded() {
        let url = build_url(
            API_ORIGIN,
            ENDPOINT_PROJECTS,
            &[("q", "motion & type"), ("tags", "a|b")],
            "abc",
        );
        assert!(url.contains("q=motion+%26+type"));
        assert!(url.contains("tags=a%7Cb"));
    }

    #[test]
    fn path_segments_are_encoded() {
        assert_eq!(endpoint_path("/users", &["jane doe", "projects"]), "/users/jane%20doe/projects");
        assert_eq!(endpoint_path("/users", &[]), "/users");
    }

    #[test]
    fn scopes() {
        assert_eq!(
            join_scopes(&[Scope::ProjectRead, Scope::CollectionWrite, Scope::PostAs]),
            "project_read|collection_write|post_as"
        );
        assert_eq!(Scope::from_str("wip_write").unwrap(), Scope::WipWrite);
        let sort: &str = SortMethod::FeaturedDate.into();
        assert_eq!(sort, "featured_date");
    }

    #[test]
    fn authorization_url_layout() {
        let url = authorization_url(
            API_ORIGIN,
            "abc",
            "https://example.com/cb",
            &[Scope::ActivityRead, Scope::WipRead],
            "s1",
        );
        assert!(url.starts_with("https://www.behance.net/v2/oauth/authenticate?"));
        assert!(url.contains("client_id=abc"));
        assert!(url.contains("redirect_uri=https%3A%2F%2Fexample.com%2Fcb"));
        assert!(url.contains("scope=activity_read%7Cwip_read"));
        assert!(url.contains("state=s1"));
    }
}
