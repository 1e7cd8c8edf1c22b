//! Navigable locations
//!
//! A location is a path plus decoded query parameters, written and read in
//! the `/?query=..&id=..` form. [`ViewState`] is derived from it and from
//! nothing else.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

pub const QUERY_PARAM: &str = "query";
pub const ID_PARAM: &str = "id";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    path: String,
    params: Vec<(String, String)>,
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl Location {
    /// `/` with no parameters.
    pub fn root() -> Self {
        Self {
            path: "/".to_string(),
            params: vec![],
        }
    }

    /// `/?query=<query>`
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            path: "/".to_string(),
            params: vec![(QUERY_PARAM.to_string(), query.into())],
        }
    }

    /// `/?id=<id>`
    pub fn detail(id: impl Into<String>) -> Self {
        Self {
            path: "/".to_string(),
            params: vec![(ID_PARAM.to_string(), id.into())],
        }
    }

    /// Append a parameter, keeping any earlier ones.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Parse an href such as `/?id=42&query=rocket` or a bare `?query=x`.
    /// Fragments are ignored; a missing path means `/`.
    pub fn parse(href: &str) -> Self {
        let href = href.split('#').next().unwrap_or_default();
        let (path, search) = match href.split_once('?') {
            Some((path, search)) => (path, search),
            None => (href, ""),
        };
        let path = if path.is_empty() { "/" } else { path };
        Self {
            path: path.to_string(),
            params: form_urlencoded::parse(search.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// First value of `name`, like `URLSearchParams::get`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn query(&self) -> Option<&str> {
        self.get(QUERY_PARAM)
    }

    pub fn id(&self) -> Option<&str> {
        self.get(ID_PARAM)
    }

    /// Serialized form, e.g. `/?query=falcon+9`.
    pub fn href(&self) -> String {
        if self.params.is_empty() {
            return self.path.clone();
        }
        let search = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish();
        format!("{}?{search}", self.path)
    }

    pub fn view_state(&self) -> ViewState {
        ViewState::from_location(self)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

/// Which top-level view a location selects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewState {
    Frontpage { query: Option<String> },
    Detail { id: String },
}

impl ViewState {
    /// A non-empty `id` wins over `query`. Empty values count as absent.
    pub fn from_location(location: &Location) -> Self {
        match location.id().filter(|id| !id.is_empty()) {
            Some(id) => ViewState::Detail { id: id.to_string() },
            None => ViewState::Frontpage {
                query: location
                    .query()
                    .filter(|q| !q.is_empty())
                    .map(str::to_string),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("/", ViewState::Frontpage { query: None })]
    #[case("", ViewState::Frontpage { query: None })]
    #[case("/?query=", ViewState::Frontpage { query: None })]
    #[case("/?query=falcon", ViewState::Frontpage { query: Some("falcon".to_string()) })]
    #[case("?query=falcon+9", ViewState::Frontpage { query: Some("falcon 9".to_string()) })]
    #[case("/?id=42", ViewState::Detail { id: "42".to_string() })]
    #[case("/?id=42&query=rocket", ViewState::Detail { id: "42".to_string() })]
    #[case("/?query=rocket&id=42", ViewState::Detail { id: "42".to_string() })]
    #[case("/?id=&query=rocket", ViewState::Frontpage { query: Some("rocket".to_string()) })]
    fn test_view_state_from_href(#[case] href: &str, #[case] expected: ViewState) {
        assert_eq!(Location::parse(href).view_state(), expected);
    }

    #[test]
    fn test_search_href_is_encoded_and_reversible() {
        let location = Location::search("Falcon 9 & friends");
        assert_eq!(location.href(), "/?query=Falcon+9+%26+friends");
        assert_eq!(Location::parse(&location.href()), location);
        assert_eq!(location.query(), Some("Falcon 9 & friends"));
    }

    #[test]
    fn test_root_href_has_no_query_string() {
        assert_eq!(Location::root().href(), "/");
        assert_eq!(Location::parse("/#top"), Location::root());
    }

    #[test]
    fn test_get_returns_first_value() {
        let location = Location::parse("/?query=a&query=b");
        assert_eq!(location.query(), Some("a"));
    }

    #[test]
    fn test_detail_location() {
        let location = Location::detail("abc-123");
        assert_eq!(location.to_string(), "/?id=abc-123");
        assert_eq!(
            location.view_state(),
            ViewState::Detail {
                id: "abc-123".to_string()
            }
        );
    }
}
