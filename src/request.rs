//! Incoming HTTP request type.

use std::collections::HashMap;

use bytes::Bytes;

use crate::method::Method;

/// An incoming HTTP request: method, path, raw query string and body.
///
/// Path parameters are filled in by the router once the path matches a
/// template. Handlers never see a `Request`; they receive the validated
/// [`Arguments`](crate::Arguments) instead.
pub struct Request {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: Option<String>,
    pub(crate) body: Bytes,
    pub(crate) params: HashMap<String, String>,
}

impl Request {
    /// Builds a request from a request target such as `/items?skip=2`.
    pub fn new(method: Method, target: &str, body: impl Into<Bytes>) -> Self {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path.to_owned(), Some(query.to_owned())),
            None => (target.to_owned(), None),
        };
        Self { method, path, query, body: body.into(), params: HashMap::new() }
    }

    pub fn method(&self) -> Method { self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn query(&self) -> Option<&str> { self.query.as_deref() }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Returns a named path parameter, percent-decoded.
    ///
    /// For a route `/users/{id}`, `req.param("id")` on `/users/42` returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Decoded query pairs in request order. Repeated keys are kept.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        match &self.query {
            Some(q) => url::form_urlencoded::parse(q.as_bytes()).into_owned().collect(),
            None => Vec::new(),
        }
    }

    pub(crate) fn set_params(&mut self, params: HashMap<String, String>) {
        self.params = params;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_target_into_path_and_query() {
        let req = Request::new(Method::Get, "/list?item-query=a%20b&item-query=c+d", "");
        assert_eq!(req.path(), "/list");
        assert_eq!(
            req.query_pairs(),
            vec![
                ("item-query".to_owned(), "a b".to_owned()),
                ("item-query".to_owned(), "c d".to_owned()),
            ]
        );
    }

    #[test]
    fn no_query_yields_no_pairs() {
        let req = Request::new(Method::Get, "/items", "");
        assert!(req.query().is_none());
        assert!(req.query_pairs().is_empty());
    }
}
