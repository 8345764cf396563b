//! Request descriptors handed to the dispatcher.
//!
//! A descriptor carries only what the resource clients know: absolute URI,
//! method, query and optional JSON body. Credentials are never stored here.

use std::fmt;

use serde_json::Value;

/// HTTP methods used by the Agile API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "http")]
impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A scalar or array query value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Text(String),
    Integer(i64),
    Boolean(bool),
    /// Sent as repeated keys: `k=a&k=b`.
    List(Vec<String>),
}

impl QueryValue {
    fn push_pairs(&self, key: &str, out: &mut Vec<(String, String)>) {
        match self {
            Self::Text(s) => out.push((key.to_string(), s.clone())),
            Self::Integer(n) => out.push((key.to_string(), n.to_string())),
            Self::Boolean(b) => out.push((key.to_string(), b.to_string())),
            Self::List(items) => {
                out.extend(items.iter().map(|item| (key.to_string(), item.clone())))
            }
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(n) => Self::Integer(n),
            Err(_) => Self::Text(value.to_string()),
        }
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<&[&str]> for QueryValue {
    fn from(value: &[&str]) -> Self {
        Self::List(value.iter().map(|s| s.to_string()).collect())
    }
}

/// One outgoing call. Created per request and consumed by the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub uri: String,
    pub method: Method,
    pub body: Option<Value>,
    pub query: Vec<(String, QueryValue)>,
}

impl RequestDescriptor {
    pub fn new(method: Method, uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            method,
            body: None,
            query: Vec::new(),
        }
    }

    pub fn get(uri: impl Into<String>) -> Self {
        Self::new(Method::Get, uri)
    }

    pub fn post(uri: impl Into<String>) -> Self {
        Self::new(Method::Post, uri)
    }

    pub fn put(uri: impl Into<String>) -> Self {
        Self::new(Method::Put, uri)
    }

    pub fn delete(uri: impl Into<String>) -> Self {
        Self::new(Method::Delete, uri)
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn query(mut self, key: &str, value: impl Into<QueryValue>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    /// Add a query parameter only when a value is present.
    pub fn query_opt<V: Into<QueryValue>>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    /// Flattened `(key, value)` pairs in insertion order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.query.len());
        for (key, value) in &self.query {
            value.push_pairs(key, &mut pairs);
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_query_values_are_omitted() {
        let req = RequestDescriptor::get("https://h/rest/agile/1.0/board/1/sprint")
            .query_opt("state", Some("active"))
            .query_opt::<u32>("startAt", None)
            .query_opt("maxResults", Some(50u32));

        assert_eq!(
            req.query_pairs(),
            vec![
                ("state".to_string(), "active".to_string()),
                ("maxResults".to_string(), "50".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_values_repeat_the_key() {
        let keys: &[&str] = &["AG-1", "AG-2"];
        let req = RequestDescriptor::delete("https://h/x").query("issues", keys);
        assert_eq!(
            req.query_pairs(),
            vec![
                ("issues".to_string(), "AG-1".to_string()),
                ("issues".to_string(), "AG-2".to_string()),
            ]
        );
    }

    #[test]
    fn test_scalar_values_render() {
        let req = RequestDescriptor::get("https://h/x")
            .query("includeFutureSprints", true)
            .query("rapidViewId", 42u64)
            .query("offset", -1i64);
        assert_eq!(
            req.query_pairs(),
            vec![
                ("includeFutureSprints".to_string(), "true".to_string()),
                ("rapidViewId".to_string(), "42".to_string()),
                ("offset".to_string(), "-1".to_string()),
            ]
        );
    }

    #[test]
    fn test_huge_u64_falls_back_to_text() {
        assert_eq!(
            QueryValue::from(u64::MAX),
            QueryValue::Text("18446744073709551615".to_string())
        );
    }

    #[test]
    fn test_builder_sets_method_and_body() {
        let req = RequestDescriptor::post("https://h/rest/agile/1.0/sprint/3/issue")
            .body(json!({"issues": ["AG-1"]}));
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.method.to_string(), "POST");
        assert_eq!(req.body, Some(json!({"issues": ["AG-1"]})));
        assert!(req.query.is_empty());
    }
}
