//! HTTP request/response descriptors for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The
//! `SkyscannerClient` builds `HttpRequest` values and parses `HttpResponse`
//! values without ever touching the network; a `Transport` (or any host code)
//! performs the actual I/O. Every `build_*` call returns a fresh descriptor,
//! so concurrent calls never share request state.

use std::fmt;

/// Header carrying the RapidAPI key.
pub const API_KEY_HEADER: &str = "X-RapidAPI-Key";

/// Header carrying the RapidAPI host identifier.
pub const API_HOST_HEADER: &str = "X-RapidAPI-Host";

/// HTTP method for a request. The remote API only uses GET and POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// Built by `SkyscannerClient::build_*` methods. `url` is absolute and
/// `body`, when present, is already-serialized JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// An HTTP response described as plain data.
///
/// Produced by a `Transport` after executing an `HttpRequest`, then passed
/// to `SkyscannerClient::parse_*` methods.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_ignores_case() {
        let req = HttpRequest {
            method: HttpMethod::Get,
            url: "http://localhost/v3/culture/locales".to_string(),
            headers: vec![(API_KEY_HEADER.to_string(), "secret".to_string())],
            body: None,
        };
        assert_eq!(req.header("x-rapidapi-key"), Some("secret"));
        assert_eq!(req.header("x-rapidapi-host"), None);
    }

    #[test]
    fn success_range_is_2xx() {
        let mut resp = HttpResponse {
            status: 204,
            headers: Vec::new(),
            body: String::new(),
        };
        assert!(resp.is_success());
        resp.status = 302;
        assert!(!resp.is_success());
    }
}
