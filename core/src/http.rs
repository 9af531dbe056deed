//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! `HttpRequest` and `HttpResponse` describe a GET round-trip as plain data.
//! `RoadStatusClient` builds requests and parses responses without touching
//! the network; a `Transport` implementation performs the single GET in
//! between. Status codes are never interpreted at this layer.

use url::Url;

use crate::error::TransportError;

/// A GET request described as plain data.
///
/// `url` is the target without query string; `query` holds the unencoded
/// parameters that the transport appends with form encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// `reason` is the canonical phrase for `status`. `body` holds the bytes
/// exactly as received; nothing is decoded at this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub reason: String,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs exactly one GET per call and hands back the raw response.
///
/// Implementations must return 4xx/5xx responses as `Ok` data. Only faults
/// below HTTP (connect, DNS, unreadable body, unparsable URL) are `Err`.
pub trait Transport {
    fn get(&self, target_url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, target_url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, TransportError> {
        (**self).get(target_url, query)
    }
}

/// Append `params` to `target_url` using `application/x-www-form-urlencoded`
/// rules. Existing query pairs are preserved and the new ones follow with `&`.
pub fn append_query(target_url: &str, params: &[(&str, &str)]) -> Result<String, TransportError> {
    let mut url = Url::parse(target_url)
        .map_err(|e| TransportError::new(format!("invalid URL '{target_url}'"), e))?;
    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params.iter().copied());
    }
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_query_adds_question_mark() {
        let url = append_query("https://api.example.test/Road/A2", &[("appKey", "123456")]).unwrap();
        assert_eq!(url, "https://api.example.test/Road/A2?appKey=123456");
    }

    #[test]
    fn append_query_joins_onto_existing_query() {
        let url = append_query(
            "https://api.example.test/Road/A2?detail=true",
            &[("appKey", "123456")],
        )
        .unwrap();
        assert_eq!(url, "https://api.example.test/Road/A2?detail=true&appKey=123456");
    }

    #[test]
    fn append_query_encodes_keys_and_values() {
        let url = append_query("https://api.example.test/Road/", &[("app key", "a&b=c/d")]).unwrap();
        assert_eq!(url, "https://api.example.test/Road/?app+key=a%26b%3Dc%2Fd");
    }

    #[test]
    fn append_query_keeps_comma_separated_path() {
        let url = append_query("https://api.example.test/Road/A2,A20", &[("appKey", "k")]).unwrap();
        assert_eq!(url, "https://api.example.test/Road/A2,A20?appKey=k");
    }

    #[test]
    fn append_query_without_params_leaves_url_alone() {
        let url = append_query("https://api.example.test/Road/", &[]).unwrap();
        assert_eq!(url, "https://api.example.test/Road/");
    }

    #[test]
    fn append_query_rejects_relative_url() {
        let err = append_query("/Road/A2", &[("appKey", "k")]).unwrap_err();
        assert!(err.to_string().contains("invalid URL '/Road/A2'"));
    }

    #[test]
    fn success_range_is_2xx() {
        let mut response = HttpResponse {
            status: 200,
            reason: "OK".to_string(),
            body: Vec::new(),
        };
        assert!(response.is_success());
        response.status = 299;
        assert!(response.is_success());
        response.status = 304;
        assert!(!response.is_success());
        response.status = 199;
        assert!(!response.is_success());
    }
}
