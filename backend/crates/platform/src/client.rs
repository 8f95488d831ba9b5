//! Client request utilities
//!
//! Works out the public origin (`scheme://host[:port]`) a browser used to reach
//! us, so that redirect targets point back at the same place. Reverse proxies
//! report the original scheme/host in `X-Forwarded-Proto` / `X-Forwarded-Host`;
//! any client can send those too, so they are only read when the deployment
//! says a proxy overwrites them.

use axum::http::{HeaderMap, header};
use url::Url;

/// Error when determining the request origin
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OriginError {
    #[error("Missing required header: {0}")]
    MissingHeader(String),

    #[error("Invalid origin: {0}")]
    Invalid(String),
}

/// First entry of a comma-separated forwarding header
fn first_forwarded<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Serialize the origin of `url`, failing for opaque origins (`data:` etc.)
fn serialize_origin(url: &Url) -> Result<String, OriginError> {
    let origin = url.origin();
    if !origin.is_tuple() {
        return Err(OriginError::Invalid(url.to_string()));
    }
    Ok(origin.ascii_serialization())
}

/// Parse a configured public URL and reduce it to its origin
pub fn parse_origin(raw: &str) -> Result<String, OriginError> {
    let url = Url::parse(raw).map_err(|e| OriginError::Invalid(format!("{raw}: {e}")))?;
    serialize_origin(&url)
}

/// Extract the origin of the current request
///
/// ## Arguments
/// * `headers` - HTTP request headers
/// * `fallback` - configured public origin, used when no host header is present
/// * `trust_forwarded` - honour `X-Forwarded-*` (only behind a proxy that sets them)
///
/// ## Returns
/// Origin without trailing slash, e.g. `https://app.example.com`
pub fn extract_origin(
    headers: &HeaderMap,
    fallback: Option<&str>,
    trust_forwarded: bool,
) -> Result<String, OriginError> {
    let forwarded = |name| {
        if trust_forwarded {
            first_forwarded(headers, name)
        } else {
            None
        }
    };

    let scheme = match forwarded("x-forwarded-proto") {
        Some(proto) if proto.eq_ignore_ascii_case("https") => "https",
        _ => "http",
    };

    let host = forwarded("x-forwarded-host").or_else(|| {
        headers
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    });

    let Some(host) = host else {
        return match fallback {
            Some(origin) => parse_origin(origin),
            None => Err(OriginError::MissingHeader("Host".to_string())),
        };
    };

    // A host header must not smuggle a path, query or credentials into the redirect target
    if host.contains(['/', '?', '#', '@', '\\']) {
        return Err(OriginError::Invalid(host.to_string()));
    }

    let url = Url::parse(&format!("{scheme}://{host}"))
        .map_err(|e| OriginError::Invalid(format!("{host}: {e}")))?;
    serialize_origin(&url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_origin_from_host() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:8000"));

        assert_eq!(
            extract_origin(&headers, None, false).unwrap(),
            "http://localhost:8000"
        );
    }

    #[test]
    fn test_origin_from_forwarded_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("10.0.0.5:8000"));
        headers.insert("x-forwarded-proto", HeaderValue::from_static("https, http"));
        headers.insert(
            "x-forwarded-host",
            HeaderValue::from_static("app.example.com, proxy.internal"),
        );

        assert_eq!(
            extract_origin(&headers, None, true).unwrap(),
            "https://app.example.com"
        );
    }

    #[test]
    fn test_forwarded_headers_ignored_unless_trusted() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:8000"));
        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));
        headers.insert("x-forwarded-host", HeaderValue::from_static("evil.example.com"));

        assert_eq!(
            extract_origin(&headers, None, false).unwrap(),
            "http://localhost:8000"
        );
    }

    #[test]
    fn test_origin_drops_default_port() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("example.com:80"));

        assert_eq!(extract_origin(&headers, None, false).unwrap(), "http://example.com");
    }

    #[test]
    fn test_origin_fallback() {
        let headers = HeaderMap::new();

        assert_eq!(
            extract_origin(&headers, Some("https://public.example.com/app/"), false).unwrap(),
            "https://public.example.com"
        );
        assert_eq!(
            extract_origin(&headers, None, false),
            Err(OriginError::MissingHeader("Host".to_string()))
        );
    }

    #[test]
    fn test_origin_rejects_path_in_host() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::HOST,
            HeaderValue::from_static("evil.example.com/phish"),
        );

        assert!(matches!(
            extract_origin(&headers, None, false),
            Err(OriginError::Invalid(_))
        ));
    }
}
