//! Request building
//!
//! Turns a base URI, an ordered list of path segments, a verb and a
//! [`Params`] map into a fully-formed [`ApiRequest`]. Nothing here touches
//! the network.

use crate::error::{RestError, RestResult};
use hitbtc_types::{Params, WriteOperation};
use reqwest::{Method, Url};
use tracing::warn;

/// Default HitBTC API base URI (v2)
pub const DEFAULT_BASE_URI: &str = "https://api.hitbtc.com/api/2/";

/// Content type of form-encoded request bodies
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Where a request carries its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// URL query string
    Query,
    /// Form-encoded body
    Form,
}

impl Placement {
    /// Reads (GET, DELETE) use the query string, writes use the body
    pub fn for_method(method: &Method) -> Self {
        if *method == Method::POST || *method == Method::PUT || *method == Method::PATCH {
            Self::Form
        } else {
            Self::Query
        }
    }
}

/// Parse a base URI
///
/// The URI must be absolute and usable as a base for path segments.
pub fn parse_base_uri(uri: &str) -> RestResult<Url> {
    let url = Url::parse(uri).map_err(|e| RestError::InvalidBaseUri(format!("{}: {}", uri, e)))?;

    if url.cannot_be_a_base() {
        return Err(RestError::InvalidBaseUri(format!(
            "{}: cannot carry path segments",
            uri
        )));
    }

    Ok(url)
}

/// Check the scheme of a base URI, warning if it is not HTTPS
///
/// The warning is advisory: the client keeps working against the insecure
/// endpoint. Returns whether the URI is secure.
pub fn check_uri_security(url: &Url) -> bool {
    let secure = url.scheme() == "https";

    if !secure {
        let mut suggested = url.clone();
        let suggestion = match suggested.set_scheme("https") {
            Ok(()) => suggested.to_string(),
            Err(()) => DEFAULT_BASE_URI.to_string(),
        };
        warn!(
            uri = %url,
            suggested = %suggestion,
            "Client is sending requests to an insecure API endpoint; \
             any request may expose your API key and secret to third parties"
        );
    }

    secure
}

/// Build the fully-qualified URL for an endpoint
///
/// Each segment is percent-encoded on its own, so a `/` inside a segment is
/// sent as `%2F` rather than splitting the path. With no segments the base
/// URI is returned unchanged.
///
/// Empty, `.` and `..` segments are rejected: URL normalisation would drop
/// them (`%2E` included) and shorten the path to a different endpoint.
pub fn endpoint_url(base: &Url, segments: &[&str]) -> RestResult<Url> {
    let mut url = base.clone();

    if segments.is_empty() {
        return Ok(url);
    }

    if let Some(bad) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
        return Err(RestError::InvalidPathSegment(bad.to_string()));
    }

    url.path_segments_mut()
        .map_err(|_| RestError::InvalidBaseUri(base.to_string()))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

/// Form/query-encode parameters
pub fn encode_params(params: &Params) -> RestResult<String> {
    serde_urlencoded::to_string(params).map_err(|e| RestError::InvalidParameter(e.to_string()))
}

/// Refuse a write operation whose required keys are not all present
pub fn check_required_params(operation: WriteOperation, params: &Params) -> RestResult<()> {
    let missing = operation.missing_params(params);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(RestError::ParameterRequired { operation, missing })
    }
}

/// A request ready to hand to the HTTP transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP verb
    pub method: Method,
    /// Full URL, including the query string for reads
    pub url: Url,
    /// Form-encoded body for writes
    pub body: Option<String>,
}

impl ApiRequest {
    /// Build a request for `segments` under `base`
    pub fn build(
        base: &Url,
        method: Method,
        segments: &[&str],
        params: &Params,
    ) -> RestResult<Self> {
        let mut url = endpoint_url(base, segments)?;
        let encoded = encode_params(params)?;

        let body = match Placement::for_method(&method) {
            Placement::Query => {
                if !encoded.is_empty() {
                    url.set_query(Some(&encoded));
                }
                None
            }
            Placement::Form => Some(encoded),
        };

        Ok(Self { method, url, body })
    }

    /// Path relative to `base`, as sent on the wire
    pub fn relative_path(&self, base: &Url) -> String {
        self.url
            .path()
            .strip_prefix(base.path())
            .unwrap_or(self.url.path())
            .to_string()
    }
}
