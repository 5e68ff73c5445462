//! Absolute URL construction for hypermedia links.
//!
//! Every link this service emits is rooted at the incoming request's
//! protocol, host and mount path, so responses stay valid behind proxies and
//! under any configured base path.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::utils::request_context::RequestContext;

/// Characters left as-is when encoding a path segment or a query component.
///
/// Matches the unreserved set of `encodeURIComponent`: alphanumerics and
/// `- _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds `{protocol}://{host}/{base_path}/{subpath}`.
///
/// Slashes between the parts are normalized: empty segments are dropped, so
/// the result never contains `//` outside the scheme separator and never
/// loses the base path. A trailing slash on `subpath` is kept.
///
/// # Examples
///
/// ```ignore
/// let ctx = RequestContext::new("https", "example.com", "/api/");
/// assert_eq!(build_url(&ctx, "/apps/"), "https://example.com/api/apps/");
/// assert_eq!(build_url(&ctx, "apps/com.x"), "https://example.com/api/apps/com.x");
/// ```
pub fn build_url(ctx: &RequestContext, subpath: &str) -> String {
    let segments: Vec<&str> = [ctx.host.as_str(), ctx.base_path.as_str(), subpath]
        .iter()
        .flat_map(|part| part.split('/'))
        .filter(|segment| !segment.is_empty())
        .collect();

    let mut url = format!("{}://{}", ctx.protocol, segments.join("/"));
    if subpath.ends_with('/') && segments.len() > 1 {
        url.push('/');
    }
    url
}

/// Builds an absolute URL with a pre-rendered query string appended.
///
/// An empty query produces the bare URL without a `?`.
pub fn build_url_with_query(ctx: &RequestContext, subpath: &str, query: &str) -> String {
    let url = build_url(ctx, subpath);
    if query.is_empty() {
        url
    } else {
        format!("{url}?{query}")
    }
}

/// Percent-encodes a value for use as a single path segment or as a query
/// key or value. Spaces become `%20`.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}
