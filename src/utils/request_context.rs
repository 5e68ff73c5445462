//! Request context extraction from HTTP request parts.

use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, Uri, header, request::Parts};

use crate::error::AppError;
use crate::state::AppState;

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";
const X_FORWARDED_HOST: &str = "x-forwarded-host";

/// Where the current request was addressed to.
///
/// Carries everything [`crate::utils::url_builder::build_url`] needs to root
/// links at the caller's view of this service. Built fresh per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// `http` or `https`.
    pub protocol: String,
    /// Host header value, port included.
    pub host: String,
    /// Mount path of the API router (for example `/api`).
    pub base_path: String,
}

impl RequestContext {
    pub fn new(
        protocol: impl Into<String>,
        host: impl Into<String>,
        base_path: impl Into<String>,
    ) -> Self {
        Self {
            protocol: protocol.into(),
            host: host.into(),
            base_path: base_path.into(),
        }
    }

    /// Resolves protocol and host from request headers.
    ///
    /// The `Host` header is used when present, otherwise the URI authority
    /// (HTTP/2 requests carry `:authority` instead). Forwarding headers are
    /// honoured only when `behind_proxy` is set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if no host can be determined or the
    /// header contains invalid UTF-8.
    pub fn from_headers(
        headers: &HeaderMap,
        uri: &Uri,
        base_path: &str,
        behind_proxy: bool,
    ) -> Result<Self, AppError> {
        let forwarded_host = behind_proxy
            .then(|| first_forwarded_value(headers, X_FORWARDED_HOST))
            .flatten();

        let host = match forwarded_host {
            Some(host) => host,
            None => match headers.get(header::HOST) {
                Some(value) => value
                    .to_str()
                    .map_err(|_| AppError::bad_request("Invalid Host header"))?
                    .to_string(),
                None => uri
                    .authority()
                    .map(|authority| authority.to_string())
                    .ok_or_else(|| AppError::bad_request("Missing Host header"))?,
            },
        };

        if host.is_empty() {
            return Err(AppError::bad_request("Missing Host header"));
        }

        let protocol = behind_proxy
            .then(|| first_forwarded_value(headers, X_FORWARDED_PROTO))
            .flatten()
            .map(|proto| proto.to_ascii_lowercase())
            .unwrap_or_else(|| "http".to_string());

        Ok(Self::new(protocol, host, base_path))
    }
}

/// First comma-separated value of a forwarding header, if non-empty.
fn first_forwarded_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        Self::from_headers(
            &parts.headers,
            &parts.uri,
            &state.base_path,
            state.behind_proxy,
        )
    }
}
