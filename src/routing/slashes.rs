//! Trailing-slash redirects.
//!
//! # Responsibilities
//! - Match a path against the registered route templates
//! - Redirect unmatched paths whose slash-toggled form is routable
//!
//! # Design Decisions
//! - Templates are matched segment by segment; `{param}` matches any
//!   non-empty segment, everything else is compared exactly
//! - Method is ignored: a path that exists for another method still
//!   redirects, and the 307 preserves method and body
//! - `/` is never toggled

use std::sync::Arc;

use axum::{
    http::{header, HeaderMap, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use crate::http::response::not_found;

/// The path templates a router serves.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    templates: Vec<String>,
}

impl RouteTable {
    pub fn new<I, P>(templates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            templates: templates.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if any template matches `path`.
    pub fn matches(&self, path: &str) -> bool {
        self.templates
            .iter()
            .any(|template| template_matches(template, path))
    }
}

fn template_matches(template: &str, path: &str) -> bool {
    let mut expected = template.split('/');
    let mut actual = path.split('/');
    loop {
        match (expected.next(), actual.next()) {
            (None, None) => return true,
            (Some(t), Some(p)) if is_param(t) => {
                if p.is_empty() {
                    return false;
                }
            }
            (Some(t), Some(p)) if t == p => {}
            _ => return false,
        }
    }
}

fn is_param(segment: &str) -> bool {
    segment.len() > 2 && segment.starts_with('{') && segment.ends_with('}')
}

/// `path` with its trailing slash added or removed.
fn toggle_trailing_slash(path: &str) -> Option<String> {
    if path == "/" {
        return None;
    }
    Some(match path.strip_suffix('/') {
        Some(stripped) => stripped.to_string(),
        None => format!("{path}/"),
    })
}

/// Absolute redirect target for `path`, keeping the query string.
///
/// Falls back to a relative target when the request names no host.
fn redirect_target(uri: &Uri, headers: &HeaderMap, path: &str) -> String {
    let host = uri
        .authority()
        .map(|authority| authority.as_str())
        .or_else(|| headers.get(header::HOST).and_then(|h| h.to_str().ok()));

    let mut target = match host {
        Some(host) => format!("{}://{}{}", uri.scheme_str().unwrap_or("http"), host, path),
        None => path.to_string(),
    };
    if let Some(query) = uri.query() {
        target.push('?');
        target.push_str(query);
    }
    target
}

/// Fallback for requests that match no route.
///
/// Answers `307 Temporary Redirect` when toggling the trailing slash yields a
/// routable path, otherwise the JSON 404.
pub async fn redirect_slashes(routes: Arc<RouteTable>, uri: Uri, headers: HeaderMap) -> Response {
    let Some(path) = toggle_trailing_slash(uri.path()).filter(|path| routes.matches(path)) else {
        return not_found().await.into_response();
    };

    match HeaderValue::from_str(&redirect_target(&uri, &headers, &path)) {
        Ok(location) => {
            tracing::debug!(from = %uri.path(), to = %path, "Redirecting to toggled trailing slash");
            (StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response()
        }
        Err(_) => not_found().await.into_response(),
    }
}
