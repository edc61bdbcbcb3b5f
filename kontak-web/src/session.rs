//! Cookie-carried session token
//!
//! The session is nothing more than a random token in the `kontak_sid`
//! cookie. It keys the flash store; nothing else is stored per session.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::fmt;
use std::time::Duration;
use tracing::warn;
use uuid::Uuid;

use crate::AppState;

/// Session cookie name
pub const SESSION_COOKIE: &str = "kontak_sid";

/// Opaque session token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Mint a fresh random token
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Accept only tokens this server could have minted
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw)
            .ok()
            .map(|id| Self(id.simple().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `Set-Cookie` value refreshing this session for `ttl`
    pub fn cookie(&self, ttl: Duration) -> String {
        format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            SESSION_COOKIE,
            self.0,
            ttl.as_secs()
        )
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Find a well-formed session token among the request cookies
pub fn session_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .filter(|(name, _)| *name == SESSION_COOKIE)
        .find_map(|(_, value)| SessionId::parse(value.trim()))
}

/// Attach a [`SessionId`] to every request and refresh its cookie
///
/// Handlers read the token with `Extension<SessionId>`.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let session = session_from_headers(request.headers()).unwrap_or_else(SessionId::generate);
    request.extensions_mut().insert(session.clone());

    let mut response = next.run(request).await;

    match HeaderValue::from_str(&session.cookie(state.flash.ttl())) {
        Ok(value) => {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
        Err(e) => warn!("Failed to build session cookie: {}", e),
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn test_generated_tokens_differ() {
        assert_ne!(SessionId::generate(), SessionId::generate());
    }

    #[test]
    fn test_parse_round_trip() {
        let session = SessionId::generate();
        assert_eq!(SessionId::parse(session.as_str()), Some(session));
        assert_eq!(SessionId::parse("garbage"), None);
    }

    #[test]
    fn test_finds_session_among_other_cookies() {
        let session = SessionId::generate();
        let map = headers(&format!("theme=dark; {}={}; lang=id", SESSION_COOKIE, session));
        assert_eq!(session_from_headers(&map), Some(session));
    }

    #[test]
    fn test_ignores_malformed_token() {
        let map = headers(&format!("{}=not-a-token", SESSION_COOKIE));
        assert_eq!(session_from_headers(&map), None);
        assert_eq!(session_from_headers(&HeaderMap::new()), None);
    }

    #[test]
    fn test_cookie_attributes() {
        let session = SessionId::generate();
        let cookie = session.cookie(Duration::from_secs(120));

        assert!(cookie.starts_with(&format!("{}={};", SESSION_COOKIE, session)));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Max-Age=120"));
    }
}
