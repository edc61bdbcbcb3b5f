//! Shared helpers for kontak-web integration tests

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
};
use kontak_common::db::init_memory_database;
use kontak_web::{build_app, flash::FlashStore, App, AppState};
use std::time::Duration;
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: App over a fresh in-memory database
pub async fn setup_app() -> (App, AppState) {
    let db = init_memory_database()
        .await
        .expect("Should open in-memory database");
    let state = AppState::new(db, FlashStore::new(Duration::from_secs(60)));
    (build_app(state.clone()), state)
}

/// Test helper: GET request, optionally carrying a session cookie
pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

/// Test helper: url-encoded form submission
pub fn form(method: &str, uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Test helper: send one request through a clone of the app
pub async fn send(app: &App, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

/// Test helper: extract text body from response
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Body should be UTF-8")
}

/// Test helper: `name=value` pair of the session cookie set by a response
pub fn session_cookie(response: &Response<Body>) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("Response should set the session cookie")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

/// Test helper: assert a 303 redirect to `location`
pub fn assert_redirect(response: &Response<Body>, location: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], location);
}

/// Test helper: render the list page for `cookie` and return its body
pub async fn list_page(app: &App, uri: &str, cookie: &str) -> String {
    let response = send(app, get(uri, Some(cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_text(response).await
}
