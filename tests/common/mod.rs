//! Shared helpers for HTTP integration tests.
//!
//! Each test gets its own temporary directory holding the SQLite file,
//! static files and uploads, and drives the real router in-process.

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response, StatusCode},
    Router,
};
use tempfile::TempDir;
use tower::ServiceExt;

use justice_cloud::{commands::serve::build_state, create_router, Config};

pub const SECRET: &str = "integration-test-session-secret-32+";
pub const BOUNDARY: &str = "----justice-test-boundary";

pub struct TestApp {
    pub router: Router,
    pub config: Config,
    /// Session cookie (`name=value`) as a browser would hold it
    pub cookie: Option<String>,
    _dir: TempDir,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::local(dir.path(), SECRET);
        let state = build_state(config.clone()).await.unwrap();

        Self {
            router: create_router(state),
            config,
            cookie: None,
            _dir: dir,
        }
    }

    /// Send a request with the current cookie and remember any cookie change.
    pub async fn send(&mut self, builder: axum::http::request::Builder, body: Body) -> Response<Body> {
        let builder = match &self.cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie),
            None => builder,
        };
        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let set_cookie = set_cookie.to_str().unwrap();
            let pair = set_cookie.split(';').next().unwrap().trim();
            let cleared = pair.ends_with('=') || set_cookie.contains("Max-Age=0");
            self.cookie = (!cleared).then(|| pair.to_string());
        }

        response
    }

    pub async fn get(&mut self, uri: &str) -> Response<Body> {
        self.send(Request::get(uri), Body::empty()).await
    }

    pub async fn post_form(&mut self, uri: &str, form: &str) -> Response<Body> {
        let builder = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        self.send(builder, Body::from(form.to_string())).await
    }

    pub async fn post_multipart(&mut self, uri: &str, body: Vec<u8>) -> Response<Body> {
        let builder = Request::post(uri).header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        );
        self.send(builder, Body::from(body)).await
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Response<Body> {
        self.post_form(
            "/login",
            &format!("username={}&password={}", username, password),
        )
        .await
    }

    pub async fn add_case(&mut self, number: &str, status: &str) {
        let response = self
            .post_form(
                "/add_case",
                &format!(
                    "case_number={}&client_name=Jane+Doe&case_type=Civil&hearing_date=2024-05-01&status={}",
                    number, status
                ),
            )
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }
}

/// Multipart body with text fields and an optional `file` part.
pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                BOUNDARY, file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
