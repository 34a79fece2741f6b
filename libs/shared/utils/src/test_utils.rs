use std::net::{IpAddr, Ipv4Addr};

use axum::{
    body::Body,
    http::{header, Method, Request, Response},
};
use serde_json::Value;

use shared_config::AppConfig;
use shared_models::session::UserType;

use crate::session::SessionHandle;

pub struct TestConfig {
    pub server_port: u16,
    pub seed_sample_data: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            server_port: 0,
            seed_sample_data: false,
        }
    }
}

impl TestConfig {
    pub fn seeded() -> Self {
        Self {
            seed_sample_data: true,
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            server_host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            server_port: self.server_port,
            seed_sample_data: self.seed_sample_data,
        }
    }
}

pub struct TestSession;

impl TestSession {
    pub async fn patient() -> SessionHandle {
        Self::logged_in(UserType::Patient).await
    }

    pub async fn doctor() -> SessionHandle {
        Self::logged_in(UserType::Doctor).await
    }

    pub async fn logged_in(user_type: UserType) -> SessionHandle {
        let session = SessionHandle::new();
        session.login(user_type).await;
        session
    }
}

/// Builders for requests sent through `tower::ServiceExt::oneshot`.
pub struct TestRequest;

impl TestRequest {
    pub fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    pub fn post(uri: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    pub fn json(method: Method, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }
}

pub async fn read_json(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}
