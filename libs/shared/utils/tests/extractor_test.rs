use axum::{
    http::{Request, StatusCode},
    body::Body,
    middleware,
    routing::get,
    Router,
};
use tower::ServiceExt;

use shared_models::session::UserType;
use shared_utils::extractor::{extract_session, require_doctor, require_login};
use shared_utils::test_utils::{read_json, TestRequest, TestSession};
use shared_utils::SessionHandle;

async fn whoami(request: Request<Body>) -> String {
    match extract_session(&request) {
        Ok(session) => session.user_type.map(|t| t.to_string()).unwrap_or_default(),
        Err(_) => "unknown".to_string(),
    }
}

fn doctor_only(session: SessionHandle) -> Router {
    Router::new()
        .route("/", get(whoami))
        .layer(middleware::from_fn_with_state(session, require_doctor))
}

fn any_user(session: SessionHandle) -> Router {
    Router::new()
        .route("/", get(whoami))
        .layer(middleware::from_fn_with_state(session, require_login))
}

#[tokio::test]
async fn test_anonymous_request_is_unauthorized() {
    let response = any_user(SessionHandle::new())
        .oneshot(TestRequest::get("/"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Login required");
}

#[tokio::test]
async fn test_patient_cannot_reach_doctor_routes() {
    let response = doctor_only(TestSession::patient().await)
        .oneshot(TestRequest::get("/"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_doctor_session_is_forwarded_to_handler() {
    let response = doctor_only(TestSession::logged_in(UserType::Doctor).await)
        .oneshot(TestRequest::get("/"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"doctor");
}

#[tokio::test]
async fn test_logout_revokes_access() {
    let session = TestSession::patient().await;
    let app = any_user(session.clone());

    let response = app.clone().oneshot(TestRequest::get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    session.logout().await;
    let response = app.oneshot(TestRequest::get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
