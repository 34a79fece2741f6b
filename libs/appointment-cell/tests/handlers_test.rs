use std::sync::Arc;

use axum::http::{Method, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use appointment_cell::router::appointment_routes;
use appointment_cell::*;
use doctor_cell::ReferenceDirectory;
use patient_cell::ProfileService;
use shared_models::session::UserType;
use shared_utils::test_utils::{read_json, TestRequest, TestSession};
use shared_utils::SessionHandle;

fn appointment_state() -> AppointmentState {
    let controller = Arc::new(AppointmentLifecycleController::in_memory());
    AppointmentState {
        booking: Arc::new(AppointmentBookingService::new(
            Arc::new(ReferenceDirectory::with_defaults()),
            controller.clone(),
        )),
        controller,
        profiles: Arc::new(ProfileService::default()),
    }
}

fn booking_body() -> Value {
    json!({
        "doctor_name": "Dr. García Fernández",
        "hospital_name": "Hospital Universitario",
        "date": "2025-06-01",
        "time": "10:00",
        "symptoms": "Fiebre",
        // Client-supplied id and status are ignored
        "id": 7,
        "status": "completed"
    })
}

async fn send(app: &Router, request: axum::http::Request<axum::body::Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, read_json(response).await)
}

#[tokio::test]
async fn test_listing_requires_login() {
    let app = appointment_routes(appointment_state(), SessionHandle::new());

    let response = app.oneshot(TestRequest::get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_doctor_cannot_book() {
    let app = appointment_routes(appointment_state(), TestSession::doctor().await);

    let (status, body) = send(&app, TestRequest::json(Method::POST, "/", &booking_body())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["error"].as_str().unwrap().contains("patient"));
}

#[tokio::test]
async fn test_patient_cannot_accept() {
    let state = appointment_state();
    let app = appointment_routes(state.clone(), TestSession::patient().await);

    let (status, _) = send(&app, TestRequest::json(Method::POST, "/", &booking_body())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, TestRequest::post("/101/accept")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        state.controller.find_appointment(101).await.unwrap().status,
        AppointmentStatus::Pending
    );
}

#[tokio::test]
async fn test_book_accept_complete_over_http() {
    let state = appointment_state();
    let session = TestSession::patient().await;
    let app = appointment_routes(state.clone(), session.clone());

    let (status, body) = send(&app, TestRequest::json(Method::POST, "/", &booking_body())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["appointment"]["id"], 101);
    assert_eq!(body["appointment"]["status"], "pending");
    assert_eq!(body["appointment"]["patient_name"], "Usuario Ejemplo");

    session.login(UserType::Doctor).await;

    let (status, body) = send(&app, TestRequest::get("/status/pending")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, TestRequest::post("/101/accept")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "accepted");

    let completion = json!({
        "diagnosis": "Gripe",
        "medicines": ["Paracetamol 500mg", "", "Ibuprofeno 400mg"]
    });
    let (status, body) = send(&app, TestRequest::json(Method::POST, "/101/complete", &completion)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["appointment"]["status"], "completed");
    assert_eq!(body["prescription"]["id"], 201);
    assert_eq!(
        body["prescription"]["medicines"],
        json!(["Paracetamol 500mg", "Ibuprofeno 400mg"])
    );

    let (_, body) = send(&app, TestRequest::get("/status/pending")).await;
    assert!(body.as_array().unwrap().is_empty());
    assert_eq!(state.controller.list_prescriptions().await.len(), 1);
}

#[tokio::test]
async fn test_complete_pending_is_conflict() {
    let state = appointment_state();
    let session = TestSession::patient().await;
    let app = appointment_routes(state.clone(), session.clone());

    send(&app, TestRequest::json(Method::POST, "/", &booking_body())).await;
    session.login(UserType::Doctor).await;

    let completion = json!({ "diagnosis": "Gripe", "medicines": ["Paracetamol 500mg"] });
    let (status, body) = send(&app, TestRequest::json(Method::POST, "/101/complete", &completion)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("pending"));
    assert!(state.controller.list_prescriptions().await.is_empty());
}

#[tokio::test]
async fn test_unknown_appointment_is_not_found() {
    let app = appointment_routes(appointment_state(), TestSession::doctor().await);

    let (status, _) = send(&app, TestRequest::get("/9999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let completion = json!({ "diagnosis": "X", "medicines": ["Y"] });
    let (status, _) = send(&app, TestRequest::json(Method::POST, "/9999/complete", &completion)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_booking_unavailable_hour_is_bad_request() {
    let app = appointment_routes(appointment_state(), TestSession::patient().await);

    let mut body = booking_body();
    body["time"] = json!("18:00");
    let (status, body) = send(&app, TestRequest::json(Method::POST, "/", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("18:00"));
}

#[tokio::test]
async fn test_search_filters_by_name_and_status() {
    let state = appointment_state();
    let app = appointment_routes(state.clone(), TestSession::patient().await);

    send(&app, TestRequest::json(Method::POST, "/", &booking_body())).await;
    state
        .controller
        .accept_or_cancel(101, AppointmentDecision::Canceled)
        .await
        .unwrap();
    send(&app, TestRequest::json(Method::POST, "/", &booking_body())).await;

    let (_, body) = send(&app, TestRequest::get("/?q=usuario")).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = send(&app, TestRequest::get("/?q=usuario&status=canceled")).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], 101);

    let (_, body) = send(&app, TestRequest::get("/?q=102")).await;
    assert_eq!(body[0]["id"], 102);
}
