use axum::{
    Router,
    routing::{get, post},
    middleware,
};

use shared_utils::extractor::{require_doctor, require_login, require_patient};
use shared_utils::SessionHandle;

use crate::handlers::{self, AppointmentState};

pub fn appointment_routes(state: AppointmentState, session: SessionHandle) -> Router {
    let patient_routes = Router::new()
        .route("/", post(handlers::book_appointment))
        .layer(middleware::from_fn_with_state(session.clone(), require_patient));

    // Lifecycle actions are taken by the doctor only
    let doctor_routes = Router::new()
        .route("/{appointment_id}/accept", post(handlers::accept_appointment))
        .route("/{appointment_id}/cancel", post(handlers::cancel_appointment))
        .route("/{appointment_id}/complete", post(handlers::complete_appointment))
        .layer(middleware::from_fn_with_state(session.clone(), require_doctor));

    let shared_routes = Router::new()
        .route("/", get(handlers::search_appointments))
        .route("/status/{status}", get(handlers::list_by_status))
        .route("/{appointment_id}", get(handlers::get_appointment))
        .layer(middleware::from_fn_with_state(session, require_login));

    Router::new()
        .merge(patient_routes)
        .merge(doctor_routes)
        .merge(shared_routes)
        .with_state(state)
}
