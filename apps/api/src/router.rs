use axum::{
    Router,
    routing::get,
};

use appointment_cell::router::appointment_routes;
use auth_cell::router::auth_routes;
use doctor_cell::router::{doctor_routes, hospital_routes, support_routes};
use patient_cell::router::profile_routes;
use prescription_cell::router::prescription_routes;

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "QuickDoc API is running!" }))
        .nest("/auth", auth_routes(state.auth_state()))
        .nest("/doctors", doctor_routes(state.directory.clone()))
        .nest("/hospitals", hospital_routes(state.directory.clone()))
        .nest("/support", support_routes(state.directory.clone()))
        .nest("/profile", profile_routes(state.profiles.clone(), state.session.clone()))
        .nest(
            "/appointments",
            appointment_routes(state.appointment_state(), state.session.clone()),
        )
        .nest(
            "/prescriptions",
            prescription_routes(state.controller.clone(), state.session.clone()),
        )
}
