use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use crate::handlers;
use crate::services::ReferenceDirectory;

// Reference data is public, no session required
pub fn doctor_routes(directory: Arc<ReferenceDirectory>) -> Router {
    Router::new()
        .route("/", get(handlers::list_doctors))
        .route("/{doctor_name}/available-hours", get(handlers::get_available_hours))
        .with_state(directory)
}

pub fn hospital_routes(directory: Arc<ReferenceDirectory>) -> Router {
    Router::new()
        .route("/", get(handlers::list_hospitals))
        .with_state(directory)
}

pub fn support_routes(directory: Arc<ReferenceDirectory>) -> Router {
    Router::new()
        .route("/", get(handlers::get_support))
        .with_state(directory)
}
