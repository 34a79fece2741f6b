use std::sync::Arc;

use axum::{
    Router,
    routing::get,
    middleware,
};

use shared_utils::extractor::require_login;
use shared_utils::SessionHandle;

use crate::handlers;
use crate::services::PrescriptionCatalog;

pub fn prescription_routes(catalog: Arc<dyn PrescriptionCatalog>, session: SessionHandle) -> Router {
    Router::new()
        .route("/", get(handlers::list_prescriptions))
        .route("/{prescription_id}", get(handlers::get_prescription))
        .layer(middleware::from_fn_with_state(session, require_login))
        .with_state(catalog)
}
