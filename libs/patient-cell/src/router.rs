use std::sync::Arc;

use axum::{
    Router,
    routing::get,
    middleware,
};

use shared_utils::extractor::require_login;
use shared_utils::SessionHandle;

use crate::handlers;
use crate::services::ProfileService;

pub fn profile_routes(profiles: Arc<ProfileService>, session: SessionHandle) -> Router {
    Router::new()
        .route("/", get(handlers::get_profile).put(handlers::update_profile))
        .layer(middleware::from_fn_with_state(session, require_login))
        .with_state(profiles)
}
