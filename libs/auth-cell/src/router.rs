use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers::{self, AuthState};

pub fn auth_routes(state: AuthState) -> Router {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/logout", post(handlers::logout))
        .route("/session", get(handlers::get_session))
        .with_state(state)
}
