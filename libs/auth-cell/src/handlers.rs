use std::sync::Arc;

use axum::{
    extract::{State, Json},
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use patient_cell::handlers::map_patient_error;
use patient_cell::{ProfileService, RegisterRequest};
use shared_models::error::AppError;
use shared_models::session::{Session, UserType};
use shared_utils::SessionHandle;

#[derive(Clone)]
pub struct AuthState {
    pub session: SessionHandle,
    pub profiles: Arc<ProfileService>,
}

// Credentials are accepted but not checked; login only opens the session
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub user_type: UserType,
    pub email: Option<String>,
    pub password: Option<String>,
    pub license_number: Option<String>,
}

pub async fn register(
    State(state): State<AuthState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<Value>, AppError> {
    let profile = state.profiles.register(request)
        .await
        .map_err(map_patient_error)?;

    let session = state.session.login(UserType::Patient).await;

    Ok(Json(json!({
        "session": session,
        "profile": profile,
    })))
}

pub async fn login(
    State(state): State<AuthState>,
    Json(request): Json<LoginRequest>,
) -> Json<Session> {
    debug!("Login requested as {}", request.user_type);
    Json(state.session.login(request.user_type).await)
}

pub async fn logout(State(state): State<AuthState>) -> Json<Session> {
    Json(state.session.logout().await)
}

pub async fn get_session(State(state): State<AuthState>) -> Json<Session> {
    Json(state.session.current().await)
}
