use std::sync::Arc;
use axum::{
    extract::State,
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::models::{PatientError, UpdateProfileRequest};
use crate::services::ProfileService;

pub async fn get_profile(
    State(profiles): State<Arc<ProfileService>>,
) -> Result<Json<Value>, AppError> {
    let profile = profiles.current().await;
    Ok(Json(json!(profile)))
}

pub async fn update_profile(
    State(profiles): State<Arc<ProfileService>>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<Value>, AppError> {
    let profile = profiles.update(request)
        .await
        .map_err(map_patient_error)?;

    Ok(Json(json!({
        "profile": profile,
        "message": "Profile updated successfully"
    })))
}

pub fn map_patient_error(error: PatientError) -> AppError {
    match error {
        PatientError::ValidationError(msg) => AppError::ValidationError(msg),
        PatientError::PasswordMismatch => AppError::ValidationError(error.to_string()),
    }
}
