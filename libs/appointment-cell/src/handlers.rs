use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use patient_cell::ProfileService;
use shared_models::error::AppError;

use crate::models::{
    Appointment, AppointmentDecision, AppointmentError, AppointmentId, AppointmentSearchQuery,
    AppointmentStatus, BookAppointmentRequest, CompleteAppointmentRequest,
};
use crate::services::{AppointmentBookingService, AppointmentLifecycleController};

#[derive(Clone)]
pub struct AppointmentState {
    pub controller: Arc<AppointmentLifecycleController>,
    pub booking: Arc<AppointmentBookingService>,
    pub profiles: Arc<ProfileService>,
}

// ==============================================================================
// PATIENT HANDLERS
// ==============================================================================

/// Book an appointment under the current profile's name
pub async fn book_appointment(
    State(state): State<AppointmentState>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let patient_name = state.profiles.display_name().await;

    let appointment = state.booking.book(request, patient_name)
        .await
        .map_err(map_appointment_error)?;

    Ok(Json(json!({
        "success": true,
        "appointment": appointment,
        "message": "Appointment requested, waiting for the doctor to accept it"
    })))
}

// ==============================================================================
// LISTING HANDLERS
// ==============================================================================

pub async fn search_appointments(
    State(state): State<AppointmentState>,
    Query(query): Query<AppointmentSearchQuery>,
) -> Json<Vec<Appointment>> {
    Json(state.controller.search(&query).await)
}

pub async fn list_by_status(
    State(state): State<AppointmentState>,
    Path(status): Path<AppointmentStatus>,
) -> Json<Vec<Appointment>> {
    Json(state.controller.list_by_status(status).await)
}

pub async fn get_appointment(
    State(state): State<AppointmentState>,
    Path(appointment_id): Path<AppointmentId>,
) -> Result<Json<Appointment>, AppError> {
    state.controller.find_appointment(appointment_id)
        .await
        .map(Json)
        .map_err(map_appointment_error)
}

// ==============================================================================
// DOCTOR HANDLERS
// ==============================================================================

pub async fn accept_appointment(
    State(state): State<AppointmentState>,
    Path(appointment_id): Path<AppointmentId>,
) -> Result<Json<Appointment>, AppError> {
    decide(&state, appointment_id, AppointmentDecision::Accepted).await
}

pub async fn cancel_appointment(
    State(state): State<AppointmentState>,
    Path(appointment_id): Path<AppointmentId>,
) -> Result<Json<Appointment>, AppError> {
    decide(&state, appointment_id, AppointmentDecision::Canceled).await
}

async fn decide(
    state: &AppointmentState,
    appointment_id: AppointmentId,
    decision: AppointmentDecision,
) -> Result<Json<Appointment>, AppError> {
    state.controller.accept_or_cancel(appointment_id, decision)
        .await
        .map(Json)
        .map_err(map_appointment_error)
}

pub async fn complete_appointment(
    State(state): State<AppointmentState>,
    Path(appointment_id): Path<AppointmentId>,
    Json(request): Json<CompleteAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let result = state.controller
        .complete_with_diagnosis(appointment_id, request.diagnosis, request.medicines)
        .await
        .map_err(map_appointment_error)?;

    Ok(Json(json!({
        "success": true,
        "appointment": result.appointment,
        "prescription": result.prescription,
    })))
}

pub fn map_appointment_error(error: AppointmentError) -> AppError {
    match error {
        AppointmentError::NotFound(_)
        | AppointmentError::DoctorNotFound(_)
        | AppointmentError::HospitalNotFound(_) => AppError::NotFound(error.to_string()),
        AppointmentError::ValidationFailed(msg) => AppError::ValidationError(msg),
        AppointmentError::InvalidStatusTransition { .. } => AppError::Conflict(error.to_string()),
        AppointmentError::SlotNotAvailable { .. } => AppError::BadRequest(error.to_string()),
    }
}
