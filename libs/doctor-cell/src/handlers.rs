use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use shared_models::error::AppError;

use crate::models::{AvailableHoursResponse, Doctor, DoctorError, Hospital, SupportInfo};
use crate::services::ReferenceDirectory;

pub async fn list_doctors(
    State(directory): State<Arc<ReferenceDirectory>>,
) -> Json<Vec<Doctor>> {
    debug!("Listing doctors");
    Json(directory.doctors().to_vec())
}

pub async fn get_available_hours(
    State(directory): State<Arc<ReferenceDirectory>>,
    Path(doctor_name): Path<String>,
) -> Result<Json<AvailableHoursResponse>, AppError> {
    let doctor = directory.find_doctor(&doctor_name).map_err(map_doctor_error)?;

    Ok(Json(AvailableHoursResponse {
        doctor_name: doctor.name.clone(),
        specialty: doctor.specialty.clone(),
        available_hours: doctor.available_hours.clone(),
    }))
}

pub async fn list_hospitals(
    State(directory): State<Arc<ReferenceDirectory>>,
) -> Json<Vec<Hospital>> {
    debug!("Listing hospitals");
    Json(directory.hospitals().to_vec())
}

pub async fn get_support(
    State(directory): State<Arc<ReferenceDirectory>>,
) -> Json<SupportInfo> {
    Json(directory.support().clone())
}

fn map_doctor_error(error: DoctorError) -> AppError {
    match error {
        DoctorError::NotFound(_) | DoctorError::HospitalNotFound(_) => AppError::NotFound(error.to_string()),
    }
}
