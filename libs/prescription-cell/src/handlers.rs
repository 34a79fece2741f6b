use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use shared_models::error::AppError;

use crate::models::{Prescription, PrescriptionError, PrescriptionId};
use crate::services::PrescriptionCatalog;

#[derive(Debug, Deserialize)]
pub struct PrescriptionQueryParams {
    pub patient_name: Option<String>,
}

pub async fn list_prescriptions(
    State(catalog): State<Arc<dyn PrescriptionCatalog>>,
    Query(params): Query<PrescriptionQueryParams>,
) -> Json<Vec<Prescription>> {
    let mut prescriptions = catalog.list_prescriptions().await;

    if let Some(patient_name) = params.patient_name.filter(|name| !name.trim().is_empty()) {
        prescriptions.retain(|prescription| prescription.patient_name == patient_name);
    }

    Json(prescriptions)
}

pub async fn get_prescription(
    State(catalog): State<Arc<dyn PrescriptionCatalog>>,
    Path(prescription_id): Path<PrescriptionId>,
) -> Result<Json<Prescription>, AppError> {
    catalog
        .find_prescription(prescription_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(PrescriptionError::NotFound(prescription_id).to_string()))
}
