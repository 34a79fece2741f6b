use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, warn};

use doctor_cell::ReferenceDirectory;

use crate::models::{Appointment, AppointmentError, BookAppointmentRequest, NewAppointment};
use crate::services::controller::AppointmentLifecycleController;

pub struct AppointmentBookingService {
    directory: Arc<ReferenceDirectory>,
    controller: Arc<AppointmentLifecycleController>,
}

impl AppointmentBookingService {
    pub fn new(
        directory: Arc<ReferenceDirectory>,
        controller: Arc<AppointmentLifecycleController>,
    ) -> Self {
        Self { directory, controller }
    }

    /// Validates the request against the reference directory, then stores
    /// the appointment as `pending` under the given patient's name.
    pub async fn book(
        &self,
        request: BookAppointmentRequest,
        patient_name: String,
    ) -> Result<Appointment, AppointmentError> {
        debug!("Booking request for {} with {}", patient_name, request.doctor_name);

        if patient_name.trim().is_empty() {
            return Err(AppointmentError::ValidationFailed(
                "Patient name is required".to_string(),
            ));
        }
        self.validate_request(&request)?;

        let details = NewAppointment {
            date: request.date,
            time: request.time,
            doctor_name: request.doctor_name,
            hospital_name: request.hospital_name,
            patient_name,
            symptoms: non_blank(request.symptoms),
            observations: non_blank(request.observations),
        };

        Ok(self.controller.create_appointment(details).await)
    }

    pub fn validate_request(&self, request: &BookAppointmentRequest) -> Result<(), AppointmentError> {
        NaiveDate::parse_from_str(&request.date, "%Y-%m-%d").map_err(|_| {
            AppointmentError::ValidationFailed(format!(
                "Invalid date '{}', expected YYYY-MM-DD",
                request.date
            ))
        })?;

        NaiveTime::parse_from_str(&request.time, "%H:%M").map_err(|_| {
            AppointmentError::ValidationFailed(format!(
                "Invalid time '{}', expected HH:MM",
                request.time
            ))
        })?;

        let doctor = self.directory.find_doctor(&request.doctor_name)?;
        self.directory.find_hospital(&request.hospital_name)?;

        if !doctor.is_available_at(&request.time) {
            warn!("{} has no slot at {}", doctor.name, request.time);
            return Err(AppointmentError::SlotNotAvailable {
                doctor: doctor.name.clone(),
                time: request.time.clone(),
            });
        }

        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
