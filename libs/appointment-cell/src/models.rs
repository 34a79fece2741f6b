use serde::{Deserialize, Serialize};
use std::fmt;

use doctor_cell::DoctorError;
use prescription_cell::{Prescription, PrescriptionError};

pub type AppointmentId = u64;

/// Appointment ids are `APPOINTMENT_ID_BASE + count + 1`.
pub const APPOINTMENT_ID_BASE: AppointmentId = 100;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Appointment {
    pub id: AppointmentId,
    pub date: String,
    pub time: String,
    pub doctor_name: String,
    pub hospital_name: String,
    pub patient_name: String,
    pub symptoms: Option<String>,
    pub observations: Option<String>,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Accepted,
    Canceled,
    Completed,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "pending"),
            AppointmentStatus::Accepted => write!(f, "accepted"),
            AppointmentStatus::Canceled => write!(f, "canceled"),
            AppointmentStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Details for `AppointmentStore::create`.
///
/// Carries neither an id nor a status: the store assigns the id and every
/// new appointment starts out `pending`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewAppointment {
    pub date: String,
    pub time: String,
    pub doctor_name: String,
    pub hospital_name: String,
    pub patient_name: String,
    pub symptoms: Option<String>,
    pub observations: Option<String>,
}

impl NewAppointment {
    pub fn into_appointment(self, id: AppointmentId) -> Appointment {
        Appointment {
            id,
            date: self.date,
            time: self.time,
            doctor_name: self.doctor_name,
            hospital_name: self.hospital_name,
            patient_name: self.patient_name,
            symptoms: self.symptoms,
            observations: self.observations,
            status: AppointmentStatus::Pending,
        }
    }
}

/// A doctor's answer to a pending appointment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentDecision {
    Accepted,
    Canceled,
}

impl AppointmentDecision {
    pub fn target_status(self) -> AppointmentStatus {
        match self {
            AppointmentDecision::Accepted => AppointmentStatus::Accepted,
            AppointmentDecision::Canceled => AppointmentStatus::Canceled,
        }
    }
}

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub doctor_name: String,
    pub hospital_name: String,
    pub date: String,
    pub time: String,
    pub symptoms: Option<String>,
    pub observations: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteAppointmentRequest {
    pub diagnosis: String,
    #[serde(default)]
    pub medicines: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppointmentSearchQuery {
    pub q: Option<String>,
    pub status: Option<AppointmentStatus>,
}

impl AppointmentSearchQuery {
    /// Matches on the decimal id or, case-insensitively, the patient name.
    pub fn matches(&self, appointment: &Appointment) -> bool {
        if let Some(status) = self.status {
            if appointment.status != status {
                return false;
            }
        }

        match self.q.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                appointment.id.to_string().contains(term)
                    || appointment
                        .patient_name
                        .to_lowercase()
                        .contains(&term.to_lowercase())
            }
        }
    }
}

/// Result of completing an appointment: both halves of the one logical write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompletionResult {
    pub appointment: Appointment,
    pub prescription: Prescription,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
pub enum AppointmentError {
    #[error("Appointment not found: {0}")]
    NotFound(AppointmentId),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Appointment cannot move from {from} to {to}")]
    InvalidStatusTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },

    #[error("Doctor not found: {0}")]
    DoctorNotFound(String),

    #[error("Hospital not found: {0}")]
    HospitalNotFound(String),

    #[error("{doctor} is not available at {time}")]
    SlotNotAvailable { doctor: String, time: String },
}

impl From<PrescriptionError> for AppointmentError {
    fn from(error: PrescriptionError) -> Self {
        match error {
            PrescriptionError::ValidationFailed(msg) => AppointmentError::ValidationFailed(msg),
            PrescriptionError::NotFound(_) => AppointmentError::ValidationFailed(error.to_string()),
        }
    }
}

impl From<DoctorError> for AppointmentError {
    fn from(error: DoctorError) -> Self {
        match error {
            DoctorError::NotFound(name) => AppointmentError::DoctorNotFound(name),
            DoctorError::HospitalNotFound(name) => AppointmentError::HospitalNotFound(name),
        }
    }
}
