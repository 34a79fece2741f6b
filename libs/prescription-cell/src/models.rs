use serde::{Deserialize, Serialize};

pub type PrescriptionId = u64;

/// Prescription ids are `PRESCRIPTION_ID_BASE + count + 1`.
pub const PRESCRIPTION_ID_BASE: PrescriptionId = 200;

/// A diagnosis with its medication, issued once when an appointment is completed.
///
/// `date`, `doctor_name` and `patient_name` are a snapshot of the source
/// appointment taken at completion time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Prescription {
    pub id: PrescriptionId,
    pub date: String,
    pub doctor_name: String,
    pub patient_name: String,
    pub diagnosis: String,
    pub medicines: Vec<String>,
}

/// Validated input for `PrescriptionStore::create`.
///
/// Only constructible through [`NewPrescription::new`], so a stored
/// prescription always has a diagnosis and at least one medicine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPrescription {
    date: String,
    doctor_name: String,
    patient_name: String,
    diagnosis: String,
    medicines: Vec<String>,
}

impl NewPrescription {
    pub fn new(
        date: impl Into<String>,
        doctor_name: impl Into<String>,
        patient_name: impl Into<String>,
        diagnosis: impl Into<String>,
        medicines: Vec<String>,
    ) -> Result<Self, PrescriptionError> {
        let diagnosis = diagnosis.into();
        if diagnosis.trim().is_empty() {
            return Err(PrescriptionError::ValidationFailed(
                "Diagnosis is required".to_string(),
            ));
        }

        let medicines = filter_medicines(medicines);
        if medicines.is_empty() {
            return Err(PrescriptionError::ValidationFailed(
                "At least one medicine is required".to_string(),
            ));
        }

        Ok(Self {
            date: date.into(),
            doctor_name: doctor_name.into(),
            patient_name: patient_name.into(),
            diagnosis,
            medicines,
        })
    }

    pub fn into_prescription(self, id: PrescriptionId) -> Prescription {
        Prescription {
            id,
            date: self.date,
            doctor_name: self.doctor_name,
            patient_name: self.patient_name,
            diagnosis: self.diagnosis,
            medicines: self.medicines,
        }
    }
}

/// Drops empty and whitespace-only entries, keeping the order of the rest.
pub fn filter_medicines(medicines: Vec<String>) -> Vec<String> {
    medicines
        .into_iter()
        .filter(|medicine| !medicine.trim().is_empty())
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
pub enum PrescriptionError {
    #[error("Prescription not found: {0}")]
    NotFound(PrescriptionId),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn blank_medicines_are_dropped_in_order() {
        let filtered = filter_medicines(strings(&["", "Paracetamol 500mg", "  ", "Ibuprofeno 400mg"]));
        assert_eq!(filtered, strings(&["Paracetamol 500mg", "Ibuprofeno 400mg"]));
    }

    #[test]
    fn blank_diagnosis_is_rejected() {
        let result = NewPrescription::new("2025-06-01", "Dr. X", "Ana", "   ", strings(&["Y"]));
        assert_eq!(
            result,
            Err(PrescriptionError::ValidationFailed("Diagnosis is required".to_string()))
        );
    }

    #[test]
    fn all_blank_medicines_are_rejected() {
        let result = NewPrescription::new("2025-06-01", "Dr. X", "Ana", "Flu", strings(&["", " "]));
        assert!(matches!(result, Err(PrescriptionError::ValidationFailed(_))));
    }

    #[test]
    fn into_prescription_keeps_snapshot_fields() {
        let prescription = NewPrescription::new("2025-06-01", "Dr. X", "Ana", "Flu", strings(&["Y"]))
            .unwrap()
            .into_prescription(201);

        assert_eq!(prescription.id, 201);
        assert_eq!(prescription.date, "2025-06-01");
        assert_eq!(prescription.doctor_name, "Dr. X");
        assert_eq!(prescription.patient_name, "Ana");
        assert_eq!(prescription.medicines, strings(&["Y"]));
    }
}
