use tracing::{debug, warn};

use crate::models::{Doctor, DoctorError, Hospital, SupportInfo};

/// Doctors and hospitals known to the clinic. Immutable once built.
#[derive(Debug, Clone)]
pub struct ReferenceDirectory {
    doctors: Vec<Doctor>,
    hospitals: Vec<Hospital>,
    support: SupportInfo,
}

impl Default for ReferenceDirectory {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ReferenceDirectory {
    pub fn new(doctors: Vec<Doctor>, hospitals: Vec<Hospital>) -> Self {
        Self {
            doctors,
            hospitals,
            support: SupportInfo::default(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(
            vec![
                Doctor::new(
                    "Dr. García Fernández",
                    "Medicina General",
                    &["09:00", "09:30", "10:00", "10:30", "11:00"],
                ),
                Doctor::new(
                    "Dra. Martínez López",
                    "Cardiología",
                    &["15:00", "15:30", "16:00", "16:30", "17:00"],
                ),
                Doctor::new(
                    "Dr. Rodríguez Vega",
                    "Dermatología",
                    &["12:00", "12:30", "13:00", "16:00", "16:30"],
                ),
            ],
            vec![
                Hospital::new("Hospital Universitario"),
                Hospital::new("Clínica Santa María"),
                Hospital::new("Centro Médico Internacional"),
            ],
        )
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn hospitals(&self) -> &[Hospital] {
        &self.hospitals
    }

    pub fn support(&self) -> &SupportInfo {
        &self.support
    }

    pub fn find_doctor(&self, name: &str) -> Result<&Doctor, DoctorError> {
        debug!("Looking up doctor {}", name);

        self.doctors
            .iter()
            .find(|doctor| doctor.name == name)
            .ok_or_else(|| {
                warn!("Unknown doctor requested: {}", name);
                DoctorError::NotFound(name.to_string())
            })
    }

    pub fn find_hospital(&self, name: &str) -> Result<&Hospital, DoctorError> {
        self.hospitals
            .iter()
            .find(|hospital| hospital.name == name)
            .ok_or_else(|| {
                warn!("Unknown hospital requested: {}", name);
                DoctorError::HospitalNotFound(name.to_string())
            })
    }

    pub fn available_hours(&self, doctor_name: &str) -> Result<&[String], DoctorError> {
        self.find_doctor(doctor_name)
            .map(|doctor| doctor.available_hours.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_hold_three_doctors_and_hospitals() {
        let directory = ReferenceDirectory::with_defaults();
        assert_eq!(directory.doctors().len(), 3);
        assert_eq!(directory.hospitals().len(), 3);
    }

    #[test]
    fn available_hours_keep_declared_order() {
        let directory = ReferenceDirectory::with_defaults();
        let hours = directory.available_hours("Dr. Rodríguez Vega").unwrap();
        assert_eq!(hours, ["12:00", "12:30", "13:00", "16:00", "16:30"]);
    }

    #[test]
    fn unknown_names_are_errors() {
        let directory = ReferenceDirectory::with_defaults();
        assert_eq!(
            directory.find_doctor("Dr. Nadie"),
            Err(DoctorError::NotFound("Dr. Nadie".to_string()))
        );
        assert_eq!(
            directory.find_hospital("Hospital Fantasma"),
            Err(DoctorError::HospitalNotFound("Hospital Fantasma".to_string()))
        );
    }
}
