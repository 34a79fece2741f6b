use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Doctor {
    pub name: String,
    pub specialty: String,
    /// Bookable times of day as `HH:MM`, in the order the doctor declared them.
    pub available_hours: Vec<String>,
}

impl Doctor {
    pub fn new(name: &str, specialty: &str, available_hours: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            specialty: specialty.to_string(),
            available_hours: available_hours.iter().map(|hour| hour.to_string()).collect(),
        }
    }

    pub fn is_available_at(&self, time: &str) -> bool {
        self.available_hours.iter().any(|hour| hour == time)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hospital {
    pub name: String,
}

impl Hospital {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableHoursResponse {
    pub doctor_name: String,
    pub specialty: String,
    pub available_hours: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupportContact {
    pub email: String,
    pub phone: String,
    pub hours: String,
}

/// Help page content: frequent questions and how to reach the clinic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupportInfo {
    pub faq: Vec<FaqEntry>,
    pub contact: SupportContact,
}

impl Default for SupportInfo {
    fn default() -> Self {
        let entry = |question: &str, answer: &str| FaqEntry {
            question: question.to_string(),
            answer: answer.to_string(),
        };

        Self {
            faq: vec![
                entry(
                    "¿Cómo puedo cancelar una cita?",
                    "Para cancelar una cita, debes contactar directamente con el centro médico con al menos 24 horas de antelación.",
                ),
                entry(
                    "¿Puedo modificar la hora de mi cita?",
                    "Sí, puedes modificar la hora de tu cita siempre que haya disponibilidad en el horario del médico seleccionado.",
                ),
                entry(
                    "¿Cómo puedo descargar mis recetas médicas?",
                    "En la sección \"Mis Recetas\" encontrarás todas tus recetas disponibles.",
                ),
            ],
            contact: SupportContact {
                email: "soporte@medicitas.com".to_string(),
                phone: "+52 55 1234 5678".to_string(),
                hours: "Lunes a viernes de 9:00 a 18:00".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoctorError {
    NotFound(String),
    HospitalNotFound(String),
}

impl std::fmt::Display for DoctorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DoctorError::NotFound(name) => write!(f, "Doctor not found: {}", name),
            DoctorError::HospitalNotFound(name) => write!(f, "Hospital not found: {}", name),
        }
    }
}

impl std::error::Error for DoctorError {}
