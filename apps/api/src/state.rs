use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use appointment_cell::{
    AppointmentBookingService, AppointmentLifecycleController, AppointmentState,
    InMemoryAppointmentStore, NewAppointment,
};
use auth_cell::AuthState;
use doctor_cell::ReferenceDirectory;
use patient_cell::ProfileService;
use prescription_cell::{InMemoryPrescriptionStore, NewPrescription};
use shared_config::AppConfig;
use shared_utils::SessionHandle;

/// Everything the routers share for the lifetime of the process.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub session: SessionHandle,
    pub directory: Arc<ReferenceDirectory>,
    pub profiles: Arc<ProfileService>,
    pub controller: Arc<AppointmentLifecycleController>,
    pub booking: Arc<AppointmentBookingService>,
}

impl AppState {
    pub async fn new(config: AppConfig) -> anyhow::Result<Self> {
        let prescriptions = if config.seed_sample_data {
            InMemoryPrescriptionStore::with_records(sample_prescriptions()?)
        } else {
            InMemoryPrescriptionStore::new()
        };

        let directory = Arc::new(ReferenceDirectory::with_defaults());
        let controller = Arc::new(AppointmentLifecycleController::new(
            Arc::new(InMemoryAppointmentStore::new()),
            Arc::new(prescriptions),
        ));
        let booking = Arc::new(AppointmentBookingService::new(
            directory.clone(),
            controller.clone(),
        ));

        if config.seed_sample_data {
            for details in sample_appointments() {
                controller.create_appointment(details).await;
            }
            info!("Seeded sample appointments and prescriptions");
        }

        Ok(Self {
            config: Arc::new(config),
            session: SessionHandle::new(),
            directory,
            profiles: Arc::new(ProfileService::default()),
            controller,
            booking,
        })
    }

    pub fn auth_state(&self) -> AuthState {
        AuthState {
            session: self.session.clone(),
            profiles: self.profiles.clone(),
        }
    }

    pub fn appointment_state(&self) -> AppointmentState {
        AppointmentState {
            controller: self.controller.clone(),
            booking: self.booking.clone(),
            profiles: self.profiles.clone(),
        }
    }
}

fn sample_appointments() -> Vec<NewAppointment> {
    vec![
        NewAppointment {
            date: "2025-05-15".to_string(),
            time: "09:30".to_string(),
            doctor_name: "Dr. García Fernández".to_string(),
            hospital_name: "Hospital Universitario".to_string(),
            patient_name: "María López".to_string(),
            symptoms: Some("Dolor de cabeza, mareos".to_string()),
            observations: Some("Paciente con antecedentes de migraña".to_string()),
        },
        NewAppointment {
            date: "2025-05-22".to_string(),
            time: "16:00".to_string(),
            doctor_name: "Dra. Martínez López".to_string(),
            hospital_name: "Clínica Santa María".to_string(),
            patient_name: "Juan Pérez".to_string(),
            symptoms: Some("Dolor abdominal, náuseas".to_string()),
            observations: Some("Posible gastritis".to_string()),
        },
    ]
}

// Historical prescriptions, issued before this process started
fn sample_prescriptions() -> anyhow::Result<Vec<NewPrescription>> {
    let records = vec![
        NewPrescription::new(
            "2025-05-05",
            "Dr. García Fernández",
            "María López",
            "Gripe común",
            vec!["Paracetamol 500mg".to_string(), "Ibuprofeno 400mg".to_string()],
        ),
        NewPrescription::new(
            "2025-04-20",
            "Dra. Martínez López",
            "Juan Pérez",
            "Alergia estacional",
            vec!["Cetirizina 10mg".to_string(), "Spray nasal Flutiform".to_string()],
        ),
    ];

    records
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .context("Invalid sample prescription")
}
