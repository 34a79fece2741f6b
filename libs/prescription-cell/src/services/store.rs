use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::models::{NewPrescription, Prescription, PrescriptionId, PRESCRIPTION_ID_BASE};

/// Storage port for prescriptions. Append only: no update or delete.
#[async_trait]
pub trait PrescriptionStore: Send + Sync {
    async fn create(&self, details: NewPrescription) -> Prescription;

    /// All prescriptions in insertion order.
    async fn list_all(&self) -> Vec<Prescription>;

    async fn find_by_id(&self, id: PrescriptionId) -> Option<Prescription>;
}

/// Read-only view of issued prescriptions, handed to the HTTP layer.
#[async_trait]
pub trait PrescriptionCatalog: Send + Sync {
    async fn list_prescriptions(&self) -> Vec<Prescription>;

    async fn find_prescription(&self, id: PrescriptionId) -> Option<Prescription>;
}

#[derive(Debug, Default)]
pub struct InMemoryPrescriptionStore {
    prescriptions: RwLock<Vec<Prescription>>,
}

impl InMemoryPrescriptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with prescriptions issued before startup, numbered
    /// in the given order.
    pub fn with_records(records: Vec<NewPrescription>) -> Self {
        let prescriptions = records
            .into_iter()
            .zip(1..)
            .map(|(details, offset)| details.into_prescription(PRESCRIPTION_ID_BASE + offset))
            .collect();

        Self {
            prescriptions: RwLock::new(prescriptions),
        }
    }
}

#[async_trait]
impl PrescriptionStore for InMemoryPrescriptionStore {
    async fn create(&self, details: NewPrescription) -> Prescription {
        let mut prescriptions = self.prescriptions.write().await;

        let id = PRESCRIPTION_ID_BASE + prescriptions.len() as PrescriptionId + 1;
        let prescription = details.into_prescription(id);
        prescriptions.push(prescription.clone());

        info!(
            "Prescription {} issued by {} for {}",
            prescription.id, prescription.doctor_name, prescription.patient_name
        );
        prescription
    }

    async fn list_all(&self) -> Vec<Prescription> {
        let prescriptions = self.prescriptions.read().await;
        debug!("Listing {} prescriptions", prescriptions.len());
        prescriptions.clone()
    }

    async fn find_by_id(&self, id: PrescriptionId) -> Option<Prescription> {
        self.prescriptions
            .read()
            .await
            .iter()
            .find(|prescription| prescription.id == id)
            .cloned()
    }
}

#[async_trait]
impl PrescriptionCatalog for InMemoryPrescriptionStore {
    async fn list_prescriptions(&self) -> Vec<Prescription> {
        self.list_all().await
    }

    async fn find_prescription(&self, id: PrescriptionId) -> Option<Prescription> {
        self.find_by_id(id).await
    }
}
