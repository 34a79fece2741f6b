use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use prescription_cell::{
    InMemoryPrescriptionStore, NewPrescription, Prescription, PrescriptionCatalog, PrescriptionId,
    PrescriptionStore,
};

use crate::models::{
    Appointment, AppointmentDecision, AppointmentError, AppointmentId, AppointmentSearchQuery,
    AppointmentStatus, CompletionResult, NewAppointment,
};
use crate::services::lifecycle::AppointmentLifecycleService;
use crate::services::store::{AppointmentStore, InMemoryAppointmentStore};

/// Owns both stores and is the only writer to them.
///
/// Writes hold `consistency` exclusively for their whole duration and reads
/// hold it shared, so a completion's prescription insert and status change
/// are observed together by all other callers. Private helpers never take
/// the lock themselves.
pub struct AppointmentLifecycleController {
    appointments: Arc<dyn AppointmentStore>,
    prescriptions: Arc<dyn PrescriptionStore>,
    lifecycle: AppointmentLifecycleService,
    consistency: RwLock<()>,
}

impl AppointmentLifecycleController {
    pub fn new(
        appointments: Arc<dyn AppointmentStore>,
        prescriptions: Arc<dyn PrescriptionStore>,
    ) -> Self {
        Self {
            appointments,
            prescriptions,
            lifecycle: AppointmentLifecycleService::new(),
            consistency: RwLock::new(()),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryAppointmentStore::new()),
            Arc::new(InMemoryPrescriptionStore::new()),
        )
    }

    pub async fn create_appointment(&self, details: NewAppointment) -> Appointment {
        let _guard = self.consistency.write().await;
        self.appointments.create(details).await
    }

    pub async fn find_appointment(&self, id: AppointmentId) -> Result<Appointment, AppointmentError> {
        let _guard = self.consistency.read().await;
        self.lookup(id).await
    }

    pub async fn list_appointments(&self) -> Vec<Appointment> {
        let _guard = self.consistency.read().await;
        self.appointments.list_all().await
    }

    pub async fn list_by_status(&self, status: AppointmentStatus) -> Vec<Appointment> {
        debug!("Listing {} appointments", status);
        let _guard = self.consistency.read().await;
        self.appointments.list_by_status(status).await
    }

    pub async fn search(&self, query: &AppointmentSearchQuery) -> Vec<Appointment> {
        self.list_appointments()
            .await
            .into_iter()
            .filter(|appointment| query.matches(appointment))
            .collect()
    }

    pub async fn list_prescriptions(&self) -> Vec<Prescription> {
        let _guard = self.consistency.read().await;
        self.prescriptions.list_all().await
    }

    pub async fn find_prescription(&self, id: PrescriptionId) -> Option<Prescription> {
        let _guard = self.consistency.read().await;
        self.prescriptions.find_by_id(id).await
    }

    /// Doctor accepts or cancels a pending appointment.
    pub async fn accept_or_cancel(
        &self,
        id: AppointmentId,
        decision: AppointmentDecision,
    ) -> Result<Appointment, AppointmentError> {
        let _guard = self.consistency.write().await;

        let appointment = self.lookup(id).await?;
        let target = decision.target_status();
        self.lifecycle.validate_status_transition(appointment.status, target)?;

        let updated = self.appointments.transition(id, target).await?;
        info!("Appointment {} {}", id, updated.status);
        Ok(updated)
    }

    /// Issues the prescription and marks the appointment completed, as one unit.
    pub async fn complete_with_diagnosis(
        &self,
        id: AppointmentId,
        diagnosis: impl Into<String>,
        medicines: Vec<String>,
    ) -> Result<CompletionResult, AppointmentError> {
        let _guard = self.consistency.write().await;

        let appointment = self.lookup(id).await?;
        self.lifecycle
            .validate_status_transition(appointment.status, AppointmentStatus::Completed)?;

        let details = NewPrescription::new(
            appointment.date.clone(),
            appointment.doctor_name.clone(),
            appointment.patient_name.clone(),
            diagnosis,
            medicines,
        )?;

        let prescription = self.prescriptions.create(details).await;

        let appointment = self
            .appointments
            .transition(id, AppointmentStatus::Completed)
            .await
            .map_err(|e| {
                error!(
                    "Prescription {} issued but appointment {} was not completed: {}",
                    prescription.id, id, e
                );
                e
            })?;

        info!("Appointment {} completed with prescription {}", id, prescription.id);
        Ok(CompletionResult {
            appointment,
            prescription,
        })
    }

    async fn lookup(&self, id: AppointmentId) -> Result<Appointment, AppointmentError> {
        self.appointments
            .find_by_id(id)
            .await
            .ok_or(AppointmentError::NotFound(id))
    }
}

#[async_trait]
impl PrescriptionCatalog for AppointmentLifecycleController {
    async fn list_prescriptions(&self) -> Vec<Prescription> {
        AppointmentLifecycleController::list_prescriptions(self).await
    }

    async fn find_prescription(&self, id: PrescriptionId) -> Option<Prescription> {
        AppointmentLifecycleController::find_prescription(self, id).await
    }
}
