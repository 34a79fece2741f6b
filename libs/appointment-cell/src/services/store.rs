use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::models::{
    Appointment, AppointmentError, AppointmentId, AppointmentStatus, NewAppointment,
    APPOINTMENT_ID_BASE,
};

/// Storage port for appointments.
///
/// `transition` is the raw primitive: it applies any status. Lifecycle rules
/// are enforced one level up, in `AppointmentLifecycleController`.
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// Assigns the next id and stores the appointment as `pending`.
    async fn create(&self, details: NewAppointment) -> Appointment;

    async fn transition(
        &self,
        id: AppointmentId,
        new_status: AppointmentStatus,
    ) -> Result<Appointment, AppointmentError>;

    /// Appointments in the given status, in insertion order.
    async fn list_by_status(&self, status: AppointmentStatus) -> Vec<Appointment>;

    async fn find_by_id(&self, id: AppointmentId) -> Option<Appointment>;

    async fn list_all(&self) -> Vec<Appointment>;
}

#[derive(Debug, Default)]
pub struct InMemoryAppointmentStore {
    appointments: RwLock<Vec<Appointment>>,
}

impl InMemoryAppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AppointmentStore for InMemoryAppointmentStore {
    async fn create(&self, details: NewAppointment) -> Appointment {
        let mut appointments = self.appointments.write().await;

        let id = APPOINTMENT_ID_BASE + appointments.len() as AppointmentId + 1;
        let appointment = details.into_appointment(id);
        appointments.push(appointment.clone());

        info!(
            "Appointment {} created for {} with {} on {} at {}",
            appointment.id, appointment.patient_name, appointment.doctor_name,
            appointment.date, appointment.time
        );
        appointment
    }

    async fn transition(
        &self,
        id: AppointmentId,
        new_status: AppointmentStatus,
    ) -> Result<Appointment, AppointmentError> {
        let mut appointments = self.appointments.write().await;

        let appointment = appointments
            .iter_mut()
            .find(|appointment| appointment.id == id)
            .ok_or_else(|| {
                warn!("Status change for unknown appointment {}", id);
                AppointmentError::NotFound(id)
            })?;

        debug!("Appointment {}: {} -> {}", id, appointment.status, new_status);
        appointment.status = new_status;
        Ok(appointment.clone())
    }

    async fn list_by_status(&self, status: AppointmentStatus) -> Vec<Appointment> {
        self.appointments
            .read()
            .await
            .iter()
            .filter(|appointment| appointment.status == status)
            .cloned()
            .collect()
    }

    async fn find_by_id(&self, id: AppointmentId) -> Option<Appointment> {
        self.appointments
            .read()
            .await
            .iter()
            .find(|appointment| appointment.id == id)
            .cloned()
    }

    async fn list_all(&self) -> Vec<Appointment> {
        self.appointments.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(patient: &str) -> NewAppointment {
        NewAppointment {
            date: "2025-06-01".to_string(),
            time: "10:00".to_string(),
            doctor_name: "Dr. X".to_string(),
            hospital_name: "H1".to_string(),
            patient_name: patient.to_string(),
            symptoms: Some("Fiebre".to_string()),
            observations: None,
        }
    }

    #[tokio::test]
    async fn ids_follow_collection_size() {
        let store = InMemoryAppointmentStore::new();
        assert_eq!(store.create(details("A")).await.id, 101);
        assert_eq!(store.create(details("B")).await.id, 102);
        assert_eq!(store.create(details("C")).await.id, 103);
    }

    #[tokio::test]
    async fn transition_changes_only_status() {
        let store = InMemoryAppointmentStore::new();
        let created = store.create(details("Ana")).await;

        let updated = store.transition(created.id, AppointmentStatus::Accepted).await.unwrap();

        assert_eq!(updated.status, AppointmentStatus::Accepted);
        assert_eq!(
            Appointment { status: AppointmentStatus::Pending, ..updated },
            created
        );
    }

    #[tokio::test]
    async fn transition_is_idempotent() {
        let store = InMemoryAppointmentStore::new();
        let created = store.create(details("Ana")).await;

        let first = store.transition(created.id, AppointmentStatus::Canceled).await.unwrap();
        let second = store.transition(created.id, AppointmentStatus::Canceled).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(store.find_by_id(created.id).await.unwrap().status, AppointmentStatus::Canceled);
    }

    #[tokio::test]
    async fn transition_unknown_id_is_not_found() {
        let store = InMemoryAppointmentStore::new();
        let result = store.transition(9999, AppointmentStatus::Accepted).await;
        assert_eq!(result, Err(AppointmentError::NotFound(9999)));
    }

    #[tokio::test]
    async fn list_by_status_is_recomputed_each_call() {
        let store = InMemoryAppointmentStore::new();
        let first = store.create(details("A")).await;
        let second = store.create(details("B")).await;

        let pending: Vec<_> = store.list_by_status(AppointmentStatus::Pending).await
            .into_iter().map(|a| a.id).collect();
        assert_eq!(pending, vec![first.id, second.id]);

        store.transition(first.id, AppointmentStatus::Accepted).await.unwrap();

        let pending: Vec<_> = store.list_by_status(AppointmentStatus::Pending).await
            .into_iter().map(|a| a.id).collect();
        assert_eq!(pending, vec![second.id]);
    }
}
