pub mod booking;
pub mod controller;
pub mod lifecycle;
pub mod store;

pub use booking::AppointmentBookingService;
pub use controller::AppointmentLifecycleController;
pub use lifecycle::AppointmentLifecycleService;
pub use store::{AppointmentStore, InMemoryAppointmentStore};
