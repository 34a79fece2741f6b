pub mod store;

pub use store::{InMemoryPrescriptionStore, PrescriptionCatalog, PrescriptionStore};
