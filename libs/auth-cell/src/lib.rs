pub mod handlers;
pub mod router;

pub use handlers::AuthState;
