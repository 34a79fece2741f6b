use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use shared_models::session::{Session, UserType};

/// Shared handle to the process-wide simulated session.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    inner: Arc<RwLock<Session>>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn current(&self) -> Session {
        self.inner.read().await.clone()
    }

    pub async fn login(&self, user_type: UserType) -> Session {
        let mut session = self.inner.write().await;
        *session = Session::logged_in_as(user_type);
        info!("Session opened for {}", user_type);
        session.clone()
    }

    pub async fn logout(&self) -> Session {
        let mut session = self.inner.write().await;
        *session = Session::default();
        info!("Session closed");
        session.clone()
    }
}
