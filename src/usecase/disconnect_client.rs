//! UseCase: connection teardown.
//!
//! Runs on clean close, transport error, and liveness timeout alike: the
//! connection leaves its room (destroying it if emptied) and is removed from
//! the registry. `Closed` is terminal; there is no resurrection.

use std::sync::Arc;

use crate::domain::{ClientId, ConnectionSummary, RegistryError, SessionRegistry};

/// Connection disconnect use case
pub struct DisconnectClientUseCase {
    registry: Arc<dyn SessionRegistry>,
}

impl DisconnectClientUseCase {
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// Remove the connection, reporting what it left behind.
    pub async fn execute(&self, client_id: &ClientId) -> Result<ConnectionSummary, RegistryError> {
        self.registry.unregister(client_id).await
    }
}
