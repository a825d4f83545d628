//! UseCase: relaying a signaling message.
//!
//! Resolves the sender's room and snapshots the other members for fan-out.
//! The payload itself is opaque to this layer; the UI layer builds and
//! delivers the outbound envelope.

use std::sync::Arc;

use crate::domain::{ClientId, Recipient, RoomId, SessionRegistry};

use super::error::RelayError;

/// Where a relayed message goes: the sender's room and a stable snapshot of
/// the sibling connections (sender excluded).
#[derive(Debug)]
pub struct RelayPlan {
    pub room_id: RoomId,
    pub recipients: Vec<Recipient>,
}

/// Message relay use case
pub struct RelayMessageUseCase {
    registry: Arc<dyn SessionRegistry>,
}

impl RelayMessageUseCase {
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// Resolve fan-out targets for a message from `sender_id`.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::NotInRoom` if the sender has not joined a room;
    /// the caller replies with the protocol `error` message and drops the
    /// payload.
    pub async fn execute(&self, sender_id: &ClientId) -> Result<RelayPlan, RelayError> {
        let Some(room_id) = self.registry.room_of(sender_id).await else {
            return Err(RelayError::NotInRoom);
        };

        let recipients = self.registry.recipients(&room_id, sender_id).await;

        Ok(RelayPlan {
            room_id,
            recipients,
        })
    }
}
