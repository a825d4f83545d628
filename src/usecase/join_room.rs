//! UseCase: joining a room.
//!
//! Moves a connection into the room it named, leaving any previous room
//! first. The caller replies with the `system` acknowledgment; join commands
//! are never relayed to other members.

use std::sync::Arc;

use crate::domain::{ClientId, RoomId, SessionRegistry};

use super::error::JoinError;

/// Room join use case
pub struct JoinRoomUseCase {
    registry: Arc<dyn SessionRegistry>,
}

impl JoinRoomUseCase {
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// Execute the join.
    ///
    /// Returns the joined room id so the caller can format the
    /// acknowledgment. The registry removes the connection from its previous
    /// room atomically with adding it to the new one.
    pub async fn execute(
        &self,
        client_id: &ClientId,
        room_id: RoomId,
    ) -> Result<RoomId, JoinError> {
        self.registry
            .join(client_id, room_id.clone())
            .await
            .map_err(|_| JoinError::NotRegistered(client_id.to_string()))?;
        Ok(room_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClientIdFactory;
    use crate::infrastructure::repository::InMemorySessionRegistry;
    use crate::time::unix_timestamp_millis;
    use crate::ui::state::KillSwitch;
    use tokio::sync::mpsc;

    fn create_test_registry() -> Arc<InMemorySessionRegistry> {
        Arc::new(InMemorySessionRegistry::new())
    }

    #[tokio::test]
    async fn test_join_room_success() {
        // given: a registered connection
        let registry = create_test_registry();
        let usecase = JoinRoomUseCase::new(registry.clone());
        let client_id = ClientIdFactory::generate();
        let (tx, _rx) = mpsc::unbounded_channel();
        registry
            .register(client_id.clone(), tx, KillSwitch::new(), unix_timestamp_millis())
            .await;

        // when:
        let room_id = RoomId::new("abc".to_string()).unwrap();
        let result = usecase.execute(&client_id, room_id.clone()).await;

        // then:
        assert_eq!(result, Ok(room_id.clone()));
        assert_eq!(registry.room_of(&client_id).await, Some(room_id.clone()));
        assert_eq!(
            registry.room_members(&room_id).await,
            Some(vec![client_id.clone()])
        );
    }

    #[tokio::test]
    async fn test_join_room_unregistered_connection_fails() {
        // given: a connection the registry has never seen
        let registry = create_test_registry();
        let usecase = JoinRoomUseCase::new(registry.clone());
        let client_id = ClientIdFactory::generate();

        // when:
        let room_id = RoomId::new("abc".to_string()).unwrap();
        let result = usecase.execute(&client_id, room_id.clone()).await;

        // then: no room is created as a side effect
        assert_eq!(result, Err(JoinError::NotRegistered(client_id.to_string())));
        assert_eq!(registry.room_members(&room_id).await, None);
    }

    #[tokio::test]
    async fn test_join_second_room_leaves_first() {
        // given: a connection already in room r1
        let registry = create_test_registry();
        let usecase = JoinRoomUseCase::new(registry.clone());
        let client_id = ClientIdFactory::generate();
        let (tx, _rx) = mpsc::unbounded_channel();
        registry
            .register(client_id.clone(), tx, KillSwitch::new(), unix_timestamp_millis())
            .await;
        let r1 = RoomId::new("r1".to_string()).unwrap();
        let r2 = RoomId::new("r2".to_string()).unwrap();
        usecase.execute(&client_id, r1.clone()).await.unwrap();

        // when: it joins r2
        usecase.execute(&client_id, r2.clone()).await.unwrap();

        // then: r1 is gone, r2 contains exactly the connection
        assert_eq!(registry.room_members(&r1).await, None);
        assert_eq!(registry.room_members(&r2).await, Some(vec![client_id]));
    }
}
