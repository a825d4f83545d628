//! In-memory session registry implementation.
//!
//! Implements the domain `SessionRegistry` trait over two HashMaps guarded by
//! a single mutex: the connection table and the room member sets. One lock
//! keeps a room switch (leave A, enter B) atomic as observed by every other
//! task. All state lives in memory only; the server is stateless across
//! restarts.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    ClientId, ConnectionSummary, ExpiredConnection, LivenessSweep, Recipient, RegistryError,
    RoomId, SessionRegistry,
};
use crate::ui::state::{KillSwitch, OutboundSender};

/// Per-connection bookkeeping
struct ConnectionHandle {
    sender: OutboundSender,
    /// Tears the connection's tasks down without queueing behind data frames
    kill: KillSwitch,
    room_id: Option<RoomId>,
    /// Set by each received pong, cleared by each liveness sweep
    alive: bool,
    /// Unix timestamp (milliseconds) when the connection was accepted
    connected_at: i64,
}

#[derive(Default)]
struct RegistryInner {
    connections: HashMap<ClientId, ConnectionHandle>,
    /// Invariant: a room key exists iff its member set is non-empty
    rooms: HashMap<RoomId, HashSet<ClientId>>,
}

impl RegistryInner {
    /// Remove `client_id` from its current room, destroying the room if it
    /// empties. Returns the vacated room, if any.
    fn detach_from_room(&mut self, client_id: &ClientId) -> Option<RoomId> {
        let room_id = self
            .connections
            .get_mut(client_id)
            .and_then(|conn| conn.room_id.take())?;

        if let Some(members) = self.rooms.get_mut(&room_id) {
            members.remove(client_id);
            if members.is_empty() {
                self.rooms.remove(&room_id);
                tracing::info!("Room '{}' removed (empty)", room_id);
            } else {
                tracing::info!(
                    "Client '{}' left room '{}' (size={})",
                    client_id,
                    room_id,
                    members.len()
                );
            }
        }

        Some(room_id)
    }
}

/// In-memory registry: the single owner of connection and room state.
pub struct InMemorySessionRegistry {
    inner: Mutex<RegistryInner>,
}

impl InMemorySessionRegistry {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(RegistryInner::default()),
        }
    }
}

impl Default for InMemorySessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRegistry for InMemorySessionRegistry {
    async fn register(
        &self,
        client_id: ClientId,
        sender: OutboundSender,
        kill: KillSwitch,
        connected_at: i64,
    ) {
        let mut inner = self.inner.lock().await;
        inner.connections.insert(
            client_id,
            ConnectionHandle {
                sender,
                kill,
                room_id: None,
                alive: true,
                connected_at,
            },
        );
    }

    async fn unregister(&self, client_id: &ClientId) -> Result<ConnectionSummary, RegistryError> {
        let mut inner = self.inner.lock().await;
        let left_room = inner.detach_from_room(client_id);
        let conn = inner
            .connections
            .remove(client_id)
            .ok_or_else(|| RegistryError::ConnectionNotFound(client_id.to_string()))?;

        Ok(ConnectionSummary {
            connected_at: conn.connected_at,
            left_room,
        })
    }

    async fn join(&self, client_id: &ClientId, room_id: RoomId) -> Result<(), RegistryError> {
        let mut inner = self.inner.lock().await;
        let conn = inner
            .connections
            .get(client_id)
            .ok_or_else(|| RegistryError::ConnectionNotFound(client_id.to_string()))?;

        // Re-joining the current room only re-sends the acknowledgment;
        // skip the detach so the room is not transiently destroyed.
        if conn.room_id.as_ref() == Some(&room_id) {
            return Ok(());
        }

        inner.detach_from_room(client_id);

        let members = inner.rooms.entry(room_id.clone()).or_default();
        members.insert(client_id.clone());
        let size = members.len();
        if let Some(conn) = inner.connections.get_mut(client_id) {
            conn.room_id = Some(room_id.clone());
        }

        tracing::info!(
            "Client '{}' joined room '{}' (size={})",
            client_id,
            room_id,
            size
        );
        Ok(())
    }

    async fn leave(&self, client_id: &ClientId) -> Option<RoomId> {
        let mut inner = self.inner.lock().await;
        inner.detach_from_room(client_id)
    }

    async fn room_of(&self, client_id: &ClientId) -> Option<RoomId> {
        let inner = self.inner.lock().await;
        inner
            .connections
            .get(client_id)
            .and_then(|conn| conn.room_id.clone())
    }

    async fn recipients(&self, room_id: &RoomId, exclude: &ClientId) -> Vec<Recipient> {
        let inner = self.inner.lock().await;
        let Some(members) = inner.rooms.get(room_id) else {
            return Vec::new();
        };

        members
            .iter()
            .filter(|id| *id != exclude)
            .filter_map(|id| {
                inner.connections.get(id).map(|conn| Recipient {
                    id: id.clone(),
                    sender: conn.sender.clone(),
                })
            })
            .collect()
    }

    async fn mark_alive(&self, client_id: &ClientId) {
        let mut inner = self.inner.lock().await;
        if let Some(conn) = inner.connections.get_mut(client_id) {
            conn.alive = true;
        }
    }

    async fn sweep_liveness(&self) -> LivenessSweep {
        let mut inner = self.inner.lock().await;
        let mut sweep = LivenessSweep::default();

        for (id, conn) in inner.connections.iter_mut() {
            if conn.alive {
                conn.alive = false;
                sweep.probed.push(Recipient {
                    id: id.clone(),
                    sender: conn.sender.clone(),
                });
            } else {
                sweep.expired.push(ExpiredConnection {
                    id: id.clone(),
                    kill: conn.kill.clone(),
                });
            }
        }

        sweep
    }

    async fn rooms_snapshot(&self) -> Vec<(RoomId, Vec<ClientId>)> {
        let inner = self.inner.lock().await;
        inner
            .rooms
            .iter()
            .map(|(room_id, members)| (room_id.clone(), members.iter().cloned().collect()))
            .collect()
    }

    async fn room_members(&self, room_id: &RoomId) -> Option<Vec<ClientId>> {
        let inner = self.inner.lock().await;
        inner
            .rooms
            .get(room_id)
            .map(|members| members.iter().cloned().collect())
    }

    async fn count_connections(&self) -> usize {
        let inner = self.inner.lock().await;
        inner.connections.len()
    }

    async fn count_rooms(&self) -> usize {
        let inner = self.inner.lock().await;
        inner.rooms.len()
    }
}
