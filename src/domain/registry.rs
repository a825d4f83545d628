//! Session registry contract.
//!
//! The registry owns all connection and room membership state. It is created
//! at server start, shared by the WebSocket handlers and the heartbeat task,
//! and torn down with the server; there is no ambient global state.

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::ui::state::{KillSwitch, OutboundSender};

use super::error::RegistryError;
use super::value_object::{ClientId, RoomId};

/// A fan-out target: a sibling connection's id and a clone of its outbound
/// channel, snapshotted under the registry lock so delivery can proceed
/// without holding it.
#[derive(Debug)]
pub struct Recipient {
    pub id: ClientId,
    pub sender: OutboundSender,
}

/// A connection that missed its probe and must be forcibly terminated.
#[derive(Debug)]
pub struct ExpiredConnection {
    pub id: ClientId,
    pub kill: KillSwitch,
}

/// Result of one liveness sweep.
///
/// `expired` connections did not answer the previous probe and must be
/// terminated; `probed` connections had their flag cleared and should receive
/// a fresh ping.
#[derive(Debug, Default)]
pub struct LivenessSweep {
    pub expired: Vec<ExpiredConnection>,
    pub probed: Vec<Recipient>,
}

/// What an unregistered connection left behind.
#[derive(Debug)]
pub struct ConnectionSummary {
    /// Unix timestamp (milliseconds) when the connection was accepted
    pub connected_at: i64,
    /// Room the connection was a member of, if any
    pub left_room: Option<RoomId>,
}

/// Room registry and connection table.
///
/// Mutations to room member sets and to a connection's room reference are
/// serialized by the implementation; callers may invoke these concurrently
/// from every connection's task and from the heartbeat task.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SessionRegistry: Send + Sync {
    /// Track a newly accepted connection. It has no room until it joins.
    /// `kill` lets the liveness monitor tear the connection down directly.
    async fn register(
        &self,
        client_id: ClientId,
        sender: OutboundSender,
        kill: KillSwitch,
        connected_at: i64,
    );

    /// Remove the connection entirely, leaving its current room first.
    async fn unregister(&self, client_id: &ClientId) -> Result<ConnectionSummary, RegistryError>;

    /// Move the connection into `room_id`, leaving its previous room first
    /// (destroying that room if it empties). Creates the target room if
    /// needed. Re-joining the current room is a no-op.
    async fn join(&self, client_id: &ClientId, room_id: RoomId) -> Result<(), RegistryError>;

    /// Remove the connection from its current room, destroying the room if it
    /// empties. Returns the vacated room, or `None` if it had none.
    async fn leave(&self, client_id: &ClientId) -> Option<RoomId>;

    /// Current room of the connection, if any.
    async fn room_of(&self, client_id: &ClientId) -> Option<RoomId>;

    /// Snapshot of the other members of `room_id`, excluding `exclude`.
    async fn recipients(&self, room_id: &RoomId, exclude: &ClientId) -> Vec<Recipient>;

    /// Record a liveness acknowledgment (pong) from the connection.
    async fn mark_alive(&self, client_id: &ClientId);

    /// Partition connections by liveness flag, clearing the flag on the
    /// survivors so the next sweep can tell who answered.
    async fn sweep_liveness(&self) -> LivenessSweep;

    /// Snapshot of all rooms and their member ids.
    async fn rooms_snapshot(&self) -> Vec<(RoomId, Vec<ClientId>)>;

    /// Member ids of `room_id`, or `None` if the room does not exist.
    async fn room_members(&self, room_id: &RoomId) -> Option<Vec<ClientId>>;

    /// Number of tracked connections.
    async fn count_connections(&self) -> usize;

    /// Number of live rooms.
    async fn count_rooms(&self) -> usize;
}
