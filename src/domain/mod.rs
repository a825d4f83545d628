//! Domain layer for the signaling relay.
//!
//! This module contains the room/connection model that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod error;
pub mod factory;
pub mod registry;
pub mod value_object;

pub use error::{RegistryError, ValueObjectError};
pub use factory::ClientIdFactory;
pub use registry::{
    ConnectionSummary, ExpiredConnection, LivenessSweep, Recipient, SessionRegistry,
};
pub use value_object::{ClientId, RoomId};

#[cfg(test)]
pub use registry::MockSessionRegistry;
