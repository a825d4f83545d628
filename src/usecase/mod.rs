//! UseCase layer.
//!
//! Business logic for the relay, called from the UI layer and operating on
//! the domain registry.

pub mod disconnect_client;
pub mod error;
pub mod join_room;
pub mod relay_message;

pub use disconnect_client::DisconnectClientUseCase;
pub use error::{JoinError, RelayError};
pub use join_room::JoinRoomUseCase;
pub use relay_message::{RelayMessageUseCase, RelayPlan};
