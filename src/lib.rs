//! WebRTC signaling relay library.
//!
//! Implements a room relay server: browser peers open a WebSocket, join a
//! room named out-of-band by the matchmaking layer, and exchange opaque
//! offer/answer/ICE-candidate payloads which the server fans out to the other
//! members of the same room. The media itself flows peer-to-peer and never
//! touches this server.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod time;
pub mod ui;
pub mod usecase;

// Re-export entry point
pub use ui::run_server;
