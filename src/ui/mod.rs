//! WebSocket signaling relay server implementation.

mod handler;
mod heartbeat;
mod runner;
mod signal;
pub mod state;

pub use runner::run_server;
