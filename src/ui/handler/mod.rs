//! Handler modules for HTTP and WebSocket endpoints.

pub mod http;
pub mod websocket;

// Re-export HTTP handlers
pub use http::{banner, get_rooms, health_check};

// Re-export WebSocket handlers
pub use websocket::websocket_handler;
