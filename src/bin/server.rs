//! WebRTC signaling relay server.
//!
//! Accepts WebSocket connections, groups them into rooms, and relays
//! signaling messages between room members.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin signaling-server
//! ```

use clap::Parser;

use miniapp_signaling::{config::Config, logger::setup_logger};

#[tokio::main]
async fn main() {
    let config = Config::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_PKG_NAME"), "debug");

    // Run the server
    if let Err(e) = miniapp_signaling::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
