//! Test fixtures for integration tests.

use std::net::TcpStream;
use std::thread;
use std::time::Duration;

use miniapp_signaling::config::Config;

/// Signaling server running on a dedicated thread with its own runtime.
///
/// Each test uses its own port so tests can run in parallel; the server
/// thread is detached and lives for the remainder of the test process.
pub struct TestServer {
    port: u16,
}

impl TestServer {
    pub fn start(port: u16) -> Self {
        let config = Config {
            port,
            ws_path: "/ws".to_string(),
        };

        thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().expect("Failed to build test runtime");
            if let Err(e) = rt.block_on(miniapp_signaling::run_server(config)) {
                eprintln!("Test server error: {e}");
            }
        });

        // Wait for the listener to come up
        for _ in 0..100 {
            if TcpStream::connect(("127.0.0.1", port)).is_ok() {
                return Self { port };
            }
            thread::sleep(Duration::from_millis(20));
        }
        panic!("Test server did not start on port {port}");
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    #[allow(dead_code)] // not every test binary drives the WebSocket side
    pub fn ws_url(&self) -> String {
        format!("ws://127.0.0.1:{}/ws", self.port)
    }
}
