//! Top-level server error definitions.

use thiserror::Error;

/// Errors that can abort the server as a whole.
///
/// Per-connection failures are handled locally and never surface here; the
/// server keeps serving other rooms regardless of any single connection's
/// failure mode.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind or serve on the configured address
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
