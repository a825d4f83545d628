//! Liveness monitor.
//!
//! Periodic task independent of message traffic: every tick, connections
//! that did not answer the previous probe are forcibly terminated via their
//! kill switch (aborting both socket tasks at once, so a wedged writer with
//! backlogged frames cannot delay the teardown), and the survivors have
//! their flag cleared and receive a fresh ping. A client that disappears
//! without a clean close is reclaimed within two intervals.

use std::sync::Arc;
use std::time::Duration;

use crate::ui::state::{AppState, OutboundFrame};

/// Probe interval; a connection silent for one full interval is terminated
pub const PROBE_INTERVAL: Duration = Duration::from_secs(30);

pub async fn run(state: Arc<AppState>) {
    let mut ticker = tokio::time::interval(PROBE_INTERVAL);
    // The first tick completes immediately; the first real probe should
    // happen one full interval after startup
    ticker.tick().await;

    loop {
        ticker.tick().await;
        sweep_once(&state).await;
    }
}

/// One probe cycle: terminate expired connections, ping the rest.
async fn sweep_once(state: &Arc<AppState>) {
    let sweep = state.registry.sweep_liveness().await;

    for expired in sweep.expired {
        tracing::warn!(
            "Terminating unresponsive client '{}' (no pong within {:?})",
            expired.id,
            PROBE_INTERVAL
        );
        // Aborted tasks run the connection's normal disconnect processing
        expired.kill.fire();
    }

    for recipient in sweep.probed {
        if recipient.sender.send(OutboundFrame::Ping).is_err() {
            tracing::debug!("Skipping probe for closing client '{}'", recipient.id);
        }
    }
}
