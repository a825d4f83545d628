//! Server state, outbound channel types, and connection kill switch.

use std::sync::Arc;

use tokio::sync::{Notify, mpsc};

use crate::domain::SessionRegistry;

/// A frame queued for a connection's write task.
///
/// Each connection has one unbounded channel feeding its writer, so a slow or
/// dead recipient never blocks the task that produced the frame.
#[derive(Debug, Clone)]
pub enum OutboundFrame {
    /// JSON text frame
    Text(String),
    /// Liveness probe (transport-level ping control frame)
    Ping,
}

/// Sending half of a connection's outbound channel
pub type OutboundSender = mpsc::UnboundedSender<OutboundFrame>;

/// Handle for forcibly terminating a connection.
///
/// The liveness monitor fires this to tear the connection's tasks down
/// immediately, without queueing behind pending outbound frames (a peer that
/// vanished without FIN can leave the writer blocked on the socket for
/// minutes otherwise). Firing before anyone waits still triggers the waiter.
#[derive(Debug, Clone, Default)]
pub struct KillSwitch {
    notify: Arc<Notify>,
}

impl KillSwitch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request immediate teardown of the connection's tasks.
    pub fn fire(&self) {
        self.notify.notify_one();
    }

    /// Resolves once `fire` has been called.
    pub async fn triggered(&self) {
        self.notify.notified().await;
    }
}

/// Shared application state
pub struct AppState {
    /// Room registry and connection table (single owner of membership state)
    pub registry: Arc<dyn SessionRegistry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_kill_switch_fired_before_wait_still_triggers() {
        // given: a kill switch fired while nobody is waiting yet
        let kill = KillSwitch::new();
        kill.fire();

        // when/then: a later waiter resolves immediately
        tokio::time::timeout(Duration::from_millis(100), kill.triggered())
            .await
            .expect("kill switch did not trigger");
    }

    #[tokio::test]
    async fn test_kill_switch_clones_share_the_trigger() {
        // given: one clone held by the sweep, one by the connection
        let kill = KillSwitch::new();
        let waiter = kill.clone();
        let handle = tokio::spawn(async move { waiter.triggered().await });

        // when:
        tokio::task::yield_now().await;
        kill.fire();

        // then:
        tokio::time::timeout(Duration::from_millis(100), handle)
            .await
            .expect("kill switch did not trigger")
            .expect("waiter task failed");
    }
}
