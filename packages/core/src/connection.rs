//! Socket connection status for the dashboard.

use serde::{Deserialize, Serialize};

/// Connection flags maintained by the store.
///
/// `reconnect_error` latches when a reconnect attempt fails and is
/// cleared by the next successful connect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionStatus {
    /// Whether the feed socket is currently open.
    pub connected: bool,
    /// Whether the last reconnect attempt failed.
    pub reconnect_error: bool,
}

impl ConnectionStatus {
    /// Connected with no outstanding reconnect failure.
    pub fn is_healthy(&self) -> bool {
        self.connected && !self.reconnect_error
    }
}
