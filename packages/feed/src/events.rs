//! Events emitted by the feed task.

use monitor_core::QueueSnapshot;

/// Lifecycle and data events produced while driving the feed socket.
///
/// The store consumes these to maintain the connection flags and to
/// replace its view on every incoming summary.
#[derive(Debug, Clone)]
pub enum FeedEvent {
    /// The socket opened (initial connect or reconnect).
    Opened,
    /// A queue summary arrived.
    Snapshot(QueueSnapshot),
    /// The socket closed; `error` is set when it dropped unexpectedly.
    Closed { error: bool },
    /// A reconnect attempt failed.
    ReconnectFailed,
}
