//! Message types for the store actor.

use monitor_core::{ConnectionStatus, GroupedView, QueueSnapshot};
use ractor::RpcReplyPort;

/// Messages for the StoreActor.
#[derive(Debug)]
pub enum StoreMessage {
    /// The feed socket opened; clears any reconnect-error flag.
    SocketOpened,

    /// The feed socket closed.
    SocketClosed { error: bool },

    /// A reconnect attempt failed.
    ReconnectFailed,

    /// Replace the current state with a fresh snapshot.
    ApplySnapshot(Box<QueueSnapshot>),

    /// Get the current grouped view.
    GetView { reply: RpcReplyPort<GroupedView> },

    /// Get the current connection status.
    GetConnection { reply: RpcReplyPort<ConnectionStatus> },

    /// Shut the store down gracefully.
    Shutdown,
}
