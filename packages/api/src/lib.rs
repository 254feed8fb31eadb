//! Server API functions for the queue monitor.
//!
//! This crate contains the shared fullstack server functions for:
//! - Dashboard state (grouped view + connection status)
//! - Server-side bootstrap (store actor + feed task)
//! - Real-time events (SSE streaming)

mod dashboard;

#[cfg(feature = "server")]
mod init;

#[cfg(feature = "server")]
mod realtime;

// Re-export all server functions
pub use dashboard::*;

#[cfg(feature = "server")]
pub use init::*;

#[cfg(feature = "server")]
pub use realtime::*;

// Re-export core types for convenience
pub use monitor_core::{
    ConnectionStatus, Group, GroupConfig, GroupedView, Job, QueueSnapshot, StoreEvent,
};
