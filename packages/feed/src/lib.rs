//! WebSocket feed client for the queue monitor.
//!
//! Connects to the framework's event socket, registers interest in the
//! queue channel, and turns incoming summary messages into typed
//! snapshots. The connection lifecycle (connect -> subscribe ->
//! process -> reconnect) is reported to the caller through
//! [`FeedEvent`]s.

mod client;
mod events;
mod messages;
mod processor;
mod reconnect;
mod run;

pub use client::{FeedClient, FeedConnection, FeedError, WsStream};
pub use events::FeedEvent;
pub use messages::{parse_message, FeedMessage, InterestMessage, INTEREST_QUEUE};
pub use processor::process_messages;
pub use reconnect::{next_delay, reconnect_loop, ReconnectConfig};
pub use run::run_feed;
