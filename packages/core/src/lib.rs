//! Core domain types for the queue monitor.
//!
//! This crate contains shared types used across all packages:
//! - Job and QueueSnapshot for data arriving on the feed
//! - GroupConfig and GroupedView for the dashboard view model
//! - ConnectionStatus and StoreEvent for real-time state

mod connection;
mod events;
mod group;
mod job;
mod snapshot;

pub use connection::ConnectionStatus;
pub use events::StoreEvent;
pub use group::{Group, GroupConfig, GroupConfigError, GroupedView, StateCounts, OTHER_GROUP};
pub use job::Job;
pub use snapshot::QueueSnapshot;
