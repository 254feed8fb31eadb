//! Actor system for the queue monitor.
//!
//! This crate provides the Ractor-based store actor that owns the
//! dashboard view model.
//!
//! # Architecture
//!
//! - `StoreActor` - single actor holding connection flags and the
//!   grouped view; every incoming snapshot replaces the view wholesale
//! - `ActorRegistry` - global lookup so server functions can reach the
//!   store without threading references through the call stack
//!
//! # Usage
//!
//! ```ignore
//! use actors::{start_store, StoreMessage};
//!
//! let (store, handle) = start_store(GroupConfig::default(), None).await?;
//! store.send_message(StoreMessage::SocketOpened)?;
//! ```

mod messages;
pub mod registry;
mod store_actor;

pub use messages::StoreMessage;
pub use registry::{global_registry, ActorRegistry};
pub use store_actor::{start_store, StoreActor, StoreActorState};

/// Re-export ractor types for convenience.
pub use ractor::{concurrency, Actor, ActorRef, RpcReplyPort};
