//! Actor registry for discovering the store actor.

use std::sync::RwLock;

use ractor::ActorRef;

use crate::messages::StoreMessage;

/// Global actor registry.
///
/// This provides a way to look up the store actor without passing
/// references through the entire call stack.
pub struct ActorRegistry {
    store: RwLock<Option<ActorRef<StoreMessage>>>,
}

impl ActorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            store: RwLock::new(None),
        }
    }

    /// Register the store actor.
    pub fn register_store(&self, store: ActorRef<StoreMessage>) {
        *self.store.write().unwrap() = Some(store);
    }

    /// Remove the registered store actor.
    pub fn unregister_store(&self) {
        *self.store.write().unwrap() = None;
    }

    /// Get the store actor.
    pub fn get_store(&self) -> Option<ActorRef<StoreMessage>> {
        self.store.read().unwrap().clone()
    }
}

impl Default for ActorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Global registry instance.
static REGISTRY: std::sync::LazyLock<ActorRegistry> = std::sync::LazyLock::new(ActorRegistry::new);

/// Get the global actor registry.
pub fn global_registry() -> &'static ActorRegistry {
    &REGISTRY
}
