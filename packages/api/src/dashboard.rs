//! Dashboard state server functions.

use dioxus::prelude::*;
use monitor_core::{ConnectionStatus, GroupedView};

/// Get the current grouped queue view.
#[get("/api/monitor/dashboard")]
pub async fn get_dashboard() -> Result<GroupedView, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use actors::global_registry;
        use actors::StoreMessage;

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        let store = global_registry()
            .get_store()
            .ok_or_else(|| ServerFnError::new("Store not available"))?;

        let (tx, rx) = actors::concurrency::oneshot();
        store
            .send_message(StoreMessage::GetView { reply: tx.into() })
            .map_err(|e| ServerFnError::new(format!("Failed to send message: {}", e)))?;

        rx.await
            .map_err(|_| ServerFnError::new("Failed to receive response"))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Get the feed connection status.
#[get("/api/monitor/connection")]
pub async fn get_connection() -> Result<ConnectionStatus, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use actors::global_registry;
        use actors::StoreMessage;

        crate::ensure_initialized()
            .await
            .map_err(|e| ServerFnError::new(format!("Initialization failed: {}", e)))?;

        let store = global_registry()
            .get_store()
            .ok_or_else(|| ServerFnError::new("Store not available"))?;

        let (tx, rx) = actors::concurrency::oneshot();
        store
            .send_message(StoreMessage::GetConnection { reply: tx.into() })
            .map_err(|e| ServerFnError::new(format!("Failed to send message: {}", e)))?;

        rx.await
            .map_err(|_| ServerFnError::new("Failed to receive response"))
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
