//! Server initialization for the queue monitor.

use actors::{global_registry, start_store, StoreMessage};
use feed::{run_feed, FeedClient, FeedEvent, ReconnectConfig};
use monitor_core::GroupConfig;
use tokio::sync::OnceCell;
use tokio_util::sync::CancellationToken;

/// Feed endpoint used when `MONITOR_FEED_URL` is unset.
const DEFAULT_FEED_URL: &str = "ws://localhost:8080/feed";

static INIT: OnceCell<()> = OnceCell::const_new();

/// Initialize the monitor once, before the first server function runs.
///
/// Safe to call from every server function; only the first call does
/// any work.
pub async fn ensure_initialized() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    INIT.get_or_try_init(init_monitor).await?;
    Ok(())
}

/// Start the store actor and the feed task.
async fn init_monitor() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing::info!("Initializing queue monitor...");

    let (store, _handle) = start_store(
        GroupConfig::default(),
        Some(crate::event_broadcaster()),
    )
    .await?;
    global_registry().register_store(store.clone());

    let url = std::env::var("MONITOR_FEED_URL").unwrap_or_else(|_| DEFAULT_FEED_URL.to_string());
    tracing::info!(url = %url, "Starting queue feed task");

    let client = FeedClient::new(url);
    let cancel = CancellationToken::new();

    tokio::spawn(async move {
        run_feed(client, ReconnectConfig::default(), cancel, move |event| {
            let message = match event {
                FeedEvent::Opened => StoreMessage::SocketOpened,
                FeedEvent::Snapshot(snapshot) => StoreMessage::ApplySnapshot(Box::new(snapshot)),
                FeedEvent::Closed { error } => StoreMessage::SocketClosed { error },
                FeedEvent::ReconnectFailed => StoreMessage::ReconnectFailed,
            };
            if let Err(e) = store.send_message(message) {
                tracing::warn!("Failed to forward feed event: {}", e);
            }
        })
        .await;
    });

    tracing::info!("Queue monitor initialized");
    Ok(())
}
