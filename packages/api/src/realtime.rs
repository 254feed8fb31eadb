//! Real-time event streaming via Server-Sent Events.

use monitor_core::StoreEvent;
use tokio::sync::broadcast;

/// Broadcast channel capacity for store events.
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Global event broadcaster.
static EVENT_TX: std::sync::LazyLock<broadcast::Sender<StoreEvent>> =
    std::sync::LazyLock::new(|| {
        let (tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        tx
    });

/// Get the global event broadcaster.
pub fn event_broadcaster() -> broadcast::Sender<StoreEvent> {
    EVENT_TX.clone()
}

/// Subscribe to the global event stream.
pub fn subscribe_events() -> broadcast::Receiver<StoreEvent> {
    EVENT_TX.subscribe()
}

/// Helper to format an event for SSE.
pub fn format_sse_event(event: &StoreEvent) -> String {
    let json = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    format!("data: {}\n\n", json)
}
