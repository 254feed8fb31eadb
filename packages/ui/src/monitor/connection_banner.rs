//! Connection status banner.

use dioxus::prelude::*;
use monitor_core::ConnectionStatus;

/// Banner shown while the feed connection is unhealthy.
#[component]
pub fn ConnectionBanner(status: ConnectionStatus) -> Element {
    if status.is_healthy() {
        return rsx! {};
    }

    let (modifier, message) = if status.reconnect_error {
        ("reconnect-error", "Reconnect failed; retrying with backoff")
    } else {
        ("disconnected", "Disconnected from queue feed")
    };

    rsx! {
        div { class: "connection-banner {modifier}",
            span { "{message}" }
        }
    }
}
