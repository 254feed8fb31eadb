//! Main monitor dashboard component.

use dioxus::prelude::*;
use monitor_core::{ConnectionStatus, GroupedView};

use super::{ConnectionBanner, GroupCard};

/// Refresh interval in milliseconds (2 seconds).
const REFRESH_INTERVAL_MS: u32 = 2000;

/// Main monitor dashboard component.
#[component]
pub fn MonitorDashboard() -> Element {
    let mut view = use_signal(GroupedView::default);
    let mut connection = use_signal(ConnectionStatus::default);
    let mut error = use_signal(|| None::<String>);

    // Auto-refresh: poll the store every 2 seconds
    let _refresh = use_coroutine(move |_rx: UnboundedReceiver<()>| async move {
        loop {
            match api::get_dashboard().await {
                Ok(v) => {
                    view.set(v);
                    error.set(None);
                }
                Err(e) => error.set(Some(format!("Failed to load dashboard: {}", e))),
            }

            if let Ok(c) = api::get_connection().await {
                connection.set(c);
            }

            // Wait before next refresh
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::TimeoutFuture::new(REFRESH_INTERVAL_MS).await;

            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(std::time::Duration::from_millis(REFRESH_INTERVAL_MS as u64))
                .await;
        }
    });

    let current = view();
    let created = current
        .created
        .map(|c| c.format("%Y-%m-%d %H:%M:%S UTC").to_string());

    rsx! {
        div { class: "monitor-dashboard",
            header { class: "monitor-header",
                h1 { "Queue Monitor" }
                if let Some(created) = created {
                    span { class: "snapshot-created", "Snapshot: {created}" }
                }
            }

            ConnectionBanner { status: connection() }

            if let Some(err) = error() {
                div { class: "error-banner",
                    span { "{err}" }
                    button {
                        onclick: move |_| error.set(None),
                        "×"
                    }
                }
            }

            // Stats summary
            div { class: "stats-grid",
                div { class: "stat-card",
                    div { class: "stat-card-value", "{current.total}" }
                    div { class: "stat-card-label", "Total Jobs" }
                }
                for group in current.groups.iter() {
                    div { class: "stat-card",
                        div { class: "stat-card-value", "{group.total}" }
                        div { class: "stat-card-label", "{group.name}" }
                    }
                }
            }

            div { class: "group-grid",
                for group in current.groups.iter() {
                    GroupCard {
                        key: "{group.name}",
                        group: group.clone(),
                    }
                }
            }
        }
    }
}
