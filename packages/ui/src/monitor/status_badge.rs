//! State badge component.

use dioxus::prelude::*;

/// Badge for displaying a job state label.
#[component]
pub fn StateBadge(state: String) -> Element {
    let (bg_class, text) = match state.as_str() {
        "pending" => ("badge-pending", "Pending"),
        "deferred" => ("badge-deferred", "Deferred"),
        "failed" => ("badge-failed", "Failed"),
        "running" => ("badge-running", "Running"),
        "error" => ("badge-error", "Error"),
        "inactive" => ("badge-inactive", "Inactive"),
        "killed" => ("badge-killed", "Killed"),
        _ => ("badge-default", state.as_str()),
    };

    rsx! {
        span {
            class: "state-badge {bg_class}",
            {text}
        }
    }
}
