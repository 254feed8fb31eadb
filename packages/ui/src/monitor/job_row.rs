//! Job row component for displaying a single summary row.

use dioxus::prelude::*;
use monitor_core::Job;

use super::StateBadge;

/// Props for JobRow component.
#[derive(Props, Clone, PartialEq)]
pub struct JobRowProps {
    /// The summary row to display.
    pub job: Job,
}

/// Table row for one job class in one state.
#[component]
pub fn JobRow(props: JobRowProps) -> Element {
    let job = props.job.clone();

    rsx! {
        tr { class: "job-row",
            td { class: "job-name", "{job.name}" }
            td { class: "job-state",
                StateBadge { state: job.state.clone() }
            }
            td { class: "job-count", "{job.n}" }
        }
    }
}
