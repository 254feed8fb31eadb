//! Group card component for one named bucket of job states.

use dioxus::prelude::*;
use monitor_core::Group;

use super::JobRow;

/// Props for GroupCard component.
#[derive(Props, Clone, PartialEq)]
pub struct GroupCardProps {
    /// The group to display.
    pub group: Group,
}

/// Card component for a single dashboard group.
#[component]
pub fn GroupCard(props: GroupCardProps) -> Element {
    let group = props.group.clone();

    rsx! {
        div { class: "group-card",
            div { class: "group-card-header",
                h3 { class: "group-name", "{group.name}" }
                span { class: "group-total", "{group.total}" }
            }

            if group.jobs.is_empty() {
                div { class: "empty-state",
                    p { "No jobs" }
                }
            } else {
                table { class: "job-table",
                    thead {
                        tr {
                            th { "Job" }
                            th { "State" }
                            th { "Count" }
                        }
                    }
                    tbody {
                        for job in group.jobs.iter() {
                            JobRow {
                                key: "{job.name}-{job.state}",
                                job: job.clone(),
                            }
                        }
                    }
                }
            }
        }
    }
}
