//! Dashboard components for the queue monitor.

mod connection_banner;
mod dashboard;
mod group_card;
mod job_row;
mod status_badge;

pub use connection_banner::ConnectionBanner;
pub use dashboard::MonitorDashboard;
pub use group_card::GroupCard;
pub use job_row::JobRow;
pub use status_badge::StateBadge;
