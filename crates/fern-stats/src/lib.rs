//! The staff stats dashboard: two independently scheduled pollers merged
//! into one coherent, render-ready snapshot.
//!
//! Each poller publishes its latest completed result over a watch channel;
//! [`StatsDashboard`] composes whatever has arrived so far, tolerating one
//! source failing while the other keeps refreshing.

pub mod client;
pub mod dashboard;
pub mod poller;
pub mod types;

pub use client::{StatsClient, StatsSource};
pub use dashboard::{DashboardSnapshot, DashboardView, StatsDashboard};
pub use poller::{spawn_profile_poller, spawn_stats_poller};
pub use types::{MetricSnapshot, SourceState, StatsPayload};
