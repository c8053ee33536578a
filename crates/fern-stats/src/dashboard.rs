//! Merges the pollers' latest results into one render-ready view.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use fern_config::schema::PollingConfig;

use crate::client::StatsSource;
use crate::poller::{spawn_profile_poller, spawn_stats_poller};
use crate::types::{DauEntry, NamedCount, SourceState, StatBuckets, StatsPayload, TimedCount};

/// Everything the dashboard renders, composed from the latest successful
/// poll of each source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub fetched_at: DateTime<Utc>,
    pub events: StatBuckets,
    pub impressions: StatBuckets,
    pub events_today: Vec<TimedCount>,
    pub impressions_today: Vec<TimedCount>,
    pub active_users: Vec<DauEntry>,
    pub top_events: Vec<NamedCount>,
    /// Latest-profile-id proxy; 0 until the secondary source first succeeds.
    pub total_profiles: u64,
}

/// What to render right now. The primary (stats) source decides the
/// variant; secondary sources only ever fill fields of `Ready`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardView {
    Loading,
    Error(String),
    Ready(DashboardSnapshot),
}

/// Compose the view from the primary source's state and the most recent
/// known profile count. Precedence: loading, then error, then data —
/// a primary error is surfaced instead of any partial dashboard.
pub fn compose_view(stats: &SourceState<StatsPayload>, total_profiles: u64) -> DashboardView {
    match stats {
        SourceState::Loading => DashboardView::Loading,
        SourceState::Failed { error, .. } => DashboardView::Error(error.clone()),
        SourceState::Ready(snapshot) => DashboardView::Ready(DashboardSnapshot {
            fetched_at: snapshot.fetched_at,
            events: snapshot.payload.events.clone(),
            impressions: snapshot.payload.impressions.clone(),
            events_today: snapshot.payload.events_today.clone(),
            impressions_today: snapshot.payload.impressions_today.clone(),
            active_users: snapshot.payload.dau.clone(),
            top_events: snapshot.payload.top_events.clone(),
            total_profiles,
        }),
    }
}

/// Owns both pollers and composes their outputs on demand.
///
/// The profile-count source is secondary: its failures are absorbed (the
/// last known value, or 0, keeps rendering) and never block the stats
/// sections.
pub struct StatsDashboard {
    stats_rx: watch::Receiver<SourceState<StatsPayload>>,
    profiles_rx: watch::Receiver<SourceState<u64>>,
    last_profile_count: u64,
    token: CancellationToken,
    handles: Vec<JoinHandle<()>>,
}

impl StatsDashboard {
    /// Start both pollers against `source` with the configured cadence.
    pub fn start(source: Arc<dyn StatsSource>, polling: &PollingConfig) -> Self {
        let (stats_tx, stats_rx) = watch::channel(SourceState::Loading);
        let (profiles_tx, profiles_rx) = watch::channel(SourceState::Loading);
        let token = CancellationToken::new();

        let handles = vec![
            spawn_stats_poller(
                Arc::clone(&source),
                Duration::from_millis(polling.stats_interval_ms),
                stats_tx,
                token.clone(),
            ),
            spawn_profile_poller(
                source,
                Duration::from_millis(polling.profiles_interval_ms),
                profiles_tx,
                token.clone(),
            ),
        ];

        Self {
            stats_rx,
            profiles_rx,
            last_profile_count: 0,
            token,
            handles,
        }
    }

    /// Compose the current view from whatever has arrived so far.
    pub fn snapshot(&mut self) -> DashboardView {
        if let SourceState::Ready(ref snap) = *self.profiles_rx.borrow_and_update() {
            self.last_profile_count = snap.payload;
        }
        let stats = self.stats_rx.borrow_and_update().clone();
        compose_view(&stats, self.last_profile_count)
    }

    /// Latest known profile count (0 until the first success).
    pub fn total_profiles(&self) -> u64 {
        self.last_profile_count
    }

    /// Stop scheduling new polls. In-flight requests complete and are
    /// discarded.
    pub fn shutdown(&self) {
        self.token.cancel();
    }

    /// Wait for the poller tasks to wind down after [`shutdown`](Self::shutdown).
    pub async fn join(self) {
        for handle in self.handles {
            let _ = handle.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MetricSnapshot;

    fn fixture_payload() -> StatsPayload {
        serde_json::from_str(crate::types::fixtures::STATS_FIXTURE).unwrap()
    }

    fn dashboard_from(
        stats: SourceState<StatsPayload>,
        profiles: SourceState<u64>,
    ) -> (
        StatsDashboard,
        watch::Sender<SourceState<StatsPayload>>,
        watch::Sender<SourceState<u64>>,
    ) {
        let (stats_tx, stats_rx) = watch::channel(stats);
        let (profiles_tx, profiles_rx) = watch::channel(profiles);
        let dashboard = StatsDashboard {
            stats_rx,
            profiles_rx,
            last_profile_count: 0,
            token: CancellationToken::new(),
            handles: Vec::new(),
        };
        (dashboard, stats_tx, profiles_tx)
    }

    #[test]
    fn loading_until_primary_first_completes() {
        let (mut dashboard, _s, _p) = dashboard_from(
            SourceState::Loading,
            SourceState::Ready(MetricSnapshot::now(500)),
        );
        // a ready secondary cannot pull the dashboard out of loading
        assert_eq!(dashboard.snapshot(), DashboardView::Loading);
    }

    #[test]
    fn primary_error_wins_over_everything() {
        let (mut dashboard, _s, _p) = dashboard_from(
            SourceState::Failed {
                error: "http status 503".into(),
                at: Utc::now(),
            },
            SourceState::Ready(MetricSnapshot::now(500)),
        );
        assert_eq!(
            dashboard.snapshot(),
            DashboardView::Error("http status 503".into())
        );
    }

    #[test]
    fn ready_with_pending_secondary_defaults_profile_count_to_zero() {
        let (mut dashboard, _s, _p) = dashboard_from(
            SourceState::Ready(MetricSnapshot::now(fixture_payload())),
            SourceState::Loading,
        );

        match dashboard.snapshot() {
            DashboardView::Ready(snapshot) => {
                assert_eq!(snapshot.total_profiles, 0);
                assert_eq!(snapshot.events.last_60_seconds, "42");
                assert_eq!(snapshot.impressions.today, "193022");
                assert_eq!(snapshot.active_users.len(), 1);
                assert_eq!(snapshot.top_events[0].name, "PAGEVIEW");
            }
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[test]
    fn secondary_failure_keeps_last_known_count() {
        let (mut dashboard, _s, profiles_tx) = dashboard_from(
            SourceState::Ready(MetricSnapshot::now(fixture_payload())),
            SourceState::Ready(MetricSnapshot::now(23614)),
        );

        match dashboard.snapshot() {
            DashboardView::Ready(snapshot) => assert_eq!(snapshot.total_profiles, 23614),
            other => panic!("expected Ready, got {other:?}"),
        }

        // the secondary source degrades; the count must not regress or error
        profiles_tx.send_replace(SourceState::Failed {
            error: "network error: timeout".into(),
            at: Utc::now(),
        });

        match dashboard.snapshot() {
            DashboardView::Ready(snapshot) => assert_eq!(snapshot.total_profiles, 23614),
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[test]
    fn primary_recovers_after_error() {
        let (mut dashboard, stats_tx, _p) = dashboard_from(
            SourceState::Failed {
                error: "network error: timeout".into(),
                at: Utc::now(),
            },
            SourceState::Loading,
        );
        assert!(matches!(dashboard.snapshot(), DashboardView::Error(_)));

        stats_tx.send_replace(SourceState::Ready(MetricSnapshot::now(fixture_payload())));
        assert!(matches!(dashboard.snapshot(), DashboardView::Ready(_)));
    }

    #[test]
    fn compose_view_is_pure_over_its_inputs() {
        let stats = SourceState::Ready(MetricSnapshot::now(fixture_payload()));
        let a = compose_view(&stats, 7);
        let b = compose_view(&stats, 7);
        assert_eq!(a, b);
    }
}
