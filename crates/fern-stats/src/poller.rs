//! Fixed-interval pollers, one task per source.
//!
//! A tick never waits for the previous request: each fetch runs as its own
//! task and publishes on completion, so requests may overlap and the watch
//! channel holds whichever response **completed** last. No stale-response
//! guard is applied; at a 1 s cadence the reordering window is a tick at
//! most, and the dashboard only ever renders whole snapshots.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use fern_common::id::new_correlation_id;

use crate::client::StatsSource;
use crate::types::{MetricSnapshot, SourceState, StatsPayload};

/// Poll the aggregate stats endpoint every `interval`.
///
/// Errors mark the source [`SourceState::Failed`] and are retried naturally
/// on the next tick; nothing here backs off or pauses. Cancelling the token
/// stops scheduling new fetches; in-flight requests are left to complete and
/// their late writes are harmless.
pub fn spawn_stats_poller(
    source: Arc<dyn StatsSource>,
    interval: Duration,
    tx: watch::Sender<SourceState<StatsPayload>>,
    token: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!("stats poller stopped");
                    break;
                }
                _ = ticker.tick() => {
                    let source = Arc::clone(&source);
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        let cid = new_correlation_id();
                        match source.fetch_stats().await {
                            Ok(payload) => {
                                tracing::debug!(%cid, "stats fetch completed");
                                tx.send_replace(SourceState::Ready(MetricSnapshot::now(payload)));
                            }
                            Err(e) => {
                                tracing::warn!(%cid, error = %e, "stats fetch failed");
                                tx.send_replace(SourceState::Failed {
                                    error: e.to_string(),
                                    at: chrono::Utc::now(),
                                });
                            }
                        }
                    });
                }
            }
        }
    })
}

/// Poll the latest-created profiles query every `interval`, extracting the
/// single scalar (first item's id) and publishing it independently of the
/// stats payload. Same overlap and failure semantics as the stats poller;
/// a failure here never touches the other source.
pub fn spawn_profile_poller(
    source: Arc<dyn StatsSource>,
    interval: Duration,
    tx: watch::Sender<SourceState<u64>>,
    token: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!("profile poller stopped");
                    break;
                }
                _ = ticker.tick() => {
                    let source = Arc::clone(&source);
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        let cid = new_correlation_id();
                        match source.latest_profile_id().await {
                            Ok(id) => {
                                tracing::debug!(%cid, profile_id = id, "profile poll completed");
                                tx.send_replace(SourceState::Ready(MetricSnapshot::now(id)));
                            }
                            Err(e) => {
                                tracing::warn!(%cid, error = %e, "profile poll failed");
                                tx.send_replace(SourceState::Failed {
                                    error: e.to_string(),
                                    at: chrono::Utc::now(),
                                });
                            }
                        }
                    });
                }
            }
        }
    })
}
