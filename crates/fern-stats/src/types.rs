//! Wire types for the stats endpoint and the snapshot wrappers the
//! pollers publish.
//!
//! Counters arrive as strings on the wire (pre-formatted by the upstream
//! aggregation pipeline) and are carried through untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The body of `GET /internal/leafwatch/stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsPayload {
    pub dau: Vec<DauEntry>,
    pub events: StatBuckets,
    #[serde(rename = "eventsToday")]
    pub events_today: Vec<TimedCount>,
    pub impressions: StatBuckets,
    #[serde(rename = "impressionsToday")]
    pub impressions_today: Vec<TimedCount>,
    #[serde(rename = "topEvents")]
    pub top_events: Vec<NamedCount>,
}

/// Fixed time buckets served for each metric family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBuckets {
    pub last_60_seconds: String,
    pub today: String,
    pub yesterday: String,
    pub this_week: String,
    pub this_month: String,
    pub all_time: String,
}

/// One day of active-user history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DauEntry {
    pub date: String,
    pub dau: String,
    pub events: String,
    pub impressions: String,
}

/// One point of an intra-day time series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedCount {
    pub count: String,
    pub timestamp: String,
}

/// One row of the top-events leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedCount {
    pub count: String,
    pub name: String,
}

/// An immutable, timestamped poll result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot<T> {
    pub fetched_at: DateTime<Utc>,
    pub payload: T,
}

impl<T> MetricSnapshot<T> {
    pub fn now(payload: T) -> Self {
        Self {
            fetched_at: Utc::now(),
            payload,
        }
    }
}

/// Lifecycle of one poll source. `Loading` only before the first
/// completion; afterwards the source alternates between `Ready` and
/// `Failed` as ticks succeed or fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceState<T> {
    Loading,
    Ready(MetricSnapshot<T>),
    Failed {
        error: String,
        at: DateTime<Utc>,
    },
}

impl<T> SourceState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, SourceState::Loading)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::STATS_FIXTURE;
    use super::*;

    #[test]
    fn stats_payload_decodes_from_wire_json() {
        let payload: StatsPayload = serde_json::from_str(STATS_FIXTURE).unwrap();
        assert_eq!(payload.events.last_60_seconds, "42");
        assert_eq!(payload.impressions.all_time, "390112478");
        assert_eq!(payload.events_today.len(), 2);
        assert_eq!(payload.impressions_today[0].count, "801");
        assert_eq!(payload.top_events[0].name, "PAGEVIEW");
        assert_eq!(payload.dau[0].dau, "1204");
    }

    #[test]
    fn stats_payload_round_trips_with_camel_case_keys() {
        let payload: StatsPayload = serde_json::from_str(STATS_FIXTURE).unwrap();
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"eventsToday\""));
        assert!(json.contains("\"topEvents\""));
        assert!(json.contains("\"last_60_seconds\""));
    }

    #[test]
    fn missing_field_is_a_decode_failure() {
        let result = serde_json::from_str::<StatsPayload>(r#"{ "dau": [] }"#);
        assert!(result.is_err());
    }

    #[test]
    fn source_state_loading_only_before_first_completion() {
        let state: SourceState<u64> = SourceState::Loading;
        assert!(state.is_loading());

        let state = SourceState::Ready(MetricSnapshot::now(7u64));
        assert!(!state.is_loading());
    }
}
