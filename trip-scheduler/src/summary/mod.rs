//! Roll-ups over a scheduled timeline.
//!
//! Downstream consumers usually present an itinerary day by day with a
//! cost and time footprint. These helpers are pure views over the
//! sequencer's output; they never reorder or mutate it.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::ScheduledItem;

/// Aggregate footprint of a scheduled timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItinerarySummary {
    /// Number of scheduled items.
    pub item_count: usize,

    /// Minutes spent inside scheduled items.
    pub total_scheduled_minutes: i64,

    /// Minutes spent travelling between items.
    pub total_travel_minutes: i64,

    /// Kilometres travelled between items.
    pub total_travel_km: f64,

    /// Estimated travel spend in USD (walking legs contribute nothing).
    pub total_travel_cost_usd: f64,

    /// Start of the first item, when the timeline is non-empty.
    pub starts_at: Option<NaiveDateTime>,

    /// End of the last item, when the timeline is non-empty.
    pub ends_at: Option<NaiveDateTime>,
}

/// Summarize a scheduled timeline.
///
/// An empty timeline yields a zeroed summary with no start or end.
pub fn summarize(timeline: &[ScheduledItem]) -> ItinerarySummary {
    let mut summary = ItinerarySummary {
        item_count: timeline.len(),
        total_scheduled_minutes: 0,
        total_travel_minutes: 0,
        total_travel_km: 0.0,
        total_travel_cost_usd: 0.0,
        starts_at: timeline.first().map(|i| i.start_time),
        ends_at: timeline.last().map(|i| i.end_time),
    };

    for item in timeline {
        summary.total_scheduled_minutes += item.scheduled_minutes();

        if let Some(travel) = &item.travel_to_next {
            summary.total_travel_minutes += travel.duration_minutes;
            summary.total_travel_km += travel.distance_km;
            summary.total_travel_cost_usd += travel.cost_usd.unwrap_or(0.0);
        }
    }

    summary
}

/// Group a timeline by the calendar date each item starts on.
///
/// The map is ordered by date; within a date, items keep their timeline
/// order.
pub fn group_by_day(timeline: &[ScheduledItem]) -> BTreeMap<NaiveDate, Vec<&ScheduledItem>> {
    let mut days: BTreeMap<NaiveDate, Vec<&ScheduledItem>> = BTreeMap::new();

    for item in timeline {
        days.entry(item.start_time.date()).or_default().push(item);
    }

    days
}
