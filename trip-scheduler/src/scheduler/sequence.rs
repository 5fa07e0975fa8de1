//! The sequencing walk: candidates in, scheduled timeline out.
//!
//! Prioritizes the candidate list, then walks it once with a time cursor,
//! estimating each item's duration, the travel leg to its successor, and
//! the transition buffer to hold before that successor starts. Fixed-time
//! items keep their anchored start; everything else starts at the cursor.

use chrono::{Duration, NaiveDateTime};
use tracing::{debug, trace};

use crate::domain::{
    CandidateItem, DurationInfo, ItemKind, ItemMeta, ScheduledItem, TimeSlot,
};
use crate::estimate::{activity_duration, classify_activity, flight_duration, hotel_duration};
use crate::geo::estimate_travel;

use super::buffer::buffer_after;
use super::config::SchedulerConfig;
use super::prioritize::prioritize;

/// A scheduling request: the candidates plus trip parameters.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Unordered candidate items.
    pub items: Vec<CandidateItem>,

    /// When the trip (and the cursor) starts.
    pub trip_start: NaiveDateTime,

    /// Party size; larger groups get longer activity estimates.
    pub group_size: u32,
}

impl ScheduleRequest {
    /// Create a scheduling request.
    pub fn new(items: Vec<CandidateItem>, trip_start: NaiveDateTime, group_size: u32) -> Self {
        Self {
            items,
            trip_start,
            group_size,
        }
    }
}

/// Schedule a request with the default configuration.
///
/// The output is in prioritized order, not input order, and always has
/// exactly as many items as the input. Scheduling is deterministic and
/// side-effect free; calling twice with the same input yields the same
/// timeline.
pub fn schedule(request: &ScheduleRequest) -> Vec<ScheduledItem> {
    schedule_with_config(request, &SchedulerConfig::default())
}

/// Schedule a request with an explicit configuration.
pub fn schedule_with_config(
    request: &ScheduleRequest,
    config: &SchedulerConfig,
) -> Vec<ScheduledItem> {
    let ordered = prioritize(request.items.clone());
    let mut scheduled = Vec::with_capacity(ordered.len());
    let mut cursor = request.trip_start;

    for (idx, item) in ordered.iter().enumerate() {
        let start_time = item.fixed_time.unwrap_or(cursor);
        let duration = estimate_item_duration(item, request.group_size);
        let end_time = start_time + duration.estimated();

        let next = ordered.get(idx + 1);
        let (travel_to_next, buffer_after_minutes) = match next {
            Some(next_item) => {
                let slot = TimeSlot::from_datetime(end_time);
                let travel = estimate_travel(&item.location, &next_item.location, slot);
                let buffer = buffer_after(item.kind, next_item.kind, &travel, config);
                (Some(travel), buffer)
            }
            None => (None, 0),
        };

        trace!(
            id = %item.id,
            kind = %item.kind,
            start = %start_time,
            end = %end_time,
            buffer = buffer_after_minutes,
            "placed item"
        );

        // Advance the cursor past this item, its buffer, and the travel
        // leg; the final item leaves the cursor untouched.
        if let Some(travel) = &travel_to_next {
            cursor = end_time
                + Duration::minutes(buffer_after_minutes)
                + Duration::minutes(travel.duration_minutes);
        }

        scheduled.push(ScheduledItem {
            id: item.id.clone(),
            kind: item.kind,
            name: item.name.clone(),
            description: item.description.clone(),
            location: item.location.clone(),
            start_time,
            end_time,
            duration,
            travel_to_next,
            buffer_after_minutes,
        });
    }

    debug!(
        items = scheduled.len(),
        trip_start = %request.trip_start,
        group_size = request.group_size,
        "schedule complete"
    );

    scheduled
}

/// Estimate how long one item occupies.
///
/// Flights and hotels with booking metadata get their contractual
/// durations; everything else (including a flight or hotel whose metadata
/// is missing) goes through classification and the archetype tables.
fn estimate_item_duration(item: &CandidateItem, group_size: u32) -> DurationInfo {
    match (item.kind, &item.meta) {
        (
            ItemKind::Flight,
            Some(ItemMeta::Flight {
                flight_minutes,
                is_domestic,
            }),
        ) => flight_duration(*flight_minutes, *is_domestic),
        (
            ItemKind::Hotel,
            Some(ItemMeta::Hotel {
                check_in,
                check_out,
            }),
        ) => hotel_duration(*check_in, *check_out),
        _ => {
            let activity_type = classify_activity(&item.categories, &item.description);
            activity_duration(activity_type, group_size)
        }
    }
}
