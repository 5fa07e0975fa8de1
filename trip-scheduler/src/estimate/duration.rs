//! Duration estimation for activities, hotel stays, and flights.

use chrono::NaiveDateTime;

use crate::domain::DurationInfo;

use super::classify::ActivityType;

/// Airport overhead for domestic flights (check-in, security, boarding).
const DOMESTIC_OVERHEAD_MINS: i64 = 120;

/// Airport overhead for international flights.
const INTERNATIONAL_OVERHEAD_MINS: i64 = 180;

/// How much earlier than the estimate a flight block can plausibly end.
const FLIGHT_EARLY_MINS: i64 = 30;

/// Delay allowance added on top of the flight estimate.
const FLIGHT_DELAY_MINS: i64 = 60;

/// Floor for a degenerate hotel stay (check-out at or before check-in).
const MIN_HOTEL_STAY_MINS: i64 = 60;

/// A {minimum, typical, maximum} minute triple for one archetype.
struct DurationRange {
    minimum: i64,
    typical: i64,
    maximum: i64,
}

/// Fixed per-archetype duration ranges, in minutes.
const fn range_for(activity_type: ActivityType) -> DurationRange {
    let (minimum, typical, maximum) = match activity_type {
        ActivityType::Sightseeing => (60, 120, 240),
        ActivityType::Museum => (90, 150, 240),
        ActivityType::Outdoor => (120, 180, 360),
        ActivityType::Adventure => (180, 240, 480),
        ActivityType::Food => (45, 90, 150),
        ActivityType::Shopping => (60, 120, 240),
        ActivityType::Entertainment => (90, 150, 300),
        ActivityType::Cultural => (60, 120, 240),
        ActivityType::Relaxation => (60, 120, 300),
        ActivityType::Transportation => (15, 30, 90),
        ActivityType::Tour => (120, 240, 480),
    };
    DurationRange {
        minimum,
        typical,
        maximum,
    }
}

/// Group-size multiplier: bigger parties move slower.
fn group_multiplier(group_size: u32) -> f64 {
    if group_size > 4 {
        1.2
    } else if group_size > 2 {
        1.1
    } else {
        1.0
    }
}

/// Estimate how long an activity of the given archetype occupies.
///
/// Looks up the archetype's fixed range and scales all three values by
/// the group-size multiplier. Transportation is the one inflexible
/// archetype (a transfer takes as long as it takes); everything else may
/// be compressed or expanded by later optimization passes.
///
/// # Examples
///
/// ```
/// use trip_scheduler::estimate::{ActivityType, activity_duration};
///
/// let solo = activity_duration(ActivityType::Food, 2);
/// assert_eq!(solo.estimated_minutes, 90);
///
/// let party = activity_duration(ActivityType::Food, 6);
/// assert_eq!(party.estimated_minutes, 108);
/// ```
pub fn activity_duration(activity_type: ActivityType, group_size: u32) -> DurationInfo {
    let range = range_for(activity_type);
    let multiplier = group_multiplier(group_size);

    let scale = |mins: i64| (mins as f64 * multiplier).round() as i64;

    DurationInfo::new(
        scale(range.typical),
        scale(range.minimum),
        scale(range.maximum),
        activity_type != ActivityType::Transportation,
    )
}

/// Duration of a hotel stay: exactly the booked check-in to check-out
/// span, inflexible.
///
/// A degenerate booking (check-out at or before check-in) clamps to a
/// one-hour floor instead of failing.
pub fn hotel_duration(check_in: NaiveDateTime, check_out: NaiveDateTime) -> DurationInfo {
    let minutes = (check_out - check_in).num_minutes().max(MIN_HOTEL_STAY_MINS);
    DurationInfo::fixed(minutes)
}

/// Duration of a flight block: in-air time plus airport overhead.
///
/// Domestic flights get 120 minutes of overhead, international 180. The
/// minimum allows clearing the airport 30 minutes faster; the maximum
/// adds a 60-minute delay allowance. Inflexible: departure and arrival
/// are contractual.
pub fn flight_duration(flight_minutes: i64, is_domestic: bool) -> DurationInfo {
    let flight_minutes = flight_minutes.max(0);
    let overhead = if is_domestic {
        DOMESTIC_OVERHEAD_MINS
    } else {
        INTERNATIONAL_OVERHEAD_MINS
    };

    let estimated = flight_minutes + overhead;
    DurationInfo {
        estimated_minutes: estimated,
        minimum_minutes: estimated - FLIGHT_EARLY_MINS,
        maximum_minutes: estimated + FLIGHT_DELAY_MINS,
        description: crate::domain::format_minutes(estimated),
        flexible: false,
    }
}
