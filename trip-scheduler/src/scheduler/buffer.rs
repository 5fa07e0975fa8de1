//! Transition buffer computation.
//!
//! The buffer absorbs everything a travel estimate doesn't: finishing up,
//! meal transitions, hotel check-in and check-out, catching one's breath
//! between activities. It is computed per consecutive pair and clamped to
//! a sane range.

use crate::domain::{ItemKind, TravelInfo};

use super::config::SchedulerConfig;

/// Compute the buffer to hold after `current` before `next` starts.
///
/// Starts from the base buffer plus the travel duration, adds kind-pair
/// surcharges (activity-to-activity break, meal transition, hotel
/// check-in/out), applies a long-haul premium or short-hop discount by
/// distance, and clamps the result to
/// `[min_buffer_mins, max_buffer_mins]`.
pub fn buffer_after(
    current: ItemKind,
    next: ItemKind,
    travel: &TravelInfo,
    config: &SchedulerConfig,
) -> i64 {
    let mut buffer = config.base_buffer_mins + travel.duration_minutes;

    if current == ItemKind::Activity && next == ItemKind::Activity {
        buffer += config.activity_break_mins;
    }
    if current == ItemKind::Restaurant || next == ItemKind::Restaurant {
        buffer += config.meal_transition_mins;
    }
    if current == ItemKind::Hotel || next == ItemKind::Hotel {
        buffer += config.hotel_transition_mins;
    }

    if travel.distance_km > config.long_haul_threshold_km {
        buffer += config.long_haul_extra_mins;
    } else if travel.distance_km < config.short_hop_threshold_km {
        buffer = (buffer - config.short_hop_discount_mins).max(config.min_buffer_mins);
    }

    buffer.clamp(config.min_buffer_mins, config.max_buffer_mins)
}
