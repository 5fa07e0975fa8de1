//! The itinerary sequencer.
//!
//! Turns an unordered list of candidate items into a deterministic,
//! non-overlapping timeline: prioritize, then walk once with a time
//! cursor, inserting travel time and transition buffers between
//! consecutive items.

mod buffer;
mod config;
mod prioritize;
mod sequence;


pub use buffer::buffer_after;
pub use config::SchedulerConfig;
pub use prioritize::{kind_priority, prioritize};
pub use sequence::{ScheduleRequest, schedule, schedule_with_config};
