//! Domain types for the itinerary scheduling engine.
//!
//! This module contains the core model types that flow through the
//! engine: candidate items and their locations on the input side,
//! duration and travel estimates in the middle, and scheduled items on
//! the output side. All types are plain immutable data; the engine never
//! mutates its input.

mod coordinate;
mod duration;
mod item;
mod location;
mod scheduled;
mod travel;

pub use coordinate::Coordinate;
pub use duration::{DurationInfo, format_minutes};
pub use item::{CandidateItem, InvalidItemKind, ItemKind, ItemMeta, TimeSlot};
pub use location::{InvalidLocationKind, LocationInfo, LocationKind};
pub use scheduled::ScheduledItem;
pub use travel::{InvalidTravelMethod, TravelInfo, TravelMethod};
