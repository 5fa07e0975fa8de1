//! Candidate prioritization for the sequencing walk.
//!
//! Orders candidates before the time cursor walks them: fixed-time items
//! first (in time order, since they anchor the timeline), then everything
//! else by kind priority. The sort is stable, so ties within a priority
//! bucket preserve input order.

use std::cmp::Ordering;

use crate::domain::{CandidateItem, ItemKind};

/// Fixed type priority: flights anchor trips, hotels come next, then the
/// things you do once you're there.
pub fn kind_priority(kind: ItemKind) -> u8 {
    match kind {
        ItemKind::Flight => 1,
        ItemKind::Hotel => 2,
        ItemKind::Activity => 3,
        ItemKind::Restaurant => 4,
        ItemKind::Transport => 5,
    }
}

/// Sort candidates into scheduling order.
///
/// Items with a fixed time sort before items without, ordered by that
/// time ascending. Among unfixed items, kind priority decides; equal
/// priorities keep their input order.
pub fn prioritize(mut items: Vec<CandidateItem>) -> Vec<CandidateItem> {
    items.sort_by(|a, b| match (a.fixed_time, b.fixed_time) {
        (Some(at_a), Some(at_b)) => at_a.cmp(&at_b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => kind_priority(a.kind).cmp(&kind_priority(b.kind)),
    });

    items
}
