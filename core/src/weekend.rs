//! Stage 1 — weekend pair resolution.
//!
//! Each Saturday is paired with the Sunday that follows it and both days
//! are covered by one engineer. Pairs resolve in ascending index order into
//! an explicit map; no pair is revisited. The only exclusion applied here
//! is back-to-back prevention (the holder of the immediately preceding
//! pair). Separation from the adjacent weeks' on-call engineers is
//! enforced in stage 2, which reads the completed pair map.
//!
//! Absence is not consulted here: pairing covers the intended assignment,
//! and per-day absence override happens during day assembly.

use crate::{
    calendar,
    decision::{DecisionKind, DecisionLog},
    request::RotationSeeds,
    rotation::{pick_with_conflicts, rotation_order, Resolution},
    types::{Engineer, WeekendIndex},
};
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekendAssignment {
    pub engineer:   Engineer,
    pub resolution: Resolution,
}

/// Resolve every weekend pair touching the expanded range: indices
/// `0..=weeks`, the last being the Saturday that closes the range (its
/// Sunday falls outside).
pub fn resolve_weekends(
    roster: &[Engineer],
    seeds: &RotationSeeds,
    start: NaiveDate,
    weeks: u32,
    log: &mut DecisionLog,
) -> BTreeMap<WeekendIndex, WeekendAssignment> {
    let mut pairs: BTreeMap<WeekendIndex, WeekendAssignment> = BTreeMap::new();

    for k in 0..=i64::from(weeks) {
        let order = rotation_order(roster, k + seeds.weekend);
        let previous = pairs.get(&(k - 1)).map(|a| a.engineer.clone());

        let pick = match pick_with_conflicts(
            &order,
            |e| previous.as_deref() == Some(e.as_str()),
            "every candidate would repeat a weekend",
        ) {
            Some(pick) => pick,
            None => continue, // empty roster is rejected upstream
        };

        if let Resolution::ConflictAvoided { displaced } = &pick.resolution {
            log.push(
                calendar::weekend_saturday(start, k),
                DecisionKind::WeekendConflictPrevention,
                vec![pick.engineer.clone()],
                format!(
                    "{displaced} covered the previous weekend; rotated forward to {}",
                    pick.engineer
                ),
                pick.alternatives.clone(),
            );
        }

        pairs.insert(k, WeekendAssignment {
            engineer:   pick.engineer,
            resolution: pick.resolution,
        });
    }

    log::debug!("stage 1: {} weekend pairs resolved", pairs.len());
    pairs
}
