//! Stage 2 — weekly sticky roles (on-call, early shift).
//!
//! Both roles are assigned once per calendar week from the roster available
//! on the week's first weekday, and reused by every weekday of that week.
//! On-call avoids the holders of the two adjacent weekend pairs — the pair
//! ending the previous week and the pair beginning at the end of the
//! current week — read from the completed stage-1 map. Early shift applies
//! no conflict checks.

use crate::{
    absence::AbsenceCalendar,
    calendar,
    decision::{DecisionKind, DecisionLog},
    request::RotationSeeds,
    rotation::{pick_with_conflicts, rotation_order, Resolution},
    types::{Engineer, WeekIndex, WeekendIndex},
    weekend::WeekendAssignment,
};
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyAssignment {
    pub engineer:   Engineer,
    pub resolution: Resolution,
}

/// The two sticky roles of one week. None when no engineer was available
/// on the week's first weekday.
#[derive(Debug, Clone, Default)]
pub struct WeekAssignments {
    pub oncall: Option<WeeklyAssignment>,
    pub early:  Option<WeeklyAssignment>,
}

/// Holders of the weekend pairs flanking week `w`, in pair order.
pub fn adjacent_weekend_holders(
    weekends: &BTreeMap<WeekendIndex, WeekendAssignment>,
    w: WeekIndex,
) -> Vec<Engineer> {
    [w, w + 1]
        .iter()
        .filter_map(|k| weekends.get(k).map(|a| a.engineer.clone()))
        .collect()
}

pub fn resolve_weeks(
    roster: &[Engineer],
    seeds: &RotationSeeds,
    start: NaiveDate,
    weeks: u32,
    absences: &AbsenceCalendar,
    weekends: &BTreeMap<WeekendIndex, WeekendAssignment>,
    log: &mut DecisionLog,
) -> BTreeMap<WeekIndex, WeekAssignments> {
    let mut assignments: BTreeMap<WeekIndex, WeekAssignments> = BTreeMap::new();

    for w in 0..i64::from(weeks) {
        let monday = calendar::first_weekday_of(start, w);
        let pool = absences.available_on(roster, monday);
        if pool.is_empty() {
            // Nothing to assign; day assembly records the coverage gap.
            assignments.insert(w, WeekAssignments::default());
            continue;
        }

        let flanking = adjacent_weekend_holders(weekends, w);

        let oncall = pick_with_conflicts(
            &rotation_order(&pool, w + seeds.oncall),
            |e| flanking.contains(e),
            "every available engineer covers an adjacent weekend",
        )
        .map(|pick| {
            if let Resolution::ConflictAvoided { displaced } = &pick.resolution {
                log.push(
                    monday,
                    DecisionKind::OncallWeekendExclusion,
                    vec![pick.engineer.clone()],
                    format!(
                        "{displaced} covers an adjacent weekend ({}); rotated forward to {}",
                        flanking.join(", "),
                        pick.engineer
                    ),
                    pick.alternatives.clone(),
                );
            }
            WeeklyAssignment { engineer: pick.engineer, resolution: pick.resolution }
        });

        let early = rotation_order(&pool, w + seeds.early)
            .first()
            .map(|engineer| WeeklyAssignment {
                engineer:   engineer.clone(),
                resolution: Resolution::Rotation,
            });

        assignments.insert(w, WeekAssignments { oncall, early });
    }

    log::debug!("stage 2: weekly roles resolved for {} weeks", assignments.len());
    assignments
}
