//! Backfill — meeting the minimum daily headcount after absences.
//!
//! "Expected" workers are the weekend-pair holder on weekend days and the
//! full roster on weekdays, minus anyone absent. When absences push the
//! expected headcount below the day's minimum, engineers are pulled from
//! the available-but-unexpected pool in roster order until the minimum is
//! met or the pool runs dry. Selection is plain roster order, not
//! fairness-weighted. A day that stays short is assigned with whatever
//! headcount remains — never an error.

use crate::{
    decision::{DecisionKind, DecisionLog},
    types::Engineer,
};
use chrono::NaiveDate;

/// Top up `expected` to `minimum` from `unexpected_available`. Returns the
/// engineers that were pulled in, in selection order.
pub fn ensure_minimum(
    date: NaiveDate,
    expected: &mut Vec<Engineer>,
    unexpected_available: &[Engineer],
    minimum: usize,
    log: &mut DecisionLog,
) -> Vec<Engineer> {
    if expected.len() >= minimum {
        return Vec::new();
    }

    let shortfall = minimum - expected.len();
    let pulled: Vec<Engineer> = unexpected_available
        .iter()
        .take(shortfall)
        .cloned()
        .collect();

    if !pulled.is_empty() {
        log.push(
            date,
            DecisionKind::BackfillSelection,
            pulled.clone(),
            format!(
                "headcount {} below minimum {minimum}; pulled {} in roster order",
                expected.len(),
                pulled.join(", ")
            ),
            unexpected_available[pulled.len()..].to_vec(),
        );
        expected.extend(pulled.iter().cloned());
    }

    if expected.len() < minimum {
        log.push(
            date,
            DecisionKind::CoverageWarning,
            expected.clone(),
            format!(
                "only {} of minimum {minimum} engineers available after backfill",
                expected.len()
            ),
            Vec::new(),
        );
        log::warn!("{date}: coverage below minimum ({}/{minimum})", expected.len());
    }

    pulled
}
