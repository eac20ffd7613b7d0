//! Phase-shifted round-robin selection.
//!
//! Every role rotates the same way: the candidate pool (roster order) is
//! rotated by a role-specific shift, the head of the rotated order is the
//! intended engineer, and soft conflicts are resolved by scanning forward
//! through the order. Exclusions never fail the selection — with a pool
//! this small, avoidance is not always possible, and the fallback keeps
//! the intended engineer tagged as an unavoidable conflict.

use crate::types::Engineer;
use serde::{Deserialize, Serialize};

/// How a stage-1/2 assignment came about. Lets callers and tests tell a
/// plain rotation from a constraint fallback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// The rotation's intended engineer, no exclusion applied.
    Rotation,
    /// An exclusion displaced the intended engineer.
    ConflictAvoided { displaced: Engineer },
    /// Every candidate was excluded; the intended engineer was kept.
    UnavoidableConflict { reason: String },
}

/// A resolved selection plus the candidates that were passed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub engineer:     Engineer,
    pub resolution:   Resolution,
    /// Candidates considered but not chosen, in scan order.
    pub alternatives: Vec<Engineer>,
}

/// `pool` in roster order, rotated so the entry at `shift mod len` comes
/// first. Empty pools stay empty.
pub fn rotation_order(pool: &[Engineer], shift: i64) -> Vec<Engineer> {
    if pool.is_empty() {
        return Vec::new();
    }
    let n = pool.len();
    let s = shift.rem_euclid(n as i64) as usize;
    let mut order = Vec::with_capacity(n);
    order.extend_from_slice(&pool[s..]);
    order.extend_from_slice(&pool[..s]);
    order
}

/// Select from a rotated order, scanning past soft conflicts.
///
/// Returns None only for an empty order. When every candidate conflicts,
/// the intended (first) engineer is kept and tagged with `fallback_reason`.
pub fn pick_with_conflicts(
    order: &[Engineer],
    conflicted: impl Fn(&Engineer) -> bool,
    fallback_reason: &str,
) -> Option<Pick> {
    let intended = order.first()?;

    if !conflicted(intended) {
        return Some(Pick {
            engineer:     intended.clone(),
            resolution:   Resolution::Rotation,
            alternatives: Vec::new(),
        });
    }

    for (i, candidate) in order.iter().enumerate().skip(1) {
        if !conflicted(candidate) {
            return Some(Pick {
                engineer:     candidate.clone(),
                resolution:   Resolution::ConflictAvoided { displaced: intended.clone() },
                // Everyone scanned before the winner was conflicted.
                alternatives: order[..i].to_vec(),
            });
        }
    }

    Some(Pick {
        engineer:     intended.clone(),
        resolution:   Resolution::UnavoidableConflict { reason: fallback_reason.to_string() },
        alternatives: order[1..].to_vec(),
    })
}
