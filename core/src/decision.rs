//! The decision log — the audit trail for every consequential choice.
//!
//! RULE: anomalies surface through log entries, never through errors.
//! Every absence exclusion, conflict resolution, backfill action and
//! per-day summary appends exactly one entry. Append-only; one generation
//! run produces one ordered log.

use crate::types::Engineer;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Machine-readable decision classifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DecisionKind {
    /// A back-to-back weekend exclusion changed the pair holder.
    WeekendConflictPrevention,
    /// An adjacent-weekend exclusion changed the week's on-call engineer.
    OncallWeekendExclusion,
    /// A recorded absence excluded engineers from a day's selection.
    LeaveExclusion,
    /// Available-but-unexpected engineers were pulled in to meet the
    /// minimum headcount.
    BackfillSelection,
    /// The minimum headcount could not be met even after backfill.
    CoverageWarning,
    /// The day's final role assignments.
    DailyRoleSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionLogEntry {
    pub date:         NaiveDate,
    pub kind:         DecisionKind,
    /// Engineers the decision applied to.
    pub affected:     Vec<Engineer>,
    pub reason:       String,
    /// Candidates considered but not chosen.
    pub alternatives: Vec<Engineer>,
    pub logged_at:    DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct DecisionLog {
    entries: Vec<DecisionLogEntry>,
}

impl DecisionLog {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn push(
        &mut self,
        date: NaiveDate,
        kind: DecisionKind,
        affected: Vec<Engineer>,
        reason: String,
        alternatives: Vec<Engineer>,
    ) {
        log::debug!("{date} {kind:?}: {reason}");
        self.entries.push(DecisionLogEntry {
            date,
            kind,
            affected,
            reason,
            alternatives,
            logged_at: Utc::now(),
        });
    }

    pub fn entries(&self) -> &[DecisionLogEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<DecisionLogEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
