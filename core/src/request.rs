//! Generation request types and fail-fast validation.
//!
//! The engine trusts its caller for most input hygiene; this module is the
//! one gate that rejects a request that could only produce a malformed
//! roster (wrong team size, non-Sunday start, out-of-range week count).

use crate::{
    config::EngineConfig,
    error::{RosterError, RosterResult},
    types::Engineer,
};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The team size every request must carry.
pub const TEAM_SIZE: usize = 6;

/// Per-role rotation offsets. Each phase-shifts that role's round robin so
/// the roles do not all start on the same engineer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RotationSeeds {
    #[serde(default)]
    pub weekend: i64,
    #[serde(default)]
    pub chat: i64,
    #[serde(default = "default_oncall_seed")]
    pub oncall: i64,
    #[serde(default = "default_appointments_seed")]
    pub appointments: i64,
    #[serde(default)]
    pub early: i64,
}

fn default_oncall_seed() -> i64 { 1 }
fn default_appointments_seed() -> i64 { 2 }

impl Default for RotationSeeds {
    fn default() -> Self {
        Self {
            weekend:      0,
            chat:         0,
            oncall:       1,
            appointments: 2,
            early:        0,
        }
    }
}

/// One whole-day absence. No recurring shorthand; a multi-day absence is
/// one entry per date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbsenceEntry {
    pub engineer: Engineer,
    pub date:     NaiveDate,
    #[serde(default)]
    pub reason:   String,
}

/// A validated-by-`validate` generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub engineers:  Vec<Engineer>,
    pub start_date: NaiveDate,
    pub weeks:      u32,
    #[serde(default)]
    pub seeds:      RotationSeeds,
    #[serde(default)]
    pub absences:   Vec<AbsenceEntry>,
}

impl ScheduleRequest {
    /// Reject malformed input before any assignment work happens.
    ///
    /// Checks: exactly six non-empty engineer names, unique
    /// case-insensitively; a Sunday start; week count within the configured
    /// range. Absence entries naming unknown engineers are NOT rejected;
    /// they simply never match a lookup.
    pub fn validate(&self, config: &EngineConfig) -> RosterResult<()> {
        if self.engineers.len() != TEAM_SIZE {
            return Err(RosterError::EngineerCount {
                expected: TEAM_SIZE,
                actual:   self.engineers.len(),
            });
        }

        let mut seen: Vec<String> = Vec::with_capacity(TEAM_SIZE);
        for (position, name) in self.engineers.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(RosterError::EmptyEngineerName { position });
            }
            let folded = name.trim().to_lowercase();
            if seen.contains(&folded) {
                return Err(RosterError::DuplicateEngineer { name: name.clone() });
            }
            seen.push(folded);
        }

        if self.start_date.weekday() != Weekday::Sun {
            return Err(RosterError::NotASunday {
                date:    self.start_date,
                weekday: self.start_date.weekday().to_string(),
            });
        }

        if self.weeks == 0 || self.weeks > config.max_weeks {
            return Err(RosterError::WeeksOutOfRange {
                weeks: self.weeks,
                max:   config.max_weeks,
            });
        }

        Ok(())
    }
}
