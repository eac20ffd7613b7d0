//! Absence lookups.
//!
//! Built once per generation request from the raw absence list. Lookups
//! are by exact name — an entry naming an engineer outside the roster is
//! carried but never matches. No overlap or duplicate checking.

use crate::{request::AbsenceEntry, types::Engineer};
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};

pub struct AbsenceCalendar {
    by_engineer: HashMap<Engineer, BTreeSet<NaiveDate>>,
    entry_count: usize,
}

impl AbsenceCalendar {
    pub fn from_entries(entries: &[AbsenceEntry]) -> Self {
        let mut by_engineer: HashMap<Engineer, BTreeSet<NaiveDate>> = HashMap::new();
        for entry in entries {
            by_engineer
                .entry(entry.engineer.clone())
                .or_default()
                .insert(entry.date);
        }
        Self { by_engineer, entry_count: entries.len() }
    }

    pub fn is_absent(&self, engineer: &str, d: NaiveDate) -> bool {
        self.by_engineer
            .get(engineer)
            .is_some_and(|dates| dates.contains(&d))
    }

    /// The roster filtered to engineers present on `d`, roster order kept.
    pub fn available_on(&self, roster: &[Engineer], d: NaiveDate) -> Vec<Engineer> {
        roster
            .iter()
            .filter(|e| !self.is_absent(e, d))
            .cloned()
            .collect()
    }

    /// Roster engineers absent on `d`, roster order kept.
    pub fn absent_on(&self, roster: &[Engineer], d: NaiveDate) -> Vec<Engineer> {
        roster
            .iter()
            .filter(|e| self.is_absent(e, d))
            .cloned()
            .collect()
    }

    /// Whether the request carried any absence at all. Feeds the fairness
    /// summary's absence-impact note.
    pub fn any_recorded(&self) -> bool {
        self.entry_count > 0
    }
}
