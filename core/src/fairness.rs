//! Post-walk fairness tally.
//!
//! Counts, per engineer, how many role fields across the whole range carry
//! that engineer's name. Informational only — no equity score is computed
//! at this layer.

use crate::{
    schedule::{Role, ScheduleDay},
    types::Engineer,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleCounts {
    pub weekend:      u32,
    pub chat:         u32,
    pub oncall:       u32,
    pub appointments: u32,
    pub early:        u32,
}

impl RoleCounts {
    fn bump(&mut self, role: Role) {
        match role {
            Role::Weekend      => self.weekend += 1,
            Role::Chat         => self.chat += 1,
            Role::OnCall       => self.oncall += 1,
            Role::Appointments => self.appointments += 1,
            Role::Early        => self.early += 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineerTally {
    pub engineer: Engineer,
    pub total:    u32,
    pub roles:    RoleCounts,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FairnessSummary {
    /// One tally per engineer, roster order.
    pub per_engineer:      Vec<EngineerTally>,
    /// Whether any absence was recorded. A coarse note that backfill may
    /// have skewed the distribution.
    pub absences_recorded: bool,
}

pub fn summarize(
    roster: &[Engineer],
    schedule: &[ScheduleDay],
    absences_recorded: bool,
) -> FairnessSummary {
    let mut per_engineer: Vec<EngineerTally> = roster
        .iter()
        .map(|engineer| EngineerTally {
            engineer: engineer.clone(),
            total:    0,
            roles:    RoleCounts::default(),
        })
        .collect();

    for day in schedule {
        for (role, engineer) in day.assigned() {
            if let Some(tally) = per_engineer.iter_mut().find(|t| &t.engineer == engineer) {
                tally.total += 1;
                tally.roles.bump(role);
            }
        }
    }

    FairnessSummary { per_engineer, absences_recorded }
}
