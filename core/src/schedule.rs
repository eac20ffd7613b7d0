//! Roster output types.
//!
//! One `ScheduleDay` per calendar date; the response bundles the day
//! sequence with the request echo, the fairness summary and the decision
//! log. Everything is plain data — serialization to wire or file formats
//! belongs to callers.

use crate::{
    decision::DecisionLogEntry,
    fairness::FairnessSummary,
    request::RotationSeeds,
    types::{Engineer, RunId, WeekIndex},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The five duty roles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Weekend,
    Chat,
    OnCall,
    Appointments,
    Early,
}

pub const ALL_ROLES: [Role; 5] =
    [Role::Weekend, Role::Chat, Role::OnCall, Role::Appointments, Role::Early];

/// One record per calendar date. Empty role fields are None.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleDay {
    pub date:         NaiveDate,
    /// Three-letter day name ("Mon".."Sun").
    pub day:          String,
    pub week:         WeekIndex,
    pub weekend:      Option<Engineer>,
    pub chat:         Option<Engineer>,
    pub oncall:       Option<Engineer>,
    pub appointments: Option<Engineer>,
    pub early:        Option<Engineer>,
}

impl ScheduleDay {
    pub fn empty(date: NaiveDate, day: &str, week: WeekIndex) -> Self {
        Self {
            date,
            day: day.to_string(),
            week,
            weekend:      None,
            chat:         None,
            oncall:       None,
            appointments: None,
            early:        None,
        }
    }

    pub fn role(&self, role: Role) -> Option<&Engineer> {
        match role {
            Role::Weekend      => self.weekend.as_ref(),
            Role::Chat         => self.chat.as_ref(),
            Role::OnCall       => self.oncall.as_ref(),
            Role::Appointments => self.appointments.as_ref(),
            Role::Early        => self.early.as_ref(),
        }
    }

    /// The day's non-empty assignments in role order.
    pub fn assigned(&self) -> impl Iterator<Item = (Role, &Engineer)> {
        ALL_ROLES
            .iter()
            .filter_map(|role| self.role(*role).map(|e| (*role, e)))
    }
}

/// Echo of the inputs plus generation stamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleMetadata {
    pub run_id:        RunId,
    pub generated_at:  DateTime<Utc>,
    pub engineers:     Vec<Engineer>,
    pub start_date:    NaiveDate,
    pub end_date:      NaiveDate,
    pub weeks:         u32,
    pub seeds:         RotationSeeds,
    pub absence_count: usize,
    pub total_days:    usize,
}

/// The full generation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub schedule:         Vec<ScheduleDay>,
    pub metadata:         ScheduleMetadata,
    pub fairness_summary: FairnessSummary,
    pub decision_log:     Vec<DecisionLogEntry>,
}
