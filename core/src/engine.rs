//! The roster engine — a deterministic three-stage pass.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Weekend pairs for the whole range   (weekend.rs)
//!   2. Weekly sticky roles per week        (weekly.rs)
//!   3. Day assembly in date order          (daily.rs + backfill.rs)
//!
//! RULES:
//!   - Later stages read earlier stages only through the PlanContext.
//!   - A resolved assignment is never revised; absence overrides happen
//!     per day during assembly, against the cached holder.
//!   - Every consequential choice lands in the decision log; the log is
//!     the anomaly channel, errors are reserved for malformed input.

use crate::{
    absence::AbsenceCalendar,
    backfill, calendar,
    config::EngineConfig,
    daily,
    decision::{DecisionKind, DecisionLog},
    error::RosterResult,
    fairness,
    request::ScheduleRequest,
    rotation::{pick_with_conflicts, rotation_order},
    schedule::{ScheduleDay, ScheduleMetadata, ScheduleResponse},
    types::{Engineer, WeekIndex, WeekendIndex},
    weekend::{self, WeekendAssignment},
    weekly::{self, WeekAssignments},
};
use chrono::{NaiveDate, Utc};
use std::collections::BTreeMap;

/// Resolved stage-1/2 state, passed explicitly through day assembly.
pub struct PlanContext {
    pub weekends: BTreeMap<WeekendIndex, WeekendAssignment>,
    pub weekly:   BTreeMap<WeekIndex, WeekAssignments>,
}

pub struct RosterEngine {
    config: EngineConfig,
}

impl RosterEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// One full generation pass. Pure apart from the run id and the
    /// timestamps stamped into metadata and log entries.
    pub fn generate(&self, request: &ScheduleRequest) -> RosterResult<ScheduleResponse> {
        request.validate(&self.config)?;

        let roster = &request.engineers;
        let start = request.start_date;
        let weeks = request.weeks;

        let days = calendar::expand(start, weeks);
        let absences = AbsenceCalendar::from_entries(&request.absences);
        let mut log = DecisionLog::new();

        let weekends =
            weekend::resolve_weekends(roster, &request.seeds, start, weeks, &mut log);
        let weekly =
            weekly::resolve_weeks(roster, &request.seeds, start, weeks, &absences, &weekends, &mut log);
        let ctx = PlanContext { weekends, weekly };

        let schedule: Vec<ScheduleDay> = days
            .iter()
            .map(|&d| self.assemble_day(d, request, &absences, &ctx, &mut log))
            .collect();

        let run_id = uuid::Uuid::new_v4().to_string();
        log::info!(
            "run {run_id}: {} days, {} decision entries",
            schedule.len(),
            log.len()
        );

        let fairness_summary =
            fairness::summarize(roster, &schedule, absences.any_recorded());
        let metadata = ScheduleMetadata {
            run_id,
            generated_at:  Utc::now(),
            engineers:     roster.clone(),
            start_date:    start,
            end_date:      *days.last().expect("validated range is never empty"),
            weeks,
            seeds:         request.seeds.clone(),
            absence_count: request.absences.len(),
            total_days:    days.len(),
        };

        Ok(ScheduleResponse {
            schedule,
            metadata,
            fairness_summary,
            decision_log: log.into_entries(),
        })
    }

    fn assemble_day(
        &self,
        d: NaiveDate,
        request: &ScheduleRequest,
        absences: &AbsenceCalendar,
        ctx: &PlanContext,
        log: &mut DecisionLog,
    ) -> ScheduleDay {
        let w = calendar::week_index(request.start_date, d);
        let mut day = ScheduleDay::empty(d, calendar::day_name(d), w);

        if calendar::is_weekend(d) {
            self.assemble_weekend_day(&mut day, request, absences, ctx, log);
        } else {
            self.assemble_weekday(&mut day, request, absences, ctx, log);
        }

        log.push(
            d,
            DecisionKind::DailyRoleSummary,
            summary_engineers(&day),
            format!(
                "weekend={} chat={} oncall={} appointments={} early={}",
                field(&day.weekend),
                field(&day.chat),
                field(&day.oncall),
                field(&day.appointments),
                field(&day.early),
            ),
            Vec::new(),
        );

        day
    }

    /// Weekend days carry the pair holder in both Weekend and OnCall.
    /// An absent holder is overridden for that day only; the partner day
    /// keeps the cached assignment.
    fn assemble_weekend_day(
        &self,
        day: &mut ScheduleDay,
        request: &ScheduleRequest,
        absences: &AbsenceCalendar,
        ctx: &PlanContext,
        log: &mut DecisionLog,
    ) {
        let d = day.date;
        let k = calendar::weekend_index(request.start_date, d)
            .expect("weekend day has a pair index");
        let Some(pair) = ctx.weekends.get(&k) else {
            return;
        };
        let holder = &pair.engineer;

        let mut expected: Vec<Engineer> = Vec::with_capacity(1);
        if absences.is_absent(holder, d) {
            log.push(
                d,
                DecisionKind::LeaveExclusion,
                vec![holder.clone()],
                format!("recorded absence excludes {holder} from weekend coverage"),
                Vec::new(),
            );
        } else {
            expected.push(holder.clone());
        }

        let unexpected_available: Vec<Engineer> = request
            .engineers
            .iter()
            .filter(|e| *e != holder && !absences.is_absent(e, d))
            .cloned()
            .collect();
        backfill::ensure_minimum(
            d,
            &mut expected,
            &unexpected_available,
            self.config.weekend_min_headcount,
            log,
        );

        day.weekend = expected.first().cloned();
        day.oncall = day.weekend.clone();
    }

    fn assemble_weekday(
        &self,
        day: &mut ScheduleDay,
        request: &ScheduleRequest,
        absences: &AbsenceCalendar,
        ctx: &PlanContext,
        log: &mut DecisionLog,
    ) {
        let d = day.date;
        let roster = &request.engineers;

        let absent_today = absences.absent_on(roster, d);
        if !absent_today.is_empty() {
            log.push(
                d,
                DecisionKind::LeaveExclusion,
                absent_today.clone(),
                format!(
                    "recorded absence excludes {} from all roles",
                    absent_today.join(", ")
                ),
                Vec::new(),
            );
        }

        let available = absences.available_on(roster, d);
        let week = ctx.weekly.get(&day.week).cloned().unwrap_or_default();

        day.oncall = self.weekday_oncall(day, request, &available, &week, ctx, log);
        day.early = self.weekday_early(day, request, &available, &week, log);

        // Chat and appointments rotate through the day's available,
        // non-on-call pool; the same engineer may take both.
        let pool: Vec<Engineer> = available
            .iter()
            .filter(|e| day.oncall.as_ref() != Some(*e))
            .cloned()
            .collect();
        let roles = daily::assign_daily(
            &pool,
            &request.seeds,
            calendar::day_offset(request.start_date, d),
        );
        day.chat = roles.chat;
        day.appointments = roles.appointments;

        // Weekday minimum: everyone not absent is already expected, so
        // there is no one left to pull and a shortfall only warns.
        let mut expected = available;
        backfill::ensure_minimum(
            d,
            &mut expected,
            &[],
            self.config.weekday_min_headcount,
            log,
        );
    }

    /// The week's cached on-call holder. When the holder is absent today,
    /// or the week never got one, a one-day substitute is picked by the
    /// same rotation and exclusions.
    fn weekday_oncall(
        &self,
        day: &ScheduleDay,
        request: &ScheduleRequest,
        available: &[Engineer],
        week: &WeekAssignments,
        ctx: &PlanContext,
        log: &mut DecisionLog,
    ) -> Option<Engineer> {
        let cached = week.oncall.as_ref().map(|a| &a.engineer);
        if let Some(holder) = cached {
            if available.contains(holder) {
                return Some(holder.clone());
            }
        }

        let flanking = weekly::adjacent_weekend_holders(&ctx.weekends, day.week);
        let substitute = pick_with_conflicts(
            &rotation_order(available, day.week + request.seeds.oncall),
            |e| flanking.contains(e),
            "every available engineer covers an adjacent weekend",
        )?;
        let reason = match cached {
            Some(holder) => format!(
                "weekly on-call {holder} absent; {} covers this day",
                substitute.engineer
            ),
            None => format!("no weekly on-call holder; {} covers this day", substitute.engineer),
        };
        log.push(
            day.date,
            DecisionKind::BackfillSelection,
            vec![substitute.engineer.clone()],
            reason,
            substitute.alternatives,
        );
        Some(substitute.engineer)
    }

    /// The week's cached early holder, with the same one-day override.
    fn weekday_early(
        &self,
        day: &ScheduleDay,
        request: &ScheduleRequest,
        available: &[Engineer],
        week: &WeekAssignments,
        log: &mut DecisionLog,
    ) -> Option<Engineer> {
        let cached = week.early.as_ref().map(|a| &a.engineer);
        if let Some(holder) = cached {
            if available.contains(holder) {
                return Some(holder.clone());
            }
        }

        let substitute = rotation_order(available, day.week + request.seeds.early)
            .first()
            .cloned()?;
        let reason = match cached {
            Some(holder) => {
                format!("weekly early shift {holder} absent; {substitute} covers this day")
            }
            None => format!("no weekly early shift holder; {substitute} covers this day"),
        };
        log.push(
            day.date,
            DecisionKind::BackfillSelection,
            vec![substitute.clone()],
            reason,
            Vec::new(),
        );
        Some(substitute)
    }
}

impl Default for RosterEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

fn field(value: &Option<Engineer>) -> &str {
    value.as_deref().unwrap_or("-")
}

/// The day's distinct assignees, first-role order.
fn summary_engineers(day: &ScheduleDay) -> Vec<Engineer> {
    let mut engineers: Vec<Engineer> = Vec::new();
    for (_, engineer) in day.assigned() {
        if !engineers.contains(engineer) {
            engineers.push(engineer.clone());
        }
    }
    engineers
}
