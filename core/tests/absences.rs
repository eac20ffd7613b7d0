//! Absence handling: leave exclusions, per-day overrides of cached
//! holders, and the accepted weekend-pair mismatch under absence.

use chrono::NaiveDate;
use roster_core::{
    decision::DecisionKind,
    engine::RosterEngine,
    request::{AbsenceEntry, RotationSeeds, ScheduleRequest},
};

fn team() -> Vec<String> {
    ["Alice", "Bob", "Chloe", "Dan", "Eve", "Frank"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn zero_seeds() -> RotationSeeds {
    RotationSeeds { weekend: 0, chat: 0, oncall: 0, appointments: 0, early: 0 }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn absence(engineer: &str, d: NaiveDate) -> AbsenceEntry {
    AbsenceEntry { engineer: engineer.to_string(), date: d, reason: "PTO".to_string() }
}

fn request(weeks: u32, absences: Vec<AbsenceEntry>) -> ScheduleRequest {
    ScheduleRequest {
        engineers:  team(),
        start_date: date(2025, 1, 5),
        weeks,
        seeds:      zero_seeds(),
        absences,
    }
}

#[test]
fn absent_engineers_never_appear_in_any_role() {
    let absences = vec![
        absence("Bob", date(2025, 1, 7)),
        absence("Chloe", date(2025, 1, 8)),
        absence("Alice", date(2025, 1, 4)),
    ];
    let req = request(2, absences.clone());
    let response = RosterEngine::default().generate(&req).unwrap();

    for entry in &absences {
        let day = response
            .schedule
            .iter()
            .find(|d| d.date == entry.date)
            .expect("absence date inside range");
        for field in [&day.weekend, &day.chat, &day.oncall, &day.appointments, &day.early] {
            assert_ne!(
                field.as_ref(),
                Some(&entry.engineer),
                "{}: {} assigned despite recorded absence",
                entry.date,
                entry.engineer
            );
        }
    }
}

#[test]
fn absent_weekend_holder_is_replaced_for_that_day_only() {
    // Alice holds pair 0 (Sat 2025-01-04 / Sun 2025-01-05). With Alice
    // absent on the Sunday, that day is backfilled while the Saturday
    // keeps her; the pair mismatch is the accepted policy.
    let req = request(1, vec![absence("Alice", date(2025, 1, 5))]);
    let response = RosterEngine::default().generate(&req).unwrap();

    let saturday = &response.schedule[0];
    let sunday = &response.schedule[1];
    assert_eq!(saturday.weekend.as_deref(), Some("Alice"));
    assert_eq!(sunday.weekend.as_deref(), Some("Bob"), "roster-order backfill");
    assert_eq!(sunday.oncall.as_deref(), Some("Bob"));

    let exclusion = response
        .decision_log
        .iter()
        .find(|e| e.kind == DecisionKind::LeaveExclusion && e.date == sunday.date)
        .expect("absence exclusion is logged");
    assert_eq!(exclusion.affected, vec!["Alice".to_string()]);

    let backfill = response
        .decision_log
        .iter()
        .find(|e| e.kind == DecisionKind::BackfillSelection && e.date == sunday.date)
        .expect("backfill is logged");
    assert_eq!(backfill.affected, vec!["Bob".to_string()]);
    assert!(
        !backfill.alternatives.is_empty(),
        "remaining candidates are recorded as alternatives"
    );
}

#[test]
fn week_long_absence_yields_no_roles_and_one_exclusion_per_day() {
    let weekdays: Vec<NaiveDate> = (6..=10).map(|d| date(2025, 1, d)).collect();
    let absences = weekdays.iter().map(|&d| absence("Bob", d)).collect();
    let response = RosterEngine::default().generate(&request(1, absences)).unwrap();

    for day in &response.schedule {
        if weekdays.contains(&day.date) {
            for field in [&day.weekend, &day.chat, &day.oncall, &day.appointments, &day.early] {
                assert_ne!(field.as_deref(), Some("Bob"), "{}: Bob was assigned", day.date);
            }
        }
    }

    for d in &weekdays {
        let exclusions: Vec<_> = response
            .decision_log
            .iter()
            .filter(|e| e.kind == DecisionKind::LeaveExclusion && e.date == *d)
            .collect();
        assert_eq!(exclusions.len(), 1, "{d}: expected one exclusion entry");
        assert!(exclusions[0].affected.contains(&"Bob".to_string()));
    }
}

#[test]
fn absent_oncall_holder_is_covered_for_the_single_day() {
    // Chloe is the week-0 on-call. Absent on the Wednesday, she is
    // replaced for that day by the next conflict-free engineer (Dan);
    // the rest of the week keeps her.
    let req = request(1, vec![absence("Chloe", date(2025, 1, 8))]);
    let response = RosterEngine::default().generate(&req).unwrap();

    for day in &response.schedule {
        match day.day.as_str() {
            "Wed" => assert_eq!(day.oncall.as_deref(), Some("Dan")),
            "Mon" | "Tue" | "Thu" | "Fri" => {
                assert_eq!(day.oncall.as_deref(), Some("Chloe"), "{}", day.date)
            }
            _ => {}
        }
    }

    let substitution = response
        .decision_log
        .iter()
        .find(|e| e.kind == DecisionKind::BackfillSelection && e.date == date(2025, 1, 8))
        .expect("single-day cover is logged");
    assert_eq!(substitution.affected, vec!["Dan".to_string()]);
    assert!(substitution.reason.contains("Chloe"));
}

#[test]
fn fairness_summary_flags_recorded_absences() {
    let with = RosterEngine::default()
        .generate(&request(1, vec![absence("Eve", date(2025, 1, 9))]))
        .unwrap();
    assert!(with.fairness_summary.absences_recorded);

    let without = RosterEngine::default().generate(&request(1, Vec::new())).unwrap();
    assert!(!without.fairness_summary.absences_recorded);
}
