//! roster-cli: headless roster generation runner.
//!
//! Usage:
//!   roster-cli --request request.json --out response.json
//!   roster-cli --engineers "Alice,Bob,Chloe,Dan,Eve,Frank" --weeks 4
//!
//! Without --request, a demo request is built from the CLI flags; without
//! --start, the nearest previous Sunday is used.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use roster_core::{
    calendar,
    config::EngineConfig,
    engine::RosterEngine,
    request::{RotationSeeds, ScheduleRequest},
    schedule::ScheduleResponse,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let request_path = flag_value(&args, "--request");
    let out_path = flag_value(&args, "--out");
    let config_path = flag_value(&args, "--config");

    const KNOWN_FLAGS: [&str; 6] =
        ["--request", "--out", "--config", "--engineers", "--start", "--weeks"];
    for arg in args.iter().skip(1) {
        if arg.starts_with("--") && !KNOWN_FLAGS.contains(&arg.as_str()) {
            log::warn!("Unknown flag: {arg}");
        }
    }

    let config = match config_path {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    let request = match request_path {
        Some(path) => read_request(path)?,
        None => demo_request(&args)?,
    };

    println!("roster-cli");
    println!("  start:     {}", request.start_date);
    println!("  weeks:     {}", request.weeks);
    println!("  engineers: {}", request.engineers.join(", "));
    println!("  absences:  {}", request.absences.len());
    println!();

    let engine = RosterEngine::new(config);
    let response = engine.generate(&request)?;

    print_schedule(&response);
    print_summary(&response);

    if let Some(path) = out_path {
        let json = serde_json::to_string_pretty(&response)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write response to {path}"))?;
        println!();
        println!("Response written to {path}");
    }

    Ok(())
}

fn read_request(path: &str) -> Result<ScheduleRequest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file {path}"))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse request file {path}"))
}

fn demo_request(args: &[String]) -> Result<ScheduleRequest> {
    let engineers: Vec<String> = flag_value(args, "--engineers")
        .unwrap_or("Alice,Bob,Chloe,Dan,Eve,Frank")
        .split(',')
        .map(|s| s.trim().to_string())
        .collect();

    let start_date = match flag_value(args, "--start") {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("Invalid --start date: {s}"))?,
        None => calendar::nearest_previous_sunday(chrono::Utc::now().date_naive()),
    };

    let weeks = flag_value(args, "--weeks")
        .and_then(|w| w.parse().ok())
        .unwrap_or(4u32);

    Ok(ScheduleRequest {
        engineers,
        start_date,
        weeks,
        seeds: RotationSeeds::default(),
        absences: Vec::new(),
    })
}

fn print_schedule(response: &ScheduleResponse) {
    println!(
        "{:<12} {:<4} {:>4}  {:<10} {:<10} {:<10} {:<10} {:<10}",
        "Date", "Day", "Wk", "Weekend", "Chat", "OnCall", "Appts", "Early"
    );
    for day in &response.schedule {
        println!(
            "{:<12} {:<4} {:>4}  {:<10} {:<10} {:<10} {:<10} {:<10}",
            day.date.to_string(),
            day.day,
            day.week,
            cell(&day.weekend),
            cell(&day.chat),
            cell(&day.oncall),
            cell(&day.appointments),
            cell(&day.early),
        );
    }
}

fn print_summary(response: &ScheduleResponse) {
    println!();
    println!("=== RUN SUMMARY ===");
    println!("  run_id:    {}", response.metadata.run_id);
    println!("  days:      {}", response.metadata.total_days);
    println!("  decisions: {}", response.decision_log.len());
    println!();
    println!("=== FAIRNESS ===");
    for tally in &response.fairness_summary.per_engineer {
        println!(
            "  {:<10} total {:>3} | wkd {:>2} chat {:>2} oncall {:>2} appts {:>2} early {:>2}",
            tally.engineer,
            tally.total,
            tally.roles.weekend,
            tally.roles.chat,
            tally.roles.oncall,
            tally.roles.appointments,
            tally.roles.early,
        );
    }
    if response.fairness_summary.absences_recorded {
        println!("  (absences recorded — backfill may have skewed totals)");
    }
}

fn cell(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
