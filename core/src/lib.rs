//! roster-core — rotating duty roster generation for a six-engineer team.
//!
//! The engine walks a date range and assigns the five duty roles
//! (weekend, chat, on-call, appointments, early shift) per calendar day,
//! honoring recorded absences and emitting an append-only decision log
//! plus a fairness summary. It is a deterministic, synchronous pass with
//! no I/O; HTTP handling, export encodings and persistence live with the
//! callers.

pub mod absence;
pub mod backfill;
pub mod calendar;
pub mod config;
pub mod daily;
pub mod decision;
pub mod engine;
pub mod error;
pub mod fairness;
pub mod request;
pub mod rotation;
pub mod schedule;
pub mod types;
pub mod weekend;
pub mod weekly;
