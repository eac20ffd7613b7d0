//! Shared primitive types used across the engine.

/// An engineer's identity. Display name, unique within a request
/// (case-insensitive).
pub type Engineer = String;

/// Whole 7-day blocks from the generation start date. The Saturday
/// prepended before a Sunday start lands in week -1.
pub type WeekIndex = i64;

/// Identifies a Saturday+Sunday coverage pair. Pair k is the Saturday
/// `start - 1 + 7k` together with the Sunday `start + 7k`.
pub type WeekendIndex = i64;

/// Signed day count from the generation start date.
pub type DayOffset = i64;

/// The canonical run identifier.
pub type RunId = String;
