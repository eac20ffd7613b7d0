use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Exactly {expected} engineers are required, got {actual}")]
    EngineerCount { expected: usize, actual: usize },

    #[error("Duplicate engineer name: '{name}'")]
    DuplicateEngineer { name: String },

    #[error("Engineer name at position {position} is empty")]
    EmptyEngineerName { position: usize },

    #[error("Start date {date} is a {weekday}, expected a Sunday")]
    NotASunday { date: chrono::NaiveDate, weekday: String },

    #[error("Week count {weeks} is outside the allowed range 1..={max}")]
    WeeksOutOfRange { weeks: u32, max: u32 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type RosterResult<T> = Result<T, RosterError>;
