use thiserror::Error;

use crate::models::schedule::Weekday;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("{0} is required")]
    MissingTime(&'static str),

    #[error("End time {end} must be after start time {start}")]
    InvertedInterval { start: String, end: String },

    #[error("Unknown weekday: {0}")]
    UnknownDay(String),

    #[error("No slot at index {index} for {day}")]
    SlotNotFound { day: Weekday, index: usize },
}

pub type SlotResult<T> = Result<T, SlotError>;
