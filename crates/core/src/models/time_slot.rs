use serde::{Deserialize, Serialize};

use crate::clock::{TimeOfDay, is_start_before_end};
use crate::errors::{SlotError, SlotResult};

/// One bookable interval within a day, in the wire shape the schedule
/// service exchanges: 24-hour `"HH:MM"` bounds and an availability flag.
///
/// The struct itself is permissive (bounds may be empty or malformed while
/// a form is mid-edit); [`TimeSlot::validate`] enforces the interval
/// invariant before a slot is handed to the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub start_time: String,
    pub end_time: String,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

impl TimeSlot {
    /// Builds a validated slot from typed bounds; cannot produce an
    /// inverted interval from this constructor.
    pub fn new(start: TimeOfDay, end: TimeOfDay, is_available: bool) -> SlotResult<Self> {
        let slot = Self {
            start_time: start.to_string(),
            end_time: end.to_string(),
            is_available,
        };
        slot.validate()?;
        Ok(slot)
    }

    /// Checks both bounds are well-formed and the start strictly precedes
    /// the end.
    pub fn validate(&self) -> SlotResult<()> {
        if self.start_time.is_empty() {
            return Err(SlotError::MissingTime("Start time"));
        }
        self.start_time.parse::<TimeOfDay>()?;
        if self.end_time.is_empty() {
            return Err(SlotError::MissingTime("End time"));
        }
        self.end_time.parse::<TimeOfDay>()?;
        if !is_start_before_end(&self.start_time, &self.end_time) {
            return Err(SlotError::InvertedInterval {
                start: self.start_time.clone(),
                end: self.end_time.clone(),
            });
        }
        Ok(())
    }
}
