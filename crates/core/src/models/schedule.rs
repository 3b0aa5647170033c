use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{SlotError, SlotResult};
use crate::models::time_slot::TimeSlot;

/// Day of the week, displayed and parsed as the canonical English name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days in display order, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = SlotError;

    fn from_str(s: &str) -> SlotResult<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SlotError::UnknownDay(s.to_string()))
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

/// One weekday's ordered slot list.
///
/// The day label is carried as a plain string for display; nothing in this
/// crate validates it. Slots within a day may overlap; any cross-slot
/// policy belongs to the schedule service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub day: String,
    pub slots: Vec<TimeSlot>,
}

impl DaySchedule {
    pub fn new(day: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            slots: Vec::new(),
        }
    }
}

/// The full week of availability, one [`DaySchedule`] per weekday in
/// Monday-first order. This is the in-memory shape the schedule page edits;
/// the remote service remains authoritative, so [`WeeklySchedule::replace_day`]
/// installs server-confirmed state without re-validating it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    days: [DaySchedule; 7],
}

impl WeeklySchedule {
    pub fn new() -> Self {
        Self {
            days: Weekday::ALL.map(|d| DaySchedule::new(d.name())),
        }
    }

    pub fn day(&self, day: Weekday) -> &DaySchedule {
        &self.days[day.index()]
    }

    pub fn day_mut(&mut self, day: Weekday) -> &mut DaySchedule {
        &mut self.days[day.index()]
    }

    pub fn days(&self) -> &[DaySchedule; 7] {
        &self.days
    }

    /// Validates and appends a slot to the given day.
    pub fn add_slot(&mut self, day: Weekday, slot: TimeSlot) -> SlotResult<()> {
        slot.validate()?;
        debug!(%day, start = %slot.start_time, end = %slot.end_time, "adding slot");
        self.day_mut(day).slots.push(slot);
        Ok(())
    }

    /// Validates and replaces the slot at `index` on the given day.
    pub fn update_slot(&mut self, day: Weekday, index: usize, slot: TimeSlot) -> SlotResult<()> {
        slot.validate()?;
        let slots = &mut self.day_mut(day).slots;
        let existing = slots
            .get_mut(index)
            .ok_or(SlotError::SlotNotFound { day, index })?;
        debug!(%day, index, start = %slot.start_time, end = %slot.end_time, "updating slot");
        *existing = slot;
        Ok(())
    }

    /// Removes and returns the slot at `index` on the given day.
    pub fn remove_slot(&mut self, day: Weekday, index: usize) -> SlotResult<TimeSlot> {
        let slots = &mut self.day_mut(day).slots;
        if index >= slots.len() {
            return Err(SlotError::SlotNotFound { day, index });
        }
        debug!(%day, index, "removing slot");
        Ok(slots.remove(index))
    }

    /// Replaces a whole day with server-confirmed state, unvalidated.
    pub fn replace_day(&mut self, day: Weekday, slots: Vec<TimeSlot>) {
        debug!(%day, count = slots.len(), "replacing day from confirmed state");
        self.day_mut(day).slots = slots;
    }
}

impl Default for WeeklySchedule {
    fn default() -> Self {
        Self::new()
    }
}
