//! Wall-clock time handling for schedule slots.
//!
//! The canonical representation is [`TimeOfDay`], a 24-hour `(hour, minute)`
//! pair with no date or timezone attached. Selector widgets work in the
//! decomposed 12-hour form ([`TwelveHour`]); the two convert losslessly in
//! both directions. The free functions at the bottom operate directly on the
//! string encodings the schedule API exchanges.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::{SlotError, SlotResult};

/// Hour values offered by 12-hour selector widgets.
pub const HOURS: RangeInclusive<u8> = 1..=12;

/// Minute values offered by 12-hour selector widgets (5-minute steps).
pub const MINUTE_STEPS: [u8; 12] = [0, 5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 55];

/// A wall-clock time, hour 0-23 and minute 0-59.
///
/// Construction is checked; a value of this type always holds valid
/// components. The string form is strict zero-padded `"HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> SlotResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(SlotError::InvalidTime(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Position within the day, for interval comparisons.
    pub fn minutes_since_midnight(&self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = SlotError;

    /// Strict `"HH:MM"` parse: leading zeros mandatory, no surrounding
    /// characters. `"9:00"` and `"24:00"` are both rejected.
    fn from_str(s: &str) -> SlotResult<Self> {
        let invalid = || SlotError::InvalidTime(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }
        if ![0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit()) {
            return Err(invalid());
        }
        let hour = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
        let minute = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(t: TimeOfDay) -> Self {
        // components are range-checked at construction
        NaiveTime::from_hms_opt(u32::from(t.hour), u32::from(t.minute), 0)
            .expect("TimeOfDay holds valid components")
    }
}

impl From<NaiveTime> for TimeOfDay {
    /// Truncates seconds; a `NaiveTime` hour/minute is always in range.
    fn from(t: NaiveTime) -> Self {
        Self {
            hour: t.hour() as u8,
            minute: t.minute() as u8,
        }
    }
}

/// AM/PM half of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Period {
    Am,
    Pm,
}

impl Period {
    pub const ALL: [Period; 2] = [Period::Am, Period::Pm];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Am => "AM",
            Period::Pm => "PM",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The decomposed 12-hour form used by selector widgets: hour 1-12,
/// minute, and [`Period`].
///
/// Fields are public because this is transient widget state. Editors clamp
/// hours into 1-12 and minutes into 0-59; minutes off the [`MINUTE_STEPS`]
/// grid stay representable so edit-mode seeding can mirror a persisted
/// value exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwelveHour {
    pub hour: u8,
    pub minute: u8,
    pub period: Period,
}

impl From<TimeOfDay> for TwelveHour {
    fn from(t: TimeOfDay) -> Self {
        let period = if t.hour >= 12 { Period::Pm } else { Period::Am };
        let hour = match t.hour % 12 {
            0 => 12,
            h => h,
        };
        Self {
            hour,
            minute: t.minute,
            period,
        }
    }
}

impl From<TwelveHour> for TimeOfDay {
    /// Out-of-domain components are clamped first, so the result always
    /// upholds the `TimeOfDay` range invariant.
    fn from(t: TwelveHour) -> Self {
        let hour = match (t.period, t.hour.clamp(1, 12)) {
            (Period::Pm, h) if h != 12 => h + 12,
            (Period::Am, 12) => 0,
            (_, h) => h,
        };
        Self {
            hour,
            minute: t.minute.min(59),
        }
    }
}

impl fmt::Display for TwelveHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.hour, self.minute, self.period)
    }
}

/// Converts a 24-hour `"HH:MM"` string to 12-hour display form, e.g.
/// `"14:30"` to `"2:30 PM"`. The 12-hour hour is not zero-padded.
///
/// Returns the empty string when the input is empty or not two
/// colon-separated numbers; callers validate with [`is_valid_time`] first
/// when they need a guarantee.
pub fn to_12_hour(time24: &str) -> String {
    let Some((hour, minute)) = split_clock(time24) else {
        return String::new();
    };
    let period = if hour >= 12 { Period::Pm } else { Period::Am };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour12}:{minute:02} {period}")
}

fn split_clock(s: &str) -> Option<(u32, u32)> {
    let (hour, minute) = s.split_once(':')?;
    Some((hour.parse().ok()?, minute.parse().ok()?))
}

/// Converts a 12-hour string to 24-hour `"HH:MM"` form. Accepts
/// `digits ':' digits`, optional whitespace, then `AM` or `PM` in any
/// case; anything else yields the empty string.
///
/// Deliberately performs no bounds check on the parsed numbers, matching
/// the permissive contract of the selector layer (which only ever produces
/// in-range components).
pub fn to_24_hour(time12: &str) -> String {
    let upper = time12.to_ascii_uppercase();
    let (clock, period) = if let Some(rest) = upper.strip_suffix("AM") {
        (rest, Period::Am)
    } else if let Some(rest) = upper.strip_suffix("PM") {
        (rest, Period::Pm)
    } else {
        return String::new();
    };
    let Some((mut hour, minute)) = split_clock(clock.trim_end()) else {
        return String::new();
    };
    match period {
        // wrapping keeps the conversion total on oversized parsed hours
        Period::Pm if hour != 12 => hour = hour.wrapping_add(12),
        Period::Am if hour == 12 => hour = 0,
        _ => {}
    }
    format!("{hour:02}:{minute:02}")
}

/// Whether the string is a strict zero-padded 24-hour `"HH:MM"` value.
pub fn is_valid_time(time: &str) -> bool {
    time.parse::<TimeOfDay>().is_ok()
}

/// Whether `start` strictly precedes `end` within the day. False when
/// either input fails [`is_valid_time`], or when the two are equal.
pub fn is_start_before_end(start: &str, end: &str) -> bool {
    match (start.parse::<TimeOfDay>(), end.parse::<TimeOfDay>()) {
        (Ok(start), Ok(end)) => {
            start.minutes_since_midnight() < end.minutes_since_midnight()
        }
        _ => false,
    }
}
