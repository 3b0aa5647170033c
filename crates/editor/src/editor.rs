//! The slot-editor state machine.
//!
//! A [`SlotEditor`] exists exactly while the modal is open: constructing it
//! opens the dialog (and engages the scroll lock), dropping it closes the
//! dialog (cancel discards edits for free). The 12-hour selector components
//! are the source of truth while editing; the derived 24-hour strings are
//! recomputed on every selector change and are what validation and the
//! emitted payload use.

use slotwise_core::clock::{Period, TimeOfDay, TwelveHour, is_start_before_end, is_valid_time};
use slotwise_core::models::time_slot::TimeSlot;
use tracing::debug;

use crate::lock::{ScrollGuard, ScrollLock};

const MSG_START_REQUIRED: &str = "Start time is required";
const MSG_END_REQUIRED: &str = "End time is required";
const MSG_INVALID_FORMAT: &str = "Invalid time format (expected HH:MM)";
const MSG_END_NOT_AFTER: &str = "End time must be after start time";

/// Whether the editor opened on a fresh slot or an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Add,
    Edit,
}

/// Field-scoped validation messages, displayed beneath the matching input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.start_time.is_none() && self.end_time.is_none()
    }
}

/// The open slot-editing modal.
///
/// Submission never closes the editor; on success the caller receives the
/// normalized slot and decides when to drop the editor (typically after the
/// remote persist succeeds). Validation failures populate [`FieldErrors`]
/// and block emission, never panic or escape.
pub struct SlotEditor<L: ScrollLock> {
    mode: EditorMode,
    day: String,
    start: TwelveHour,
    end: TwelveHour,
    start_time: String,
    end_time: String,
    is_available: bool,
    errors: FieldErrors,
    _scroll: ScrollGuard<L>,
}

impl<L: ScrollLock> SlotEditor<L> {
    /// Opens the editor on a fresh slot: 9:00 AM to 10:00 AM, available.
    pub fn add(day: impl Into<String>, lock: L) -> Self {
        let day = day.into();
        debug!(%day, "opening slot editor in add mode");
        Self::with_defaults(EditorMode::Add, day, lock)
    }

    /// Opens the editor pre-populated from an existing slot.
    ///
    /// The 24-hour strings are seeded directly from the slot rather than
    /// re-derived from the selectors, so the editor reflects exactly the
    /// persisted value even when it would not round-trip through the
    /// 5-minute selector steps. An empty or malformed bound is seeded as-is
    /// and reported as a field error on submit instead of being silently
    /// replaced by a default.
    pub fn edit(day: impl Into<String>, slot: &TimeSlot, lock: L) -> Self {
        let day = day.into();
        debug!(%day, start = %slot.start_time, end = %slot.end_time, "opening slot editor in edit mode");
        let mut editor = Self::with_defaults(EditorMode::Edit, day, lock);
        editor.is_available = slot.is_available;
        editor.start_time = slot.start_time.clone();
        editor.end_time = slot.end_time.clone();
        if let Ok(start) = slot.start_time.parse::<TimeOfDay>() {
            editor.start = TwelveHour::from(start);
        }
        if let Ok(end) = slot.end_time.parse::<TimeOfDay>() {
            editor.end = TwelveHour::from(end);
        }
        editor
    }

    fn with_defaults(mode: EditorMode, day: String, lock: L) -> Self {
        let start = TwelveHour {
            hour: 9,
            minute: 0,
            period: Period::Am,
        };
        let end = TwelveHour {
            hour: 10,
            minute: 0,
            period: Period::Am,
        };
        Self {
            mode,
            day,
            start,
            end,
            start_time: derive_24h(start),
            end_time: derive_24h(end),
            is_available: true,
            errors: FieldErrors::default(),
            _scroll: ScrollGuard::acquire(lock),
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// The weekday label this editor was opened for, passed through
    /// unmodified for display.
    pub fn day(&self) -> &str {
        &self.day
    }

    pub fn start(&self) -> TwelveHour {
        self.start
    }

    pub fn end(&self) -> TwelveHour {
        self.end
    }

    /// Derived 24-hour form of the start selector.
    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    /// Derived 24-hour form of the end selector.
    pub fn end_time(&self) -> &str {
        &self.end_time
    }

    pub fn is_available(&self) -> bool {
        self.is_available
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_start_hour(&mut self, hour: u8) {
        self.start.hour = hour.clamp(1, 12);
        self.sync_start();
    }

    pub fn set_start_minute(&mut self, minute: u8) {
        self.start.minute = minute.min(59);
        self.sync_start();
    }

    pub fn set_start_period(&mut self, period: Period) {
        self.start.period = period;
        self.sync_start();
    }

    pub fn set_end_hour(&mut self, hour: u8) {
        self.end.hour = hour.clamp(1, 12);
        self.sync_end();
    }

    pub fn set_end_minute(&mut self, minute: u8) {
        self.end.minute = minute.min(59);
        self.sync_end();
    }

    pub fn set_end_period(&mut self, period: Period) {
        self.end.period = period;
        self.sync_end();
    }

    pub fn set_available(&mut self, is_available: bool) {
        self.is_available = is_available;
    }

    /// Validates the current state and, when clean, emits the normalized
    /// slot. On failure the field errors are populated and nothing is
    /// emitted; the editor stays open either way.
    pub fn submit(&mut self) -> Option<TimeSlot> {
        self.errors = self.validate();
        if !self.errors.is_empty() {
            debug!(day = %self.day, "slot submission rejected by validation");
            return None;
        }
        debug!(day = %self.day, start = %self.start_time, end = %self.end_time, "slot submitted");
        Some(TimeSlot {
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            is_available: self.is_available,
        })
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors {
            start_time: bound_error(&self.start_time, MSG_START_REQUIRED),
            end_time: bound_error(&self.end_time, MSG_END_REQUIRED),
        };
        if errors.is_empty() && !is_start_before_end(&self.start_time, &self.end_time) {
            errors.end_time = Some(MSG_END_NOT_AFTER.to_string());
        }
        errors
    }

    fn sync_start(&mut self) {
        self.start_time = derive_24h(self.start);
    }

    fn sync_end(&mut self) {
        self.end_time = derive_24h(self.end);
    }
}

fn bound_error(time: &str, required_msg: &str) -> Option<String> {
    if time.is_empty() {
        Some(required_msg.to_string())
    } else if !is_valid_time(time) {
        Some(MSG_INVALID_FORMAT.to_string())
    } else {
        None
    }
}

fn derive_24h(components: TwelveHour) -> String {
    TimeOfDay::from(components).to_string()
}
