//! # Slotwise Editor
//!
//! The modal time-slot editor: a synchronous form state machine that
//! collects a start/end pair through 12-hour selector widgets, validates it,
//! and emits a normalized [`slotwise_core::models::time_slot::TimeSlot`].
//!
//! The editor never performs I/O. Persisting the emitted slot, and closing
//! the modal afterwards, is the caller's responsibility; cancelling is just
//! dropping the editor value.

/// The modal form state machine
pub mod editor;
/// Scoped acquisition of the host scroll lock
pub mod lock;

pub use editor::{EditorMode, FieldErrors, SlotEditor};
pub use lock::{NoopLock, ScrollGuard, ScrollLock};
