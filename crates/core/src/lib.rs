//! # Slotwise Core
//!
//! Data model and validation logic for weekly availability scheduling.
//! This crate owns the time-of-day representation, the 12-hour/24-hour
//! conversions used by selector widgets, and the per-day slot aggregate
//! that front-end layers edit and a remote schedule service persists.
//!
//! Everything here is synchronous and side-effect free; persistence and
//! transport belong to external collaborators.

/// Wall-clock time types and 12h/24h conversions
pub mod clock;
/// Error taxonomy shared across the workspace
pub mod errors;
/// Slot, day, and weekly-schedule payload types
pub mod models;
