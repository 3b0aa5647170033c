/// Weekday, day-schedule, and weekly-aggregate types
pub mod schedule;
/// Single bookable interval payload
pub mod time_slot;
