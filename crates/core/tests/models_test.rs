use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, json, to_value};
use slotwise_core::errors::SlotError;
use slotwise_core::models::{
    schedule::{DaySchedule, Weekday, WeeklySchedule},
    time_slot::TimeSlot,
};

fn slot(start: &str, end: &str) -> TimeSlot {
    TimeSlot {
        start_time: start.to_string(),
        end_time: end.to_string(),
        is_available: true,
    }
}

#[test]
fn test_time_slot_serialization() {
    let value = to_value(slot("09:00", "10:00")).expect("Failed to serialize time slot");
    assert_eq!(
        value,
        json!({"startTime": "09:00", "endTime": "10:00", "isAvailable": true})
    );
}

#[test]
fn test_time_slot_availability_defaults_true() {
    let deserialized: TimeSlot = from_str(r#"{"startTime":"09:00","endTime":"10:00"}"#)
        .expect("Failed to deserialize time slot");
    assert!(deserialized.is_available);
}

#[test]
fn test_time_slot_validate_accepts_ordered_interval() {
    assert!(slot("09:00", "10:00").validate().is_ok());
    assert!(slot("00:00", "23:59").validate().is_ok());
}

#[rstest]
#[case("", "10:00")]
#[case("09:00", "")]
fn test_time_slot_validate_rejects_missing_bound(#[case] start: &str, #[case] end: &str) {
    assert!(matches!(
        slot(start, end).validate(),
        Err(SlotError::MissingTime(_))
    ));
}

#[rstest]
#[case("9:00", "10:00")]
#[case("09:00", "25:00")]
fn test_time_slot_validate_rejects_malformed_bound(#[case] start: &str, #[case] end: &str) {
    assert!(matches!(
        slot(start, end).validate(),
        Err(SlotError::InvalidTime(_))
    ));
}

#[rstest]
#[case("10:00", "09:00")]
#[case("09:00", "09:00")]
fn test_time_slot_validate_rejects_inverted_interval(#[case] start: &str, #[case] end: &str) {
    assert!(matches!(
        slot(start, end).validate(),
        Err(SlotError::InvertedInterval { .. })
    ));
}

#[test]
fn test_time_slot_new_from_typed_bounds() {
    let built = TimeSlot::new("14:30".parse().unwrap(), "15:00".parse().unwrap(), false)
        .expect("valid interval");
    assert_eq!(built, TimeSlot {
        start_time: "14:30".to_string(),
        end_time: "15:00".to_string(),
        is_available: false,
    });
}

#[rstest]
#[case(Weekday::Monday, "Monday")]
#[case(Weekday::Wednesday, "Wednesday")]
#[case(Weekday::Sunday, "Sunday")]
fn test_weekday_display_and_parse(#[case] day: Weekday, #[case] name: &str) {
    assert_eq!(day.to_string(), name);
    assert_eq!(name.parse::<Weekday>().unwrap(), day);
    assert_eq!(name.to_lowercase().parse::<Weekday>().unwrap(), day);
}

#[test]
fn test_weekday_rejects_unknown_name() {
    assert!(matches!(
        "Funday".parse::<Weekday>(),
        Err(SlotError::UnknownDay(_))
    ));
}

#[test]
fn test_weekday_from_chrono() {
    assert_eq!(Weekday::from(chrono::Weekday::Mon), Weekday::Monday);
    assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
}

#[test]
fn test_weekly_schedule_starts_empty_monday_first() {
    let schedule = WeeklySchedule::new();
    let labels: Vec<&str> = schedule.days().iter().map(|d| d.day.as_str()).collect();
    assert_eq!(
        labels,
        ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
    );
    assert!(schedule.days().iter().all(|d| d.slots.is_empty()));
}

#[test]
fn test_weekly_schedule_add_and_remove() {
    let mut schedule = WeeklySchedule::new();
    schedule
        .add_slot(Weekday::Tuesday, slot("09:00", "10:00"))
        .unwrap();
    schedule
        .add_slot(Weekday::Tuesday, slot("14:00", "15:30"))
        .unwrap();
    assert_eq!(schedule.day(Weekday::Tuesday).slots.len(), 2);
    assert!(schedule.day(Weekday::Wednesday).slots.is_empty());

    let removed = schedule.remove_slot(Weekday::Tuesday, 0).unwrap();
    assert_eq!(removed.start_time, "09:00");
    assert_eq!(schedule.day(Weekday::Tuesday).slots[0].start_time, "14:00");
}

#[test]
fn test_weekly_schedule_add_rejects_invalid_slot() {
    let mut schedule = WeeklySchedule::new();
    assert!(schedule.add_slot(Weekday::Monday, slot("10:00", "09:00")).is_err());
    assert!(schedule.day(Weekday::Monday).slots.is_empty());
}

#[test]
fn test_weekly_schedule_update_slot() {
    let mut schedule = WeeklySchedule::new();
    schedule
        .add_slot(Weekday::Friday, slot("09:00", "10:00"))
        .unwrap();
    schedule
        .update_slot(Weekday::Friday, 0, slot("11:00", "12:00"))
        .unwrap();
    assert_eq!(schedule.day(Weekday::Friday).slots[0].start_time, "11:00");
}

#[rstest]
#[case(0)]
#[case(3)]
fn test_weekly_schedule_out_of_range_index(#[case] index: usize) {
    let mut schedule = WeeklySchedule::new();
    assert!(matches!(
        schedule.update_slot(Weekday::Saturday, index, slot("09:00", "10:00")),
        Err(SlotError::SlotNotFound { day: Weekday::Saturday, .. })
    ));
    assert!(matches!(
        schedule.remove_slot(Weekday::Saturday, index),
        Err(SlotError::SlotNotFound { .. })
    ));
}

#[test]
fn test_weekly_schedule_replace_day_installs_server_state() {
    let mut schedule = WeeklySchedule::new();
    schedule
        .add_slot(Weekday::Monday, slot("09:00", "10:00"))
        .unwrap();

    // server-confirmed state wins wholesale, even when overlapping
    let confirmed = vec![slot("08:00", "12:00"), slot("11:00", "13:00")];
    schedule.replace_day(Weekday::Monday, confirmed.clone());
    assert_eq!(schedule.day(Weekday::Monday).slots, confirmed);
}

#[test]
fn test_day_schedule_serialization() {
    let mut day = DaySchedule::new("Thursday");
    day.slots.push(slot("09:00", "10:00"));
    let value = to_value(&day).expect("Failed to serialize day schedule");
    assert_eq!(value["day"], "Thursday");
    assert_eq!(value["slots"][0]["startTime"], "09:00");
}
