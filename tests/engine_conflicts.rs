use daybook::{
    engine::scheduler::{ScheduleError, Scheduler},
    event::EventDraft,
    types::{DayKey, EventType},
};

fn draft(name: &str, start: &str, end: &str) -> EventDraft {
    EventDraft {
        name: name.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        description: None,
        kind: EventType::Work,
    }
}

fn day() -> DayKey {
    DayKey::new(2025, 4, 12)
}

#[test]
fn non_overlapping_adds_keep_insertion_order() {
    let mut scheduler = Scheduler::new();
    let day = day();

    scheduler.add_event(&day, draft("First", "09:00", "10:00")).expect("add first");
    scheduler.add_event(&day, draft("Second", "11:00", "12:00")).expect("add second");
    scheduler.add_event(&day, draft("Earlier", "07:00", "08:00")).expect("add earlier");

    let names: Vec<&str> = scheduler.events(&day).iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["First", "Second", "Earlier"]);
}

#[test]
fn touching_boundary_is_not_a_conflict() {
    let mut scheduler = Scheduler::new();
    let day = day();

    scheduler.add_event(&day, draft("Morning", "09:00", "10:00")).expect("add");
    scheduler.add_event(&day, draft("Next", "10:00", "11:00")).expect("starts at prior end");
    scheduler.add_event(&day, draft("Before", "08:00", "09:00")).expect("ends at prior start");

    assert_eq!(scheduler.events(&day).len(), 3);
}

#[test]
fn overlap_rejected_and_store_unchanged() {
    let mut scheduler = Scheduler::new();
    let day = day();

    let existing = scheduler.add_event(&day, draft("Standup", "09:00", "10:00")).expect("add");

    let err = scheduler
        .add_event(&day, draft("Review", "09:30", "10:30"))
        .expect_err("overlap must be rejected");
    assert_eq!(err, ScheduleError::Conflict { index: 0, existing });

    let events = scheduler.events(&day);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "Standup");
}

#[test]
fn contained_interval_conflicts_both_ways() {
    let mut scheduler = Scheduler::new();
    let day = day();

    scheduler.add_event(&day, draft("Inner", "10:00", "11:00")).expect("add");
    let err = scheduler.add_event(&day, draft("Outer", "09:00", "12:00")).expect_err("contains");
    assert!(matches!(err, ScheduleError::Conflict { index: 0, .. }));

    let other = DayKey::new(2025, 4, 13);
    scheduler.add_event(&other, draft("Outer", "09:00", "12:00")).expect("add");
    let err = scheduler
        .add_event(&other, draft("Inner", "10:00", "11:00"))
        .expect_err("contained");
    assert!(matches!(err, ScheduleError::Conflict { index: 0, .. }));
}

#[test]
fn first_conflicting_event_in_sequence_order_is_reported() {
    let mut scheduler = Scheduler::new();
    let day = day();

    scheduler.add_event(&day, draft("A", "08:00", "09:00")).expect("add");
    scheduler.add_event(&day, draft("B", "09:00", "10:00")).expect("add");
    scheduler.add_event(&day, draft("C", "10:00", "11:00")).expect("add");

    let err = scheduler
        .add_event(&day, draft("Wide", "09:30", "10:30"))
        .expect_err("overlaps B and C");
    match err {
        ScheduleError::Conflict { index, existing } => {
            assert_eq!(index, 1);
            assert_eq!(existing.name, "B");
        }
        other => panic!("expected conflict, got {other:?}"),
    }
}

#[test]
fn edit_in_place_with_unchanged_range_succeeds() {
    let mut scheduler = Scheduler::new();
    let day = day();

    scheduler.add_event(&day, draft("Standup", "09:00", "10:00")).expect("add");
    let edited = scheduler
        .edit_event(&day, 0, draft("Standup (moved room)", "09:00", "10:00"))
        .expect("self-exclusion must allow an unchanged range");

    assert_eq!(edited.name, "Standup (moved room)");
    assert_eq!(scheduler.events(&day).len(), 1);
    assert_eq!(scheduler.events(&day)[0].name, "Standup (moved room)");
}

#[test]
fn edit_colliding_with_other_event_is_rejected() {
    let mut scheduler = Scheduler::new();
    let day = day();

    scheduler.add_event(&day, draft("First", "09:00", "10:00")).expect("add");
    scheduler.add_event(&day, draft("Second", "11:00", "12:00")).expect("add");

    let err = scheduler
        .edit_event(&day, 1, draft("Second", "09:30", "10:30"))
        .expect_err("collides with First");
    assert!(matches!(err, ScheduleError::Conflict { index: 0, .. }));

    assert_eq!(scheduler.events(&day)[1].start_time, "11:00");
}

#[test]
fn edit_out_of_bounds_index_is_not_found() {
    let mut scheduler = Scheduler::new();
    let day = day();

    scheduler.add_event(&day, draft("First", "09:00", "10:00")).expect("add");
    scheduler.add_event(&day, draft("Second", "11:00", "12:00")).expect("add");

    let err = scheduler
        .edit_event(&day, 5, draft("Ghost", "13:00", "14:00"))
        .expect_err("index 5 on a day with 2 events");
    assert_eq!(err, ScheduleError::NotFound { index: 5 });
}

#[test]
fn delete_shifts_later_indices_down() {
    let mut scheduler = Scheduler::new();
    let day = day();

    scheduler.add_event(&day, draft("A", "08:00", "09:00")).expect("add");
    scheduler.add_event(&day, draft("B", "09:00", "10:00")).expect("add");
    scheduler.add_event(&day, draft("C", "10:00", "11:00")).expect("add");

    scheduler.delete_event(&day, 0).expect("delete first");
    let names: Vec<&str> = scheduler.events(&day).iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["B", "C"]);

    let err = scheduler.delete_event(&day, 2).expect_err("old index no longer valid");
    assert_eq!(err, ScheduleError::NotFound { index: 2 });
}

#[test]
fn deleting_last_event_removes_the_day_key() {
    let mut scheduler = Scheduler::new();
    let day = day();

    scheduler.add_event(&day, draft("Only", "09:00", "10:00")).expect("add");
    scheduler.delete_event(&day, 0).expect("delete");

    assert!(scheduler.events(&day).is_empty());
    assert!(!scheduler.store().contains(&day));
    assert_eq!(scheduler.store().day_count(), 0);
}

#[test]
fn missing_fields_are_rejected_in_order() {
    let mut scheduler = Scheduler::new();
    let day = day();

    let err = scheduler.add_event(&day, draft("", "09:00", "10:00")).expect_err("name");
    assert_eq!(err, ScheduleError::MissingField("name"));

    let err = scheduler.add_event(&day, draft("X", "", "10:00")).expect_err("start");
    assert_eq!(err, ScheduleError::MissingField("startTime"));

    let err = scheduler.add_event(&day, draft("X", "09:00", "")).expect_err("end");
    assert_eq!(err, ScheduleError::MissingField("endTime"));

    assert!(scheduler.store().is_empty());
}

#[test]
fn inverted_or_empty_range_is_rejected() {
    let mut scheduler = Scheduler::new();
    let day = day();

    let err = scheduler.add_event(&day, draft("X", "10:00", "10:00")).expect_err("equal");
    assert!(matches!(err, ScheduleError::InvalidRange { .. }));

    let err = scheduler.add_event(&day, draft("X", "11:00", "10:00")).expect_err("inverted");
    assert!(matches!(err, ScheduleError::InvalidRange { .. }));
}

#[test]
fn operations_on_different_days_never_interact() {
    let mut scheduler = Scheduler::new();
    let monday = DayKey::new(2025, 4, 14);
    let tuesday = DayKey::new(2025, 4, 15);

    scheduler.add_event(&monday, draft("Standup", "09:00", "10:00")).expect("add");
    scheduler
        .add_event(&tuesday, draft("Standup", "09:00", "10:00"))
        .expect("same interval on another day is no conflict");

    scheduler.delete_event(&monday, 0).expect("delete");
    assert_eq!(scheduler.events(&tuesday).len(), 1);
}

#[test]
fn search_matches_names_case_insensitively_in_order() {
    let mut scheduler = Scheduler::new();
    let day = day();

    scheduler.add_event(&day, draft("Team Lunch", "12:00", "13:00")).expect("add");
    scheduler.add_event(&day, draft("Gym", "17:00", "18:00")).expect("add");
    scheduler.add_event(&day, draft("lunch prep", "10:00", "11:00")).expect("add");

    let hits: Vec<&str> = scheduler.search(&day, "LUNCH").iter().map(|e| e.name.as_str()).collect();
    assert_eq!(hits, ["Team Lunch", "lunch prep"]);
    assert!(scheduler.search(&day, "dentist").is_empty());
}

#[test]
fn unrecognized_category_is_accepted_verbatim() {
    let mut scheduler = Scheduler::new();
    let day = day();

    let mut candidate = draft("Cake", "15:00", "16:00");
    candidate.kind = EventType::from("Birthday".to_string());

    let event = scheduler.add_event(&day, candidate).expect("add");
    assert_eq!(event.kind.as_str(), "Birthday");
    assert!(!event.kind.is_recognized());
}
