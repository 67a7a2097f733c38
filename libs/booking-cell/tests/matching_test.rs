// libs/booking-cell/tests/matching_test.rs
//
// Candidate slot discovery across a multi-day horizon: intersection of
// therapist hours, client availability, and the schedule grid; chronological
// ordering with preference surfaced as metadata only.

use std::collections::BTreeMap;

use booking_cell::services::SlotMatchingService;
use schedule_cell::models::Schedule;
use shared_models::{
    Client, Session, SessionDuration, SessionStatus, Therapist, TimePreference, Weekday,
    WorkSchedule,
};
use uuid::Uuid;

// ==============================================================================
// TEST FIXTURES AND UTILITIES
// ==============================================================================

fn therapist() -> Therapist {
    Therapist::new("Dana Whitfield")
}

fn client() -> Client {
    Client::new("Morgan Reyes", 110.0)
}

fn booked(therapist_id: Uuid, day: u32, hour: u8, duration: SessionDuration) -> Session {
    Session {
        id: Uuid::new_v4(),
        therapist_id,
        client_id: Uuid::new_v4(),
        therapist_name: "Dana Whitfield".to_string(),
        client_name: "Jamie Okafor".to_string(),
        scheduled_day: day,
        scheduled_hour: hour,
        duration,
        is_virtual: false,
        is_insurance: true,
        payment: 95.0,
        status: SessionStatus::Scheduled,
        progress: 0.0,
        quality: 0.5,
    }
}

// ==============================================================================
// ORDERING AND PREFERENCE
// ==============================================================================

#[test]
fn test_slots_are_chronological_even_when_preference_matches_late_hours() {
    let service = SlotMatchingService::default();
    let schedule = Schedule::new();
    let therapist = therapist();
    let mut client = client();
    client.preferred_time = TimePreference::Evening;

    let slots = service.find_matching_slots(&schedule, &therapist, &client, 1, 2, SessionDuration::Standard);

    // Chronological ordering is the law; preference never reorders.
    let ordering: Vec<(u32, u8)> = slots.iter().map(|s| (s.day, s.hour)).collect();
    let mut sorted = ordering.clone();
    sorted.sort();
    assert_eq!(ordering, sorted);

    assert_eq!(slots.first().map(|s| (s.day, s.hour)), Some((1, 8)));
    assert!(!slots[0].is_preferred);
    let evening: Vec<&booking_cell::models::MatchingSlot> =
        slots.iter().filter(|s| s.is_preferred).collect();
    assert!(evening.iter().all(|s| s.hour >= 16 && s.hour <= 17));
    assert!(!evening.is_empty());
}

#[test]
fn test_any_preference_flags_every_slot() {
    let service = SlotMatchingService::default();
    let schedule = Schedule::new();
    let therapist = therapist();
    let client = client();

    let slots = service.find_matching_slots(&schedule, &therapist, &client, 1, 1, SessionDuration::Standard);
    assert!(!slots.is_empty());
    assert!(slots.iter().all(|s| s.is_preferred));
    assert!(slots.iter().all(|s| s.therapist_id == therapist.id));
}

// ==============================================================================
// CONSTRAINT INTERSECTION
// ==============================================================================

#[test]
fn test_client_availability_restricts_days_and_hours() {
    let service = SlotMatchingService::default();
    let schedule = Schedule::new();
    let therapist = therapist();
    let mut client = client();
    client.availability = BTreeMap::from([(Weekday::Monday, vec![9, 10])]);

    // Days 1..=7: Mondays are days 1 and 6.
    let slots = service.find_matching_slots(&schedule, &therapist, &client, 1, 7, SessionDuration::Standard);
    let found: Vec<(u32, u8)> = slots.iter().map(|s| (s.day, s.hour)).collect();
    assert_eq!(found, vec![(1, 9), (1, 10), (6, 9), (6, 10)]);
}

#[test]
fn test_therapist_breaks_and_bookings_excluded() {
    let service = SlotMatchingService::default();
    let mut therapist = therapist();
    therapist.work_schedule = WorkSchedule {
        work_start_hour: 9,
        work_end_hour: 14,
        break_hours: vec![12],
    };
    let client = client();
    let schedule = Schedule::new().with_session(&booked(therapist.id, 1, 10, SessionDuration::Standard));

    let slots = service.find_matching_slots(&schedule, &therapist, &client, 1, 1, SessionDuration::Standard);
    let hours: Vec<u8> = slots.iter().map(|s| s.hour).collect();
    assert_eq!(hours, vec![9, 11, 13]);
}

#[test]
fn test_duration_must_fit_every_covered_hour() {
    let service = SlotMatchingService::default();
    let therapist = therapist();
    let client = client();
    let schedule = Schedule::new().with_session(&booked(therapist.id, 1, 11, SessionDuration::Standard));

    let slots = service.find_matching_slots(&schedule, &therapist, &client, 1, 1, SessionDuration::Extended);
    let hours: Vec<u8> = slots.iter().map(|s| s.hour).collect();
    // 10:00 would collide with the 11:00 booking; 15:00 is the last start
    // that still ends by close.
    assert_eq!(hours, vec![8, 9, 12, 13, 14, 15]);
}

#[test]
fn test_next_available_slot_is_first_candidate() {
    let service = SlotMatchingService::default();
    let therapist = therapist();
    let client = client();
    let schedule = Schedule::new()
        .with_session(&booked(therapist.id, 1, 8, SessionDuration::Intensive))
        .with_session(&booked(therapist.id, 1, 11, SessionDuration::Intensive))
        .with_session(&booked(therapist.id, 1, 14, SessionDuration::Intensive));

    // Day 1 is fully booked (8-17); the next candidate is day 2 at open.
    let next = service.find_next_available_slot(&schedule, &therapist, &client, 1, 5, SessionDuration::Standard);
    assert_eq!(next.map(|s| (s.day, s.hour)), Some((2, 8)));
}

#[test]
fn test_no_candidates_outside_horizon() {
    let service = SlotMatchingService::default();
    let therapist = therapist();
    let mut client = client();
    client.availability = BTreeMap::from([(Weekday::Friday, vec![9])]);

    // Horizon days 1..=3 never reaches a Friday (day 5).
    let slots = service.find_matching_slots(&Schedule::new(), &therapist, &client, 1, 3, SessionDuration::Standard);
    assert!(slots.is_empty());
}
