// libs/booking-cell/tests/constraints_test.rs
//
// Room-capacity and telehealth-eligibility rules.

use uuid::Uuid;

use booking_cell::models::SessionTypeCheck;
use booking_cell::services::BookingConstraintsService;
use shared_models::{Building, Session, SessionDuration, SessionStatus};

// ==============================================================================
// TEST FIXTURES AND UTILITIES
// ==============================================================================

fn in_person(day: u32, hour: u8, duration: SessionDuration) -> Session {
    Session {
        id: Uuid::new_v4(),
        therapist_id: Uuid::new_v4(),
        client_id: Uuid::new_v4(),
        therapist_name: "Dana Whitfield".to_string(),
        client_name: "Morgan Reyes".to_string(),
        scheduled_day: day,
        scheduled_hour: hour,
        duration,
        is_virtual: false,
        is_insurance: true,
        payment: 100.0,
        status: SessionStatus::Scheduled,
        progress: 0.0,
        quality: 0.5,
    }
}

fn check<'a>(
    building: &'a Building,
    sessions: &'a [Session],
    telehealth_unlocked: bool,
    is_virtual: bool,
    day: u32,
    hour: u8,
    duration: SessionDuration,
) -> SessionTypeCheck<'a> {
    SessionTypeCheck {
        building,
        sessions,
        telehealth_unlocked,
        is_virtual,
        day,
        hour,
        duration,
    }
}

// ==============================================================================
// TELEHEALTH GATING
// ==============================================================================

#[test]
fn test_virtual_requires_telehealth_unlock() {
    let service = BookingConstraintsService::new();
    let building = Building::new("Main office", 2);
    let sessions: Vec<Session> = Vec::new();

    let locked = service.can_book_session_type(&check(&building, &sessions, false, true, 1, 9, SessionDuration::Standard));
    assert!(!locked.can_book);
    assert!(locked.reason.is_some());

    let unlocked = service.can_book_session_type(&check(&building, &sessions, true, true, 1, 9, SessionDuration::Standard));
    assert!(unlocked.can_book);
}

#[test]
fn test_virtual_sessions_ignore_room_capacity() {
    let service = BookingConstraintsService::new();
    let building = Building::new("Main office", 1);
    let sessions = vec![in_person(1, 9, SessionDuration::Standard)];

    // The single room is taken, but a virtual session fits anyway.
    let result = service.can_book_session_type(&check(&building, &sessions, true, true, 1, 9, SessionDuration::Standard));
    assert!(result.can_book);
}

// ==============================================================================
// ROOM CAPACITY
// ==============================================================================

#[test]
fn test_in_person_blocked_when_rooms_full() {
    let service = BookingConstraintsService::new();
    let building = Building::new("Main office", 1);
    let sessions = vec![in_person(1, 9, SessionDuration::Standard)];

    let full = service.can_book_session_type(&check(&building, &sessions, false, false, 1, 9, SessionDuration::Standard));
    assert!(!full.can_book);
    // Telehealth locked: hard capacity failure, no virtual suggestion.
    assert!(!full.reason.as_deref().unwrap().contains("virtual"));

    let free_hour = service.can_book_session_type(&check(&building, &sessions, false, false, 1, 10, SessionDuration::Standard));
    assert!(free_hour.can_book);
}

#[test]
fn test_full_rooms_suggest_virtual_when_unlocked() {
    let service = BookingConstraintsService::new();
    let building = Building::new("Main office", 1);
    let sessions = vec![in_person(1, 9, SessionDuration::Standard)];

    let result = service.can_book_session_type(&check(&building, &sessions, true, false, 1, 9, SessionDuration::Standard));
    assert!(!result.can_book);
    assert!(result.reason.as_deref().unwrap().contains("virtual"));
}

#[test]
fn test_multi_hour_session_needs_room_for_every_hour() {
    let service = BookingConstraintsService::new();
    let building = Building::new("Main office", 1);
    // The room is only taken at 10:00.
    let sessions = vec![in_person(1, 10, SessionDuration::Standard)];

    // An 80-minute session at 9:00 covers 9 and 10; the second hour fails.
    let spanning = service.can_book_session_type(&check(&building, &sessions, false, false, 1, 9, SessionDuration::Extended));
    assert!(!spanning.can_book);

    let single = service.can_book_session_type(&check(&building, &sessions, false, false, 1, 9, SessionDuration::Standard));
    assert!(single.can_book);
}

#[test]
fn test_room_counting_rules() {
    let service = BookingConstraintsService::new();
    let building = Building::new("Main office", 2);

    let mut virtual_session = in_person(1, 9, SessionDuration::Standard);
    virtual_session.is_virtual = true;
    let mut completed = in_person(1, 9, SessionDuration::Standard);
    completed.status = SessionStatus::Completed;
    let mut cancelled = in_person(1, 9, SessionDuration::Standard);
    cancelled.status = SessionStatus::Cancelled;
    let mut running = in_person(1, 8, SessionDuration::Extended);
    running.status = SessionStatus::InProgress;

    let sessions = vec![
        in_person(1, 9, SessionDuration::Standard),
        virtual_session,
        completed,
        cancelled,
        running,
    ];

    // Only the scheduled in-person session and the in-progress one spanning
    // into 9:00 hold rooms.
    assert_eq!(service.rooms_available_at(&building, &sessions, 1, 9), 0);
    assert_eq!(service.rooms_available_at(&building, &sessions, 1, 8), 1);
    assert_eq!(service.rooms_available_at(&building, &sessions, 1, 10), 2);
}
