use tracing::{info, warn};

use schedule_cell::services::{client_has_conflicting_session, AvailabilityService};
use shared_models::{validate_not_in_past, BusinessHours, Session};

use crate::models::{
    BookSessionRequest, BookingCheck, BookingContext, BookingOutcome, SessionTypeCheck,
};
use crate::services::constraints::BookingConstraintsService;
use crate::services::factory::SessionFactory;

/// Orchestrates the full booking flow for callers that want the standard
/// discover → validate → create → commit sequence in one call. All mutation
/// stays copy-on-write: the caller owns replacing its schedule reference
/// with the returned one, re-validating against the latest snapshot first
/// if bookings may have raced.
pub struct BookingService {
    availability: AvailabilityService,
    constraints: BookingConstraintsService,
    factory: SessionFactory,
}

impl BookingService {
    pub fn new(business: BusinessHours) -> Self {
        Self {
            availability: AvailabilityService::new(business),
            constraints: BookingConstraintsService::new(),
            factory: SessionFactory::new(),
        }
    }

    /// Run the full constraint set for one proposed session without
    /// committing anything: not-in-past, therapist availability, client
    /// conflicts, then room/telehealth constraints.
    pub fn validate_booking(
        &self,
        ctx: &BookingContext<'_>,
        request: &BookSessionRequest,
    ) -> BookingCheck {
        let time_check =
            validate_not_in_past(ctx.now, request.scheduled_day, request.scheduled_hour);
        if !time_check.is_valid {
            return BookingCheck::rejected(
                time_check.reason.unwrap_or_else(|| "Slot is in the past".to_string()),
            );
        }

        if !self.availability.is_slot_available(
            ctx.schedule,
            ctx.therapist.id,
            request.scheduled_day,
            request.scheduled_hour,
            request.duration,
            Some(ctx.therapist),
        ) {
            return BookingCheck::rejected(format!(
                "{} is not available on day {} at {}:00",
                ctx.therapist.name, request.scheduled_day, request.scheduled_hour
            ));
        }

        if client_has_conflicting_session(
            ctx.sessions,
            ctx.client.id,
            request.scheduled_day,
            request.scheduled_hour,
            request.duration,
        ) {
            return BookingCheck::rejected(format!(
                "{} already has a session on day {} at {}:00",
                ctx.client.name, request.scheduled_day, request.scheduled_hour
            ));
        }

        let is_virtual = request.is_virtual.unwrap_or(ctx.client.prefers_virtual);
        self.constraints.can_book_session_type(&SessionTypeCheck {
            building: ctx.building,
            sessions: ctx.sessions,
            telehealth_unlocked: ctx.telehealth_unlocked,
            is_virtual,
            day: request.scheduled_day,
            hour: request.scheduled_hour,
            duration: request.duration,
        })
    }

    /// Validate and, if the slot holds up, create the session and return it
    /// together with the schedule that now contains it.
    pub fn book_session(
        &self,
        ctx: &BookingContext<'_>,
        request: &BookSessionRequest,
    ) -> BookingOutcome {
        let check = self.validate_booking(ctx, request);
        if !check.can_book {
            warn!(
                "booking rejected for {} on day {} at {}:00: {}",
                ctx.client.name,
                request.scheduled_day,
                request.scheduled_hour,
                check.reason.as_deref().unwrap_or("no reason given")
            );
            return BookingOutcome::Rejected(check);
        }

        let session = self.factory.create_session(request, ctx.therapist, ctx.client);
        let schedule = ctx.schedule.with_session(&session);
        BookingOutcome::Booked { session, schedule }
    }

    /// Move an existing session to a new slot. The session keeps its
    /// identity, duration, modality, and payment; validation runs against a
    /// snapshot with the session's own occupancy removed so it never
    /// conflicts with itself.
    pub fn reschedule_session(
        &self,
        ctx: &BookingContext<'_>,
        session: &Session,
        new_day: u32,
        new_hour: u8,
    ) -> BookingOutcome {
        let reduced_schedule = ctx.schedule.without_session(session);
        let reduced_sessions: Vec<Session> = ctx
            .sessions
            .iter()
            .filter(|existing| existing.id != session.id)
            .cloned()
            .collect();
        let reduced_ctx = BookingContext {
            schedule: &reduced_schedule,
            sessions: &reduced_sessions,
            ..*ctx
        };

        let check = self.validate_booking(
            &reduced_ctx,
            &BookSessionRequest {
                scheduled_day: new_day,
                scheduled_hour: new_hour,
                duration: session.duration,
                is_virtual: Some(session.is_virtual),
            },
        );
        if !check.can_book {
            return BookingOutcome::Rejected(check);
        }

        let mut moved = session.clone();
        moved.scheduled_day = new_day;
        moved.scheduled_hour = new_hour;
        let schedule = reduced_schedule.with_session(&moved);
        info!(
            "rescheduled session {} to day {} at {}:00",
            moved.id, new_day, new_hour
        );
        BookingOutcome::Booked { session: moved, schedule }
    }
}

impl Default for BookingService {
    fn default() -> Self {
        Self::new(BusinessHours::default())
    }
}
