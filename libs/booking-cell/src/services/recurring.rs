use tracing::{debug, info};

use schedule_cell::services::{client_has_conflicting_session, AvailabilityService};
use shared_models::{validate_not_in_past, BusinessHours, Session};

use crate::models::{
    BookSessionRequest, PlanFailure, PlannedSlot, RecurringBookingRequest, RecurringPlan,
    SessionTypeCheck,
};
use crate::services::constraints::BookingConstraintsService;
use crate::services::factory::SessionFactory;

/// Projects a fixed-interval series of future sessions and validates each
/// occurrence against the full constraint set before anything is committed.
pub struct RecurringPlannerService {
    availability: AvailabilityService,
    constraints: BookingConstraintsService,
    factory: SessionFactory,
}

impl RecurringPlannerService {
    pub fn new(business: BusinessHours) -> Self {
        Self {
            availability: AvailabilityService::new(business),
            constraints: BookingConstraintsService::new(),
            factory: SessionFactory::new(),
        }
    }

    /// Validate every projected occurrence, in order: not-in-past, therapist
    /// availability, client conflicts, then room/telehealth constraints.
    ///
    /// Each validated occurrence is folded into a working schedule and
    /// session list before the next is checked, so the series cannot
    /// schedule itself into conflict. Failures never abort the sweep; the
    /// report always covers every index.
    pub fn plan_recurring_bookings(&self, request: &RecurringBookingRequest<'_>) -> RecurringPlan {
        let mut working_schedule = request.schedule.clone();
        let mut working_sessions: Vec<Session> = request.sessions.to_vec();
        let mut planned = Vec::new();
        let mut failures = Vec::new();

        for index in 0..request.count as usize {
            let day = request.start_day + index as u32 * request.interval_days;
            let hour = request.start_hour;

            let time_check = validate_not_in_past(request.current_time, day, hour);
            if !time_check.is_valid {
                failures.push(PlanFailure {
                    index,
                    reason: time_check
                        .reason
                        .unwrap_or_else(|| "Slot is in the past".to_string()),
                });
                continue;
            }

            if !self.availability.is_slot_available(
                &working_schedule,
                request.therapist.id,
                day,
                hour,
                request.duration,
                Some(request.therapist),
            ) {
                failures.push(PlanFailure {
                    index,
                    reason: format!(
                        "{} is not available on day {} at {}:00",
                        request.therapist.name, day, hour
                    ),
                });
                continue;
            }

            if client_has_conflicting_session(
                &working_sessions,
                request.client.id,
                day,
                hour,
                request.duration,
            ) {
                failures.push(PlanFailure {
                    index,
                    reason: format!(
                        "{} already has a session on day {} at {}:00",
                        request.client.name, day, hour
                    ),
                });
                continue;
            }

            let type_check = self.constraints.can_book_session_type(&SessionTypeCheck {
                building: request.building,
                sessions: &working_sessions,
                telehealth_unlocked: request.telehealth_unlocked,
                is_virtual: request.is_virtual,
                day,
                hour,
                duration: request.duration,
            });
            if !type_check.can_book {
                failures.push(PlanFailure {
                    index,
                    reason: type_check
                        .reason
                        .unwrap_or_else(|| "Session type cannot be booked".to_string()),
                });
                continue;
            }

            // Occupy the slot for the rest of the series' checks.
            let projection = self.factory.create_session(
                &BookSessionRequest {
                    scheduled_day: day,
                    scheduled_hour: hour,
                    duration: request.duration,
                    is_virtual: Some(request.is_virtual),
                },
                request.therapist,
                request.client,
            );
            working_schedule = working_schedule.with_session(&projection);
            working_sessions.push(projection);

            debug!("recurring occurrence {} validated for day {} at {}:00", index, day, hour);
            planned.push(PlannedSlot { index, day, hour });
        }

        info!(
            "recurring plan for {} with {}: {} planned, {} failed of {}",
            request.therapist.name,
            request.client.name,
            planned.len(),
            failures.len(),
            request.count
        );
        RecurringPlan { planned, failures }
    }
}

impl Default for RecurringPlannerService {
    fn default() -> Self {
        Self::new(BusinessHours::default())
    }
}
