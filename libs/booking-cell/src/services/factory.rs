use tracing::info;
use uuid::Uuid;

use shared_models::{Client, Session, SessionStatus, Therapist};

use crate::models::BookSessionRequest;

/// Constructs session records and computes their derived billing fields at
/// booking time. Later phases (progress, quality refinement, status
/// transitions) belong to other subsystems.
pub struct SessionFactory;

impl SessionFactory {
    pub fn new() -> Self {
        Self
    }

    /// Build a freshly scheduled session. Payment is the client's rate scaled
    /// by the duration multiplier and is never recomputed afterwards; quality
    /// starts at a neutral 0.5 prior.
    pub fn create_session(
        &self,
        request: &BookSessionRequest,
        therapist: &Therapist,
        client: &Client,
    ) -> Session {
        let payment = client.session_rate * request.duration.rate_multiplier();
        let is_virtual = request.is_virtual.unwrap_or(client.prefers_virtual);
        let session = Session {
            id: Uuid::new_v4(),
            therapist_id: therapist.id,
            client_id: client.id,
            therapist_name: therapist.name.clone(),
            client_name: client.name.clone(),
            scheduled_day: request.scheduled_day,
            scheduled_hour: request.scheduled_hour,
            duration: request.duration,
            is_virtual,
            is_insurance: !client.is_private_pay,
            payment,
            status: SessionStatus::Scheduled,
            progress: 0.0,
            quality: 0.5,
        };
        info!(
            "created session {} for {} with {} on day {} at {}:00 (payment {:.2}, virtual: {})",
            session.id,
            client.name,
            therapist.name,
            session.scheduled_day,
            session.scheduled_hour,
            session.payment,
            session.is_virtual
        );
        session
    }
}

impl Default for SessionFactory {
    fn default() -> Self {
        Self::new()
    }
}
