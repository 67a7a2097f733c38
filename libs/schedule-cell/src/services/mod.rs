pub mod availability;
pub mod conflict;
pub mod store;

pub use availability::{calculate_energy_cost, AvailabilityService};
pub use conflict::{client_has_conflicting_session, client_sessions_on_day, conflicts_at};
pub use store::{sessions_for_day, therapist_sessions_for_day};
