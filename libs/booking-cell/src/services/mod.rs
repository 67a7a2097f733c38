pub mod booking;
pub mod constraints;
pub mod factory;
pub mod matching;
pub mod recurring;

pub use booking::BookingService;
pub use constraints::BookingConstraintsService;
pub use factory::SessionFactory;
pub use matching::SlotMatchingService;
pub use recurring::RecurringPlannerService;
