pub mod building;
pub mod client;
pub mod error;
pub mod session;
pub mod therapist;
pub mod time;

// Re-export all models for external use
pub use building::*;
pub use client::*;
pub use error::*;
pub use session::*;
pub use therapist::*;
pub use time::*;
