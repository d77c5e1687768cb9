//! Domain module
//!
//! Core domain types shared by the engine, tracker, and queries.

pub mod attraction;
pub mod location;
pub mod reward;
pub mod user;

pub use attraction::Attraction;
pub use location::{Location, VisitedLocation};
pub use reward::UserReward;
pub use user::{User, UserPreferences};
