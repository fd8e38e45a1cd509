//! Core data models for the tournament tracker.

mod game;
mod ids;
mod matches;
mod standing;
mod team;

pub use game::*;
pub use ids::*;
pub use matches::*;
pub use standing::*;
pub use team::*;
