//! # Torneo Mus
//!
//! A round-robin mus tournament tracker.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (teams, matches, games, standings)
//! - **tournament**: Schedule generation, match progression and ranking
//! - **storage**: JSONL persistence (teams.jsonl, matches.jsonl)
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod config;
pub mod models;
pub mod storage;
pub mod tournament;

pub use models::*;
pub use tournament::{Tournament, TournamentError};
