//! SportsGameOdds core - staged identifier resolution for first-half odds.
//!
//! This module provides:
//! - Typed records for the sports, stats, leagues, events and odds endpoints
//! - A shared case-insensitive matching utility and identifier extractor
//! - One resolver per pipeline stage (sport/period, stat, league, event, odds)
//! - The pipeline orchestrator that threads identifiers between stages
//! - A reqwest-backed API accessor with `x-api-key` authentication

pub mod clients;
pub mod error;
pub mod models;
pub mod resolver;
pub mod utils;

pub use clients::{ApiAccessor, SportsGameOddsClient};
pub use error::{NotFound, ResolveError, TransportError};
pub use models::{Event, League, OddsQuery, ResolvedOdds, SportConfig};
pub use resolver::{resolve_first_half_odds, ResolveRequest};
