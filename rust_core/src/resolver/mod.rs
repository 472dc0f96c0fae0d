//! Staged identifier resolution.
//!
//! Each stage issues one request and extracts one entity; the pipeline
//! threads the resolved identifiers from stage to stage:
//!
//! 1. `/sports`  -> sport + first-half period
//! 2. `/stats`   -> goals/points stat
//! 3. `/leagues` -> league
//! 4. `/events`  -> event on the requested date
//! 5. `/odds`    -> raw odds payload

pub mod extract;
pub mod pipeline;
pub mod stages;

#[cfg(test)]
pub(crate) mod fake;

pub use pipeline::{resolve_first_half_odds, ResolveRequest};
pub use stages::{
    fetch_odds, resolve_event, resolve_league, resolve_points_stat, resolve_sport_config,
    DEFAULT_SPORT_KEYWORD,
};
