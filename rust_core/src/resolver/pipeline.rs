//! Pipeline orchestrator: runs the stages in dependency order.

use super::stages::{
    fetch_odds, resolve_event, resolve_league, resolve_points_stat, resolve_sport_config,
    DEFAULT_SPORT_KEYWORD,
};
use crate::clients::ApiAccessor;
use crate::error::Result;
use crate::models::{OddsQuery, ResolvedOdds};
use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};

/// Caller-supplied inputs for one resolution run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveRequest {
    pub sport_keyword: String,
    pub league_keyword: Option<String>,
    pub date: NaiveDate,
    pub bet_type_id: Option<String>,
}

impl ResolveRequest {
    /// Soccer, first league returned, no bet-type filter.
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            sport_keyword: DEFAULT_SPORT_KEYWORD.to_string(),
            league_keyword: None,
            date,
            bet_type_id: None,
        }
    }

    pub fn with_sport_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.sport_keyword = keyword.into();
        self
    }

    pub fn with_league_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.league_keyword = Some(keyword.into());
        self
    }

    pub fn with_bet_type(mut self, bet_type_id: impl Into<String>) -> Self {
        self.bet_type_id = Some(bet_type_id.into());
        self
    }
}

/// Resolve sport, stat, league and event, then fetch first-half odds.
///
/// Strictly sequential; the first failing stage aborts the run and its error
/// is returned as-is. No retries and no caching between runs.
pub async fn resolve_first_half_odds(
    api: &dyn ApiAccessor,
    api_key: &str,
    request: &ResolveRequest,
) -> Result<ResolvedOdds> {
    let sport = resolve_sport_config(api, api_key, &request.sport_keyword).await?;
    let stat_id = resolve_points_stat(api, api_key, &sport.sport_id).await?;
    let league = resolve_league(
        api,
        api_key,
        &sport.sport_id,
        request.league_keyword.as_deref(),
    )
    .await?;
    let event = resolve_event(
        api,
        api_key,
        &sport.sport_id,
        &league.league_id,
        request.date,
    )
    .await?;

    let query = OddsQuery {
        sport_id: sport.sport_id.clone(),
        league_id: league.league_id.clone(),
        event_id: event.event_id.clone(),
        stat_id: stat_id.clone(),
        period_id: sport.first_half_period_id.clone(),
        bet_type_id: request.bet_type_id.clone(),
    };
    let odds = fetch_odds(api, api_key, &query).await?;

    info!(
        "Fetched first-half odds for '{}' ({} / {})",
        event.name, league.name, sport.name
    );

    Ok(ResolvedOdds {
        sport,
        league,
        event,
        stat_id,
        odds,
    })
}
