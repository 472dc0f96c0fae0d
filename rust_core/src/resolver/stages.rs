//! The five resolution stages. Each wraps one API call plus one extraction.

use super::extract::{find_first, parse_records};
use crate::clients::ApiAccessor;
use crate::error::{ResolveError, Result};
use crate::models::{
    Event, EventRecord, League, LeagueRecord, OddsQuery, PeriodRecord, SportConfig, SportRecord,
    StatRecord,
};
use crate::utils::matching::{contains_any_ignore_case, contains_ignore_case, eq_ignore_case};
use chrono::NaiveDate;
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub const SPORTS_PATH: &str = "/sports";
pub const STATS_PATH: &str = "/stats";
pub const LEAGUES_PATH: &str = "/leagues";
pub const EVENTS_PATH: &str = "/events";
pub const ODDS_PATH: &str = "/odds";

pub const DEFAULT_SPORT_KEYWORD: &str = "soccer";

/// Period names recognised as the first half.
pub const FIRST_HALF_PHRASES: [&str; 2] = ["1st half", "first half"];

/// Stat code used for goals (soccer) / points (other sports).
pub const POINTS_STAT_ID: &str = "points";

async fn fetch_records<T: DeserializeOwned>(
    api: &dyn ApiAccessor,
    api_key: &str,
    path: &'static str,
    query: &[(&str, String)],
) -> Result<Vec<T>> {
    let payload = api.get_json(path, query, api_key).await?;
    let records: Vec<T> = parse_records(path, payload)?;
    debug!("{} returned {} records", path, records.len());
    Ok(records)
}

/// First period (base periods, then extra periods) whose name denotes the first half.
pub fn find_first_half_period(sport: &SportRecord) -> Option<&PeriodRecord> {
    find_first(
        sport.all_periods(),
        |p: &PeriodRecord| contains_any_ignore_case(&p.name, &FIRST_HALF_PHRASES),
        "first-half period",
    )
    .ok()
}

/// Resolve the sport matching `sport_keyword` and its first-half period.
pub async fn resolve_sport_config(
    api: &dyn ApiAccessor,
    api_key: &str,
    sport_keyword: &str,
) -> Result<SportConfig> {
    let sports: Vec<SportRecord> = fetch_records(api, api_key, SPORTS_PATH, &[]).await?;

    let description = format!("sport containing '{}'", sport_keyword);
    let sport = find_first(
        &sports,
        |s: &SportRecord| contains_ignore_case(&s.name, sport_keyword),
        &description,
    )
    .map_err(|e| {
        debug!("{} among {} sports", e, sports.len());
        ResolveError::SportNotFound {
            keyword: sport_keyword.to_string(),
        }
    })?;

    let period = find_first_half_period(sport).ok_or_else(|| ResolveError::PeriodNotFound {
        sport: sport.name.clone(),
    })?;

    info!(
        "Resolved sport '{}' ({}) with first-half period {}",
        sport.name, sport.sport_id, period.period_id
    );

    Ok(SportConfig {
        sport_id: sport.sport_id.clone(),
        name: sport.name.clone(),
        first_half_period_id: period.period_id.clone(),
    })
}

/// Resolve the goals/points stat for a sport. Exact code match, ignoring case.
pub async fn resolve_points_stat(
    api: &dyn ApiAccessor,
    api_key: &str,
    sport_id: &str,
) -> Result<String> {
    let query = [("sportID", sport_id.to_string())];
    let stats: Vec<StatRecord> = fetch_records(api, api_key, STATS_PATH, &query).await?;

    let stat = find_first(
        &stats,
        |s: &StatRecord| eq_ignore_case(&s.stat_id, POINTS_STAT_ID),
        "statID 'points'",
    )
    .map_err(|e| {
        debug!("{} among {} stats", e, stats.len());
        ResolveError::StatNotFound {
            sport_id: sport_id.to_string(),
        }
    })?;

    info!("Resolved stat {} for sport {}", stat.stat_id, sport_id);
    Ok(stat.stat_id.clone())
}

/// Resolve a league for the sport.
///
/// With a keyword, the first league whose name contains it; there is no
/// fallback when nothing matches. Without one (or with a blank one), the
/// first league in API order.
pub async fn resolve_league(
    api: &dyn ApiAccessor,
    api_key: &str,
    sport_id: &str,
    league_keyword: Option<&str>,
) -> Result<League> {
    let query = [("sportID", sport_id.to_string())];
    let leagues: Vec<LeagueRecord> = fetch_records(api, api_key, LEAGUES_PATH, &query).await?;

    let league = match league_keyword.filter(|k| !k.trim().is_empty()) {
        Some(keyword) => {
            let description = format!("league containing '{}'", keyword);
            find_first(
                &leagues,
                |l: &LeagueRecord| contains_ignore_case(&l.name, keyword),
                &description,
            )
            .map_err(|e| {
                debug!("{} among {} leagues", e, leagues.len());
                ResolveError::LeagueNotFound {
                    keyword: keyword.to_string(),
                }
            })?
        }
        None => leagues.first().ok_or_else(|| ResolveError::EmptyLeagueList {
            sport_id: sport_id.to_string(),
        })?,
    };

    info!("Resolved league '{}' ({})", league.name, league.league_id);
    Ok(League::from(league))
}

/// Resolve the first event of a league on `date`.
pub async fn resolve_event(
    api: &dyn ApiAccessor,
    api_key: &str,
    sport_id: &str,
    league_id: &str,
    date: NaiveDate,
) -> Result<Event> {
    let date_str = date.format("%Y-%m-%d").to_string();
    let query = [
        ("sportID", sport_id.to_string()),
        ("leagueID", league_id.to_string()),
        ("date", date_str.clone()),
    ];
    let events: Vec<EventRecord> = fetch_records(api, api_key, EVENTS_PATH, &query).await?;

    let event = events.first().ok_or_else(|| ResolveError::EmptyEventList {
        league_id: league_id.to_string(),
        date: date_str,
    })?;

    info!("Resolved event '{}' ({})", event.name, event.event_id);
    Ok(Event::from(event))
}

/// Fetch odds for a fully resolved query. The payload is returned untouched.
pub async fn fetch_odds(api: &dyn ApiAccessor, api_key: &str, query: &OddsQuery) -> Result<Value> {
    query.validate()?;
    let params = query.to_query_params();
    let odds = api.get_json(ODDS_PATH, &params, api_key).await?;
    debug!("Fetched odds for event {}", query.event_id);
    Ok(odds)
}
