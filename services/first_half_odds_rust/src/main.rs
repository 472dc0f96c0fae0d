mod config;

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use config::Config;
use dotenv::dotenv;
use futures_util::future::join_all;
use log::{error, info};
use sgo_rust_core::resolver::DEFAULT_SPORT_KEYWORD;
use sgo_rust_core::{
    resolve_first_half_odds, ApiAccessor, ResolveError, ResolveRequest, ResolvedOdds,
    SportsGameOddsClient,
};

/// Command-line arguments for first_half_odds
#[derive(Parser, Debug)]
#[command(name = "first_half_odds")]
#[command(about = "Resolve identifiers and fetch first-half goals odds from SportsGameOdds")]
#[command(version)]
struct Args {
    /// Keyword matched against sport names
    #[arg(long, default_value = DEFAULT_SPORT_KEYWORD, env = "SGO_SPORT_KEYWORD")]
    sport: String,

    /// Keyword matched against league names (first league returned when omitted)
    #[arg(long, env = "SGO_LEAGUE_KEYWORD")]
    league: Option<String>,

    /// Event date as YYYY-MM-DD, repeatable (defaults to today)
    #[arg(long = "date")]
    dates: Vec<NaiveDate>,

    /// Optional betTypeID filter for the odds request (e.g. "ou")
    #[arg(long, env = "SGO_BET_TYPE_ID")]
    bet_type: Option<String>,

    /// Pretty-print the odds payload
    #[arg(long)]
    pretty: bool,
}

impl Args {
    /// One request per requested date.
    fn requests(&self, today: NaiveDate) -> Vec<ResolveRequest> {
        let dates = if self.dates.is_empty() {
            vec![today]
        } else {
            self.dates.clone()
        };

        dates
            .into_iter()
            .map(|date| {
                let mut request = ResolveRequest::for_date(date).with_sport_keyword(&self.sport);
                if let Some(league) = &self.league {
                    request = request.with_league_keyword(league);
                }
                if let Some(bet_type) = &self.bet_type {
                    request = request.with_bet_type(bet_type);
                }
                request
            })
            .collect()
    }
}

fn print_resolved(resolved: &ResolvedOdds, pretty: bool) -> Result<()> {
    println!(
        "Sport: {} ({}), first-half period {}",
        resolved.sport.name, resolved.sport.sport_id, resolved.sport.first_half_period_id
    );
    println!(
        "League: {} ({})",
        resolved.league.name, resolved.league.league_id
    );
    println!("Event: {} ({})", resolved.event.name, resolved.event.event_id);
    println!("Stat: {}", resolved.stat_id);

    let odds = if pretty {
        serde_json::to_string_pretty(&resolved.odds)?
    } else {
        serde_json::to_string(&resolved.odds)?
    };
    println!("Odds response:");
    println!("{}", odds);
    Ok(())
}

/// Run one pipeline per request. Outcomes are returned in request order.
async fn run_all(
    api: &dyn ApiAccessor,
    api_key: &str,
    requests: &[ResolveRequest],
) -> Vec<Result<ResolvedOdds, ResolveError>> {
    // Runs share no state, so independent dates resolve concurrently
    join_all(
        requests
            .iter()
            .map(|request| resolve_first_half_odds(api, api_key, request)),
    )
    .await
}

/// Print successful runs, log failed ones. Returns the number of failures.
fn report_outcomes(
    requests: &[ResolveRequest],
    outcomes: Vec<Result<ResolvedOdds, ResolveError>>,
    pretty: bool,
) -> Result<usize> {
    let mut failures = 0;
    for (request, outcome) in requests.iter().zip(outcomes) {
        match outcome {
            Ok(resolved) => print_resolved(&resolved, pretty)?,
            Err(e) => {
                error!(
                    "Resolution for {} failed ({}): {}",
                    request.date,
                    e.kind(),
                    e
                );
                failures += 1;
            }
        }
    }
    Ok(failures)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let config = Config::from_env()?;

    info!("Starting first-half odds resolution: {:?}", config);

    let client = SportsGameOddsClient::with_base_url(&config.base_url, config.request_timeout)
        .context("Failed to create HTTP client for SportsGameOdds")?;

    let requests = args.requests(Local::now().date_naive());

    let outcomes = run_all(&client, &config.api_key, &requests).await;
    let failures = report_outcomes(&requests, outcomes, args.pretty)?;

    if failures > 0 {
        return Err(anyhow!("{} of {} runs failed", failures, requests.len()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::time::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_defaults_to_today() {
        let args = Args::try_parse_from(["first_half_odds"]).unwrap();
        let requests = args.requests(date(2024, 3, 5));

        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].date, date(2024, 3, 5));
        assert_eq!(requests[0].sport_keyword, args.sport);
    }

    #[test]
    fn test_multiple_dates_and_filters() {
        let args = Args::try_parse_from([
            "first_half_odds",
            "--sport",
            "Soccer",
            "--league",
            "premier",
            "--bet-type",
            "ou",
            "--date",
            "2024-03-05",
            "--date",
            "2024-03-06",
        ])
        .unwrap();
        let requests = args.requests(date(2030, 1, 1));

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].date, date(2024, 3, 5));
        assert_eq!(requests[1].date, date(2024, 3, 6));
        assert!(requests.iter().all(|r| r.sport_keyword == "Soccer"));
        assert!(requests
            .iter()
            .all(|r| r.league_keyword.as_deref() == Some("premier")));
        assert!(requests.iter().all(|r| r.bet_type_id.as_deref() == Some("ou")));
    }

    #[test]
    fn test_rejects_invalid_date() {
        assert!(Args::try_parse_from(["first_half_odds", "--date", "05/03/2024"]).is_err());
    }

    async fn mock_upstream(server: &MockServer) {
        server
            .mock_async(|when, then| {
                when.method(GET).path("/sports");
                then.status(200).json_body(json!([{
                    "sportID": "soc1",
                    "name": "Soccer",
                    "basePeriods": [{"periodID": "p1h", "name": "1st Half"}]
                }]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/stats");
                then.status(200).json_body(json!([{"statID": "points"}]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/leagues");
                then.status(200)
                    .json_body(json!([{"leagueID": "L1", "name": "Premier League"}]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/events").query_param("date", "2024-03-05");
                then.status(200)
                    .json_body(json!([{"eventID": "E1", "name": "A vs B"}]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/events").query_param("date", "2024-03-06");
                then.status(200).json_body(json!([]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/odds").query_param("eventID", "E1");
                then.status(200).json_body(json!({"odds": []}));
            })
            .await;
    }

    #[tokio::test]
    async fn test_run_all_keeps_outcomes_independent_and_ordered() {
        let server = MockServer::start_async().await;
        mock_upstream(&server).await;
        let client =
            SportsGameOddsClient::with_base_url(server.base_url(), Duration::from_secs(5)).unwrap();

        let requests = vec![
            ResolveRequest::for_date(date(2024, 3, 6)),
            ResolveRequest::for_date(date(2024, 3, 5)),
            ResolveRequest::for_date(date(2024, 3, 6)),
        ];
        let outcomes = run_all(&client, "k", &requests).await;

        assert_eq!(outcomes.len(), 3);
        match &outcomes[0] {
            Err(ResolveError::EmptyEventList { league_id, date }) => {
                assert_eq!(league_id, "L1");
                assert_eq!(date, "2024-03-06");
            }
            other => panic!("expected EmptyEventList, got {:?}", other),
        }
        let resolved = outcomes[1].as_ref().unwrap();
        assert_eq!(resolved.event.event_id, "E1");
        assert_eq!(resolved.odds, json!({"odds": []}));
        assert!(matches!(outcomes[2], Err(ResolveError::EmptyEventList { .. })));

        let failures = report_outcomes(&requests, outcomes, false).unwrap();
        assert_eq!(failures, 2);
    }
}
