// Shared models for the SportsGameOdds resolver
use crate::error::{ResolveError, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Resolved entities
// ============================================================================

/// Sport configuration with the identifier of its first-half period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SportConfig {
    pub sport_id: String,
    pub name: String,
    pub first_half_period_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub league_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub event_id: String,
    pub name: String,
}

/// Identifier set sent to the `/odds` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OddsQuery {
    pub sport_id: String,
    pub league_id: String,
    pub event_id: String,
    pub stat_id: String,
    pub period_id: String,
    pub bet_type_id: Option<String>,
}

impl OddsQuery {
    /// Check that every required identifier is non-blank.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("sportID", &self.sport_id),
            ("leagueID", &self.league_id),
            ("eventID", &self.event_id),
            ("statID", &self.stat_id),
            ("periodID", &self.period_id),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ResolveError::MissingIdentifier { field });
            }
        }
        Ok(())
    }

    /// Query parameters in the order the API documents them.
    /// `betTypeID` is only included when present and non-blank.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("sportID", self.sport_id.clone()),
            ("leagueID", self.league_id.clone()),
            ("eventID", self.event_id.clone()),
            ("statID", self.stat_id.clone()),
            ("periodID", self.period_id.clone()),
        ];
        if let Some(bet_type) = self
            .bet_type_id
            .as_deref()
            .filter(|b| !b.trim().is_empty())
        {
            params.push(("betTypeID", bet_type.to_string()));
        }
        params
    }
}

/// Outcome of a full pipeline run. `odds` is the `/odds` payload as returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedOdds {
    pub sport: SportConfig,
    pub league: League,
    pub event: Event,
    pub stat_id: String,
    pub odds: serde_json::Value,
}

// ============================================================================
// Wire records (SportsGameOdds JSON shapes)
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct SportRecord {
    #[serde(rename = "sportID")]
    pub sport_id: String,
    pub name: String,
    #[serde(rename = "basePeriods", default)]
    pub base_periods: Vec<PeriodRecord>,
    #[serde(rename = "extraPeriods", default)]
    pub extra_periods: Vec<PeriodRecord>,
}

impl SportRecord {
    /// Base periods followed by extra periods.
    pub fn all_periods(&self) -> impl Iterator<Item = &PeriodRecord> {
        self.base_periods.iter().chain(self.extra_periods.iter())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PeriodRecord {
    #[serde(rename = "periodID")]
    pub period_id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatRecord {
    #[serde(rename = "statID")]
    pub stat_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueRecord {
    #[serde(rename = "leagueID")]
    pub league_id: String,
    pub name: String,
}

impl From<&LeagueRecord> for League {
    fn from(record: &LeagueRecord) -> Self {
        League {
            league_id: record.league_id.clone(),
            name: record.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "eventID")]
    pub event_id: String,
    pub name: String,
}

impl From<&EventRecord> for Event {
    fn from(record: &EventRecord) -> Self {
        Event {
            event_id: record.event_id.clone(),
            name: record.name.clone(),
        }
    }
}
