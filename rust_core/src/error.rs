//! Error taxonomy for the staged resolver.
//!
//! Every stage returns the most specific [`ResolveError`] it can. Transport
//! failures from the API accessor pass through unchanged as
//! [`ResolveError::Transport`].

use thiserror::Error;

/// Failure performing a GET against the upstream API.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection, timeout or other request-level failure
    #[error("request to {path} failed: {source}")]
    Request {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success HTTP status
    #[error("{path} returned HTTP {status}: {body}")]
    Status {
        path: String,
        status: u16,
        body: String,
    },

    /// The response body was not valid JSON
    #[error("{path} returned an undecodable body: {message}")]
    Decode { path: String, message: String },
}

/// Result of the identifier extractor when no record satisfies the predicate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no record matched: {description}")]
pub struct NotFound {
    pub description: String,
}

/// Errors surfaced by the stage resolvers and the pipeline.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("sport containing keyword '{keyword}' was not found")]
    SportNotFound { keyword: String },

    #[error("could not find a first-half period for sport '{sport}'")]
    PeriodNotFound { sport: String },

    #[error("no 'points' statID was found for sport '{sport_id}'")]
    StatNotFound { sport_id: String },

    #[error("no league matched keyword '{keyword}'")]
    LeagueNotFound { keyword: String },

    #[error("no leagues returned for sport '{sport_id}'")]
    EmptyLeagueList { sport_id: String },

    #[error("no events returned for league '{league_id}' on {date}")]
    EmptyEventList { league_id: String, date: String },

    /// A required odds query identifier was empty
    #[error("odds query is missing {field}")]
    MissingIdentifier { field: &'static str },

    /// Payload did not have the shape expected for the endpoint
    #[error("malformed payload from {endpoint}: {source}")]
    MalformedPayload {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ResolveError {
    /// Short machine-friendly name of the error kind, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            ResolveError::SportNotFound { .. } => "sport_not_found",
            ResolveError::PeriodNotFound { .. } => "period_not_found",
            ResolveError::StatNotFound { .. } => "stat_not_found",
            ResolveError::LeagueNotFound { .. } => "league_not_found",
            ResolveError::EmptyLeagueList { .. } => "empty_league_list",
            ResolveError::EmptyEventList { .. } => "empty_event_list",
            ResolveError::MissingIdentifier { .. } => "missing_identifier",
            ResolveError::MalformedPayload { .. } => "malformed_payload",
            ResolveError::Transport(_) => "transport",
        }
    }
}

pub type Result<T> = std::result::Result<T, ResolveError>;
