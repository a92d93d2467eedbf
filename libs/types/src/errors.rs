//! Error types for the scoreboard
//!
//! Every rejected call surfaces as `ScoreboardError::InvalidArgument`
//! carrying one reason from a fixed set.

use thiserror::Error;

/// Top-level scoreboard error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreboardError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] InvalidReason),
}

impl ScoreboardError {
    /// The reason the argument was rejected
    pub fn reason(&self) -> InvalidReason {
        match self {
            ScoreboardError::InvalidArgument(reason) => *reason,
        }
    }
}

/// Why a call was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    #[error("names must be non-null")]
    MissingTeamName,

    #[error("names must be non-empty")]
    EmptyTeamName,

    #[error("teams must differ")]
    SameTeams,

    #[error("id must be non-null")]
    MissingMatchId,

    #[error("scores must be non-null")]
    MissingScore,

    #[error("unknown match")]
    UnknownMatch,

    #[error("scores must be non-negative")]
    NegativeScore,

    #[error("scores must not exceed {}", u32::MAX)]
    ScoreOutOfRange,
}

impl InvalidReason {
    /// Short machine-friendly label, used as a structured log field
    pub fn label(&self) -> &'static str {
        match self {
            InvalidReason::MissingTeamName => "missing_team_name",
            InvalidReason::EmptyTeamName => "empty_team_name",
            InvalidReason::SameTeams => "same_teams",
            InvalidReason::MissingMatchId => "missing_match_id",
            InvalidReason::MissingScore => "missing_score",
            InvalidReason::UnknownMatch => "unknown_match",
            InvalidReason::NegativeScore => "negative_score",
            InvalidReason::ScoreOutOfRange => "score_out_of_range",
        }
    }
}
