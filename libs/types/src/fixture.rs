//! Match entity
//!
//! A `Match` is created and owned by a scoreboard. Its id and team names are
//! fixed for its lifetime; only the scores change.

use std::cmp::Reverse;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::InvalidReason;
use crate::ids::MatchId;

/// Sort key for summaries: most goals first, then most recently started.
pub type SummaryKey = (Reverse<u64>, Reverse<MatchId>);

/// A live football match
///
/// Not `Clone`: a match has exactly one owner. Use [`Match::snapshot`] to
/// hand its values to anyone else.
#[derive(Debug, PartialEq, Eq)]
pub struct Match {
    id: MatchId,
    home_team: String,
    away_team: String,
    home_score: u32,
    away_score: u32,
}

impl Match {
    /// Create a new match at 0 - 0 with a freshly issued id
    ///
    /// Team names are taken as given. Trimming and checking them is the
    /// scoreboard's job.
    pub fn new(home_team: impl Into<String>, away_team: impl Into<String>) -> Self {
        Self {
            id: MatchId::next(),
            home_team: home_team.into(),
            away_team: away_team.into(),
            home_score: 0,
            away_score: 0,
        }
    }

    pub fn id(&self) -> MatchId {
        self.id
    }

    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    pub fn home_score(&self) -> u32 {
        self.home_score
    }

    pub fn away_score(&self) -> u32 {
        self.away_score
    }

    pub fn set_home_score(&mut self, score: u32) {
        self.home_score = score;
    }

    pub fn set_away_score(&mut self, score: u32) {
        self.away_score = score;
    }

    /// Replace both scores at once
    pub fn set_scores(&mut self, home_score: u32, away_score: u32) {
        self.home_score = home_score;
        self.away_score = away_score;
    }

    /// Sum of both scores, widened so it cannot overflow
    pub fn total_goals(&self) -> u64 {
        total_goals(self.home_score, self.away_score)
    }

    pub fn summary_key(&self) -> SummaryKey {
        summary_key(self.id, self.home_score, self.away_score)
    }

    /// Owned copy of the current values
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            id: self.id,
            home_team: self.home_team.clone(),
            away_team: self.away_team.clone(),
            home_score: self.home_score,
            away_score: self.away_score,
        }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_score_line(
            f,
            &self.home_team,
            self.home_score,
            &self.away_team,
            self.away_score,
        )
    }
}

/// Point-in-time copy of a match, detached from the scoreboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub id: MatchId,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
}

impl MatchSnapshot {
    pub fn total_goals(&self) -> u64 {
        total_goals(self.home_score, self.away_score)
    }

    pub fn summary_key(&self) -> SummaryKey {
        summary_key(self.id, self.home_score, self.away_score)
    }
}

impl fmt::Display for MatchSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_score_line(
            f,
            &self.home_team,
            self.home_score,
            &self.away_team,
            self.away_score,
        )
    }
}

fn total_goals(home_score: u32, away_score: u32) -> u64 {
    u64::from(home_score) + u64::from(away_score)
}

fn summary_key(id: MatchId, home_score: u32, away_score: u32) -> SummaryKey {
    (Reverse(total_goals(home_score, away_score)), Reverse(id))
}

fn write_score_line(
    f: &mut fmt::Formatter<'_>,
    home_team: &str,
    home_score: u32,
    away_team: &str,
    away_score: u32,
) -> fmt::Result {
    write!(f, "{} {} - {} {}", home_team, home_score, away_team, away_score)
}

/// Convert a caller-supplied score into the stored representation
pub fn checked_score(score: i64) -> Result<u32, InvalidReason> {
    if score < 0 {
        return Err(InvalidReason::NegativeScore);
    }
    u32::try_from(score).map_err(|_| InvalidReason::ScoreOutOfRange)
}

/// Convert a pair of caller-supplied scores
///
/// A negative score on either side is reported before any range failure.
pub fn checked_scores(home_score: i64, away_score: i64) -> Result<(u32, u32), InvalidReason> {
    if home_score < 0 || away_score < 0 {
        return Err(InvalidReason::NegativeScore);
    }
    Ok((checked_score(home_score)?, checked_score(away_score)?))
}
