//! Scoreboard core
//!
//! A single mutex guards the match map. Start, update and terminate hold it
//! only for the map operation itself; summaries hold it only long enough to
//! copy the live matches, then sort and render outside of it.
//!
//! Every check that does not need board state runs before the lock is
//! taken. A rejected call never changes the board.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};
use types::errors::{InvalidReason, ScoreboardError};
use types::fixture::{checked_scores, Match, MatchSnapshot};
use types::ids::MatchId;
use types::requests::{StartMatch, TerminateMatch, UpdateScore};

use crate::metrics::{BoardMetrics, MetricsSnapshot};
use crate::summary;

/// Configuration for a scoreboard.
#[derive(Debug, Clone)]
pub struct ScoreboardConfig {
    /// Number of live matches the map is sized for up front.
    pub initial_capacity: usize,
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
        }
    }
}

/// Registry of live matches
///
/// Share it between threads with `Arc<Scoreboard>`. Callers only ever see
/// match ids and snapshots; the `Match` values themselves never leave the
/// board.
#[derive(Debug)]
pub struct Scoreboard {
    matches: Mutex<HashMap<MatchId, Match>>,
    metrics: BoardMetrics,
}

impl Scoreboard {
    /// Create an empty scoreboard with default configuration
    pub fn new() -> Self {
        Self::with_config(ScoreboardConfig::default())
    }

    /// Create an empty scoreboard with custom configuration
    pub fn with_config(config: ScoreboardConfig) -> Self {
        debug!(
            initial_capacity = config.initial_capacity,
            "Scoreboard initialized"
        );

        Self {
            matches: Mutex::new(HashMap::with_capacity(config.initial_capacity)),
            metrics: BoardMetrics::new(),
        }
    }

    /// Start a match and return its id
    ///
    /// Names are trimmed. Fails if either trimmed name is empty or if both
    /// are the same (case-sensitive).
    pub fn start_match(&self, home_team: &str, away_team: &str) -> Result<MatchId, ScoreboardError> {
        let home_team = home_team.trim();
        let away_team = away_team.trim();

        if home_team.is_empty() || away_team.is_empty() {
            return Err(self.reject("start_match", InvalidReason::EmptyTeamName));
        }
        if home_team == away_team {
            return Err(self.reject("start_match", InvalidReason::SameTeams));
        }

        let game = Match::new(home_team, away_team);
        let match_id = game.id();
        self.lock().insert(match_id, game);

        self.metrics.record_start();
        info!(
            match_id = %match_id,
            home_team,
            away_team,
            "Match started"
        );
        Ok(match_id)
    }

    /// Replace both scores of a live match
    ///
    /// An unknown id is reported before a negative score. Both scores are
    /// written under one lock acquisition, so readers never see half of an
    /// update.
    pub fn update_score(
        &self,
        match_id: MatchId,
        home_score: i64,
        away_score: i64,
    ) -> Result<(), ScoreboardError> {
        let applied = {
            let mut matches = self.lock();
            match matches.get_mut(&match_id) {
                None => Err(InvalidReason::UnknownMatch),
                Some(game) => checked_scores(home_score, away_score)
                    .map(|(home, away)| game.set_scores(home, away)),
            }
        };
        applied.map_err(|reason| self.reject("update_score", reason))?;

        self.metrics.record_update();
        debug!(match_id = %match_id, home_score, away_score, "Score updated");
        Ok(())
    }

    /// Remove a live match. Its id is never valid again.
    pub fn terminate_match(&self, match_id: MatchId) -> Result<(), ScoreboardError> {
        let removed = self.lock().remove(&match_id);
        let Some(game) = removed else {
            return Err(self.reject("terminate_match", InvalidReason::UnknownMatch));
        };

        self.metrics.record_termination();
        info!(
            match_id = %match_id,
            final_score = %game,
            "Match terminated"
        );
        Ok(())
    }

    /// Live matches, one per line, in summary order
    ///
    /// Empty string when no match is live.
    pub fn summary(&self) -> String {
        let matches = self.snapshot();
        let rendered = summary::render(&matches);

        self.metrics.record_summary();
        debug!(live_matches = matches.len(), "Summary rendered");
        rendered
    }

    /// Copies of all live matches, in summary order
    pub fn snapshot(&self) -> Vec<MatchSnapshot> {
        let mut matches: Vec<MatchSnapshot> =
            self.lock().values().map(Match::snapshot).collect();
        summary::sort_for_summary(&mut matches);
        matches
    }

    /// Start a match from a request whose names may be absent
    pub fn apply_start(&self, request: StartMatch) -> Result<MatchId, ScoreboardError> {
        let (home_team, away_team) = request
            .into_parts()
            .map_err(|reason| self.reject("start_match", reason))?;
        self.start_match(&home_team, &away_team)
    }

    /// Update scores from a request whose id or scores may be absent
    pub fn apply_update(&self, request: UpdateScore) -> Result<(), ScoreboardError> {
        let (match_id, home_score, away_score) = request
            .into_parts()
            .map_err(|reason| self.reject("update_score", reason))?;
        self.update_score(match_id, home_score, away_score)
    }

    /// Terminate a match from a request whose id may be absent
    pub fn apply_terminate(&self, request: TerminateMatch) -> Result<(), ScoreboardError> {
        let match_id = request
            .into_parts()
            .map_err(|reason| self.reject("terminate_match", reason))?;
        self.terminate_match(match_id)
    }

    /// Number of live matches
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Whether `match_id` names a live match on this board
    pub fn contains(&self, match_id: MatchId) -> bool {
        self.lock().contains_key(&match_id)
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    // Every critical section either completes its single map operation or
    // never starts it, so a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<MatchId, Match>> {
        self.matches.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn reject(&self, operation: &'static str, reason: InvalidReason) -> ScoreboardError {
        self.metrics.record_rejection();
        warn!(
            operation,
            reason = reason.label(),
            "Rejected scoreboard call: {}",
            reason
        );
        ScoreboardError::InvalidArgument(reason)
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}
