//! Request shapes for scoreboard operations
//!
//! Callers at the edge (command lines, JSON payloads) may leave arguments
//! out. These shapes keep every argument optional and turn missing ones
//! into the matching rejection reason before the board is touched.

use serde::{Deserialize, Serialize};

use crate::errors::InvalidReason;
use crate::ids::MatchId;

/// Start a match between two teams
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartMatch {
    pub home_team: Option<String>,
    pub away_team: Option<String>,
}

impl StartMatch {
    pub fn new(home_team: impl Into<String>, away_team: impl Into<String>) -> Self {
        Self {
            home_team: Some(home_team.into()),
            away_team: Some(away_team.into()),
        }
    }

    /// Both team names, or `MissingTeamName` if either is absent
    pub fn into_parts(self) -> Result<(String, String), InvalidReason> {
        match (self.home_team, self.away_team) {
            (Some(home), Some(away)) => Ok((home, away)),
            _ => Err(InvalidReason::MissingTeamName),
        }
    }
}

/// Replace both scores of a live match
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateScore {
    pub match_id: Option<MatchId>,
    pub home_score: Option<i64>,
    pub away_score: Option<i64>,
}

impl UpdateScore {
    pub fn new(match_id: MatchId, home_score: i64, away_score: i64) -> Self {
        Self {
            match_id: Some(match_id),
            home_score: Some(home_score),
            away_score: Some(away_score),
        }
    }

    /// The id is checked before the scores.
    pub fn into_parts(self) -> Result<(MatchId, i64, i64), InvalidReason> {
        let match_id = self.match_id.ok_or(InvalidReason::MissingMatchId)?;
        match (self.home_score, self.away_score) {
            (Some(home), Some(away)) => Ok((match_id, home, away)),
            _ => Err(InvalidReason::MissingScore),
        }
    }
}

/// Remove a live match from the board
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminateMatch {
    pub match_id: Option<MatchId>,
}

impl TerminateMatch {
    pub fn new(match_id: MatchId) -> Self {
        Self {
            match_id: Some(match_id),
        }
    }

    pub fn into_parts(self) -> Result<MatchId, InvalidReason> {
        self.match_id.ok_or(InvalidReason::MissingMatchId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_match_requires_both_names() {
        let request = StartMatch {
            home_team: Some("France".to_string()),
            away_team: None,
        };
        assert_eq!(request.into_parts(), Err(InvalidReason::MissingTeamName));
        assert_eq!(
            StartMatch::default().into_parts(),
            Err(InvalidReason::MissingTeamName)
        );
    }

    #[test]
    fn test_start_match_passes_names_through_untrimmed() {
        let (home, away) = StartMatch::new(" France ", "Argentina").into_parts().unwrap();
        assert_eq!(home, " France ");
        assert_eq!(away, "Argentina");
    }

    #[test]
    fn test_update_checks_id_before_scores() {
        let request = UpdateScore {
            match_id: None,
            home_score: None,
            away_score: Some(1),
        };
        assert_eq!(request.into_parts(), Err(InvalidReason::MissingMatchId));

        let request = UpdateScore {
            match_id: Some(MatchId::from_raw(3)),
            home_score: Some(1),
            away_score: None,
        };
        assert_eq!(request.into_parts(), Err(InvalidReason::MissingScore));
    }

    #[test]
    fn test_update_keeps_negative_scores_for_the_board() {
        let parts = UpdateScore::new(MatchId::from_raw(3), -2, -2).into_parts();
        assert_eq!(parts, Ok((MatchId::from_raw(3), -2, -2)));
    }

    #[test]
    fn test_terminate_requires_id() {
        assert_eq!(
            TerminateMatch::default().into_parts(),
            Err(InvalidReason::MissingMatchId)
        );
        assert_eq!(
            TerminateMatch::new(MatchId::from_raw(9)).into_parts(),
            Ok(MatchId::from_raw(9))
        );
    }

    #[test]
    fn test_requests_deserialize_with_missing_fields() {
        let request: UpdateScore = serde_json::from_str(r#"{"match_id": 4, "home_score": 1}"#).unwrap();
        assert_eq!(request.match_id, Some(MatchId::from_raw(4)));
        assert_eq!(request.away_score, None);
        assert_eq!(request.into_parts(), Err(InvalidReason::MissingScore));

        let request: StartMatch = serde_json::from_str(r#"{"home_team": null, "away_team": "Spain"}"#).unwrap();
        assert_eq!(request.into_parts(), Err(InvalidReason::MissingTeamName));
    }
}
