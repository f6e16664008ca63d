//! Match, innings, and toss types.

use serde::{Deserialize, Serialize};

use crate::teams::Team;

/// Lifecycle states of a match.
///
/// Transitions are server-driven; the core only reads the current status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Scheduled,
    Pending,
    Ongoing,
    InningsBreak,
    Completed,
    Cancelled,
    Postponed,
}

impl MatchStatus {
    /// Wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::Pending => "PENDING",
            Self::Ongoing => "ONGOING",
            Self::InningsBreak => "INNINGS_BREAK",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
            Self::Postponed => "POSTPONED",
        }
    }

    /// Parse from the wire representation.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "SCHEDULED" => Some(Self::Scheduled),
            "PENDING" => Some(Self::Pending),
            "ONGOING" => Some(Self::Ongoing),
            "INNINGS_BREAK" => Some(Self::InningsBreak),
            "COMPLETED" => Some(Self::Completed),
            "CANCELLED" => Some(Self::Cancelled),
            "POSTPONED" => Some(Self::Postponed),
            _ => None,
        }
    }
}

/// A scheduled or played match between two teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Unique identifier.
    pub id: String,
    /// User id of whoever created the match.
    pub created_by_id: String,
    /// Current lifecycle state.
    pub status: MatchStatus,
    /// Participating sides; exactly two in the supported flows.
    #[serde(default)]
    pub teams: Vec<MatchTeamLink>,
    /// Winner, once decided.
    pub match_winner_team_id: Option<String>,
    /// Toss outcome, once taken.
    pub toss: Option<Toss>,
    /// Innings recorded so far, possibly provisional.
    #[serde(default)]
    pub innings: Vec<Innings>,
    /// The innings currently being played, if any.
    pub current_innings_id: Option<String>,
}

/// Joins a team into a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchTeamLink {
    /// The linked team's id.
    pub team_id: String,
    /// The linked team, with roster.
    pub team: Team,
}

/// One innings of a match.
///
/// An innings is provisional until its batting side and run total are both
/// recorded; provisional innings never reach the scoreboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Innings {
    /// Unique identifier.
    pub id: String,
    /// 1-based position within the match.
    pub innings_number: u32,
    /// The side that batted.
    pub batting_team_id: Option<String>,
    /// Runs scored.
    pub total_runs: Option<i64>,
    /// Wickets lost.
    pub total_wickets: Option<i64>,
    /// Legal deliveries bowled; invalidated deliveries are not counted.
    pub total_legal_balls_bowled: Option<i64>,
}

impl Innings {
    /// Displayable once the batting side and run total are recorded.
    pub fn is_complete(&self) -> bool {
        self.batting_team_id.is_some() && self.total_runs.is_some()
    }
}

/// The toss outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toss {
    /// The side that won the toss.
    pub winner_team_id: String,
    /// What the winner elected to do.
    pub decision: TossDecision,
}

/// What a toss winner may elect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TossDecision {
    Bat,
    Bowl,
    Field,
}

impl TossDecision {
    /// Lowercase verb for display text.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Bat => "bat",
            Self::Bowl => "bowl",
            Self::Field => "field",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for status in [
            MatchStatus::Scheduled,
            MatchStatus::Pending,
            MatchStatus::Ongoing,
            MatchStatus::InningsBreak,
            MatchStatus::Completed,
            MatchStatus::Cancelled,
            MatchStatus::Postponed,
        ] {
            assert_eq!(MatchStatus::from_str(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_innings_completeness() {
        let provisional = Innings {
            id: "i1".to_owned(),
            innings_number: 1,
            batting_team_id: Some("t1".to_owned()),
            total_runs: None,
            total_wickets: None,
            total_legal_balls_bowled: None,
        };
        assert!(!provisional.is_complete());

        let complete = Innings {
            total_runs: Some(150),
            ..provisional
        };
        assert!(complete.is_complete());
    }

    #[test]
    fn test_match_wire_shape() {
        let game: Match = serde_json::from_str(
            r#"{
                "id": "m1",
                "createdById": "u1",
                "status": "INNINGS_BREAK",
                "teams": [],
                "toss": {"winnerTeamId": "t1", "decision": "BAT"}
            }"#,
        )
        .expect("valid match snapshot");

        assert_eq!(game.status, MatchStatus::InningsBreak);
        assert!(game.innings.is_empty());
        assert_eq!(
            game.toss.map(|toss| toss.decision),
            Some(TossDecision::Bat)
        );
    }
}
