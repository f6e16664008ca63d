//! Scoreboard projection for a match.

use serde::Serialize;

use crate::matches::types::{Match, MatchStatus};

/// Shown when a batting side cannot be resolved against the match's teams.
const UNKNOWN_TEAM: &str = "Unknown";

/// One display row per complete innings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreboardRow {
    /// 1-based position within the match.
    pub innings_number: u32,
    /// Name of the side that batted.
    pub batting_team_name: String,
    /// "runs/wickets", wickets defaulting to 0.
    pub runs_display: String,
    /// Overs bowled, e.g. 122 legal balls renders "20.2".
    pub overs_display: String,
}

/// Headline shown above the scoreboard rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreboardLabel {
    /// A named side is currently batting.
    CurrentInnings { batting_team_name: String },
    /// The match is over and no innings is live.
    Completed,
}

/// Projects the match's innings into ordered display rows.
///
/// Provisional innings (no batting side or no run total yet) are excluded
/// rather than rendered half-empty; with no complete innings the result is
/// empty and the caller decides whether to show a placeholder.
pub fn scoreboard_rows(game: &Match) -> Vec<ScoreboardRow> {
    let mut rows: Vec<ScoreboardRow> = game
        .innings
        .iter()
        .filter(|innings| innings.is_complete())
        .filter_map(|innings| {
            let batting_team_id = innings.batting_team_id.as_deref()?;
            let total_runs = innings.total_runs?;
            Some(ScoreboardRow {
                innings_number: innings.innings_number,
                batting_team_name: team_name(game, batting_team_id)
                    .unwrap_or(UNKNOWN_TEAM)
                    .to_owned(),
                runs_display: format!("{}/{}", total_runs, innings.total_wickets.unwrap_or(0)),
                overs_display: format_overs(innings.total_legal_balls_bowled),
            })
        })
        .collect();
    rows.sort_by_key(|row| row.innings_number);
    rows
}

/// The label accompanying the rows, when one applies.
pub fn scoreboard_label(game: &Match) -> Option<ScoreboardLabel> {
    if let Some(current_id) = game.current_innings_id.as_deref() {
        let batting_team_name = game
            .innings
            .iter()
            .find(|innings| innings.id == current_id)
            .and_then(|innings| innings.batting_team_id.as_deref())
            .and_then(|team_id| team_name(game, team_id))?;
        return Some(ScoreboardLabel::CurrentInnings {
            batting_team_name: batting_team_name.to_owned(),
        });
    }
    match game.status {
        MatchStatus::Completed => Some(ScoreboardLabel::Completed),
        MatchStatus::Scheduled
        | MatchStatus::Pending
        | MatchStatus::Ongoing
        | MatchStatus::InningsBreak
        | MatchStatus::Cancelled
        | MatchStatus::Postponed => None,
    }
}

/// Formats legal balls as "overs.balls"; anything unusable renders "0.0".
pub fn format_overs(balls: Option<i64>) -> String {
    match balls {
        Some(balls) if balls >= 0 => format!("{}.{}", balls / 6, balls % 6),
        _ => "0.0".to_owned(),
    }
}

/// Headline for a decided match: "Lions won the match".
pub fn result_headline(game: &Match) -> Option<String> {
    match game.status {
        MatchStatus::Completed => {}
        MatchStatus::Scheduled
        | MatchStatus::Pending
        | MatchStatus::Ongoing
        | MatchStatus::InningsBreak
        | MatchStatus::Cancelled
        | MatchStatus::Postponed => return None,
    }
    let winner = game.match_winner_team_id.as_deref()?;
    Some(format!("{} won the match", team_name(game, winner)?))
}

/// Toss line: "Lions won the toss and elected to bat".
pub fn toss_summary(game: &Match) -> Option<String> {
    let toss = game.toss.as_ref()?;
    let name = team_name(game, &toss.winner_team_id)?;
    Some(format!(
        "{name} won the toss and elected to {}",
        toss.decision.verb()
    ))
}

fn team_name<'a>(game: &'a Match, team_id: &str) -> Option<&'a str> {
    game.teams
        .iter()
        .find(|link| link.team.id == team_id)
        .map(|link| link.team.name.as_str())
}
