//! Match lifecycle: permissions and scoreboard projection.

mod permissions;
mod scoreboard;
mod types;

pub use permissions::{evaluate_match_permissions, MatchPermissions};
pub use scoreboard::{
    format_overs, result_headline, scoreboard_label, scoreboard_rows, toss_summary,
    ScoreboardLabel, ScoreboardRow,
};
pub use types::{Innings, Match, MatchStatus, MatchTeamLink, Toss, TossDecision};
