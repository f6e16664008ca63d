//! Derived action permissions for a match.
//!
//! Same contract as the challenge evaluator: a pure projection recomputed
//! wholesale on every call, failing closed on absent inputs.

use std::collections::HashSet;

use serde::Serialize;

use crate::matches::types::Match;
use crate::teams::{Team, User};

/// Capability set for one (user, match) pair.
///
/// The default value is all-`false`: absent inputs fail closed.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPermissions {
    /// May edit match details.
    pub can_edit: bool,
    /// May delete the match.
    pub can_delete: bool,
    /// May move the match through its lifecycle.
    pub can_update_status: bool,
    /// May record score changes.
    pub can_update_score: bool,
    /// May maintain the scoreboard.
    pub can_update_scoreboard: bool,
    /// May attach media to the match.
    pub can_upload_media: bool,
    /// May remove attached media.
    pub can_delete_media: bool,
    /// One of the user's teams is playing this match.
    pub is_participant: bool,
    /// The user created the match.
    pub is_creator: bool,
    /// The user holds a captaincy role in a participating team.
    pub is_team_captain: bool,
    /// Creator or captain of a participating team.
    pub is_match_manager: bool,
}

/// Derives the full capability set for a match.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "match_permissions", skip_all)
)]
pub fn evaluate_match_permissions(
    game: Option<&Match>,
    user: Option<&User>,
    user_teams: Option<&[Team]>,
) -> MatchPermissions {
    let (Some(game), Some(user)) = (game, user) else {
        return MatchPermissions::default();
    };

    let is_creator = game.created_by_id == user.id;

    let match_team_ids: HashSet<&str> = game
        .teams
        .iter()
        .map(|link| link.team.id.as_str())
        .collect();
    let user_teams = user_teams.unwrap_or_default();

    let is_participant = user_teams
        .iter()
        .any(|team| match_team_ids.contains(team.id.as_str()));

    // captaincy must be held in a team that is actually playing this match
    let is_team_captain = user_teams.iter().any(|team| {
        match_team_ids.contains(team.id.as_str())
            && team
                .members
                .iter()
                .any(|member| member.user_id == user.id && member.role.is_captaincy())
    });

    let is_match_manager = is_creator || is_team_captain;

    MatchPermissions {
        can_edit: is_creator,
        can_delete: is_creator,
        can_update_status: is_match_manager,
        can_update_score: is_match_manager,
        can_update_scoreboard: is_match_manager,
        can_upload_media: is_participant,
        can_delete_media: is_match_manager,
        is_participant,
        is_creator,
        is_team_captain,
        is_match_manager,
    }
}
