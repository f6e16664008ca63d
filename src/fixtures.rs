//! Ready-made entities for integration tests.
//!
//! Gated behind the `fixtures` feature so production builds never carry
//! test scaffolding. The constructors build minimal valid entities; tests
//! override individual fields with struct update syntax.

use crate::challenges::{AcceptanceRequestStatus, Challenge, ChallengeAcceptanceRequest, ChallengeStatus};
use crate::matches::{Innings, Match, MatchStatus, MatchTeamLink};
use crate::teams::{Team, TeamMembership, TeamRole, User};

/// A user with the given id and name.
pub fn user(id: &str, name: &str) -> User {
    User {
        id: id.to_owned(),
        name: name.to_owned(),
    }
}

/// A team with an empty roster.
pub fn team(id: &str, name: &str) -> Team {
    Team {
        id: id.to_owned(),
        name: name.to_owned(),
        members: Vec::new(),
    }
}

/// A team whose roster contains one member with the given role.
pub fn team_with_member(id: &str, name: &str, user_id: &str, role: TeamRole) -> Team {
    Team {
        members: vec![membership(user_id, id, role)],
        ..team(id, name)
    }
}

/// A membership record.
pub fn membership(user_id: &str, team_id: &str, role: TeamRole) -> TeamMembership {
    TeamMembership {
        user_id: user_id.to_owned(),
        team_id: team_id.to_owned(),
        role,
    }
}

/// An open (any-team-may-request) challenge from `sender_team_id`.
pub fn open_challenge(id: &str, sender_id: &str, sender_team_id: &str) -> Challenge {
    Challenge {
        id: id.to_owned(),
        status: ChallengeStatus::Open,
        created_by: format!("User {sender_id}"),
        sender_id: sender_id.to_owned(),
        sender_team_id: Some(sender_team_id.to_owned()),
        receiver_team_id: None,
        first_acceptor_team_id: None,
        created_at: None,
        expires_at: None,
    }
}

/// A direct challenge awaiting the receiver team's decision.
pub fn direct_challenge(
    id: &str,
    sender_id: &str,
    sender_team_id: &str,
    receiver_team_id: &str,
) -> Challenge {
    Challenge {
        status: ChallengeStatus::Pending,
        receiver_team_id: Some(receiver_team_id.to_owned()),
        ..open_challenge(id, sender_id, sender_team_id)
    }
}

/// An acceptance request in the given state.
pub fn acceptance_request(
    id: &str,
    challenge_id: &str,
    accepting_team_id: &str,
    status: AcceptanceRequestStatus,
) -> ChallengeAcceptanceRequest {
    ChallengeAcceptanceRequest {
        id: id.to_owned(),
        challenge_id: challenge_id.to_owned(),
        accepting_team_id: accepting_team_id.to_owned(),
        status,
    }
}

/// A match between the given teams.
pub fn match_between(id: &str, created_by_id: &str, status: MatchStatus, teams: Vec<Team>) -> Match {
    Match {
        id: id.to_owned(),
        created_by_id: created_by_id.to_owned(),
        status,
        teams: teams
            .into_iter()
            .map(|team| MatchTeamLink {
                team_id: team.id.clone(),
                team,
            })
            .collect(),
        match_winner_team_id: None,
        toss: None,
        innings: Vec::new(),
        current_innings_id: None,
    }
}

/// A complete innings ready for the scoreboard.
pub fn complete_innings(
    id: &str,
    number: u32,
    batting_team_id: &str,
    runs: i64,
    wickets: i64,
    legal_balls: i64,
) -> Innings {
    Innings {
        id: id.to_owned(),
        innings_number: number,
        batting_team_id: Some(batting_team_id.to_owned()),
        total_runs: Some(runs),
        total_wickets: Some(wickets),
        total_legal_balls_bowled: Some(legal_balls),
    }
}

/// Parses a challenge snapshot as received from the wire.
pub fn challenge_from_json(json: &str) -> serde_json::Result<Challenge> {
    serde_json::from_str(json)
}

/// Parses a match snapshot as received from the wire.
pub fn match_from_json(json: &str) -> serde_json::Result<Match> {
    serde_json::from_str(json)
}
