//! Core types for users, teams, and rosters.

use serde::{Deserialize, Serialize};

/// An authenticated user, as handed over by the auth collaborator.
///
/// The core never authenticates; it only consumes the already-resolved
/// identity for ownership and membership checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: String,
    /// Display name. Mutable upstream, so never a reliable identity anchor
    /// on its own (see the challenge creator check).
    pub name: String,
}

/// A team with its full roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier.
    pub id: String,
    /// Human-readable team name.
    pub name: String,
    /// Roster; empty when the snapshot was fetched without members.
    #[serde(default)]
    pub members: Vec<TeamMembership>,
}

/// Links a user to a team with a role.
///
/// A user may belong to zero or more teams; membership is the basis for
/// every team-scoped permission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMembership {
    /// The member's user id.
    pub user_id: String,
    /// The team this membership belongs to.
    pub team_id: String,
    /// The member's role within the team.
    pub role: TeamRole,
}

/// Roles a roster member can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamRole {
    Captain,
    ViceCaptain,
    Manager,
    Player,
}

impl TeamRole {
    /// Wire representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Captain => "CAPTAIN",
            Self::ViceCaptain => "VICE_CAPTAIN",
            Self::Manager => "MANAGER",
            Self::Player => "PLAYER",
        }
    }

    /// Parse from the wire representation.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "CAPTAIN" => Some(Self::Captain),
            "VICE_CAPTAIN" => Some(Self::ViceCaptain),
            "MANAGER" => Some(Self::Manager),
            "PLAYER" => Some(Self::Player),
            _ => None,
        }
    }

    /// Captains and vice-captains carry team-level authority in match flows.
    pub fn is_captaincy(&self) -> bool {
        match self {
            Self::Captain | Self::ViceCaptain => true,
            Self::Manager | Self::Player => false,
        }
    }
}
