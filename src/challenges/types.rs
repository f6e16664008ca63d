//! Challenge and acceptance-request types.

use serde::{Deserialize, Serialize};

/// Lifecycle states of a challenge.
///
/// Transitions are server-driven; the core only reads the current status to
/// gate actions. Every consultation site matches exhaustively so a new
/// status value is a compile-time-visible change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChallengeStatus {
    Open,
    Pending,
    Accepted,
    Declined,
    Completed,
}

impl ChallengeStatus {
    /// Wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Pending => "PENDING",
            Self::Accepted => "ACCEPTED",
            Self::Declined => "DECLINED",
            Self::Completed => "COMPLETED",
        }
    }

    /// Parse from the wire representation.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "OPEN" => Some(Self::Open),
            "PENDING" => Some(Self::Pending),
            "ACCEPTED" => Some(Self::Accepted),
            "DECLINED" => Some(Self::Declined),
            "COMPLETED" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// A challenge issued by one team, either to a specific team or openly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    /// Unique identifier.
    pub id: String,
    /// Current lifecycle state.
    pub status: ChallengeStatus,
    /// Display name of the creating user. The producer does not guarantee
    /// an id here, so creator checks also consult `sender_id`.
    pub created_by: String,
    /// User id of the creating user.
    pub sender_id: String,
    /// Team on whose behalf the challenge was issued.
    pub sender_team_id: Option<String>,
    /// Present only for direct challenges issued to a specific team.
    pub receiver_team_id: Option<String>,
    /// Set at most once, when a request is approved or a direct accept
    /// occurs; immutable thereafter.
    pub first_acceptor_team_id: Option<String>,
    /// Raw wire timestamp; parsed lazily by the expiry projection so a
    /// malformed value degrades to a sentinel instead of rejecting the
    /// whole snapshot.
    pub created_at: Option<String>,
    /// Raw wire timestamp for the expiry deadline, same handling.
    pub expires_at: Option<String>,
}

impl Challenge {
    /// A direct challenge targets one specific team.
    pub fn is_direct(&self) -> bool {
        self.receiver_team_id.is_some()
    }

    /// An open invite lets any team submit an acceptance request.
    pub fn is_open_invite(&self) -> bool {
        self.receiver_team_id.is_none()
    }
}

/// Lifecycle states of an acceptance request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AcceptanceRequestStatus {
    PendingApproval,
    Approved,
    Rejected,
    Withdrawn,
}

impl AcceptanceRequestStatus {
    /// Wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PendingApproval => "PENDING_APPROVAL",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Withdrawn => "WITHDRAWN",
        }
    }

    /// Parse from the wire representation.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "PENDING_APPROVAL" => Some(Self::PendingApproval),
            "APPROVED" => Some(Self::Approved),
            "REJECTED" => Some(Self::Rejected),
            "WITHDRAWN" => Some(Self::Withdrawn),
            _ => None,
        }
    }
}

/// A team's bid to join an open challenge, subject to creator approval.
///
/// Multiple requests may exist per challenge; the collaborator that creates
/// them keeps at most one `PENDING_APPROVAL` per requesting team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeAcceptanceRequest {
    /// Unique identifier.
    pub id: String,
    /// The challenge being bid on.
    pub challenge_id: String,
    /// The team placing the bid.
    pub accepting_team_id: String,
    /// Current lifecycle state.
    pub status: AcceptanceRequestStatus,
}

impl ChallengeAcceptanceRequest {
    /// Still awaiting the challenge creator's decision.
    pub fn is_pending(&self) -> bool {
        match self.status {
            AcceptanceRequestStatus::PendingApproval => true,
            AcceptanceRequestStatus::Approved
            | AcceptanceRequestStatus::Rejected
            | AcceptanceRequestStatus::Withdrawn => false,
        }
    }
}
