//! Derived permissions and lifecycle projections for team sports apps.
//!
//! `pavilion` is the pure core of a team-sports coordination product:
//! given read-only snapshots of users, teams, challenges, and matches, it
//! derives what the viewing user may do right now and how time-driven
//! entities project into display values. It performs no I/O, mutates
//! nothing, and caches nothing; every projection is recomputed from its
//! inputs, and absent inputs fail closed to all-`false` permission
//! records.
//!
//! The one owned resource is the expiry tracker's 60-second re-sample
//! task, which is scoped to its handle and aborted on drop.
//!
//! # Example
//!
//! ```rust
//! use pavilion::{evaluate_challenge_permissions, Challenge, ChallengeStatus, Team, User};
//!
//! let user = User { id: "u9".into(), name: "Maya".into() };
//! let team = Team { id: "t9".into(), name: "Rovers".into(), members: vec![] };
//! let challenge = Challenge {
//!     id: "c1".into(),
//!     status: ChallengeStatus::Open,
//!     created_by: "Asha".into(),
//!     sender_id: "u1".into(),
//!     sender_team_id: Some("t1".into()),
//!     receiver_team_id: None,
//!     first_acceptor_team_id: None,
//!     created_at: None,
//!     expires_at: None,
//! };
//!
//! let perms = evaluate_challenge_permissions(
//!     Some(&user),
//!     Some(&challenge),
//!     Some(std::slice::from_ref(&team)),
//!     None,
//! );
//! assert!(perms.can_request_accept);
//! ```

pub mod challenges;
pub mod clock;
pub mod matches;
pub mod teams;

#[cfg(feature = "fixtures")]
pub mod fixtures;

pub use challenges::{
    countdown_eligible, evaluate_challenge_permissions, evaluate_expiry, spawn_expiry_tracker,
    AcceptanceRequestStatus, Challenge, ChallengeAcceptanceRequest, ChallengePermissions,
    ChallengeStatus, ExpiryInput, ExpirySnapshot, ExpiryTrackerHandle, EXPIRED, INVALID_DATE,
    TICK_INTERVAL,
};
pub use clock::{Clock, SystemClock};
pub use matches::{
    evaluate_match_permissions, format_overs, result_headline, scoreboard_label, scoreboard_rows,
    toss_summary, Innings, Match, MatchPermissions, MatchStatus, MatchTeamLink, ScoreboardLabel,
    ScoreboardRow, Toss, TossDecision,
};
pub use teams::{Team, TeamMembership, TeamRole, User};

#[cfg(feature = "fixtures")]
pub use clock::ManualClock;
