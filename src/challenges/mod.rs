//! Challenge lifecycle: permissions, acceptance requests, expiry tracking.

mod expiry;
mod permissions;
mod tracker;
mod types;

pub use expiry::{countdown_eligible, evaluate_expiry, ExpirySnapshot, EXPIRED, INVALID_DATE};
pub use permissions::{evaluate_challenge_permissions, ChallengePermissions};
pub use tracker::{spawn_expiry_tracker, ExpiryInput, ExpiryTrackerHandle, TICK_INTERVAL};
pub use types::{
    AcceptanceRequestStatus, Challenge, ChallengeAcceptanceRequest, ChallengeStatus,
};
