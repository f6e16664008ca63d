//! Countdown and progress projection for a challenge's expiry window.
//!
//! Pure temporal math: callers supply the clock reading. The subscribable
//! re-sampling loop lives in [`crate::challenges::tracker`].

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::challenges::types::ChallengeStatus;

/// Shown when `expires_at` cannot be parsed.
pub const INVALID_DATE: &str = "Invalid date";

/// Shown once the window has closed.
pub const EXPIRED: &str = "Expired";

/// One sample of the expiry projection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpirySnapshot {
    /// Human-readable countdown ("in 3 hours"), or a sentinel; `None`
    /// while the challenge is not being counted down.
    pub time_remaining: Option<String>,
    /// 0–100 share of the window already elapsed.
    pub expiry_progress: u8,
}

/// Whether a (status, deadline) pair is counted down at all.
///
/// Only an `OPEN` challenge with a deadline runs a countdown; everything
/// else projects to the default snapshot and schedules no tick.
pub fn countdown_eligible(status: Option<ChallengeStatus>, expires_at: Option<&str>) -> bool {
    let open = match status {
        Some(ChallengeStatus::Open) => true,
        Some(
            ChallengeStatus::Pending
            | ChallengeStatus::Accepted
            | ChallengeStatus::Declined
            | ChallengeStatus::Completed,
        )
        | None => false,
    };
    open && expires_at.is_some()
}

/// Projects one expiry sample.
///
/// `origin` is the instant of the tracker's first evaluation; it stands in
/// for `created_at` when the snapshot carries none (or an unparsable one).
/// `now` comes from the injected clock so tests drive time directly.
pub fn evaluate_expiry(
    status: Option<ChallengeStatus>,
    expires_at: Option<&str>,
    created_at: Option<&str>,
    origin: DateTime<Utc>,
    now: DateTime<Utc>,
) -> ExpirySnapshot {
    if !countdown_eligible(status, expires_at) {
        return ExpirySnapshot::default();
    }
    let Some(raw_deadline) = expires_at else {
        return ExpirySnapshot::default();
    };
    let Some(deadline) = parse_instant(raw_deadline) else {
        return ExpirySnapshot {
            time_remaining: Some(INVALID_DATE.to_owned()),
            expiry_progress: 0,
        };
    };

    let creation = created_at.and_then(parse_instant).unwrap_or(origin);
    let remaining = deadline - now;
    let total = deadline - creation;

    if remaining > Duration::zero() && total > Duration::zero() {
        let elapsed = now - creation;
        let ratio = elapsed.num_milliseconds() as f64 / total.num_milliseconds() as f64;
        ExpirySnapshot {
            time_remaining: Some(format_remaining(remaining)),
            expiry_progress: (ratio * 100.0).round().clamp(0.0, 100.0) as u8,
        }
    } else {
        // enforcement of the expired state belongs to the server; this is
        // display only
        ExpirySnapshot {
            time_remaining: Some(EXPIRED.to_owned()),
            expiry_progress: 100,
        }
    }
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|instant| instant.with_timezone(&Utc))
}

/// Strict single-unit relative time, future-suffixed: "in 10 minutes".
fn format_remaining(remaining: Duration) -> String {
    let secs = remaining.num_seconds();
    let (value, unit) = if secs < 60 {
        (secs.max(1), "second")
    } else if secs < 3_600 {
        (secs / 60, "minute")
    } else if secs < 86_400 {
        (secs / 3_600, "hour")
    } else {
        (secs / 86_400, "day")
    };
    if value == 1 {
        format!("in 1 {unit}")
    } else {
        format!("in {value} {unit}s")
    }
}
