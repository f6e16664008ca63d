//! Subscribable expiry tracking with a fixed re-sample tick.
//!
//! One tracker per observed challenge. The task re-samples the projection
//! every 60 seconds while the challenge is countdown-eligible, and
//! immediately whenever the consumer replaces the input snapshot. Dropping
//! the handle aborts the task: no timer outlives its observer, and
//! trackers for different challenges never interfere.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::challenges::expiry::{countdown_eligible, evaluate_expiry, ExpirySnapshot};
use crate::challenges::types::{Challenge, ChallengeStatus};
use crate::clock::Clock;

/// How often an active countdown is re-sampled.
pub const TICK_INTERVAL: Duration = Duration::from_secs(60);

/// The subset of a challenge snapshot the tracker consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpiryInput {
    /// Current challenge status; `None` when nothing is loaded yet.
    pub status: Option<ChallengeStatus>,
    /// Raw wire deadline.
    pub expires_at: Option<String>,
    /// Raw wire creation time.
    pub created_at: Option<String>,
}

impl ExpiryInput {
    /// Extracts the tracked fields from a challenge snapshot.
    pub fn from_challenge(challenge: &Challenge) -> Self {
        Self {
            status: Some(challenge.status),
            expires_at: challenge.expires_at.clone(),
            created_at: challenge.created_at.clone(),
        }
    }
}

/// Owns the background task for one tracked challenge.
///
/// Subscribers observe every published [`ExpirySnapshot`]; `update`
/// replaces the tracked snapshot and triggers an immediate re-sample. The
/// task is aborted when the handle drops.
pub struct ExpiryTrackerHandle {
    input_tx: watch::Sender<ExpiryInput>,
    sample_rx: watch::Receiver<ExpirySnapshot>,
    task: JoinHandle<()>,
}

impl ExpiryTrackerHandle {
    /// The most recently published sample.
    pub fn latest(&self) -> ExpirySnapshot {
        self.sample_rx.borrow().clone()
    }

    /// A receiver that observes every published sample.
    pub fn subscribe(&self) -> watch::Receiver<ExpirySnapshot> {
        self.sample_rx.clone()
    }

    /// Replaces the tracked snapshot; the task re-samples immediately.
    pub fn update(&self, input: ExpiryInput) {
        // send only fails when the task is already gone
        if self.input_tx.send(input).is_err() {
            log::warn!(
                target: "pavilion",
                "msg=\"expiry tracker updated after teardown\""
            );
        }
    }
}

impl Drop for ExpiryTrackerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawns the tracking task for one challenge snapshot.
///
/// The first sample is published synchronously, so `latest` is meaningful
/// as soon as this returns. The tracker's origin instant (the `created_at`
/// fallback) is read from `clock` once, here, and reused for the lifetime
/// of the task.
///
/// Must be called from within a tokio runtime.
pub fn spawn_expiry_tracker<C: Clock>(input: ExpiryInput, clock: C) -> ExpiryTrackerHandle {
    let origin = clock.now();
    let first = evaluate_expiry(
        input.status,
        input.expires_at.as_deref(),
        input.created_at.as_deref(),
        origin,
        origin,
    );

    log::debug!(
        target: "pavilion",
        "msg=\"expiry tracker started\", eligible={}",
        countdown_eligible(input.status, input.expires_at.as_deref())
    );

    let (input_tx, mut input_rx) = watch::channel(input);
    let (sample_tx, sample_rx) = watch::channel(first);

    let task = tokio::spawn(async move {
        loop {
            let input = input_rx.borrow_and_update().clone();
            let sample = evaluate_expiry(
                input.status,
                input.expires_at.as_deref(),
                input.created_at.as_deref(),
                origin,
                clock.now(),
            );
            // subscribers are notified only when the derived sample
            // actually changes
            sample_tx.send_if_modified(|current| {
                if *current == sample {
                    false
                } else {
                    *current = sample;
                    true
                }
            });
            if sample_tx.is_closed() {
                break;
            }

            if countdown_eligible(input.status, input.expires_at.as_deref()) {
                tokio::select! {
                    () = tokio::time::sleep(TICK_INTERVAL) => {}
                    changed = input_rx.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                }
            } else if input_rx.changed().await.is_err() {
                // tick suspended while ineligible; only an input change
                // (or teardown) wakes the task
                break;
            }
        }
    });

    ExpiryTrackerHandle {
        input_tx,
        sample_rx,
        task,
    }
}
