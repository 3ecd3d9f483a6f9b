//! Bounded retry state machine for transient upstream failures.

use giotto_core::ErrorCategory;
use std::time::Duration;

/// Maximum dispatch attempts for one submission.
pub const MAX_ATTEMPTS: u32 = 3;

/// Fixed pause between attempts while the model is loading.
pub const RETRY_BACKOFF: Duration = Duration::from_secs(3);

/// Lifecycle of one submission's retry loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum RetryState {
    /// No attempt has started
    Idle,
    /// A dispatch is in flight
    Attempting,
    /// Waiting out the backoff before the next attempt
    Retrying,
    /// A dispatch resolved successfully
    Succeeded,
    /// The submission failed for good
    Failed,
}

/// What the caller should do after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Wait out the backoff, then attempt again
    Retry(Duration),
    /// Record the failure as terminal
    GiveUp,
}

/// Per-submission retry controller.
///
/// Each submission owns a fresh instance; state is never shared between
/// concurrent submissions. The controller only decides; the caller owns
/// the clock and performs the actual sleep, which keeps the bound and the
/// transitions testable without time or I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryController {
    state: RetryState,
    attempts: u32,
}

impl RetryController {
    /// A fresh controller in the idle state.
    pub fn new() -> Self {
        Self {
            state: RetryState::Idle,
            attempts: 0,
        }
    }

    /// Current state.
    pub fn state(&self) -> RetryState {
        self.state
    }

    /// Number of attempts begun so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Move into the next attempt, returning its 1-based number.
    pub fn begin_attempt(&mut self) -> u32 {
        self.state = RetryState::Attempting;
        self.attempts += 1;
        self.attempts
    }

    /// The in-flight dispatch resolved successfully.
    pub fn on_success(&mut self) {
        self.state = RetryState::Succeeded;
    }

    /// The in-flight dispatch failed with the given category.
    ///
    /// Only a loading model is retried, and only while the attempt count
    /// is below [`MAX_ATTEMPTS`]; every other category fails the
    /// submission on first occurrence.
    pub fn on_failure(&mut self, category: ErrorCategory) -> RetryDecision {
        if category.is_retryable() && self.attempts < MAX_ATTEMPTS {
            self.state = RetryState::Retrying;
            RetryDecision::Retry(RETRY_BACKOFF)
        } else {
            self.state = RetryState::Failed;
            RetryDecision::GiveUp
        }
    }

    /// Whether the submission has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self.state, RetryState::Succeeded | RetryState::Failed)
    }
}

impl Default for RetryController {
    fn default() -> Self {
        Self::new()
    }
}
