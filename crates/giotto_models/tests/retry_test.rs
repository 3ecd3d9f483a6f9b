//! Tests for the retry controller state machine.

use giotto_core::ErrorCategory;
use giotto_models::{MAX_ATTEMPTS, RETRY_BACKOFF, RetryController, RetryDecision, RetryState};
use std::time::Duration;

#[test]
fn fresh_controller_starts_idle() {
    let controller = RetryController::new();
    assert_eq!(controller.state(), RetryState::Idle);
    assert_eq!(controller.attempts(), 0);
    assert!(!controller.is_terminal());
}

#[test]
fn success_terminates_on_the_first_attempt() {
    let mut controller = RetryController::new();
    assert_eq!(controller.begin_attempt(), 1);
    assert_eq!(controller.state(), RetryState::Attempting);

    controller.on_success();
    assert_eq!(controller.state(), RetryState::Succeeded);
    assert!(controller.is_terminal());
    assert_eq!(controller.attempts(), 1);
}

#[test]
fn sustained_loading_never_exceeds_three_attempts() {
    let mut controller = RetryController::new();

    controller.begin_attempt();
    assert_eq!(
        controller.on_failure(ErrorCategory::ModelLoading),
        RetryDecision::Retry(RETRY_BACKOFF)
    );
    assert_eq!(controller.state(), RetryState::Retrying);

    controller.begin_attempt();
    assert_eq!(
        controller.on_failure(ErrorCategory::ModelLoading),
        RetryDecision::Retry(RETRY_BACKOFF)
    );

    controller.begin_attempt();
    // The third loading failure is terminal, not another retry.
    assert_eq!(
        controller.on_failure(ErrorCategory::ModelLoading),
        RetryDecision::GiveUp
    );
    assert_eq!(controller.state(), RetryState::Failed);
    assert_eq!(controller.attempts(), MAX_ATTEMPTS);
    assert!(controller.is_terminal());
}

#[test]
fn every_other_category_is_final_on_first_occurrence() {
    let finals = [
        ErrorCategory::RateLimit,
        ErrorCategory::Authentication,
        ErrorCategory::ModelNotFound,
        ErrorCategory::InvalidInput,
        ErrorCategory::ServerError,
        ErrorCategory::NetworkError,
        ErrorCategory::Unknown,
    ];

    for category in finals {
        let mut controller = RetryController::new();
        controller.begin_attempt();
        assert_eq!(controller.on_failure(category), RetryDecision::GiveUp);
        assert_eq!(controller.state(), RetryState::Failed);
        assert_eq!(controller.attempts(), 1);
    }
}

#[test]
fn backoff_is_a_fixed_three_seconds() {
    assert_eq!(RETRY_BACKOFF, Duration::from_secs(3));
}

#[test]
fn a_retry_can_still_succeed() {
    let mut controller = RetryController::new();

    controller.begin_attempt();
    controller.on_failure(ErrorCategory::ModelLoading);

    controller.begin_attempt();
    controller.on_success();
    assert_eq!(controller.state(), RetryState::Succeeded);
    assert_eq!(controller.attempts(), 2);
}
