// Unit tests for the history query controller.
//
// State transitions (Idle → Loading → {Loaded, Failed}), stale-response
// discarding via request tokens, and preservation of the last good result
// set across failures.

use chrono::Utc;
use verityflow::backend::models::VerdictRecord;
use verityflow::history::{HistoryController, HistoryState};

fn record(id: &str) -> VerdictRecord {
    VerdictRecord {
        id: id.to_string(),
        message: format!("message {id}"),
        verdict: "Legitimate".to_string(),
        confidence: 0.9,
        reasons: Vec::new(),
        red_flags: Vec::new(),
        suspicious_urls: Vec::new(),
        safety_advice: String::new(),
        explanation: None,
        timestamp: Utc::now(),
    }
}

// ============================================================
// Basic transitions
// ============================================================

#[test]
fn starts_idle_with_no_records() {
    let controller = HistoryController::new();
    assert_eq!(*controller.state(), HistoryState::Idle);
    assert!(controller.records().is_empty());
}

#[test]
fn begin_fetch_transitions_to_loading() {
    let mut controller = HistoryController::new();
    let _token = controller.begin_fetch();
    assert_eq!(*controller.state(), HistoryState::Loading);
}

#[test]
fn success_transitions_to_loaded_and_stores_records() {
    let mut controller = HistoryController::new();
    let token = controller.begin_fetch();
    assert!(controller.apply_success(token, vec![record("a"), record("b")]));
    assert_eq!(*controller.state(), HistoryState::Loaded);
    assert_eq!(controller.records().len(), 2);
    assert_eq!(controller.records()[0].id, "a");
}

#[test]
fn empty_result_set_is_a_valid_loaded_state() {
    let mut controller = HistoryController::new();
    let token = controller.begin_fetch();
    assert!(controller.apply_success(token, Vec::new()));
    // Loaded-and-empty is distinct from Loading — the caller shows the
    // "No History Yet" placeholder, not a spinner
    assert_eq!(*controller.state(), HistoryState::Loaded);
    assert!(controller.records().is_empty());
}

#[test]
fn failure_transitions_to_failed_with_message() {
    let mut controller = HistoryController::new();
    let token = controller.begin_fetch();
    assert!(controller.apply_failure(token, "boom".to_string()));
    assert_eq!(
        *controller.state(),
        HistoryState::Failed {
            message: "boom".to_string()
        }
    );
}

// ============================================================
// Stale-response discarding
// ============================================================

#[test]
fn stale_success_is_discarded() {
    let mut controller = HistoryController::new();
    let first = controller.begin_fetch();
    let second = controller.begin_fetch();

    // The first response arrives after the second fetch superseded it
    assert!(!controller.apply_success(first, vec![record("stale")]));
    assert_eq!(*controller.state(), HistoryState::Loading);
    assert!(controller.records().is_empty());

    assert!(controller.apply_success(second, vec![record("fresh")]));
    assert_eq!(controller.records()[0].id, "fresh");
}

#[test]
fn stale_success_cannot_overwrite_newer_result() {
    let mut controller = HistoryController::new();
    let first = controller.begin_fetch();
    let second = controller.begin_fetch();

    assert!(controller.apply_success(second, vec![record("fresh")]));
    assert!(!controller.apply_success(first, vec![record("stale")]));

    assert_eq!(*controller.state(), HistoryState::Loaded);
    assert_eq!(controller.records()[0].id, "fresh");
}

#[test]
fn stale_failure_is_discarded() {
    let mut controller = HistoryController::new();
    let first = controller.begin_fetch();
    let second = controller.begin_fetch();

    assert!(!controller.apply_failure(first, "old error".to_string()));
    assert_eq!(*controller.state(), HistoryState::Loading);

    assert!(controller.apply_success(second, vec![record("fresh")]));
    assert_eq!(*controller.state(), HistoryState::Loaded);
}

// ============================================================
// Failure preserves the prior result set
// ============================================================

#[test]
fn failed_refresh_keeps_previous_records() {
    let mut controller = HistoryController::new();
    let token = controller.begin_fetch();
    assert!(controller.apply_success(token, vec![record("kept")]));

    let token = controller.begin_fetch();
    assert!(controller.apply_failure(token, "network down".to_string()));

    assert!(matches!(controller.state(), HistoryState::Failed { .. }));
    assert_eq!(controller.records().len(), 1);
    assert_eq!(controller.records()[0].id, "kept");
}

#[test]
fn recovery_after_failure_overwrites_atomically() {
    let mut controller = HistoryController::new();
    let token = controller.begin_fetch();
    assert!(controller.apply_failure(token, "first try failed".to_string()));

    let token = controller.begin_fetch();
    assert!(controller.apply_success(token, vec![record("x"), record("y")]));
    assert_eq!(*controller.state(), HistoryState::Loaded);
    assert_eq!(controller.records().len(), 2);
}
