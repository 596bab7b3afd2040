//! Tests for termination conditions.

use std::time::Duration;

use super::*;

#[test]
fn test_unbounded_never_terminates() {
    let mut scope = SolveScope::start();
    for _ in 0..100 {
        assert!(!scope.should_stop(&Unbounded));
    }
    assert_eq!(scope.check_count(), 100);
    assert_eq!(Unbounded.time_limit(), None);
}

#[test]
fn test_check_count_termination() {
    let mut scope = SolveScope::start();
    let term = CheckCountTermination::new(3);

    assert!(!scope.should_stop(&term));
    assert!(!scope.should_stop(&term));
    assert!(scope.should_stop(&term));
}

#[test]
fn test_zero_time_limit_terminates_immediately() {
    let mut scope = SolveScope::start();
    let term = TimeTermination::new(Duration::ZERO);

    assert!(scope.should_stop(&term));
    let interrupted = scope.interrupted(&term);
    assert_eq!(interrupted.limit, Some(Duration::ZERO));
    assert_eq!(interrupted.checks, 1);
}

#[test]
fn test_generous_time_limit_does_not_terminate() {
    let mut scope = SolveScope::start();
    let term = TimeTermination::seconds(3600);

    assert!(!scope.should_stop(&term));
    assert_eq!(term.time_limit(), Some(Duration::from_secs(3600)));
}

#[test]
fn test_termination_by_reference() {
    let mut scope = SolveScope::start();
    let term = TimeTermination::millis(0);
    let by_ref = &term;

    assert!(scope.should_stop(&by_ref));
    assert_eq!(by_ref.time_limit(), Some(Duration::ZERO));
}
