//! Unit tests for the profiling helpers.

use design_canvas::perf::{is_profiling_enabled, set_profiling_enabled, ScopedTimer, EVENT_BUDGET_MS};
use design_canvas::profile_scope;

#[test]
fn test_scoped_timer_measures_elapsed_time() {
    let timer = ScopedTimer::new("test_op", 100.0);
    std::thread::sleep(std::time::Duration::from_millis(2));
    assert!(timer.elapsed_ms() >= 1.0);
    assert_eq!(timer.name(), "test_op");
}

#[test]
fn test_event_budget_timer() {
    let timer = ScopedTimer::with_event_budget("handle_motion");
    assert_eq!(timer.threshold_ms(), EVENT_BUDGET_MS);
}

#[test]
fn test_runtime_toggle() {
    let initial = is_profiling_enabled();
    set_profiling_enabled(true);
    assert!(is_profiling_enabled());
    set_profiling_enabled(false);
    assert!(!is_profiling_enabled());
    set_profiling_enabled(initial);
}

#[test]
fn test_profile_scope_in_nested_blocks() {
    profile_scope!("outer");
    let total: i32 = (0..10)
        .map(|i| {
            profile_scope!("inner");
            i * 2
        })
        .sum();
    assert_eq!(total, 90);
}
