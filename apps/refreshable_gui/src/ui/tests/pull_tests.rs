use super::*;

#[test]
fn release_past_threshold_triggers() {
    let mut pull = PullGesture::new(64.0);
    pull.drag(40.0, true);
    assert!(!pull.is_armed());
    pull.drag(30.0, true);
    assert!(pull.is_armed());

    assert!(pull.release());
    assert!(!pull.is_active());
}

#[test]
fn release_short_of_threshold_does_not_trigger() {
    let mut pull = PullGesture::new(64.0);
    pull.drag(63.0, true);
    assert!(!pull.release());
}

#[test]
fn pull_does_not_start_unless_scrolled_to_top() {
    let mut pull = PullGesture::new(64.0);
    pull.drag(100.0, false);
    assert_eq!(pull.distance, 0.0);
    assert!(!pull.release());
}

#[test]
fn pull_continues_once_started_and_can_be_backed_out() {
    let mut pull = PullGesture::new(64.0);
    pull.drag(70.0, true);
    pull.drag(10.0, false);
    assert_eq!(pull.distance, 80.0);

    pull.drag(-50.0, true);
    assert!(!pull.is_armed());
    assert!(!pull.release());
}

#[test]
fn distance_is_clamped_and_progress_saturates() {
    let mut pull = PullGesture::new(50.0);
    pull.drag(500.0, true);
    assert_eq!(pull.distance, 100.0);
    assert_eq!(pull.progress(), 1.0);

    pull.drag(-1000.0, true);
    assert_eq!(pull.distance, 0.0);
}

#[test]
fn upward_drag_at_top_is_ignored() {
    let mut pull = PullGesture::new(64.0);
    pull.drag(-20.0, true);
    assert!(!pull.is_active());
}
