use super::*;

#[test]
fn first_intersection_reveals() {
    let mut state = RevealState::default();
    assert!(state.observe(3, true));
    assert!(state.is_revealed(3));
    assert_eq!(state.revealed_count(), 1);
}

#[test]
fn non_intersecting_report_does_nothing() {
    let mut state = RevealState::default();
    assert!(!state.observe(0, false));
    assert!(!state.is_revealed(0));
}

#[test]
fn reveal_is_one_way() {
    let mut state = RevealState::default();
    state.observe(1, true);
    assert!(!state.observe(1, false));
    assert!(state.is_revealed(1));
    assert!(!state.observe(1, true), "second reveal must not re-trigger");
}

#[test]
fn elements_are_tracked_independently() {
    let mut state = RevealState::default();
    state.observe(0, true);
    state.observe(2, false);
    assert!(state.is_revealed(0));
    assert!(!state.is_revealed(2));
    assert!(state.observe(2, true));
    assert_eq!(state.revealed_count(), 2);
}
