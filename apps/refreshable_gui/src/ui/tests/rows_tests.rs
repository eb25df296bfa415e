use super::*;

#[test]
fn idle_state_renders_only_items() {
    let state = RefreshableState::default();
    assert_eq!(
        visible_rows(&state),
        vec![Row::Item("first"), Row::Item("second"), Row::Item("third")]
    );
}

#[test]
fn refreshing_state_leads_with_cancel_button() {
    let mut state = RefreshableState::default();
    state.is_refreshing = true;

    let rows = visible_rows(&state);
    assert_eq!(rows.first(), Some(&Row::CancelButton));
    assert_eq!(rows.len(), 4);
    assert_eq!(
        rows.iter().filter(|row| **row == Row::CancelButton).count(),
        1
    );
}

#[test]
fn cancel_button_presence_tracks_flag() {
    let mut state = RefreshableState::with_items(Vec::new());
    for flag in [false, true, false] {
        state.is_refreshing = flag;
        assert_eq!(visible_rows(&state).contains(&Row::CancelButton), flag);
    }
}
