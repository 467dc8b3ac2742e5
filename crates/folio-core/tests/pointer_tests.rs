// Host-side tests for the shared pointer record.

use folio_core::{PointerSample, PointerState};

#[test]
fn default_state_is_origin_and_released() {
    let state = PointerState::default();
    assert_eq!(state.x, 0.0);
    assert_eq!(state.y, 0.0);
    assert!(!state.down);
}

#[test]
fn down_move_up_sequence_ends_released_at_last_position() {
    let mut state = PointerState::default();
    state.apply(PointerSample::Down);
    state.apply(PointerSample::Move { x: 50.0, y: 60.0 });
    state.apply(PointerSample::Up);
    assert_eq!(
        state,
        PointerState {
            x: 50.0,
            y: 60.0,
            down: false,
        }
    );
}

#[test]
fn moves_do_not_touch_the_button_flag() {
    let mut state = PointerState::default();
    state.apply(PointerSample::Down);
    state.apply(PointerSample::Move { x: 5.0, y: 5.0 });
    assert!(state.down);
}

#[test]
fn last_write_wins() {
    let mut state = PointerState::default();
    state.apply(PointerSample::Move { x: 5.0, y: 5.0 });
    state.apply(PointerSample::Move { x: -3.0, y: 999.0 });
    assert_eq!(state.x, -3.0);
    assert_eq!(state.y, 999.0);
}
