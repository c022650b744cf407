use super::*;

// PLENARY is row 2; breakout blocks are rows 4, 6, 8.
const PLENARY: SessionKey = SessionKey { entry: 2, session: 0 };
const BREAKOUT_A: SessionKey = SessionKey { entry: 4, session: 0 };
const BREAKOUT_B: SessionKey = SessionKey { entry: 4, session: 1 };

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_has_everything_collapsed() {
    let state = TimetableState::default();
    assert_eq!(state.open_count(), 0);
    assert!(all_session_keys().all(|key| !state.is_open(key)));
}

// =============================================================
// Keys
// =============================================================

#[test]
fn all_session_keys_covers_seven_sessions_in_order() {
    let keys: Vec<SessionKey> = all_session_keys().collect();
    assert_eq!(keys.len(), 7);
    assert_eq!(keys[0], PLENARY);
    assert_eq!(keys[1], BREAKOUT_A);
    assert_eq!(keys[2], BREAKOUT_B);
    assert!(keys.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn resolve_finds_session() {
    let (entry, session) = BREAKOUT_B.resolve().expect("breakout B resolves");
    assert_eq!(entry.event_label, "分科会1");
    assert_eq!(session.event_label, "分科会B");
}

#[test]
fn resolve_rejects_simple_rows_and_out_of_range() {
    assert!(SessionKey::new(0, 0).resolve().is_none());
    assert!(SessionKey::new(4, 2).resolve().is_none());
    assert!(SessionKey::new(99, 0).resolve().is_none());
}

// =============================================================
// Toggling
// =============================================================

#[test]
fn open_then_close() {
    let mut state = TimetableState::default();
    assert!(state.open(PLENARY));
    assert!(state.is_open(PLENARY));
    assert!(!state.open(PLENARY));
    assert!(state.close(PLENARY));
    assert!(!state.is_open(PLENARY));
    assert!(!state.close(PLENARY));
}

#[test]
fn open_ignores_unknown_keys() {
    let mut state = TimetableState::default();
    assert!(!state.open(SessionKey::new(0, 0)));
    assert_eq!(state.open_count(), 0);
}

#[test]
fn toggle_flips_state() {
    let mut state = TimetableState::default();
    assert!(state.toggle(BREAKOUT_A));
    assert!(!state.toggle(BREAKOUT_A));
    assert!(!state.is_open(BREAKOUT_A));
}

#[test]
fn opening_one_leaves_others_untouched() {
    let mut state = TimetableState::default();
    state.open(BREAKOUT_B);
    for key in all_session_keys() {
        let before = state.is_open(key);
        let mut probe = state.clone();
        probe.open(BREAKOUT_A);
        if key != BREAKOUT_A {
            assert_eq!(probe.is_open(key), before, "{key:?} changed");
        }
    }
}

#[test]
fn sessions_can_be_open_together() {
    let mut state = TimetableState::default();
    for key in all_session_keys() {
        state.open(key);
    }
    assert_eq!(state.open_count(), 7);
    state.close(BREAKOUT_A);
    assert_eq!(state.open_count(), 6);
    assert!(state.is_open(BREAKOUT_B));
    assert!(state.is_open(PLENARY));
}
