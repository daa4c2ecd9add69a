use super::*;

#[test]
fn notices_default_empty() {
    let state = NoticesState::default();
    assert!(state.items.is_empty());
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticesState::default();
    let a = state.push(NoticeLevel::Info, "loaded");
    let b = state.push_error("failed");
    assert!(b > a);
    assert_eq!(state.items[1].level, NoticeLevel::Error);
    assert_eq!(state.items[1].message, "failed");
}

#[test]
fn dismiss_removes_only_matching_notice() {
    let mut state = NoticesState::default();
    let a = state.push_error("one");
    let b = state.push_error("two");
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = NoticesState::default();
    let a = state.push_error("one");
    state.dismiss(a);
    let b = state.push_error("two");
    assert_ne!(a, b);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = NoticesState::default();
    state.push_error("one");
    state.dismiss(99);
    assert_eq!(state.items.len(), 1);
}
