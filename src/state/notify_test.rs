use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NotifyState::default();
    let a = state.error("first");
    let b = state.info("second");
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
}

#[test]
fn queue_preserves_insertion_order() {
    let mut state = NotifyState::default();
    state.error("first");
    state.success("second");
    assert_eq!(state.toasts[0].message, "first");
    assert_eq!(state.toasts[1].message, "second");
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = NotifyState::default();
    let a = state.error("first");
    let b = state.error("second");
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_a_noop() {
    let mut state = NotifyState::default();
    state.info("only");
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = NotifyState::default();
    let a = state.info("first");
    state.dismiss(a);
    let b = state.info("second");
    assert!(b > a);
}

#[test]
fn level_class_suffixes_are_stable() {
    assert_eq!(ToastLevel::Info.class_suffix(), "info");
    assert_eq!(ToastLevel::Success.class_suffix(), "success");
    assert_eq!(ToastLevel::Error.class_suffix(), "error");
}
