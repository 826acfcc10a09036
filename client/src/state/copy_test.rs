use super::*;

#[test]
fn starts_idle() {
    let feedback = CopyFeedback::default();
    assert!(!feedback.is_copied());
    assert_eq!(feedback.generation(), 0);
}

#[test]
fn confirm_then_expire_reverts() {
    let mut feedback = CopyFeedback::default();
    let generation = feedback.confirm();
    assert!(feedback.is_copied());
    assert!(feedback.expire(generation));
    assert!(!feedback.is_copied());
}

#[test]
fn second_confirm_invalidates_first_timer() {
    let mut feedback = CopyFeedback::default();
    let first = feedback.confirm();
    let second = feedback.confirm();
    assert_ne!(first, second);

    assert!(!feedback.expire(first));
    assert!(feedback.is_copied());

    assert!(feedback.expire(second));
    assert!(!feedback.is_copied());
}

#[test]
fn expire_is_idempotent() {
    let mut feedback = CopyFeedback::default();
    let generation = feedback.confirm();
    assert!(feedback.expire(generation));
    assert!(!feedback.expire(generation));
}

#[test]
fn confirmation_window_is_two_seconds() {
    assert_eq!(COPY_CONFIRM_MS, 2000);
}
