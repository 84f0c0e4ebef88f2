use super::*;

#[test]
fn new_session_is_alive_at_generation_zero() {
    let session = SessionHandle::new();
    assert!(session.alive());
    assert_eq!(session.generation(), 0);
    assert!(session.is_current(0));
}

#[test]
fn stop_propagates_to_clones() {
    let session = SessionHandle::new();
    let for_loop = session.clone();
    session.stop();
    assert!(!for_loop.alive());
    assert!(!for_loop.is_current(for_loop.generation()));
}

#[test]
fn bump_generation_invalidates_snapshots() {
    let session = SessionHandle::new();
    let snapshot = session.generation();
    session.bump_generation();
    assert!(!session.is_current(snapshot));
    assert!(session.is_current(session.generation()));
}

#[test]
fn stop_is_idempotent() {
    let session = SessionHandle::new();
    session.stop();
    session.stop();
    assert!(!session.alive());
}
