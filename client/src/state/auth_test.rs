use super::*;

#[test]
fn default_is_signed_out_and_not_loading() {
    let state = AuthState::default();
    assert!(state.organizer.is_none());
    assert!(!state.loading);
}

#[test]
fn probing_sets_loading_until_resolved() {
    let state = AuthState::probing();
    assert!(state.loading);
    assert!(state.organizer.is_none());

    let organizer = Organizer {
        id: uuid::Uuid::nil(),
        email: "host@example.com".to_owned(),
        name: "Host".to_owned(),
        role: "organizer".to_owned(),
    };
    let state = AuthState::resolved(Some(organizer));
    assert!(!state.loading);
    assert_eq!(state.organizer.as_ref().map(|o| o.email.as_str()), Some("host@example.com"));

    let state = AuthState::resolved(None);
    assert!(!state.loading);
    assert!(state.organizer.is_none());
}
