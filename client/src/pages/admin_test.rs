use super::*;
use model::AccessMode;

fn event(slug: &str) -> Event {
    Event {
        id: Uuid::new_v4(),
        name: "Retro Week".to_owned(),
        slug: slug.to_owned(),
        description: None,
        access_code: "AB3K9Z".to_owned(),
        access_mode: AccessMode::CodeProtected,
        is_active: true,
        created_at: "2025-06-01T10:00:00Z".to_owned(),
        updated_at: "2025-06-01T10:00:00Z".to_owned(),
    }
}

#[test]
fn find_event_by_slug_matches_exactly() {
    let events = vec![event("retro-week"), event("all-hands")];
    let found = find_event_by_slug(&events, "all-hands").unwrap();
    assert_eq!(found.slug, "all-hands");
    assert!(find_event_by_slug(&events, "ALL-HANDS").is_none());
    assert!(find_event_by_slug(&events, "nope").is_none());
}

#[test]
fn tab_label_includes_the_tally() {
    assert_eq!(tab_label("Pending", 0), "Pending (0)");
    assert_eq!(tab_label("Approved", 12), "Approved (12)");
}
