use super::*;

#[test]
fn normalize_code_input_trims_and_uppercases() {
    assert_eq!(normalize_code_input("  ab3k9z "), "AB3K9Z");
    assert_eq!(normalize_code_input(""), "");
}

#[test]
fn build_join_request_omits_code_for_open_events() {
    let request = build_join_request(AccessMode::Open, "Ada", "", "abc123");
    assert_eq!(request.access_code, None);
    assert_eq!(request.name, Some("Ada".to_owned()));
    assert_eq!(request.email, None);
}

#[test]
fn build_join_request_normalizes_code_for_protected_events() {
    let request = build_join_request(AccessMode::CodeProtected, " Ada ", " a@b.com ", " ab3k9z ");
    assert_eq!(request.access_code, Some("AB3K9Z".to_owned()));
    assert_eq!(request.name, Some("Ada".to_owned()));
    assert_eq!(request.email, Some("a@b.com".to_owned()));
}

#[test]
fn build_join_request_drops_blank_optionals() {
    let request = build_join_request(AccessMode::CodeProtected, "   ", "", "XYZ234");
    assert_eq!(request.name, None);
    assert_eq!(request.email, None);
}
