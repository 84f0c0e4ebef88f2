use super::*;

#[test]
fn chars_left_counts_characters_not_bytes() {
    assert_eq!(chars_left(""), 200);
    assert_eq!(chars_left("hey"), 197);
    // Four chars, more than four bytes.
    assert_eq!(chars_left("héllo"), 195);
}

#[test]
fn chars_left_goes_negative_past_the_limit() {
    let long = "x".repeat(205);
    assert_eq!(chars_left(&long), -5);
}

#[test]
fn validate_content_trims_and_accepts_in_range_text() {
    assert_eq!(validate_content("  an idea  "), Ok("an idea".to_owned()));
}

#[test]
fn validate_content_rejects_blank_input() {
    assert_eq!(validate_content("   "), Err("Write something first."));
}

#[test]
fn validate_content_rejects_over_length_input() {
    let long = "x".repeat(201);
    assert_eq!(
        validate_content(&long),
        Err("Messages are limited to 200 characters.")
    );
    let exactly = "x".repeat(200);
    assert!(validate_content(&exactly).is_ok());
}
