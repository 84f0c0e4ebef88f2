use super::*;

use crate::services::message::MessageError;

// =============================================================================
// STATUS FILTER PARSING
// =============================================================================

#[test]
fn parse_status_filter_accepts_known_statuses() {
    assert_eq!(parse_status_filter(Some("pending")), Ok(Some(MessageStatus::Pending)));
    assert_eq!(parse_status_filter(Some("approved")), Ok(Some(MessageStatus::Approved)));
    assert_eq!(parse_status_filter(Some("rejected")), Ok(Some(MessageStatus::Rejected)));
}

#[test]
fn parse_status_filter_treats_all_and_absent_as_unfiltered() {
    assert_eq!(parse_status_filter(None), Ok(None));
    assert_eq!(parse_status_filter(Some("all")), Ok(None));
}

#[test]
fn parse_status_filter_rejects_unknown_values() {
    assert_eq!(parse_status_filter(Some("archived")), Err(StatusCode::UNPROCESSABLE_ENTITY));
    assert_eq!(parse_status_filter(Some("Approved")), Err(StatusCode::UNPROCESSABLE_ENTITY));
    assert_eq!(parse_status_filter(Some("")), Err(StatusCode::UNPROCESSABLE_ENTITY));
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

#[test]
fn message_error_to_status_maps_variants() {
    assert_eq!(message_error_to_status(MessageError::EventNotFound), StatusCode::NOT_FOUND);
    assert_eq!(message_error_to_status(MessageError::NotFound), StatusCode::NOT_FOUND);
    assert_eq!(message_error_to_status(MessageError::EventInactive), StatusCode::GONE);
    assert_eq!(
        message_error_to_status(MessageError::EmptyContent),
        StatusCode::UNPROCESSABLE_ENTITY
    );
    assert_eq!(
        message_error_to_status(MessageError::TooLong(201)),
        StatusCode::UNPROCESSABLE_ENTITY
    );
    assert_eq!(
        message_error_to_status(MessageError::Database(sqlx::Error::PoolClosed)),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

// =============================================================================
// EXPORT FILENAME
// =============================================================================

#[test]
fn export_filename_embeds_status_slug_and_date() {
    let filename = format!("{}_messages_{}_{}.csv", "approved", "retro-week", export::file_date());
    assert!(filename.starts_with("approved_messages_retro-week_"));
    assert!(filename.ends_with(".csv"));
    // The date portion is ISO shaped, so the whole name stays shell-safe.
    assert!(!filename.contains(' '));
}
