use super::*;

use model::{MessageStatus, StoredSettings};

fn approved_message(content: &str, created_at: &str) -> Message {
    Message {
        id: Uuid::new_v4(),
        event_id: Uuid::new_v4(),
        content: content.to_owned(),
        author_name: Some("Alex".to_owned()),
        author_email: None,
        status: MessageStatus::Approved,
        created_at: created_at.to_owned(),
    }
}

fn default_settings() -> ProjectionSettings {
    ProjectionSettings::resolved("Test Event", &StoredSettings::default())
}

// --- reconcile ---

#[test]
fn reconcile_queues_unseen_messages_in_list_order() {
    let mut queue = RevealQueue::new();
    let a = approved_message("first", "2025-06-01T10:00:00Z");
    let b = approved_message("second", "2025-06-01T10:01:00Z");

    let queued = queue.reconcile(&[a.clone(), b.clone()]);

    assert_eq!(queued, 2);
    assert_eq!(queue.pending_count(), 2);
    assert_eq!(queue.displayed_count(), 0);
}

#[test]
fn reconcile_skips_messages_already_displayed() {
    let mut queue = RevealQueue::new();
    let a = approved_message("first", "2025-06-01T10:00:00Z");
    let settings = default_settings();

    queue.reconcile(&[a.clone()]);
    queue.reveal_next(&settings).expect("reveal");

    let queued = queue.reconcile(&[a.clone()]);
    assert_eq!(queued, 0);
    assert_eq!(queue.pending_count(), 0);
    assert_eq!(queue.displayed_count(), 1);
}

#[test]
fn reconcile_skips_messages_already_queued() {
    let mut queue = RevealQueue::new();
    let a = approved_message("first", "2025-06-01T10:00:00Z");

    // Two polls land before the first reveal tick.
    queue.reconcile(&[a.clone()]);
    let queued = queue.reconcile(&[a.clone()]);

    assert_eq!(queued, 0);
    assert_eq!(queue.pending_count(), 1);
}

#[test]
fn reconcile_appends_new_arrivals_behind_existing_queue() {
    let mut queue = RevealQueue::new();
    let a = approved_message("first", "2025-06-01T10:00:00Z");
    let b = approved_message("second", "2025-06-01T10:01:00Z");
    let settings = default_settings();

    queue.reconcile(&[a.clone()]);
    queue.reconcile(&[a.clone(), b.clone()]);

    let first = queue.reveal_next(&settings).expect("reveal").clone();
    let second = queue.reveal_next(&settings).expect("reveal").clone();
    assert_eq!(first.message_id, a.id);
    assert_eq!(second.message_id, b.id);
}

// --- reveal pacing and order ---

#[test]
fn reveal_next_surfaces_one_note_per_tick() {
    let mut queue = RevealQueue::new();
    let settings = default_settings();
    let batch = vec![
        approved_message("one", "2025-06-01T10:00:00Z"),
        approved_message("two", "2025-06-01T10:01:00Z"),
        approved_message("three", "2025-06-01T10:02:00Z"),
    ];
    queue.reconcile(&batch);

    assert_eq!(queue.displayed_count(), 0);
    queue.reveal_next(&settings);
    assert_eq!(queue.displayed_count(), 1);
    queue.reveal_next(&settings);
    assert_eq!(queue.displayed_count(), 2);
    queue.reveal_next(&settings);
    assert_eq!(queue.displayed_count(), 3);
    assert!(queue.reveal_next(&settings).is_none());
}

#[test]
fn reveal_order_follows_created_at_order_of_the_fetch() {
    let mut queue = RevealQueue::new();
    let settings = default_settings();
    let a = approved_message("A", "2025-06-01T10:00:00Z");
    let b = approved_message("B", "2025-06-01T10:01:00Z");
    queue.reconcile(&[a.clone(), b.clone()]);

    let first = queue.reveal_next(&settings).expect("reveal").clone();
    let second = queue.reveal_next(&settings).expect("reveal").clone();

    assert_eq!(first.message_id, a.id);
    assert_eq!(second.message_id, b.id);
}

#[test]
fn reveal_tick_interval_is_one_second() {
    // One reveal per tick at this cadence is what spaces notes apart.
    assert_eq!(crate::consts::REVEAL_INTERVAL_MS, 1000);
}

#[test]
fn reveal_colors_cycle_by_reveal_index() {
    let mut queue = RevealQueue::new();
    let settings = default_settings();
    let batch: Vec<Message> = (0..7)
        .map(|i| approved_message(&format!("note {i}"), "2025-06-01T10:00:00Z"))
        .collect();
    queue.reconcile(&batch);

    let mut index = 0;
    while queue.reveal_next(&settings).is_some() {
        index += 1;
    }
    assert_eq!(index, 7);

    for (i, note) in queue.displayed().iter().enumerate() {
        assert_eq!(note.color, palette::color_for(i, &settings));
    }
}

#[test]
fn reveal_keeps_author_and_content() {
    let mut queue = RevealQueue::new();
    let settings = default_settings();
    let message = approved_message("ship the demo", "2025-06-01T10:00:00Z");
    queue.reconcile(&[message.clone()]);

    let note = queue.reveal_next(&settings).expect("reveal");
    assert_eq!(note.content, "ship the demo");
    assert_eq!(note.author_name.as_deref(), Some("Alex"));
}

// --- never prune ---

#[test]
fn displayed_notes_survive_removal_from_the_approved_list() {
    let mut queue = RevealQueue::new();
    let settings = default_settings();
    let a = approved_message("kept", "2025-06-01T10:00:00Z");
    let b = approved_message("later deleted", "2025-06-01T10:01:00Z");

    queue.reconcile(&[a.clone(), b.clone()]);
    queue.reveal_next(&settings);
    queue.reveal_next(&settings);

    // Next poll no longer contains b; the note stays up.
    queue.reconcile(&[a.clone()]);
    assert_eq!(queue.displayed_count(), 2);
    assert!(queue.displayed().iter().any(|n| n.message_id == b.id));
}

#[test]
fn displayed_ids_are_a_subset_of_ever_fetched_ids() {
    let mut queue = RevealQueue::new();
    let settings = default_settings();
    let batch: Vec<Message> = (0..5)
        .map(|i| approved_message(&format!("m{i}"), "2025-06-01T10:00:00Z"))
        .collect();
    let ever: HashSet<Uuid> = batch.iter().map(|m| m.id).collect();

    queue.reconcile(&batch);
    while queue.reveal_next(&settings).is_some() {}

    for note in queue.displayed() {
        assert!(ever.contains(&note.message_id));
    }
}

// --- phase ---

#[test]
fn session_phase_is_idle_without_a_session() {
    assert_eq!(session_phase(None), Phase::Idle);
}

#[test]
fn phase_moves_through_populating_to_settled() {
    let mut queue = RevealQueue::new();
    let settings = default_settings();
    assert_eq!(queue.phase(), Phase::Settled);

    queue.reconcile(&[approved_message("hi", "2025-06-01T10:00:00Z")]);
    assert_eq!(queue.phase(), Phase::Populating);
    assert_eq!(session_phase(Some(&queue)), Phase::Populating);

    queue.reveal_next(&settings);
    assert_eq!(queue.phase(), Phase::Settled);
}

// --- display_text ---

#[test]
fn display_text_passes_short_content_through() {
    assert_eq!(display_text("short note"), "short note");
}

#[test]
fn display_text_truncates_long_content_with_ellipsis() {
    let long: String = "x".repeat(200);
    let shown = display_text(&long);
    assert_eq!(shown.chars().count(), NOTE_TEXT_MAX_CHARS + 3);
    assert!(shown.ends_with("..."));
}

#[test]
fn display_text_keeps_content_at_exactly_the_limit() {
    let exact: String = "y".repeat(NOTE_TEXT_MAX_CHARS);
    assert_eq!(display_text(&exact), exact);
}

#[test]
fn display_text_cuts_multibyte_content_on_char_boundary() {
    let long: String = "é".repeat(NOTE_TEXT_MAX_CHARS + 10);
    let shown = display_text(&long);
    assert_eq!(shown.chars().count(), NOTE_TEXT_MAX_CHARS + 3);
}

// --- pacing ---

/// Drives the queue the way the client's reveal loop does: one tick of
/// [`crate::consts::REVEAL_INTERVAL_MS`] per reveal, under paused tokio time.
#[tokio::test(start_paused = true)]
async fn staggered_reveals_keep_order_with_one_second_gaps() {
    let settings = default_settings();
    let mut queue = RevealQueue::new();
    let a = approved_message("first", "2025-06-01T10:00:00Z");
    let b = approved_message("second", "2025-06-01T10:01:00Z");
    queue.reconcile(&[a.clone(), b.clone()]);

    let start = tokio::time::Instant::now();
    let mut revealed = Vec::new();
    while queue.pending_count() > 0 {
        tokio::time::sleep(std::time::Duration::from_millis(u64::from(
            crate::consts::REVEAL_INTERVAL_MS,
        )))
        .await;
        let note = queue.reveal_next(&settings).expect("queue not empty");
        revealed.push((note.message_id, start.elapsed()));
    }

    assert_eq!(revealed.len(), 2);
    assert_eq!(revealed[0].0, a.id);
    assert_eq!(revealed[1].0, b.id);
    let gap = revealed[1].1 - revealed[0].1;
    assert!(gap >= std::time::Duration::from_secs(1), "gap was {gap:?}");
}
