#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::{HashSet, VecDeque};

use model::{Message, ProjectionSettings};
use uuid::Uuid;

use crate::consts::NOTE_TEXT_MAX_CHARS;
use crate::palette;

/// One note on the projection surface.
///
/// Created exactly once, the first time its message is observed as approved.
/// The color is fixed at reveal time and never reassigned; position is not
/// stored here because it is a pure function of reveal index and total (see
/// [`crate::grid::position_for`]).
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayedNote {
    pub message_id: Uuid,
    pub content: String,
    pub author_name: Option<String>,
    pub color: String,
}

/// Scheduler phase, driven by fetch results and reveal ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No session exists (no event selected).
    Idle,
    /// Unrevealed messages are queued; a reveal tick is due.
    Populating,
    /// Queue drained; waiting on the next fetch.
    Settled,
}

/// Reveal scheduler for one projection session.
///
/// Holds everything the display owns: the notes already on screen, the IDs
/// ever shown, and the queue of approved messages waiting for their reveal
/// tick. The set only grows; messages that later drop out of the approved
/// list keep their note for the life of the session. A session is built
/// fresh on page load, so a reload replays the whole board.
#[derive(Debug, Default)]
pub struct RevealQueue {
    displayed: Vec<DisplayedNote>,
    seen: HashSet<Uuid>,
    pending: VecDeque<Message>,
}

impl RevealQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a fetch result into the queue.
    ///
    /// Unseen messages are appended in list order, which the server
    /// guarantees is `created_at` ascending; messages already displayed or
    /// already queued are ignored, so overlapping polls never duplicate or
    /// reorder a reveal. Returns how many messages were newly queued.
    pub fn reconcile(&mut self, approved: &[Message]) -> usize {
        let mut queued = 0;
        for message in approved {
            if self.seen.contains(&message.id) {
                continue;
            }
            if self.pending.iter().any(|m| m.id == message.id) {
                continue;
            }
            self.pending.push_back(message.clone());
            queued += 1;
        }
        queued
    }

    /// Reveal the head of the queue, if any.
    ///
    /// The caller invokes this once per reveal tick; the color comes from
    /// the current displayed count so the palette cycles in reveal order.
    pub fn reveal_next(&mut self, settings: &ProjectionSettings) -> Option<&DisplayedNote> {
        let message = self.pending.pop_front()?;
        let color = palette::color_for(self.displayed.len(), settings);
        self.seen.insert(message.id);
        self.displayed.push(DisplayedNote {
            message_id: message.id,
            content: message.content,
            author_name: message.author_name,
            color,
        });
        self.displayed.last()
    }

    /// Notes currently on screen, in reveal order.
    #[must_use]
    pub fn displayed(&self) -> &[DisplayedNote] {
        &self.displayed
    }

    #[must_use]
    pub fn displayed_count(&self) -> usize {
        self.displayed.len()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Phase of a live session. [`Phase::Idle`] is represented by the
    /// session not existing; see [`session_phase`].
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.pending.is_empty() {
            Phase::Settled
        } else {
            Phase::Populating
        }
    }
}

/// Phase including the no-session case.
#[must_use]
pub fn session_phase(session: Option<&RevealQueue>) -> Phase {
    session.map_or(Phase::Idle, RevealQueue::phase)
}

/// Note text as rendered on the card: long content is cut at a fixed length
/// with a trailing ellipsis. Cuts on a character boundary.
#[must_use]
pub fn display_text(content: &str) -> String {
    if content.chars().count() <= NOTE_TEXT_MAX_CHARS {
        return content.to_owned();
    }
    let mut text: String = content.chars().take(NOTE_TEXT_MAX_CHARS).collect();
    text.push_str("...");
    text
}
