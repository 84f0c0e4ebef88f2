//! Projection page session lifecycle.
//!
//! DESIGN
//! ======
//! The poll and reveal loops are `spawn_local` futures that outlive any one
//! render, so the page hands them a cloned [`SessionHandle`] instead of
//! capturing signals for liveness. `stop` is called from `on_cleanup`;
//! `bump_generation` is called when the page switches events, so a poll
//! response that left under an old event is discarded when it lands.

#[cfg(test)]
#[path = "projection_test.rs"]
mod projection_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Liveness and staleness guard shared by a page and its background loops.
#[derive(Clone, Debug)]
pub struct SessionHandle {
    alive: Arc<AtomicBool>,
    generation: Arc<AtomicU64>,
}

impl SessionHandle {
    #[must_use]
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Whether the owning page is still mounted. Loops check this after
    /// every sleep and exit once it flips.
    #[must_use]
    pub fn alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Flip the liveness flag. Idempotent.
    pub fn stop(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    /// Current generation. A loop captures this before a fetch and passes it
    /// to [`Self::is_current`] when the response lands.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Relaxed)
    }

    /// Invalidate every in-flight fetch after the active event changed.
    pub fn bump_generation(&self) {
        self.generation.fetch_add(1, Ordering::Relaxed);
    }

    /// True when the session is still mounted and `generation` is current.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.alive() && self.generation() == generation
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}
