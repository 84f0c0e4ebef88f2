//! Projection display core for the workshop engagement platform.
//!
//! Pure logic with no I/O: given the latest approved-message list and the
//! event's display settings, this crate decides which notes are on screen,
//! what color each one gets, and where it sits on the viewport. The Leptos
//! client drives it from its poll and reveal timers; nothing here knows
//! about tasks, the network, or the DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`reveal`] | Staggered reveal scheduler and the displayed-note set |
//! | [`grid`] | Deterministic sticky-note grid placement |
//! | [`palette`] | Background-aware color cycling |
//! | [`consts`] | Shared numeric constants (footprint, clamps, pacing) |

pub mod consts;
pub mod grid;
pub mod palette;
pub mod reveal;
