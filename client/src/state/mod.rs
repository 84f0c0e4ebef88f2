//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so individual pages can depend on small focused
//! models: `auth` holds the signed-in organizer, `projection` owns the poll
//! and reveal session lifecycle.

pub mod auth;
pub mod projection;
