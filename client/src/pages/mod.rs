//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod admin;
pub mod dashboard;
pub mod events;
pub mod home;
pub mod login;
pub mod projection;
