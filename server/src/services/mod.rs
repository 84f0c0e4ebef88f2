//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic and persistence concerns so route
//! handlers can stay focused on protocol translation and auth plumbing.

pub mod access;
pub mod event;
pub mod export;
pub mod message;
pub mod session;
pub mod settings;
