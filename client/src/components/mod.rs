//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render one card or list each and stay presentational: pages
//! own fetching and navigation, and hand results down as props or
//! callbacks.

pub mod access_code_card;
pub mod access_gate;
pub mod export_buttons;
pub mod message_form;
pub mod moderation_list;
pub mod qr_image;
pub mod settings_editor;
pub mod sticky_note;
