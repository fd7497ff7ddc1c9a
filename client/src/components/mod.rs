//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome, dialogs, and forms. They receive data and
//! callbacks from the owning page and never issue network requests.

pub mod confirm_dialog;
pub mod entity_form;
pub mod error_banner;
pub mod nav_bar;
