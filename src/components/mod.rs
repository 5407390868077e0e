//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and form pieces while reading shared
//! state from Leptos context providers.

pub mod field_error;
pub mod sidebar;
pub mod stat_card;
