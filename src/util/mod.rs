//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the logic stays testable without a browser.

pub mod auth;
pub mod query;
pub mod storage;
pub mod validate;
