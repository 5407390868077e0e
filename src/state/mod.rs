//! View-state modules for the tracker front end.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain data plus the transitions pages apply to it. Pages wrap these in
//! `RwSignal`s; nothing here touches the browser, so every rule is unit
//! tested natively.

pub mod auth;
pub mod dashboard;
pub mod product_form;
pub mod products;
pub mod registration;
pub mod tracking;
