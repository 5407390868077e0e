//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components` and rules to `state`.

pub mod dashboard;
pub mod login;
pub mod product_new;
pub mod products;
pub mod register;
pub mod tracking;
