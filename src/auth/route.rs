//! Role to landing-route mapping.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use crate::net::types::Role;

pub const DEFAULT_LANDING_ROUTE: &str = "/dashboard";

impl Role {
    /// Dashboard route a user with this role lands on after sign-in.
    #[must_use]
    pub fn landing_route(&self) -> &'static str {
        match self {
            Self::Manufacturer => "/dashboard/manufacturer",
            Self::Distributor => "/dashboard/distributor",
            Self::Retailer => "/dashboard/retailer",
            Self::Customer => "/dashboard/customer",
            Self::Admin => "/dashboard/admin",
            Self::Other(_) => DEFAULT_LANDING_ROUTE,
        }
    }
}

/// Map a raw role string to its landing route. Case-insensitive and total:
/// anything outside the role set lands on `/dashboard`.
#[must_use]
pub fn resolve_landing_route(role: &str) -> &'static str {
    Role::parse(role).landing_route()
}
