//! Dashboard-home presentation: headline counters and the role badge.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::types::{DashboardStats, Role, User};

/// One headline counter on the dashboard home.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: u64,
    /// CSS modifier picking the card's accent colour.
    pub tone: &'static str,
}

/// Cards in display order. "Verified" counts products at a retailer;
/// violations are not reported by the server yet and always read 0.
#[must_use]
pub fn stat_cards(stats: &DashboardStats) -> [StatCard; 4] {
    [
        StatCard { title: "Total Products", value: stats.total_products, tone: "indigo" },
        StatCard { title: "In Transit", value: stats.in_transit, tone: "blue" },
        StatCard { title: "Verified", value: stats.at_retailer, tone: "green" },
        StatCard { title: "Violations", value: 0, tone: "red" },
    ]
}

/// Badge class for a role.
#[must_use]
pub fn role_badge(role: &Role) -> &'static str {
    match role {
        Role::Manufacturer => "role-badge role-badge--manufacturer",
        Role::Distributor => "role-badge role-badge--distributor",
        Role::Retailer => "role-badge role-badge--retailer",
        Role::Customer => "role-badge role-badge--customer",
        Role::Admin | Role::Other(_) => "role-badge",
    }
}

#[must_use]
pub fn greeting(user: &User) -> String {
    format!("Welcome back, {}!", user.first_name)
}

/// `"Acme • MANUFACTURER"`.
#[must_use]
pub fn affiliation(user: &User) -> String {
    format!("{} \u{2022} {}", user.company, user.role)
}
