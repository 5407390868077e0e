//! Wire DTOs for the tracker REST API.
//!
//! DESIGN
//! ======
//! Field names follow the server's camelCase JSON. Optional and late-added
//! fields default on decode so an older or leaner server response never
//! fails the whole screen.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// ROLES
// =============================================================================

/// Classification of a user that selects their landing route.
///
/// Unknown role strings are kept verbatim in [`Role::Other`] so they survive a
/// decode/encode round trip and fall through to the default landing route.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Manufacturer,
    Distributor,
    Retailer,
    Customer,
    Admin,
    Other(String),
}

impl Role {
    /// Roles a visitor may pick during self-registration.
    pub const REGISTRABLE: [Role; 4] = [Role::Manufacturer, Role::Distributor, Role::Retailer, Role::Customer];

    /// Case-insensitive parse; never fails.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "MANUFACTURER" => Self::Manufacturer,
            "DISTRIBUTOR" => Self::Distributor,
            "RETAILER" => Self::Retailer,
            "CUSTOMER" => Self::Customer,
            "ADMIN" => Self::Admin,
            _ => Self::Other(raw.to_owned()),
        }
    }

    /// Canonical wire spelling.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Manufacturer => "MANUFACTURER",
            Self::Distributor => "DISTRIBUTOR",
            Self::Retailer => "RETAILER",
            Self::Customer => "CUSTOMER",
            Self::Admin => "ADMIN",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// An authenticated user as returned by the login endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned user identifier.
    pub id: i64,
    /// Absent for wallet-registered accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub wallet_address: String,
}

impl User {
    /// Given and family name joined for greetings.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }
}

/// The persisted `(token, user)` pair; also the success body of both login
/// endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer credential.
    pub token: String,
    pub user: User,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordLogin {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/wallet-login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WalletLogin {
    pub address: String,
    pub signature: String,
    pub message: String,
}

/// Error body shared by every endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub role: Role,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub wallet_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

// =============================================================================
// DASHBOARD
// =============================================================================

/// Aggregate counters for the dashboard home.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_products: u64,
    pub created: u64,
    pub in_transit: u64,
    pub at_distributor: u64,
    pub at_retailer: u64,
    pub sold: u64,
}

// =============================================================================
// PRODUCTS
// =============================================================================

/// A product row in the inventory list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    #[serde(default)]
    pub blockchain_id: Option<String>,
    pub product_code: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub status: String,
    #[serde(default)]
    pub current_owner: Option<String>,
    #[serde(default)]
    pub current_location: Option<String>,
    #[serde(default)]
    pub manufactured_at: Option<String>,
}

/// One page of products.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    #[serde(default)]
    pub content: Vec<Product>,
    #[serde(default)]
    pub total_pages: u32,
}

/// Body of `POST /products`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub product_code: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub batch_number: String,
    pub weight_grams: Option<i64>,
    pub manufactured_at: String,
    pub initial_location: String,
}

// =============================================================================
// TRACKING
// =============================================================================

/// A single entry on a product's tracking timeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEvent {
    pub id: i64,
    pub event_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub timestamp: String,
    #[serde(default)]
    pub updated_by: Option<String>,
}

/// Body of the tracking-history endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingHistory {
    #[serde(default)]
    pub history: Vec<TrackingEvent>,
}
