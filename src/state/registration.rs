//! Registration wizard state: role choice, two steps of fields, and the
//! validation that gates each step.
//!
//! DESIGN
//! ======
//! Step 1 collects personal details and credentials; step 2 the
//! organization and wallet identity. Each step validates only its own
//! fields. Errors are keyed by the wire field name and cleared as soon as
//! the user edits that field.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use crate::net::types::{RegistrationRequest, Role};
use crate::util::validate::{FieldErrors, ValidationError, check_email, is_wallet_address};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const DEFAULT_LOCALE: &str = "en_US";
pub const REGISTRATION_FALLBACK_MESSAGE: &str = "Registration failed. Please try again.";

// =============================================================================
// ROLE PROFILES
// =============================================================================

/// Marketing copy shown on a role's selection card and form header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleProfile {
    pub role: Role,
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 5],
}

/// One profile per self-registrable role, in display order.
pub static ROLE_PROFILES: [RoleProfile; 4] = [
    RoleProfile {
        role: Role::Manufacturer,
        title: "Manufacturer Registration",
        description: "Create, track, and manage your products throughout the supply chain",
        features: [
            "Create and register products on blockchain",
            "Track products from manufacturing to sale",
            "Manage product metadata and specifications",
            "Monitor supply chain analytics",
            "Quality assurance tracking",
        ],
    },
    RoleProfile {
        role: Role::Distributor,
        title: "Distributor Registration",
        description: "Manage product distribution and logistics across the supply chain",
        features: [
            "Receive products from manufacturers",
            "Update product locations and status",
            "Manage inventory across warehouses",
            "Coordinate with retailers",
            "Track shipping and delivery",
        ],
    },
    RoleProfile {
        role: Role::Retailer,
        title: "Retailer Registration",
        description: "Sell products and provide final customer experience",
        features: [
            "Receive products from distributors",
            "Manage retail inventory",
            "Complete final sales transactions",
            "Customer interaction tracking",
            "Sales analytics and reporting",
        ],
    },
    RoleProfile {
        role: Role::Customer,
        title: "Customer Registration",
        description: "Track and verify your purchased products",
        features: [
            "Verify product authenticity",
            "View complete product history",
            "Track product journey",
            "Quality and safety information",
            "Direct manufacturer communication",
        ],
    },
];

/// Profile for `role`; `None` for roles that cannot self-register.
#[must_use]
pub fn role_profile(role: &Role) -> Option<&'static RoleProfile> {
    ROLE_PROFILES.iter().find(|profile| &profile.role == role)
}

// =============================================================================
// FORM
// =============================================================================

/// Editable registration fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegistrationField {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
    PhoneNumber,
    Company,
    JobTitle,
    Department,
    Address,
    WalletAddress,
}

impl RegistrationField {
    /// Wire name, also the key under which field errors are stored.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::PhoneNumber => "phoneNumber",
            Self::Company => "company",
            Self::JobTitle => "jobTitle",
            Self::Department => "department",
            Self::Address => "address",
            Self::WalletAddress => "walletAddress",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegistrationStep {
    /// Personal details and credentials.
    #[default]
    Details,
    /// Company and wallet identity.
    Organization,
}

/// In-progress registration for one chosen role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationForm {
    pub role: Role,
    pub step: RegistrationStep,
    pub errors: FieldErrors,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    confirm_password: String,
    phone_number: String,
    company: String,
    job_title: String,
    department: String,
    address: String,
    wallet_address: String,
    timezone: Option<String>,
}

impl RegistrationForm {
    /// Blank form for `role`. `timezone` is the browser's IANA zone, if known.
    #[must_use]
    pub fn new(role: Role, timezone: Option<String>) -> Self {
        Self {
            role,
            step: RegistrationStep::Details,
            errors: FieldErrors::default(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            phone_number: String::new(),
            company: String::new(),
            job_title: String::new(),
            department: String::new(),
            address: String::new(),
            wallet_address: String::new(),
            timezone,
        }
    }

    #[must_use]
    pub fn value(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::FirstName => &self.first_name,
            RegistrationField::LastName => &self.last_name,
            RegistrationField::Email => &self.email,
            RegistrationField::Password => &self.password,
            RegistrationField::ConfirmPassword => &self.confirm_password,
            RegistrationField::PhoneNumber => &self.phone_number,
            RegistrationField::Company => &self.company,
            RegistrationField::JobTitle => &self.job_title,
            RegistrationField::Department => &self.department,
            RegistrationField::Address => &self.address,
            RegistrationField::WalletAddress => &self.wallet_address,
        }
    }

    /// Update `field` and drop any error shown for it.
    pub fn set(&mut self, field: RegistrationField, value: impl Into<String>) {
        let slot = match field {
            RegistrationField::FirstName => &mut self.first_name,
            RegistrationField::LastName => &mut self.last_name,
            RegistrationField::Email => &mut self.email,
            RegistrationField::Password => &mut self.password,
            RegistrationField::ConfirmPassword => &mut self.confirm_password,
            RegistrationField::PhoneNumber => &mut self.phone_number,
            RegistrationField::Company => &mut self.company,
            RegistrationField::JobTitle => &mut self.job_title,
            RegistrationField::Department => &mut self.department,
            RegistrationField::Address => &mut self.address,
            RegistrationField::WalletAddress => &mut self.wallet_address,
        };
        *slot = value.into();
        self.errors.clear(field.name());
    }

    #[must_use]
    pub fn error(&self, field: RegistrationField) -> Option<&str> {
        self.errors.get(field.name())
    }

    /// Problems with the step 1 fields, in display order.
    #[must_use]
    pub fn details_errors(&self) -> Vec<ValidationError> {
        let mut out = Vec::new();
        if self.first_name.trim().is_empty() {
            out.push(ValidationError::new("firstName", "First name is required"));
        }
        if self.last_name.trim().is_empty() {
            out.push(ValidationError::new("lastName", "Last name is required"));
        }
        check_email(&self.email, &mut out);
        if self.password.is_empty() {
            out.push(ValidationError::new("password", "Password is required"));
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            out.push(ValidationError::new("password", "Password must be at least 8 characters"));
        }
        if self.password != self.confirm_password {
            out.push(ValidationError::new("confirmPassword", "Passwords do not match"));
        }
        out
    }

    /// Problems with the step 2 fields.
    #[must_use]
    pub fn organization_errors(&self) -> Vec<ValidationError> {
        let mut out = Vec::new();
        if self.company.trim().is_empty() {
            out.push(ValidationError::new("company", "Company name is required"));
        }
        let wallet = self.wallet_address.trim();
        if wallet.is_empty() {
            out.push(ValidationError::new("walletAddress", "Wallet address is required"));
        } else if !is_wallet_address(wallet) {
            out.push(ValidationError::new("walletAddress", "Valid Ethereum wallet address is required"));
        }
        out
    }

    /// Validate step 1 and move to step 2 if it passes. Returns whether the
    /// step changed.
    pub fn advance(&mut self) -> bool {
        self.errors = self.details_errors().into_iter().collect();
        if self.errors.is_empty() {
            self.step = RegistrationStep::Organization;
        }
        self.step == RegistrationStep::Organization
    }

    /// Back to step 1; values are kept.
    pub fn back(&mut self) {
        self.step = RegistrationStep::Details;
    }

    /// Validate step 2 and build the request body, or record the errors.
    pub fn prepare_submit(&mut self) -> Option<RegistrationRequest> {
        self.errors = self.organization_errors().into_iter().collect();
        if !self.errors.is_empty() {
            return None;
        }
        Some(RegistrationRequest {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            phone_number: optional(&self.phone_number),
            role: self.role.clone(),
            company: self.company.trim().to_owned(),
            job_title: optional(&self.job_title),
            department: optional(&self.department),
            address: optional(&self.address),
            wallet_address: self.wallet_address.trim().to_owned(),
            timezone: self.timezone.clone(),
            locale: Some(DEFAULT_LOCALE.to_owned()),
        })
    }
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
