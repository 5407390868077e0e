//! New-product form state and its submission rules.

#[cfg(test)]
#[path = "product_form_test.rs"]
mod product_form_test;

use time::OffsetDateTime;
use time::macros::format_description;

use crate::net::api::ApiError;
use crate::net::types::NewProduct;
use crate::util::validate::{FieldErrors, ValidationError};

pub const CREATE_FALLBACK_MESSAGE: &str = "Failed to initiate product creation on blockchain";
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error - ensure the server is running and local blockchain node is active";

/// Selectable product categories: wire value and display label.
pub const CATEGORIES: [(&str, &str); 5] = [
    ("ELECTRONICS", "Electronics"),
    ("APPAREL", "Apparel"),
    ("FOOD", "Food & Beverage"),
    ("INDUSTRIAL", "Industrial"),
    ("PHARMA", "Pharmaceuticals"),
];

/// Raw form values as typed, before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub product_code: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub batch_number: String,
    pub weight_grams: String,
    /// `datetime-local` input value, `YYYY-MM-DDTHH:MM`.
    pub manufactured_at: String,
    pub initial_location: String,
}

impl ProductDraft {
    /// Empty draft with the manufacture time prefilled from `now` (UTC).
    #[must_use]
    pub fn new(now: OffsetDateTime) -> Self {
        Self { manufactured_at: datetime_local(now), ..Self::default() }
    }

    #[must_use]
    pub fn errors(&self) -> Vec<ValidationError> {
        let mut out = Vec::new();
        if self.product_code.trim().is_empty() {
            out.push(ValidationError::new("productCode", "Product code is required"));
        }
        if self.name.trim().is_empty() {
            out.push(ValidationError::new("name", "Product name is required"));
        }
        if self.category.is_empty() {
            out.push(ValidationError::new("category", "Category is required"));
        } else if !CATEGORIES.iter().any(|(value, _)| *value == self.category) {
            out.push(ValidationError::new("category", "Select a listed category"));
        }
        if self.weight().is_err() {
            out.push(ValidationError::new("weightGrams", "Weight must be a whole number of grams"));
        }
        out
    }

    /// Request body, or the per-field errors that block submission.
    ///
    /// # Errors
    ///
    /// Returns the [`FieldErrors`] when any field is invalid.
    pub fn to_request(&self) -> Result<NewProduct, FieldErrors> {
        let errors: FieldErrors = self.errors().into_iter().collect();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(NewProduct {
            product_code: self.product_code.trim().to_owned(),
            name: self.name.trim().to_owned(),
            description: self.description.clone(),
            category: self.category.clone(),
            batch_number: self.batch_number.trim().to_owned(),
            weight_grams: self.weight().unwrap_or(None),
            manufactured_at: self.manufactured_at.clone(),
            initial_location: self.initial_location.trim().to_owned(),
        })
    }

    /// Blank weight is "not given".
    fn weight(&self) -> Result<Option<i64>, std::num::ParseIntError> {
        let raw = self.weight_grams.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some)
    }
}

/// Message shown when `POST /products` fails.
#[must_use]
pub fn create_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Transport(_) => NETWORK_ERROR_MESSAGE.to_owned(),
        _ => err.user_message(CREATE_FALLBACK_MESSAGE),
    }
}

fn datetime_local(at: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]");
    at.format(&format).unwrap_or_default()
}
