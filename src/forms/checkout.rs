use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::customer::Customer;

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Delivery details submitted from the checkout form.
#[derive(Deserialize, Validate)]
pub struct CheckoutForm {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub address_1: String,
    pub address_2: Option<String>,
    #[validate(length(min = 1))]
    pub zip: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub country: String,
    pub phone: Option<String>,
}

#[derive(Debug, Error)]
pub enum CheckoutFormError {
    #[error("Checkout form validation failed: {0}")]
    Validation(String),
}

impl From<ValidationErrors> for CheckoutFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl TryFrom<CheckoutForm> for Customer {
    type Error = CheckoutFormError;

    fn try_from(value: CheckoutForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Customer {
            first_name: value.first_name.trim().to_string(),
            last_name: value.last_name.trim().to_string(),
            email: value.email.trim().to_string(),
            address_1: value.address_1.trim().to_string(),
            address_2: normalize_optional(value.address_2),
            zip: value.zip.trim().to_string(),
            city: value.city.trim().to_string(),
            country: value.country.trim().to_string(),
            phone: normalize_optional(value.phone),
        })
    }
}
