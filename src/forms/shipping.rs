use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::shipping::NewShippingProfile;
use crate::domain::types::{ProfileTitle, TypeConstraintError};

/// Control-panel form for creating a shipping profile.
#[derive(Deserialize, Validate)]
pub struct AddShippingProfileForm {
    #[validate(length(min = 1))]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddShippingProfileFormPayload {
    pub profile: NewShippingProfile,
}

#[derive(Debug, Error)]
pub enum AddShippingProfileFormError {
    #[error("Add shipping profile form validation failed: {0}")]
    Validation(String),
    #[error("Add shipping profile form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddShippingProfileFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddShippingProfileFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddShippingProfileForm> for AddShippingProfileFormPayload {
    type Error = AddShippingProfileFormError;

    fn try_from(value: AddShippingProfileForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            profile: NewShippingProfile {
                title: ProfileTitle::new(value.title)?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_non_empty_title() {
        let form = AddShippingProfileForm {
            title: "Standard".to_string(),
        };
        let payload: AddShippingProfileFormPayload = form.try_into().unwrap();
        assert_eq!(payload.profile.title.as_str(), "Standard");
    }

    #[test]
    fn rejects_blank_titles() {
        let form = AddShippingProfileForm {
            title: "   ".to_string(),
        };
        let payload: Result<AddShippingProfileFormPayload, _> = form.try_into();
        assert!(payload.is_err());
    }
}
