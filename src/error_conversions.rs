//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service or repository error types, so
//! the conversions live here instead of next to `TypeConstraintError`.

use crate::domain::types::TypeConstraintError;
use crate::forms::checkout::CheckoutFormError;
use crate::forms::products::{AddProductFormError, AddVariantFormError};
use crate::forms::shipping::AddShippingProfileFormError;
use crate::repository::errors::RepositoryError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::Validation(val.to_string())
    }
}

impl From<CheckoutFormError> for ServiceError {
    fn from(val: CheckoutFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<AddProductFormError> for ServiceError {
    fn from(val: AddProductFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<AddVariantFormError> for ServiceError {
    fn from(val: AddVariantFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<AddShippingProfileFormError> for ServiceError {
    fn from(val: AddShippingProfileFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
