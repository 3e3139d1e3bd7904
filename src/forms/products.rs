use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::money::Price;
use crate::domain::product::NewProduct;
use crate::domain::types::{
    ProductDescription, ProductSlug, ProductTitle, ShippingProfileId, Stock, TaxId,
    TypeConstraintError, VariantTitle,
};
use crate::domain::variant::NewVariant;

/// Control-panel form for creating a product.
///
/// The price arrives as a human decimal string ("2,00") and is converted to
/// minor units on the way in.
#[derive(Deserialize, Validate)]
pub struct AddProductForm {
    #[validate(length(min = 1))]
    pub slug: String,
    #[validate(length(min = 1))]
    pub title: String,
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub price: String,
    pub stock: Option<i32>,
    pub stock_unlimited: Option<bool>,
    pub available: Option<bool>,
    #[validate(range(min = 1))]
    pub tax_id: i32,
    #[validate(range(min = 1))]
    pub shipping_profile_id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddProductFormPayload {
    pub product: NewProduct,
}

#[derive(Debug, Error)]
pub enum AddProductFormError {
    #[error("Add product form validation failed: {0}")]
    Validation(String),
    #[error("Add product form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddProductFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddProductFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddProductForm> for AddProductFormPayload {
    type Error = AddProductFormError;

    fn try_from(value: AddProductForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let description = value
            .description
            .filter(|d| !d.trim().is_empty())
            .map(ProductDescription::new)
            .transpose()?;

        Ok(Self {
            product: NewProduct {
                slug: ProductSlug::new(value.slug)?,
                title: ProductTitle::new(value.title)?,
                description,
                price: Price::parse(&value.price)?,
                stock: Stock::new(value.stock.unwrap_or(0))?,
                stock_unlimited: value.stock_unlimited.unwrap_or(false),
                // Products are available unless explicitly disabled.
                available: value.available.unwrap_or(true),
                tax_id: TaxId::new(value.tax_id)?,
                shipping_profile_id: ShippingProfileId::new(value.shipping_profile_id)?,
            },
        })
    }
}

/// Control-panel form for adding a variant to a product.
///
/// The submitted title doubles as the `original_title`; later renames only
/// touch the display title.
#[derive(Deserialize, Validate)]
pub struct AddVariantForm {
    #[validate(length(min = 1))]
    pub product_slug: String,
    #[validate(length(min = 1))]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddVariantFormPayload {
    pub variant: NewVariant,
}

#[derive(Debug, Error)]
pub enum AddVariantFormError {
    #[error("Add variant form validation failed: {0}")]
    Validation(String),
    #[error("Add variant form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddVariantFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddVariantFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddVariantForm> for AddVariantFormPayload {
    type Error = AddVariantFormError;

    fn try_from(value: AddVariantForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let title = VariantTitle::new(value.title)?;

        Ok(Self {
            variant: NewVariant {
                product_slug: ProductSlug::new(value.product_slug)?,
                original_title: title.clone(),
                title,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> AddProductForm {
        AddProductForm {
            slug: "shoe".to_string(),
            title: "Shoe".to_string(),
            description: None,
            price: "2,00".to_string(),
            stock: Some(5),
            stock_unlimited: None,
            available: None,
            tax_id: 1,
            shipping_profile_id: 1,
        }
    }

    #[test]
    fn parses_the_price_into_minor_units() {
        let payload: AddProductFormPayload = valid_form().try_into().unwrap();
        assert_eq!(payload.product.price.minor_units(), 200);
    }

    #[test]
    fn defaults_to_available() {
        let payload: AddProductFormPayload = valid_form().try_into().unwrap();
        assert!(payload.product.available);
    }

    #[test]
    fn rejects_malformed_prices() {
        let mut form = valid_form();
        form.price = "2,000".to_string();

        let err = AddProductFormPayload::try_from(form).unwrap_err();
        assert!(matches!(err, AddProductFormError::TypeConstraint(_)));
    }

    #[test]
    fn variant_form_keeps_the_original_title() {
        let form = AddVariantForm {
            product_slug: "shoe".to_string(),
            title: "42 EU".to_string(),
        };

        let payload: AddVariantFormPayload = form.try_into().unwrap();
        assert_eq!(payload.variant.title, payload.variant.original_title);
    }
}
