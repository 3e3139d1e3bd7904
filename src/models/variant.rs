use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::types::{ProductSlug, TypeConstraintError, VariantTitle};
use crate::domain::variant::{NewVariant as DomainNewVariant, Variant as DomainVariant};

/// Diesel model representing the `variants` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::variants)]
pub struct Variant {
    pub id: i32,
    pub product_slug: String,
    pub title: String,
    pub original_title: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Variant`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::variants)]
pub struct NewVariant {
    pub product_slug: String,
    pub title: String,
    pub original_title: String,
}

impl TryFrom<Variant> for DomainVariant {
    type Error = TypeConstraintError;

    fn try_from(variant: Variant) -> Result<Self, Self::Error> {
        Ok(Self {
            id: variant.id.try_into()?,
            product_slug: ProductSlug::new(variant.product_slug)?,
            title: VariantTitle::new(variant.title)?,
            original_title: VariantTitle::new(variant.original_title)?,
            created_at: variant.created_at,
            updated_at: variant.updated_at,
        })
    }
}

impl From<DomainNewVariant> for NewVariant {
    fn from(variant: DomainNewVariant) -> Self {
        Self {
            product_slug: variant.product_slug.into_inner(),
            title: variant.title.into_inner(),
            original_title: variant.original_title.into_inner(),
        }
    }
}
