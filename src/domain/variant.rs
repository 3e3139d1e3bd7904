use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ProductSlug, VariantId, VariantTitle};

/// A purchasable variation of a product, e.g. a size or a colour.
///
/// The `original_title` is the stable lookup key; the display `title` may be
/// renamed without breaking references that were created against the
/// original.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    pub product_slug: ProductSlug,
    pub title: VariantTitle,
    pub original_title: VariantTitle,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`Variant`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewVariant {
    pub product_slug: ProductSlug,
    pub title: VariantTitle,
    pub original_title: VariantTitle,
}
