use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::money::Price;
use crate::domain::product::{NewProduct as DomainNewProduct, Product as DomainProduct};
use crate::domain::tax::Tax;
use crate::domain::types::{
    CategoryName, ProductDescription, ProductSlug, ProductTitle, Stock, TypeConstraintError,
};
use crate::domain::variant::Variant;

/// Diesel model representing the `products` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub price: i64,
    pub stock: Option<i32>,
    pub stock_unlimited: bool,
    pub available: bool,
    pub tax_id: i32,
    pub shipping_profile_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Product`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub price: i64,
    pub stock: Option<i32>,
    pub stock_unlimited: bool,
    pub available: bool,
    pub tax_id: i32,
    pub shipping_profile_id: i32,
}

impl Product {
    /// Assembles a domain product from the row and its resolved relations.
    pub fn into_domain(
        self,
        tax: Tax,
        categories: Vec<CategoryName>,
        variants: Vec<Variant>,
    ) -> Result<DomainProduct, TypeConstraintError> {
        Ok(DomainProduct {
            id: self.id.try_into()?,
            slug: ProductSlug::new(self.slug)?,
            title: ProductTitle::new(self.title)?,
            description: self.description.map(ProductDescription::new).transpose()?,
            price: Price::new(self.price)?,
            // A NULL stock column reads as nothing on stock.
            stock: Stock::new(self.stock.unwrap_or(0))?,
            stock_unlimited: self.stock_unlimited,
            available: self.available,
            tax,
            shipping_profile_id: self.shipping_profile_id.try_into()?,
            categories,
            variants,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl From<DomainNewProduct> for NewProduct {
    fn from(product: DomainNewProduct) -> Self {
        Self {
            slug: product.slug.into_inner(),
            title: product.title.into_inner(),
            description: product.description.map(ProductDescription::into_inner),
            price: product.price.minor_units(),
            stock: Some(product.stock.get()),
            stock_unlimited: product.stock_unlimited,
            available: product.available,
            tax_id: product.tax_id.get(),
            shipping_profile_id: product.shipping_profile_id.get(),
        }
    }
}
