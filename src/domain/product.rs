use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::money::{MoneyFormat, Price};
use crate::domain::tax::Tax;
use crate::domain::types::{
    CategoryName, ProductDescription, ProductId, ProductSlug, ProductTitle, ShippingProfileId,
    Stock, TaxId, TaxPercentage,
};
use crate::domain::variant::Variant;

/// A shop product with its resolved tax rate, categories and variants.
///
/// The record is plain data; persistence lives in the repository layer. All
/// derived values (price strings, tax amounts, sold-out state, URLs) are
/// read-only accessors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub slug: ProductSlug,
    pub title: ProductTitle,
    pub description: Option<ProductDescription>,
    /// Gross price in minor currency units.
    pub price: Price,
    pub stock: Stock,
    pub stock_unlimited: bool,
    pub available: bool,
    pub tax: Tax,
    pub shipping_profile_id: ShippingProfileId,
    pub categories: Vec<CategoryName>,
    pub variants: Vec<Variant>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Information required to create a new [`Product`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub slug: ProductSlug,
    pub title: ProductTitle,
    pub description: Option<ProductDescription>,
    pub price: Price,
    pub stock: Stock,
    pub stock_unlimited: bool,
    pub available: bool,
    pub tax_id: TaxId,
    pub shipping_profile_id: ShippingProfileId,
}

impl Product {
    /// Human-readable price string, e.g. `200` minor units → `"2,00"`.
    pub fn price_display(&self, format: &MoneyFormat) -> String {
        self.price.display(format)
    }

    /// Percentage of the associated tax rate.
    pub fn tax_percentage(&self) -> TaxPercentage {
        self.tax.percentage
    }

    /// Tax share contained in the gross price, humanized like
    /// [`Self::price_display`].
    pub fn tax_amount(&self, format: &MoneyFormat) -> String {
        self.price.tax_amount(self.tax.percentage, format)
    }

    /// A product is sold out when nothing is on stock and the stock is not
    /// flagged unlimited.
    pub fn is_sold_out(&self) -> bool {
        self.stock.get() == 0 && !self.stock_unlimited
    }

    /// Control-panel edit URL for this product.
    pub fn edit_url(&self, cp_root: &str) -> String {
        format!("/{cp_root}/butik/products/{}/edit", self.slug)
    }

    /// Public shop URL for this product.
    pub fn show_url(&self, shop_prefix: &str) -> String {
        format!("/{shop_prefix}/{}", self.slug)
    }

    /// Looks up a variant by its original title. The match is exact; a miss
    /// is `None`, never an error.
    pub fn variant(&self, original_title: &str) -> Option<&Variant> {
        self.variants
            .iter()
            .find(|v| v.original_title.as_str() == original_title)
    }

    /// Whether any variants reference this product.
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{TaxTitle, VariantId, VariantTitle};
    use chrono::DateTime;

    fn epoch() -> NaiveDateTime {
        DateTime::from_timestamp(0, 0).unwrap().naive_utc()
    }

    fn sample_tax(percentage: f64) -> Tax {
        Tax {
            id: TaxId::new(1).unwrap(),
            title: TaxTitle::new("Standard").unwrap(),
            percentage: TaxPercentage::new(percentage).unwrap(),
            created_at: epoch(),
            updated_at: epoch(),
        }
    }

    fn sample_product() -> Product {
        Product {
            id: ProductId::new(1).unwrap(),
            slug: ProductSlug::new("shoe").unwrap(),
            title: ProductTitle::new("Shoe").unwrap(),
            description: None,
            price: Price::new(200).unwrap(),
            stock: Stock::new(5).unwrap(),
            stock_unlimited: false,
            available: true,
            tax: sample_tax(19.0),
            shipping_profile_id: ShippingProfileId::new(1).unwrap(),
            categories: vec![],
            variants: vec![],
            created_at: epoch(),
            updated_at: epoch(),
        }
    }

    fn sample_variant(original_title: &str, title: &str) -> Variant {
        Variant {
            id: VariantId::new(1).unwrap(),
            product_slug: ProductSlug::new("shoe").unwrap(),
            title: VariantTitle::new(title).unwrap(),
            original_title: VariantTitle::new(original_title).unwrap(),
            created_at: epoch(),
            updated_at: epoch(),
        }
    }

    #[test]
    fn displays_the_price_with_two_decimals() {
        let product = sample_product();
        assert_eq!(product.price_display(&MoneyFormat::default()), "2,00");
    }

    #[test]
    fn exposes_the_tax_percentage() {
        let product = sample_product();
        assert_eq!(product.tax_percentage(), TaxPercentage::new(19.0).unwrap());
    }

    #[test]
    fn computes_the_tax_amount() {
        let product = sample_product();
        assert_eq!(product.tax_amount(&MoneyFormat::default()), "0,32");
    }

    #[test]
    fn sold_out_when_stock_is_zero() {
        let mut product = sample_product();
        product.stock = Stock::new(0).unwrap();
        assert!(product.is_sold_out());
    }

    #[test]
    fn never_sold_out_when_stock_is_unlimited() {
        let mut product = sample_product();
        product.stock = Stock::new(0).unwrap();
        product.stock_unlimited = true;
        assert!(!product.is_sold_out());
    }

    #[test]
    fn not_sold_out_with_remaining_stock() {
        assert!(!sample_product().is_sold_out());
    }

    #[test]
    fn builds_the_edit_url() {
        let product = sample_product();
        assert_eq!(product.edit_url("cp"), "/cp/butik/products/shoe/edit");
    }

    #[test]
    fn builds_the_show_url() {
        let product = sample_product();
        assert_eq!(product.show_url("shop"), "/shop/shoe");
    }

    #[test]
    fn finds_a_variant_by_original_title() {
        let mut product = sample_product();
        product.variants = vec![sample_variant("42", "42 EU")];

        let variant = product.variant("42").unwrap();
        assert_eq!(variant.title, "42 EU");
    }

    #[test]
    fn missing_variant_is_none() {
        let mut product = sample_product();
        product.variants = vec![sample_variant("42", "42 EU")];

        assert!(product.variant("not existing").is_none());
    }

    #[test]
    fn variant_lookup_is_case_exact() {
        let mut product = sample_product();
        product.variants = vec![sample_variant("Red", "Red")];

        assert!(product.variant("red").is_none());
    }

    #[test]
    fn knows_whether_variants_exist() {
        let mut product = sample_product();
        assert!(!product.has_variants());

        product.variants = vec![sample_variant("42", "42 EU")];
        assert!(product.has_variants());
    }
}
