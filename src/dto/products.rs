use serde::Serialize;

use crate::domain::product::Product;
use crate::domain::variant::Variant;
use crate::models::config::ServerConfig;
use crate::{CP_ROUTE_ROOT, SHOP_ROUTE_PREFIX};

/// Variant shape handed to templates.
#[derive(Debug, Clone, Serialize)]
pub struct VariantDto {
    pub title: String,
    pub original_title: String,
}

impl From<&Variant> for VariantDto {
    fn from(variant: &Variant) -> Self {
        Self {
            title: variant.title.to_string(),
            original_title: variant.original_title.to_string(),
        }
    }
}

/// Product shape handed to templates and JSON responses.
///
/// Prices arrive pre-formatted so views never touch minor units.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDto {
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub price: String,
    pub currency: String,
    pub tax_percentage: f64,
    pub tax_amount: String,
    pub sold_out: bool,
    pub show_url: String,
    pub edit_url: String,
    pub has_variants: bool,
    pub variants: Vec<VariantDto>,
    pub categories: Vec<String>,
}

impl ProductDto {
    pub fn from_domain(product: &Product, config: &ServerConfig) -> Self {
        let format = config.money_format();
        Self {
            slug: product.slug.to_string(),
            title: product.title.to_string(),
            description: product.description.as_ref().map(|d| d.to_string()),
            price: product.price_display(&format),
            currency: format.currency_symbol.clone(),
            tax_percentage: product.tax_percentage().get(),
            tax_amount: product.tax_amount(&format),
            sold_out: product.is_sold_out(),
            // The generated links must match the mounted route paths.
            show_url: product.show_url(SHOP_ROUTE_PREFIX),
            edit_url: product.edit_url(CP_ROUTE_ROOT),
            has_variants: product.has_variants(),
            variants: product.variants.iter().map(VariantDto::from).collect(),
            categories: product.categories.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Price;
    use crate::domain::tax::Tax;
    use crate::domain::types::{
        ProductId, ProductSlug, ProductTitle, ShippingProfileId, Stock, TaxId, TaxPercentage,
        TaxTitle,
    };
    use chrono::DateTime;

    fn sample_config() -> ServerConfig {
        ServerConfig {
            database_url: "db.sqlite".into(),
            bind_address: "127.0.0.1:8080".into(),
            secret_key: "secret".into(),
            decimal_separator: ",".into(),
            currency_symbol: "€".into(),
        }
    }

    fn sample_product() -> Product {
        let epoch = DateTime::from_timestamp(0, 0).unwrap().naive_utc();
        Product {
            id: ProductId::new(1).unwrap(),
            slug: ProductSlug::new("shoe").unwrap(),
            title: ProductTitle::new("Shoe").unwrap(),
            description: None,
            price: Price::new(200).unwrap(),
            stock: Stock::new(0).unwrap(),
            stock_unlimited: false,
            available: true,
            tax: Tax {
                id: TaxId::new(1).unwrap(),
                title: TaxTitle::new("Standard").unwrap(),
                percentage: TaxPercentage::new(19.0).unwrap(),
                created_at: epoch,
                updated_at: epoch,
            },
            shipping_profile_id: ShippingProfileId::new(1).unwrap(),
            categories: vec![],
            variants: vec![],
            created_at: epoch,
            updated_at: epoch,
        }
    }

    #[test]
    fn dto_formats_prices_and_urls() {
        let dto = ProductDto::from_domain(&sample_product(), &sample_config());
        assert_eq!(dto.price, "2,00");
        assert_eq!(dto.tax_amount, "0,32");
        assert_eq!(dto.currency, "€");
        assert!(dto.sold_out);
        assert_eq!(dto.show_url, "/shop/shoe");
        assert_eq!(dto.edit_url, "/cp/butik/products/shoe/edit");
    }
}
