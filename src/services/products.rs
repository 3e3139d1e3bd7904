use crate::CP_ACCESS_ROLE;
use crate::domain::auth::{AuthenticatedUser, check_role};
use crate::domain::product::Product;
use crate::domain::types::ProductSlug;
use crate::forms::products::{AddProductFormPayload, AddVariantFormPayload};
use crate::repository::{
    DEFAULT_ITEMS_PER_PAGE, ProductListQuery, ProductReader, ProductWriter,
    ShippingProfileReader, TaxReader,
};

use super::{ServiceError, ServiceResult};

/// Core business logic for the public shop index.
///
/// Only available products are listed; sold-out products still appear so the
/// storefront can render them as such. Returns the total match count along
/// with the requested page.
pub fn show_shop<R>(
    page: usize,
    search: Option<String>,
    repo: &R,
) -> ServiceResult<(usize, Vec<Product>)>
where
    R: ProductReader,
{
    let mut query = ProductListQuery::default()
        .available_only()
        .paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(search) = search.filter(|s| !s.trim().is_empty()) {
        query = query.search(search);
    }

    match repo.list_products(query) {
        Ok((total, products)) => Ok((total, products)),
        Err(e) => {
            log::error!("Failed to list products: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Fetches a single product for its public shop page.
pub fn show_product<R>(slug: &str, repo: &R) -> ServiceResult<Product>
where
    R: ProductReader,
{
    let slug = match ProductSlug::new(slug) {
        Ok(slug) => slug,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.get_product_by_slug(&slug) {
        Ok(Some(product)) if product.available => Ok(product),
        Ok(Some(_)) | Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Creates a product from the control panel.
///
/// Requires the `admin` role and verifies that the referenced tax rate and
/// shipping profile exist before inserting.
pub fn add_product<R>(
    payload: AddProductFormPayload,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<bool>
where
    R: ProductWriter + TaxReader + ShippingProfileReader,
{
    if !check_role(CP_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    match repo.get_tax_by_id(payload.product.tax_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get tax: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.get_shipping_profile_by_id(payload.product.shipping_profile_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get shipping profile: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.create_product(&payload.product, &[]) {
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to create product: {e}");
            Ok(false)
        }
    }
}

/// Adds a variant to an existing product from the control panel.
pub fn add_variant<R>(
    payload: AddVariantFormPayload,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<bool>
where
    R: ProductReader + ProductWriter,
{
    if !check_role(CP_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    match repo.get_product_by_slug(&payload.variant.product_slug) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.create_variant(&payload.variant) {
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to create variant: {e}");
            Ok(false)
        }
    }
}
