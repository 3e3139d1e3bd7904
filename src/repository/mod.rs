use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, NewCategory};
use crate::domain::order::{NewOrder, Order};
use crate::domain::product::{NewProduct, Product};
use crate::domain::shipping::{NewShippingProfile, ShippingProfile};
use crate::domain::tax::{NewTax, Tax};
use crate::domain::types::{
    CategoryId, CategoryName, OrderId, ProductSlug, ShippingProfileId, TaxId,
};
use crate::domain::variant::NewVariant;
use crate::repository::errors::RepositoryResult;

pub mod category;
pub mod errors;
pub mod order;
pub mod product;
pub mod shipping;
pub mod tax;

/// Default page size for product listings.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Offset/limit pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing shop products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Restrict to products assigned to a category.
    pub category: Option<CategoryName>,
    /// Skip products flagged unavailable.
    pub available_only: bool,
    /// Substring search on the product title.
    pub search: Option<String>,
    /// Pagination parameters.
    pub pagination: Option<Pagination>,
}

impl ProductListQuery {
    pub fn category(mut self, category: CategoryName) -> Self {
        self.category = Some(category);
        self
    }
    pub fn available_only(mut self) -> Self {
        self.available_only = true;
        self
    }
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// List products matching the supplied query parameters, with their
    /// tax, category and variant relations resolved.
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    /// Retrieve a product by its slug.
    fn get_product_by_slug(&self, slug: &ProductSlug) -> RepositoryResult<Option<Product>>;
}

/// Write operations for product entities and their category assignments.
pub trait ProductWriter {
    /// Persist a new product and link it to the given categories.
    fn create_product(
        &self,
        product: &NewProduct,
        categories: &[CategoryId],
    ) -> RepositoryResult<usize>;
    /// Persist a new variant referencing a product by slug.
    fn create_variant(&self, variant: &NewVariant) -> RepositoryResult<usize>;
}

/// Read-only operations for tax entities.
pub trait TaxReader {
    /// Retrieve a tax rate by its identifier.
    fn get_tax_by_id(&self, id: TaxId) -> RepositoryResult<Option<Tax>>;
}

/// Write operations for tax entities.
pub trait TaxWriter {
    /// Persist a new tax rate.
    fn create_tax(&self, tax: &NewTax) -> RepositoryResult<usize>;
}

/// Read-only operations for shipping profiles.
pub trait ShippingProfileReader {
    /// List all shipping profiles.
    fn list_shipping_profiles(&self) -> RepositoryResult<Vec<ShippingProfile>>;
    /// Retrieve a shipping profile by its identifier.
    fn get_shipping_profile_by_id(
        &self,
        id: ShippingProfileId,
    ) -> RepositoryResult<Option<ShippingProfile>>;
}

/// Write operations for shipping profiles.
pub trait ShippingProfileWriter {
    /// Persist a new shipping profile.
    fn create_shipping_profile(&self, profile: &NewShippingProfile) -> RepositoryResult<usize>;
    /// Delete a shipping profile, returning the number of removed rows.
    /// Products referencing the profile are left untouched.
    fn delete_shipping_profile(&self, id: ShippingProfileId) -> RepositoryResult<usize>;
}

/// Read-only operations for categories.
pub trait CategoryReader {
    /// List all categories ordered by name.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
}

/// Write operations for categories.
pub trait CategoryWriter {
    /// Persist a new category.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<usize>;
}

/// Read-only operations for orders.
pub trait OrderReader {
    /// Retrieve an order by its identifier.
    fn get_order_by_id(&self, id: OrderId) -> RepositoryResult<Option<Order>>;
}

/// Write operations for orders.
pub trait OrderWriter {
    /// Persist a new order.
    fn create_order(&self, order: &NewOrder) -> RepositoryResult<usize>;
}
