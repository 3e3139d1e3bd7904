//! Butik: a small web shop service.
//!
//! Products with tax rates, categories, variants and shipping profiles are
//! managed through a control panel and served to visitors on public shop
//! pages. A cookie-session checkout collects delivery details and finished
//! orders are reachable through HMAC-signed receipt links.
//!
//! The crate is layered bottom-up: `domain` holds plain records and
//! constrained value types, `models` and `schema` the Diesel mapping,
//! `repository` the persistence traits plus their SQLite implementation,
//! `services` the business rules and `routes` the actix-web surface.

pub mod db;
pub mod domain;
pub mod dto;
mod error_conversions;
pub mod forms;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;
pub mod signing;

/// Control-panel root path segment; generated edit URLs and the mounted CP
/// routes both use it.
pub const CP_ROUTE_ROOT: &str = "cp";
/// Public shop path prefix; generated show URLs and the mounted shop routes
/// both use it.
pub const SHOP_ROUTE_PREFIX: &str = "shop";

/// Session key holding the checkout customer.
pub const CUSTOMER_SESSION_KEY: &str = "butik.customer";
/// Session key holding the authenticated control-panel user.
pub const USER_SESSION_KEY: &str = "butik.user";
/// Role required for all control-panel operations.
pub const CP_ACCESS_ROLE: &str = "admin";
