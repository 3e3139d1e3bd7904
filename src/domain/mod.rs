//! Plain data records and the invariants derived from them.

pub mod auth;
pub mod category;
pub mod customer;
pub mod money;
pub mod order;
pub mod product;
pub mod shipping;
pub mod tax;
pub mod types;
pub mod variant;
