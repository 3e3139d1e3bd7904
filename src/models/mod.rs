//! Diesel row types and their conversions to domain records.

pub mod category;
pub mod config;
pub mod order;
pub mod product;
pub mod shipping;
pub mod tax;
pub mod variant;
