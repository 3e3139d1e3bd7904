//! View-facing data transfer objects.
//!
//! Templates and JSON responses consume these flattened shapes instead of the
//! domain records, so all money formatting and URL building happens in one
//! place.

pub mod products;
