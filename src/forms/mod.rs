//! Form structs deserialized from request bodies and validated at the edge.

pub mod checkout;
pub mod products;
pub mod shipping;
