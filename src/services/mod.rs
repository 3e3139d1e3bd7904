pub use errors::{ServiceError, ServiceResult};

pub mod checkout;
pub mod errors;
pub mod products;
pub mod shipping;
