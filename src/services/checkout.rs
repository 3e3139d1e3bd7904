use crate::domain::customer::Customer;
use crate::domain::order::{Order, OrderStatus};
use crate::domain::types::OrderId;
use crate::repository::OrderReader;

use super::{ServiceError, ServiceResult};

/// A verified receipt: the order plus the decoded customer snapshot.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub order: Order,
    pub customer: Customer,
}

impl Receipt {
    /// The session customer is dropped once the order has been paid.
    pub fn clears_session(&self) -> bool {
        self.order.status == OrderStatus::Paid
    }
}

/// Customer shown on the delivery form: the one from the current checkout,
/// or an empty one when the flow has just started.
pub fn delivery(current: Option<Customer>) -> Customer {
    current.unwrap_or_else(Customer::empty)
}

/// Customer for the payment page. Without delivery details there is nothing
/// to pay for yet, so the caller redirects back to the delivery step.
pub fn payment(current: Option<Customer>) -> ServiceResult<Customer> {
    current.ok_or(ServiceError::NotFound)
}

/// Resolves a receipt link to its order and customer snapshot.
///
/// Every failure collapses into `NotFound`: the route renders the same
/// generic invalid-receipt page whether the id is unknown, non-positive or
/// the stored snapshot cannot be decoded. Signature verification happens
/// before this is called.
pub fn receipt<R>(order_id: i32, repo: &R) -> ServiceResult<Receipt>
where
    R: OrderReader,
{
    let order_id = match OrderId::new(order_id) {
        Ok(id) => id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    let order = match repo.get_order_by_id(order_id) {
        Ok(Some(order)) => order,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get order: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let customer: Customer = match serde_json::from_str(&order.customer) {
        Ok(customer) => customer,
        Err(e) => {
            log::error!("Undecodable customer snapshot on order {order_id}: {e}");
            return Err(ServiceError::NotFound);
        }
    };

    Ok(Receipt { order, customer })
}
