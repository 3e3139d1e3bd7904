use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::money::Price;
use crate::domain::order::{NewOrder as DomainNewOrder, Order as DomainOrder, OrderStatus};
use crate::domain::types::TypeConstraintError;

/// Diesel model representing the `orders` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::orders)]
pub struct Order {
    pub id: i32,
    pub status: String,
    pub customer: String,
    pub total: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Order`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder {
    pub status: String,
    pub customer: String,
    pub total: i64,
}

impl TryFrom<Order> for DomainOrder {
    type Error = TypeConstraintError;

    fn try_from(order: Order) -> Result<Self, Self::Error> {
        Ok(Self {
            id: order.id.try_into()?,
            status: OrderStatus::try_from(order.status)?,
            customer: order.customer,
            total: Price::new(order.total)?,
            created_at: order.created_at,
            updated_at: order.updated_at,
        })
    }
}

impl From<DomainNewOrder> for NewOrder {
    fn from(order: DomainNewOrder) -> Self {
        Self {
            status: order.status.into(),
            customer: order.customer,
            total: order.total.minor_units(),
        }
    }
}
