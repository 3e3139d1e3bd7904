use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::domain::money::Price;
use crate::domain::types::{OrderId, TypeConstraintError};

/// Lifecycle state of an order.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Open,
    Paid,
    Canceled,
}

impl OrderStatus {
    /// String representation used in persistence.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Paid => "paid",
            Self::Canceled => "canceled",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for OrderStatus {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "open" => Ok(Self::Open),
            "paid" => Ok(Self::Paid),
            "canceled" => Ok(Self::Canceled),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "order status: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for OrderStatus {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<OrderStatus> for String {
    fn from(value: OrderStatus) -> Self {
        value.as_str().to_string()
    }
}

/// A placed order, looked up by id via a signed receipt link.
///
/// The `customer` field holds a JSON snapshot of the delivery details taken
/// when the order was placed; decoding it back into a
/// [`crate::domain::customer::Customer`] happens in the service layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
    pub customer: String,
    pub total: Price,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`Order`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewOrder {
    pub status: OrderStatus,
    pub customer: String,
    pub total: Price,
}
