use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{TaxId, TaxPercentage, TaxTitle};

/// A tax rate products can be associated with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tax {
    pub id: TaxId,
    pub title: TaxTitle,
    pub percentage: TaxPercentage,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`Tax`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTax {
    pub title: TaxTitle,
    pub percentage: TaxPercentage,
}
