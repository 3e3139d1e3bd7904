use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::tax::{NewTax as DomainNewTax, Tax as DomainTax};
use crate::domain::types::{TaxPercentage, TaxTitle, TypeConstraintError};

/// Diesel model representing the `taxes` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::taxes)]
pub struct Tax {
    pub id: i32,
    pub title: String,
    pub percentage: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Tax`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::taxes)]
pub struct NewTax {
    pub title: String,
    pub percentage: f64,
}

impl TryFrom<Tax> for DomainTax {
    type Error = TypeConstraintError;

    fn try_from(tax: Tax) -> Result<Self, Self::Error> {
        Ok(Self {
            id: tax.id.try_into()?,
            title: TaxTitle::new(tax.title)?,
            percentage: TaxPercentage::new(tax.percentage)?,
            created_at: tax.created_at,
            updated_at: tax.updated_at,
        })
    }
}

impl From<DomainNewTax> for NewTax {
    fn from(tax: DomainNewTax) -> Self {
        Self {
            title: tax.title.into_inner(),
            percentage: tax.percentage.get(),
        }
    }
}
