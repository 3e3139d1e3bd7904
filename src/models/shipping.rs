use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::shipping::{
    NewShippingProfile as DomainNewShippingProfile, ShippingProfile as DomainShippingProfile,
};
use crate::domain::types::{ProfileTitle, TypeConstraintError};

/// Diesel model representing the `shipping_profiles` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::shipping_profiles)]
pub struct ShippingProfile {
    pub id: i32,
    pub title: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`ShippingProfile`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::shipping_profiles)]
pub struct NewShippingProfile {
    pub title: String,
}

impl TryFrom<ShippingProfile> for DomainShippingProfile {
    type Error = TypeConstraintError;

    fn try_from(profile: ShippingProfile) -> Result<Self, Self::Error> {
        Ok(Self {
            id: profile.id.try_into()?,
            title: ProfileTitle::new(profile.title)?,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        })
    }
}

impl From<DomainNewShippingProfile> for NewShippingProfile {
    fn from(profile: DomainNewShippingProfile) -> Self {
        Self {
            title: profile.title.into_inner(),
        }
    }
}
