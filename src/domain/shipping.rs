use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ProfileTitle, ShippingProfileId};

/// A named shipping configuration referenced by products.
///
/// Profiles are deletable independently of the products pointing at them;
/// affected products keep their dangling reference until re-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingProfile {
    pub id: ShippingProfileId,
    pub title: ProfileTitle,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`ShippingProfile`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewShippingProfile {
    pub title: ProfileTitle,
}
