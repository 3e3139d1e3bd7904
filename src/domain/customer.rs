use serde::{Deserialize, Serialize};

/// Delivery details collected during checkout.
///
/// The customer is a transient value object: it is built from a validated
/// checkout form, carried through the flow in the cookie session and
/// snapshotted onto the order at payment time. It is never persisted on its
/// own.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address_1: String,
    pub address_2: Option<String>,
    pub zip: String,
    pub city: String,
    pub country: String,
    pub phone: Option<String>,
}

impl Customer {
    /// An all-empty customer used to prefill the delivery form when nothing
    /// is in the session yet.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether any delivery details have been entered.
    pub fn is_empty(&self) -> bool {
        self == &Self::empty()
    }
}
