//! Session-backed authentication for control-panel routes.
//!
//! An upstream auth layer is expected to have stored the signed-in user in
//! the cookie session; this module only extracts and role-checks it.

use std::future::{Ready, ready};

use actix_session::SessionExt;
use actix_web::{FromRequest, HttpRequest, dev::Payload, error::ErrorUnauthorized};
use serde::{Deserialize, Serialize};

use crate::USER_SESSION_KEY;

/// The signed-in user as stored in the session by the auth layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub email: String,
    pub name: String,
    pub roles: Vec<String>,
}

/// Returns true when `role` is among the user's assigned roles.
pub fn check_role(role: &str, roles: &[String]) -> bool {
    roles.iter().any(|r| r == role)
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = req
            .get_session()
            .get::<AuthenticatedUser>(USER_SESSION_KEY)
            .ok()
            .flatten();

        ready(user.ok_or_else(|| ErrorUnauthorized("authentication required")))
    }
}
