use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::domain::auth::AuthenticatedUser;
use crate::forms::shipping::{AddShippingProfileForm, AddShippingProfileFormPayload};
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::shipping::{
    add_shipping_profile as add_shipping_profile_service,
    delete_shipping_profile as delete_shipping_profile_service,
    show_shipping_profiles as show_shipping_profiles_service,
};

/// Lists all shipping profiles as JSON for the control panel.
#[get("/cp/butik/shipping-profiles")]
pub async fn show_shipping_profiles(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match show_shipping_profiles_service(&user, repo.get_ref()) {
        Ok(profiles) => HttpResponse::Ok().json(profiles),
        Err(ServiceError::Unauthorized) => HttpResponse::Forbidden().finish(),
        Err(e) => {
            log::error!("Failed to list shipping profiles: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Creates a shipping profile from the control panel.
#[post("/cp/butik/shipping-profiles")]
pub async fn add_shipping_profile(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddShippingProfileForm>,
) -> impl Responder {
    let payload: AddShippingProfileFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
    };

    match add_shipping_profile_service(payload, &user, repo.get_ref()) {
        Ok(true) => HttpResponse::Created().finish(),
        Ok(false) => HttpResponse::InternalServerError().finish(),
        Err(ServiceError::Unauthorized) => HttpResponse::Forbidden().finish(),
        Err(e) => {
            log::error!("Failed to create shipping profile: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Deletes a shipping profile. Responds with an empty 200 on success;
/// products referencing the profile keep their assignment.
#[delete("/cp/butik/shipping-profiles/{id}")]
pub async fn delete_shipping_profile(
    id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_shipping_profile_service(id.into_inner(), &user, repo.get_ref()) {
        Ok(true) => HttpResponse::Ok().finish(),
        Ok(false) => HttpResponse::InternalServerError().finish(),
        Err(ServiceError::Unauthorized) => HttpResponse::Forbidden().finish(),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(e) => {
            log::error!("Failed to delete shipping profile: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
