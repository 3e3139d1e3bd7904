use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::dto::products::ProductDto;
use crate::forms::products::{
    AddProductForm, AddProductFormPayload, AddVariantForm, AddVariantFormPayload,
};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::products::{
    add_product as add_product_service, add_variant as add_variant_service,
    show_product as show_product_service, show_shop as show_shop_service,
};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct ShopQuery {
    pub page: Option<usize>,
    pub search: Option<String>,
}

/// Public shop index listing all available products.
#[get("/shop")]
pub async fn show_shop(
    query: web::Query<ShopQuery>,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = query.page.unwrap_or(1).max(1);

    match show_shop_service(page, query.search.clone(), repo.get_ref()) {
        Ok((total, products)) => {
            let products: Vec<ProductDto> = products
                .iter()
                .map(|p| ProductDto::from_domain(p, &config))
                .collect();
            let mut context = base_context(&flash_messages, "shop");
            context.insert("products", &products);
            context.insert("total", &total);
            context.insert("page", &page);
            render_template(&tera, "shop/index.html", &context)
        }
        Err(e) => {
            log::error!("Failed to show shop: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Public page for a single product.
#[get("/shop/{slug}")]
pub async fn show_product(
    slug: web::Path<String>,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_product_service(&slug, repo.get_ref()) {
        Ok(product) => {
            let mut context = base_context(&flash_messages, "shop");
            context.insert("product", &ProductDto::from_domain(&product, &config));
            render_template(&tera, "shop/show.html", &context)
        }
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(e) => {
            log::error!("Failed to show product: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Creates a product from the control panel.
#[post("/cp/butik/products")]
pub async fn add_product(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddProductForm>,
) -> impl Responder {
    let payload: AddProductFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/cp/butik/products");
        }
    };

    match add_product_service(payload, &user, repo.get_ref()) {
        Ok(true) => FlashMessage::success("Product created.").send(),
        Ok(false) => FlashMessage::error("Failed to create product.").send(),
        Err(ServiceError::Unauthorized) => return HttpResponse::Forbidden().finish(),
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Unknown tax rate or shipping profile.").send()
        }
        Err(e) => {
            log::error!("Failed to create product: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    }
    redirect("/cp/butik/products")
}

/// Adds a variant to an existing product from the control panel.
#[post("/cp/butik/variants")]
pub async fn add_variant(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddVariantForm>,
) -> impl Responder {
    let payload: AddVariantFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/cp/butik/products");
        }
    };
    let product_slug = payload.variant.product_slug.to_string();

    match add_variant_service(payload, &user, repo.get_ref()) {
        Ok(true) => FlashMessage::success("Variant created.").send(),
        Ok(false) => FlashMessage::error("Failed to create variant.").send(),
        Err(ServiceError::Unauthorized) => return HttpResponse::Forbidden().finish(),
        Err(ServiceError::NotFound) => return HttpResponse::NotFound().finish(),
        Err(e) => {
            log::error!("Failed to create variant: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    }
    redirect(&format!("/cp/butik/products/{product_slug}/edit"))
}
