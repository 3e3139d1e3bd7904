use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::CUSTOMER_SESSION_KEY;
use crate::domain::customer::Customer;
use crate::forms::checkout::CheckoutForm;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::checkout::{
    delivery as delivery_service, payment as payment_service, receipt as receipt_service,
};
use crate::signing::UrlSigner;

fn session_customer(session: &Session) -> Option<Customer> {
    session.get::<Customer>(CUSTOMER_SESSION_KEY).ok().flatten()
}

/// Delivery step of the checkout: shows the address form, pre-filled from
/// the session when the visitor has been here before.
#[get("/checkout/delivery")]
pub async fn show_delivery(
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let customer = delivery_service(session_customer(&session));
    let mut context = base_context(&flash_messages, "checkout");
    context.insert("customer", &customer);
    render_template(&tera, "checkout/delivery.html", &context)
}

/// Stores the submitted delivery details in the session and moves the
/// visitor on to the payment step.
#[post("/checkout/delivery")]
pub async fn save_customer_data(
    session: Session,
    web::Form(form): web::Form<CheckoutForm>,
) -> impl Responder {
    let customer: Customer = match form.try_into() {
        Ok(customer) => customer,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/checkout/delivery");
        }
    };

    if let Err(e) = session.insert(CUSTOMER_SESSION_KEY, &customer) {
        log::error!("Failed to store customer in session: {e}");
        return HttpResponse::InternalServerError().finish();
    }

    redirect("/checkout/payment")
}

/// Payment step. Visitors without delivery details in their session are sent
/// back to the delivery form.
#[get("/checkout/payment")]
pub async fn show_payment(
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match payment_service(session_customer(&session)) {
        Ok(customer) => {
            let mut context = base_context(&flash_messages, "checkout");
            context.insert("customer", &customer);
            render_template(&tera, "checkout/payment.html", &context)
        }
        Err(_) => redirect("/checkout/delivery"),
    }
}

#[derive(Deserialize)]
pub struct ReceiptQuery {
    #[serde(default)]
    pub signature: String,
}

fn invalid_receipt(flash_messages: &IncomingFlashMessages, tera: &Tera) -> HttpResponse {
    let context = base_context(flash_messages, "checkout");
    render_template(tera, "checkout/receipt_invalid.html", &context)
}

/// Receipt page reached through a signed link, without a login.
///
/// The signature covers the canonical path. Tampered links, unknown orders
/// and undecodable customer snapshots all render the same invalid-receipt
/// page. Once the order is paid the checkout session is cleared.
#[get("/checkout/receipt/{order}")]
pub async fn show_receipt(
    order: web::Path<i32>,
    query: web::Query<ReceiptQuery>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
    signer: web::Data<UrlSigner>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let order_id = order.into_inner();
    let path = format!("/checkout/receipt/{order_id}");
    if !signer.verify(&path, &query.signature) {
        return invalid_receipt(&flash_messages, &tera);
    }

    match receipt_service(order_id, repo.get_ref()) {
        Ok(receipt) => {
            if receipt.clears_session() {
                session.remove(CUSTOMER_SESSION_KEY);
            }
            let mut context = base_context(&flash_messages, "checkout");
            context.insert("order_id", &order_id);
            context.insert("order_status", receipt.order.status.as_str());
            context.insert(
                "order_total",
                &receipt.order.total.display(&config.money_format()),
            );
            context.insert("currency", &config.currency_symbol);
            context.insert("customer", &receipt.customer);
            render_template(&tera, "checkout/receipt.html", &context)
        }
        Err(ServiceError::NotFound) => invalid_receipt(&flash_messages, &tera),
        Err(e) => {
            log::error!("Failed to resolve receipt: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
