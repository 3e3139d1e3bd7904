use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use serde::Serialize;
use tera::{Context, Tera};

pub mod checkout;
pub mod products;
pub mod shipping;

#[derive(Serialize)]
struct Alert {
    level: &'static str,
    message: String,
}

fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Debug => "secondary",
        Level::Info => "info",
        Level::Success => "success",
        Level::Warning => "warning",
        Level::Error => "danger",
    }
}

/// Base template context with flash alerts and the current page marker.
pub fn base_context(flash_messages: &IncomingFlashMessages, current_page: &str) -> Context {
    let alerts: Vec<Alert> = flash_messages
        .iter()
        .map(|m| Alert {
            level: alert_level_to_str(&m.level()),
            message: m.content().to_string(),
        })
        .collect();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

/// Renders a Tera template to an HTML response, logging render failures.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok().content_type("text/html").body(body),
        Err(e) => {
            log::error!("Failed to render template {template}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// 303 redirect to the given location.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}
