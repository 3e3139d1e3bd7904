use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, web};
use actix_web_flash_messages::FlashMessagesFramework;
use actix_web_flash_messages::storage::CookieMessageStore;
use tera::Tera;

use butik::db::establish_connection_pool;
use butik::models::config::ServerConfig;
use butik::repository::DieselRepository;
use butik::routes::checkout::{save_customer_data, show_delivery, show_payment, show_receipt};
use butik::routes::products::{add_product, add_variant, show_product, show_shop};
use butik::routes::shipping::{
    add_shipping_profile, delete_shipping_profile, show_shipping_profiles,
};
use butik::signing::UrlSigner;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config: ServerConfig = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::with_prefix("BUTIK"))
        .build()
        .and_then(|c| c.try_deserialize())
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    let pool = establish_connection_pool(&config.database_url)
        .map_err(|e| std::io::Error::other(format!("Failed to create a database pool: {e}")))?;
    let repo = DieselRepository::new(pool);

    let tera = Tera::new("templates/**/*")
        .map_err(|e| std::io::Error::other(format!("Failed to load templates: {e}")))?;

    // Cookie signing requires at least 32 bytes of key material.
    let secret_key = Key::derive_from(config.secret_key.as_bytes());
    let signer = UrlSigner::new(&config.secret_key);
    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let bind_address = config.bind_address.clone();
    log::info!("Starting butik on {bind_address}");

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(SessionMiddleware::new(
                CookieSessionStore::default(),
                secret_key.clone(),
            ))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(signer.clone()))
            .app_data(web::Data::new(tera.clone()))
            .service(show_shop)
            .service(show_product)
            .service(add_product)
            .service(add_variant)
            .service(show_delivery)
            .service(save_customer_data)
            .service(show_payment)
            .service(show_receipt)
            .service(show_shipping_profiles)
            .service(add_shipping_profile)
            .service(delete_shipping_profile)
    })
    .bind(bind_address)?
    .run()
    .await
}
