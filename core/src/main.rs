mod cors;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, web};
use common::env_config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // get env vars
    let config = Config::from_env();
    let config_data = config.clone();

    // get info
    let logger_enabled = config.console_logging_enabled;
    let is_production = config.environment == "production";
    let origin = config.cors_allowed_origin.clone();

    // init logger
    if logger_enabled {
        logger::setup().expect("Failed to set up logger");
    }

    // session cookies are signed with this key; 64+ bytes required
    let session_key = Key::from(config.session_secret.as_bytes());

    // init in-memory store, optionally with the demo catalog
    let store = store::setup(config.seed_demo_data);

    HttpServer::new(move || {
        App::new()
            .wrap(logger::middleware(logger_enabled))
            .wrap(cors::default(&origin))
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), session_key.clone())
                    .cookie_secure(is_production)
                    .build(),
            )
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(config_data.clone()))
            .service(
                web::scope("/api")
                    .service(api_auth::mount_auth())
                    .service(
                        web::scope("/secured")
                            .wrap(api_auth::SessionGate::new())
                            .service(api_billing::mount_plans())
                            .service(api_billing::mount_customers())
                            .service(api_billing::mount_metrics()),
                    ),
            )
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .workers(config.num_workers)
    .run()
    .await
}
