mod cors;

use std::sync::Arc;

use actix_web::{
    App, HttpServer,
    web::{self},
};
use common::billing::{BillingProvider, StripeBilling};
use common::env_config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // get env vars
    let config = Config::from_env();
    let config_data = config.clone();

    // get info
    let is_production = config.environment == "production";
    let origin = config.cors_allowed_origin.clone();

    // init logger
    if config.console_logging_enabled {
        logger::setup().expect("Failed to set up logger");
    }

    // init db connection
    let pool = db::setup(&config.database_url, is_production)
        .await
        .expect("Failed to set up database");

    // surface billing customers still awaiting reconciliation
    match db::orphan::list_billing_orphans(&*pool).await {
        Ok(orphans) if !orphans.is_empty() => {
            log::warn!(
                "{} billing customer(s) pending reconciliation; see billing_orphans",
                orphans.len()
            );
        }
        Ok(_) => {}
        Err(err) => log::error!("could not read billing_orphans: {}", err),
    }

    // init billing provider client
    let billing: Arc<dyn BillingProvider> =
        Arc::new(StripeBilling::new(&config.stripe_secret_key));

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config_data.clone()))
            .app_data(web::Data::new(billing.clone()))
            .wrap(logger::middleware()) // 2nd
            .wrap(cors::middleware(&origin)) // 1st
            .service(web::scope("/api").service(api_users::mount_users()))
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .workers(config.num_workers)
    .run()
    .await
}
