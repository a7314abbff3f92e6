// src/bin/instrument_server.rs
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};

use instrument_key_api::config::ServiceConfig;
use instrument_key_api::dataset::InstrumentTable;
use instrument_key_api::server::{get_instrument, health_check, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = ServiceConfig::from_env().expect("Missing config");

    // A missing or broken dataset is fatal: never start serving without it.
    let instruments = match InstrumentTable::load(&config.dataset_path) {
        Ok(table) => table,
        Err(e) => {
            error!("❌ Failed to load dataset {}: {}", config.dataset_path.display(), e);
            std::process::exit(1);
        }
    };

    let bind_address = config.bind_address();
    let state = web::Data::new(AppState::new(config, instruments));
    info!("Session {} serving {} instruments", state.session_id, state.instruments.len());

    println!("🚀 Instrument key API running on http://{}", bind_address);
    println!("📋 Available endpoints:");
    println!("  • GET /get_instrument - Look up instruments by trading symbol");
    println!("  • GET /health         - Health check");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .route("/get_instrument", web::get().to(get_instrument))
            .route("/health", web::get().to(health_check))
    })
    .bind(&bind_address)?
    .run()
    .await
}
