mod config;
mod core;
mod models;
mod routes;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use config::Settings;
use core::Ranker;
use models::WeightProfile;
use routes::scores::AppState;
use routes::{handle_json_payload_error, handle_query_payload_error};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration before logging so the subscriber can honor it
    let settings = Settings::load().unwrap_or_else(|e| {
        panic!("Configuration error: {}", e);
    });

    // Initialize logging: RUST_LOG wins, configured level otherwise
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting JobMate Match scoring service...");
    info!("Configuration loaded successfully");

    // Initialize ranker with configured weights
    let weights = WeightProfile {
        skill_match: settings.scoring.weights.skill_match,
        location_proximity: settings.scoring.weights.location_proximity,
        reputation: settings.scoring.weights.reputation,
        price_match: settings.scoring.weights.price_match,
        availability: settings.scoring.weights.availability,
        urgency: settings.scoring.weights.urgency,
    };

    let min_score = settings.matching.min_score.unwrap_or(0);
    let ranker = Ranker::new(weights).with_min_score(min_score);

    info!("Ranker initialized with weights: {:?}", weights);

    let default_limit = settings.matching.default_limit.unwrap_or(20) as usize;
    let max_limit = settings.matching.max_limit.unwrap_or(100) as usize;

    // Build application state
    let app_state = AppState {
        ranker,
        default_limit,
        max_limit,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
