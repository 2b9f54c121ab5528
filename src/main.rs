use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use clinic_search::config::Settings;
use clinic_search::routes::{self, clinics::AppState, handle_json_payload_error};
use clinic_search::services::{ClinicAggregator, DataFetcher, FeedClient};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        panic!("Configuration error: {}", e);
    });

    // Initialize logging; RUST_LOG overrides the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.logging.level.clone()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting clinic search service...");
    info!("Configuration loaded successfully");

    // Initialize the feed client and aggregator
    let feeds = FeedClient::new(
        settings.feeds.dental_url.clone(),
        settings.feeds.vet_url.clone(),
        settings.feeds.timeout_secs,
    );

    let fetcher: Arc<dyn DataFetcher> = Arc::new(ClinicAggregator::new(feeds));

    info!(
        "Feed client initialized (timeout: {}s)",
        settings.feeds.timeout_secs
    );

    // Build application state
    let app_state = AppState { fetcher };

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
