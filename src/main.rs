use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use luna_engine::config::Settings;
use luna_engine::routes::{self, handle_json_payload_error, handle_query_payload_error, AppState};
use luna_engine::services::{BookingAgent, DataRepository, InMemoryRepository};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    // Initialize logging, environment wins over the config file
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Luna recommendation service...");

    // Initialize data repository
    let repository: Arc<dyn DataRepository> = match &settings.data.seed_path {
        Some(path) => match InMemoryRepository::from_json_file(path) {
            Ok(repo) => {
                info!("Loaded {} users and {} venues from {}", repo.user_count(), repo.venue_count(), path);
                Arc::new(repo)
            }
            Err(e) => {
                error!("Failed to load seed data: {}", e);
                return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()));
            }
        },
        None => {
            let repo = InMemoryRepository::sample();
            info!("Using built-in sample data ({} users, {} venues)", repo.user_count(), repo.venue_count());
            Arc::new(repo)
        }
    };

    let booking_agent = BookingAgent::new(
        settings.booking.id_prefix.clone(),
        settings.booking.starting_counter,
    );

    info!("Recommendation limits: {:?}", settings.recommendations);

    // Build application state
    let app_state = AppState::new(repository, booking_agent, settings.recommendations);

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
