use actix_web::{App, HttpServer, web};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{Layer, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod catalog;
mod config;
mod filter;
mod matcher;
mod shutdown;

use crate::api::{health::health_config, jobs::JobService, jobs::handlers::jobs_config, validation};
use crate::catalog::JobCatalog;
use crate::shutdown::ShutdownCoordinator;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration from environment
    let config::Config {
        host,
        port,
        max_payload_size,
        log_dir,
        location_wildcard,
        jobs_data_path,
    } = config::Config::from_env().expect("Failed to load configuration");

    // Create logs directory if it doesn't exist
    std::fs::create_dir_all(&log_dir).expect("Failed to create logs directory");

    // File-based logging with daily rotation and level separation,
    // e.g. logs/info.2024-12-22.log, logs/error.2024-12-22.log
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    let info_file = tracing_appender::rolling::daily(&log_dir, "info.log");
    let warn_file = tracing_appender::rolling::daily(&log_dir, "warn.log");
    let error_file = tracing_appender::rolling::daily(&log_dir, "error.log");

    let info_layer = tracing_subscriber::fmt::layer()
        .with_writer(info_file)
        .with_ansi(false)
        .with_filter(LevelFilter::INFO);

    let warn_layer = tracing_subscriber::fmt::layer()
        .with_writer(warn_file)
        .with_ansi(false)
        .with_filter(LevelFilter::WARN);

    let error_layer = tracing_subscriber::fmt::layer()
        .with_writer(error_file)
        .with_ansi(false)
        .with_filter(LevelFilter::ERROR);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(info_layer)
        .with(warn_layer)
        .with(error_layer)
        .init();

    info!("Starting job-match-api application");

    // Load the job catalog once; it is shared read-only across workers
    let catalog = Arc::new(
        JobCatalog::load(jobs_data_path.as_deref()).expect("Failed to load job catalog"),
    );

    info!("Configuration loaded successfully:");
    info!("  - Bind address: {}:{}", host, port);
    info!("  - Max payload size: {} bytes", max_payload_size);
    info!("  - Location wildcard: {}", location_wildcard);
    info!("  - Catalog size: {} postings", catalog.len());

    let server_catalog = catalog.clone();
    let server_wildcard = location_wildcard.clone();

    let server = HttpServer::new(move || {
        let job_service = web::Data::new(JobService::new(
            server_catalog.clone(),
            server_wildcard.clone(),
        ));

        let payload_config = web::PayloadConfig::default().limit(max_payload_size);

        App::new()
            .app_data(web::Data::new(server_catalog.clone())) // Catalog for health checks
            .app_data(job_service)
            .app_data(payload_config)
            .app_data(validation::json_config()) // Global validation config
            .configure(health_config)
            .configure(jobs_config)
    });

    info!("Server starting on http://{}:{}", host, port);

    let server = server.bind((host.as_str(), port))?.run();

    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    let coordinator = ShutdownCoordinator::new(server_handle, server_task);
    coordinator.wait_for_shutdown().await
}
