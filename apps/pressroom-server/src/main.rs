//! # Pressroom Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use pressroom_core::ports::PostRepository;
use pressroom_infra::{InMemoryPostStore, JsonFilePostStore};

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::{AppConfig, StorageConfig};
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_telemetry(&config.telemetry);

    tracing::info!("Starting Pressroom on {}:{}", config.host, config.port);

    // Keep a concrete handle on the file store so it can be closed at shutdown.
    let (posts, file_store): (Arc<dyn PostRepository>, Option<Arc<JsonFilePostStore>>) =
        match config.storage {
            StorageConfig::File(store_config) => {
                let store = Arc::new(
                    JsonFilePostStore::open(store_config)
                        .await
                        .map_err(std::io::Error::other)?,
                );
                (store.clone() as Arc<dyn PostRepository>, Some(store))
            }
            StorageConfig::Memory => {
                tracing::warn!("Using in-memory post store; posts are lost on restart");
                (Arc::new(InMemoryPostStore::new()) as Arc<dyn PostRepository>, None)
            }
        };

    let state = AppState::new(posts);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    if let Some(store) = file_store {
        store.close().await;
    }

    tracing::info!("Pressroom stopped");
    Ok(())
}
