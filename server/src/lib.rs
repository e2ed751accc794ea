//! Server library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, config, database};

use axum::{
    Router, middleware,
    http::{HeaderValue, header},
    routing::{delete, get, post, put},
};
use std::{path::Path, sync::Arc};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
};

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    use services::health;

    Router::new()
        .route("/health", get(health))
        .nest("/api/recipes", configure_recipe_routes())
        .nest("/api/collections", configure_collection_routes())
        .merge(configure_static_routes(&state.static_dir))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Configura le routes per la gestione delle ricette
fn configure_recipe_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new()
        .route("/", get(list_recipes).post(create_recipe))
        .route("/{recipe_id}", put(update_recipe).delete(delete_recipe))
}

/// Configura le routes per la gestione delle collezioni
fn configure_collection_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new()
        .route("/", get(list_collections).post(create_collection))
        .route("/add-recipe", post(add_recipe_to_collection))
        .route("/{collection_id}", delete(delete_collection))
}

/// `GET /` serve `index.html`, il resto della directory come file statici.
/// Cache disabilitata su tutto.
fn configure_static_routes(static_dir: &Path) -> Router<Arc<AppState>> {
    use services::script_content_type;

    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(script_content_type))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}
