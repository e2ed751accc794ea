//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Ogni modulo gestisce gli endpoint HTTP per una specifica funzionalità.

pub mod assets;
pub mod collection;
pub mod recipe;

// Re-exports per facilitare l'import
pub use assets::script_content_type;
pub use collection::{
    add_recipe_to_collection, create_collection, delete_collection, list_collections,
};
pub use recipe::{create_recipe, delete_recipe, list_recipes, update_recipe};

use axum::{http::StatusCode, response::IntoResponse};

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
