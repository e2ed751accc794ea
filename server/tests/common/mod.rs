use axum_test::TestServer;
use recipebook_server::{AppState, config::default_static_dir, database};
use serde_json::{Value, json};
use std::sync::Arc;

/// Crea un AppState per i test su un database SQLite in memoria
///
/// # Returns
/// Arc<AppState> con schema inizializzato e il client web del crate come directory statica
pub async fn create_test_state() -> Arc<AppState> {
    let pool = database::connect("sqlite::memory:", 1)
        .await
        .expect("Failed to open in-memory database");
    database::init_schema(&pool)
        .await
        .expect("Failed to create schema");
    Arc::new(AppState::new(pool, default_static_dir()))
}

/// Crea un TestServer per i test
///
/// # Arguments
/// * `state` - AppState da utilizzare per il server
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = recipebook_server::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Inserisce una ricetta tramite l'API e ritorna l'id assegnato
pub async fn create_recipe(server: &TestServer, name: &str, ingredients: &str, instructions: &str) -> i64 {
    let response = server
        .post("/api/recipes")
        .json(&json!({
            "name": name,
            "ingredients": ingredients,
            "instructions": instructions
        }))
        .await;
    let body: Value = response.json();
    body["id"].as_i64().expect("Recipe creation should return an id")
}

/// Crea una collezione tramite l'API e ritorna l'id assegnato
pub async fn create_collection(server: &TestServer, name: &str) -> i64 {
    let response = server
        .post("/api/collections")
        .json(&json!({ "name": name }))
        .await;
    let body: Value = response.json();
    body["id"].as_i64().expect("Collection creation should return an id")
}
