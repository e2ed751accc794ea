//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene tutti i componenti "core" dell'applicazione:
//! - Configurazione
//! - Connessione e schema del database
//! - Gestione errori ed extractor
//! - Stato applicazione

pub mod config;
pub mod database;
pub mod error;
pub mod extract;
pub mod state;

// Re-exports per facilitare l'import
pub use config::Config;
pub use error::AppError;
pub use extract::{ValidJson, ValidPath};
pub use state::AppState;
