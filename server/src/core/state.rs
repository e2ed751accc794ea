//! Application State - Stato condiviso dell'applicazione
//!
//! Contiene i repository e la configurazione necessaria alle route.
//! Viene costruito una volta in `main` e passato al router (niente stato globale).

use crate::repositories::{CollectionRepository, MembershipRepository, RecipeRepository};
use sqlx::SqlitePool;
use std::path::PathBuf;

/// Stato condiviso tra tutte le route e i middleware
pub struct AppState {
    /// Repository per la gestione delle ricette
    pub recipe: RecipeRepository,

    /// Repository per la gestione delle collezioni
    pub collection: CollectionRepository,

    /// Repository per le associazioni ricetta-collezione
    pub membership: MembershipRepository,

    /// Directory servita come client statico
    pub static_dir: PathBuf,
}

impl AppState {
    /// Crea una nuova istanza di AppState inizializzando tutti i repository
    /// con il pool di connessioni fornito.
    ///
    /// # Arguments
    /// * `pool` - Pool di connessioni SQLite condiviso (schema già inizializzato)
    /// * `static_dir` - Directory con `index.html` e gli asset del client
    pub fn new(pool: SqlitePool, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            recipe: RecipeRepository::new(pool.clone()),
            collection: CollectionRepository::new(pool.clone()),
            membership: MembershipRepository::new(pool),
            static_dir: static_dir.into(),
        }
    }
}
