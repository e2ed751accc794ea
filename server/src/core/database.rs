//! Database - Connessione SQLite e creazione dello schema
//!
//! Lo schema viene creato all'avvio se non esiste (nessuna migration).
//! `recipe_collection` dichiara `ON DELETE CASCADE` su entrambe le chiavi esterne:
//! cancellare una ricetta o una collezione rimuove anche le sue membership.

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use tracing::{debug, info, instrument};

const CREATE_RECIPES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS recipes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        ingredients TEXT NOT NULL,
        instructions TEXT NOT NULL
    )
"#;

const CREATE_COLLECTIONS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS collections (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    )
"#;

const CREATE_RECIPE_COLLECTION_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS recipe_collection (
        recipe_id INTEGER NOT NULL,
        collection_id INTEGER NOT NULL,
        FOREIGN KEY (recipe_id) REFERENCES recipes(id) ON DELETE CASCADE,
        FOREIGN KEY (collection_id) REFERENCES collections(id) ON DELETE CASCADE,
        PRIMARY KEY (recipe_id, collection_id)
    )
"#;

const SCHEMA: [(&str, &str); 3] = [
    ("recipes", CREATE_RECIPES_TABLE),
    ("collections", CREATE_COLLECTIONS_TABLE),
    ("recipe_collection", CREATE_RECIPE_COLLECTION_TABLE),
];

/// Apre il pool di connessioni verso `database_url`.
///
/// Ogni connessione ha le foreign key attive. Un database in memoria esiste
/// solo finché la sua connessione è aperta, quindi in quel caso il pool viene
/// ridotto a una sola connessione che non scade mai.
#[instrument]
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
    let pool_options = if in_memory {
        debug!("In-memory database, pinning pool to a single connection");
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    let pool = pool_options.connect_with(options).await?;
    info!("Connected to the SQLite database");
    Ok(pool)
}

/// Crea le tre tabelle se mancano. Idempotente: si può chiamare a ogni avvio.
#[instrument(skip(pool))]
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for (table, statement) in SCHEMA {
        debug!("Ensuring table {} exists", table);
        sqlx::query(statement).execute(pool).await?;
    }
    info!("Database schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn table_names(pool: &SqlitePool) -> Vec<String> {
        sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(pool)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let pool = connect("sqlite::memory:", 5).await.unwrap();
        init_schema(&pool).await.unwrap();
        init_schema(&pool).await.unwrap();

        assert_eq!(
            table_names(&pool).await,
            vec!["collections", "recipe_collection", "recipes"]
        );
    }

    #[tokio::test]
    async fn test_foreign_keys_are_enforced() {
        let pool = connect("sqlite::memory:", 5).await.unwrap();
        init_schema(&pool).await.unwrap();

        let enabled: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(enabled, 1);

        let orphan = sqlx::query("INSERT INTO recipe_collection (recipe_id, collection_id) VALUES (1, 1)")
            .execute(&pool)
            .await;
        assert!(orphan.is_err());
    }
}
