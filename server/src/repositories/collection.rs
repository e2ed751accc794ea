//! CollectionRepository - Repository per la gestione delle collezioni

use super::{Create, Delete};
use crate::dtos::{CollectionDTO, CreateCollectionDTO};
use crate::entities::{Collection, Recipe};
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument, warn};

/// Una riga della LEFT JOIN collections → recipe_collection → recipes.
/// Le colonne della ricetta sono NULL per le collezioni senza membership.
#[derive(Debug, sqlx::FromRow)]
struct CollectionRecipeRow {
    collection_id: i64,
    collection_name: String,
    recipe_id: Option<i64>,
    recipe_name: Option<String>,
    ingredients: Option<String>,
    instructions: Option<String>,
}

pub struct CollectionRepository {
    connection_pool: SqlitePool,
}

impl CollectionRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Ids of collections with exactly this name, at most `limit` of them
    #[instrument(skip(self))]
    pub async fn find_ids_by_name(&self, name: &str, limit: i64) -> Result<Vec<i64>, Error> {
        debug!("Looking up collection ids by name");
        sqlx::query_scalar("SELECT id FROM collections WHERE name = ? ORDER BY id LIMIT ?")
            .bind(name)
            .bind(limit)
            .fetch_all(&self.connection_pool)
            .await
    }

    /// Every collection with its recipes, from a single join query.
    /// Collections without memberships are kept with an empty recipe list.
    #[instrument(skip(self))]
    pub async fn find_all_with_recipes(&self) -> Result<Vec<CollectionDTO>, Error> {
        debug!("Reading collections with their recipes");
        let rows = sqlx::query_as::<_, CollectionRecipeRow>(
            r#"
            SELECT
                collections.id AS collection_id,
                collections.name AS collection_name,
                recipes.id AS recipe_id,
                recipes.name AS recipe_name,
                recipes.ingredients AS ingredients,
                recipes.instructions AS instructions
            FROM collections
            LEFT JOIN recipe_collection ON collections.id = recipe_collection.collection_id
            LEFT JOIN recipes ON recipe_collection.recipe_id = recipes.id
            ORDER BY collections.id, recipes.id
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await?;

        let collections = group_rows(rows);
        debug!("Found {} collections", collections.len());
        Ok(collections)
    }
}

/// Raggruppa le righe per collection id. Le righe arrivano ordinate per
/// collezione, quindi basta confrontare con l'ultima collezione aperta.
fn group_rows(rows: Vec<CollectionRecipeRow>) -> Vec<CollectionDTO> {
    let mut collections: Vec<CollectionDTO> = Vec::new();

    for row in rows {
        let is_new = collections
            .last()
            .is_none_or(|current| current.id != row.collection_id);
        if is_new {
            collections.push(CollectionDTO {
                id: row.collection_id,
                name: row.collection_name,
                recipes: Vec::new(),
            });
        }

        // recipe_id NULL: collezione vuota (o membership orfana)
        let recipe = match (row.recipe_id, row.recipe_name, row.ingredients, row.instructions) {
            (Some(id), Some(name), Some(ingredients), Some(instructions)) => Recipe {
                id,
                name,
                ingredients,
                instructions,
            },
            _ => continue,
        };

        if let Some(current) = collections.last_mut() {
            current.recipes.push(recipe);
        }
    }

    collections
}

impl Create<Collection, CreateCollectionDTO> for CollectionRepository {
    #[instrument(skip(self, data), fields(name = %data.name))]
    async fn create(&self, data: &CreateCollectionDTO) -> Result<Collection, Error> {
        debug!("Creating new collection");
        let result = sqlx::query("INSERT INTO collections (name) VALUES (?)")
            .bind(&data.name)
            .execute(&self.connection_pool)
            .await?;

        let new_id = result.last_insert_rowid();
        info!("Collection created with id {}", new_id);

        Ok(Collection {
            id: new_id,
            name: data.name.clone(),
        })
    }
}

impl Delete<i64> for CollectionRepository {
    #[instrument(skip(self), fields(collection_id = %id))]
    async fn delete(&self, id: &i64) -> Result<u64, Error> {
        debug!("Deleting collection");
        let result = sqlx::query("DELETE FROM collections WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            warn!("No collection with this id, nothing deleted");
        } else {
            info!("Collection deleted successfully");
        }
        Ok(result.rows_affected())
    }
}
