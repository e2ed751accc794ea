//! RecipeRepository - Repository per la gestione delle ricette

use super::{Create, Delete, ReadAll, Update};
use crate::dtos::{CreateRecipeDTO, UpdateRecipeDTO};
use crate::entities::Recipe;
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument, warn};

pub struct RecipeRepository {
    connection_pool: SqlitePool,
}

impl RecipeRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Ids of recipes with exactly this name, at most `limit` of them.
    /// Names are not unique: callers decide what more than one match means.
    #[instrument(skip(self))]
    pub async fn find_ids_by_name(&self, name: &str, limit: i64) -> Result<Vec<i64>, Error> {
        debug!("Looking up recipe ids by name");
        sqlx::query_scalar("SELECT id FROM recipes WHERE name = ? ORDER BY id LIMIT ?")
            .bind(name)
            .bind(limit)
            .fetch_all(&self.connection_pool)
            .await
    }
}

impl Create<Recipe, CreateRecipeDTO> for RecipeRepository {
    #[instrument(skip(self, data), fields(name = %data.name))]
    async fn create(&self, data: &CreateRecipeDTO) -> Result<Recipe, Error> {
        debug!("Creating new recipe");
        let result = sqlx::query(
            "INSERT INTO recipes (name, ingredients, instructions) VALUES (?, ?, ?)",
        )
        .bind(&data.name)
        .bind(&data.ingredients)
        .bind(&data.instructions)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_rowid();
        info!("Recipe created with id {}", new_id);

        Ok(Recipe {
            id: new_id,
            name: data.name.clone(),
            ingredients: data.ingredients.clone(),
            instructions: data.instructions.clone(),
        })
    }
}

impl ReadAll<Recipe> for RecipeRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Recipe>, Error> {
        debug!("Reading all recipes");
        let recipes = sqlx::query_as::<_, Recipe>(
            "SELECT id, name, ingredients, instructions FROM recipes ORDER BY id",
        )
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} recipes", recipes.len());
        Ok(recipes)
    }
}

impl Update<UpdateRecipeDTO, i64> for RecipeRepository {
    #[instrument(skip(self, data), fields(recipe_id = %id))]
    async fn update(&self, id: &i64, data: &UpdateRecipeDTO) -> Result<u64, Error> {
        debug!("Updating recipe");
        let result = sqlx::query(
            "UPDATE recipes SET name = ?, ingredients = ?, instructions = ? WHERE id = ?",
        )
        .bind(&data.name)
        .bind(&data.ingredients)
        .bind(&data.instructions)
        .bind(id)
        .execute(&self.connection_pool)
        .await?;

        if result.rows_affected() == 0 {
            warn!("No recipe with this id, nothing updated");
        } else {
            info!("Recipe updated successfully");
        }
        Ok(result.rows_affected())
    }
}

impl Delete<i64> for RecipeRepository {
    /// Le membership della ricetta vengono rimosse da `ON DELETE CASCADE`
    #[instrument(skip(self), fields(recipe_id = %id))]
    async fn delete(&self, id: &i64) -> Result<u64, Error> {
        debug!("Deleting recipe");
        let result = sqlx::query("DELETE FROM recipes WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            warn!("No recipe with this id, nothing deleted");
        } else {
            info!("Recipe deleted successfully");
        }
        Ok(result.rows_affected())
    }
}
