//! Recipe services - Gestione ricette

use crate::core::{AppError, AppState, ValidJson, ValidPath};
use crate::dtos::{CreateRecipeDTO, CreatedDTO, MessageDTO, RecipeListDTO, UpdateRecipeDTO};
use crate::repositories::{Create, Delete, ReadAll, Update};
use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};
use validator::Validate;

const FIELDS_REQUIRED: &str = "All fields are required.";

#[instrument(skip(state, body), fields(name = %body.name))]
pub async fn create_recipe(
    State(state): State<Arc<AppState>>,
    ValidJson(body): ValidJson<CreateRecipeDTO>,
) -> Result<(StatusCode, Json<CreatedDTO>), AppError> {
    debug!("Creating recipe");
    // 1. Verificare che name, ingredients e instructions siano presenti e non vuoti
    // 2. Inserire la ricetta (id assegnato dal database)
    // 3. Ritornare 201 con messaggio e id
    body.validate().map_err(AppError::invalid(FIELDS_REQUIRED))?;

    let recipe = state
        .recipe
        .create(&body)
        .await
        .map_err(AppError::store("Error adding recipe to the database"))?;

    info!("Recipe {} created", recipe.id);
    Ok((
        StatusCode::CREATED,
        Json(CreatedDTO::new("Recipe added successfully!", recipe.id)),
    ))
}

#[instrument(skip(state))]
pub async fn list_recipes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RecipeListDTO>, AppError> {
    debug!("Listing recipes");
    let recipes = state
        .recipe
        .read_all()
        .await
        .map_err(AppError::store("Error fetching recipes"))?;

    info!("Successfully retrieved {} recipes", recipes.len());
    Ok(Json(RecipeListDTO { recipes }))
}

/// Un id sconosciuto non è un errore: l'update tocca zero righe e risponde 200
#[instrument(skip(state, body), fields(recipe_id = %recipe_id))]
pub async fn update_recipe(
    State(state): State<Arc<AppState>>,
    ValidPath(recipe_id): ValidPath<i64>,
    ValidJson(body): ValidJson<UpdateRecipeDTO>,
) -> Result<Json<MessageDTO>, AppError> {
    debug!("Updating recipe");
    body.validate().map_err(AppError::invalid(FIELDS_REQUIRED))?;

    let rows = state
        .recipe
        .update(&recipe_id, &body)
        .await
        .map_err(AppError::store("Error updating recipe in the database"))?;

    debug!("{} rows updated", rows);
    Ok(Json(MessageDTO::new("Recipe updated successfully!")))
}

#[instrument(skip(state), fields(recipe_id = %recipe_id))]
pub async fn delete_recipe(
    State(state): State<Arc<AppState>>,
    ValidPath(recipe_id): ValidPath<i64>,
) -> Result<Json<MessageDTO>, AppError> {
    debug!("Deleting recipe");
    let rows = state
        .recipe
        .delete(&recipe_id)
        .await
        .map_err(AppError::store("Error deleting recipe from the database"))?;

    debug!("{} rows deleted", rows);
    Ok(Json(MessageDTO::new("Recipe deleted successfully!")))
}
