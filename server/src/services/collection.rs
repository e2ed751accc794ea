//! Collection services - Gestione collezioni e associazioni con le ricette

use crate::core::{AppError, AppState, ValidJson, ValidPath};
use crate::dtos::{
    AddRecipeToCollectionDTO, CollectionListDTO, CreateCollectionDTO, CreatedDTO, MessageDTO,
};
use crate::entities::Membership;
use crate::repositories::{Create, Delete};
use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use axum_macros::debug_handler;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state, body), fields(name = %body.name))]
pub async fn create_collection(
    State(state): State<Arc<AppState>>,
    ValidJson(body): ValidJson<CreateCollectionDTO>,
) -> Result<(StatusCode, Json<CreatedDTO>), AppError> {
    debug!("Creating collection");
    body.validate().map_err(AppError::invalid("Name is required."))?;

    let collection = state
        .collection
        .create(&body)
        .await
        .map_err(AppError::store("Error creating collection in the database"))?;

    info!("Collection {} created", collection.id);
    Ok((
        StatusCode::CREATED,
        Json(CreatedDTO::new("Collection created successfully!", collection.id)),
    ))
}

#[instrument(skip(state))]
pub async fn list_collections(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CollectionListDTO>, AppError> {
    debug!("Listing collections with recipes");
    let collections = state
        .collection
        .find_all_with_recipes()
        .await
        .map_err(AppError::store("Error fetching collections"))?;

    info!("Successfully retrieved {} collections", collections.len());
    Ok(Json(CollectionListDTO { collections }))
}

/// Le membership della collezione vengono rimosse da `ON DELETE CASCADE`
#[instrument(skip(state), fields(collection_id = %collection_id))]
pub async fn delete_collection(
    State(state): State<Arc<AppState>>,
    ValidPath(collection_id): ValidPath<i64>,
) -> Result<Json<MessageDTO>, AppError> {
    debug!("Deleting collection");
    let rows = state
        .collection
        .delete(&collection_id)
        .await
        .map_err(AppError::store("Error deleting collection from the database"))?;

    debug!("{} rows deleted", rows);
    Ok(Json(MessageDTO::new("Collection deleted successfully!")))
}

#[debug_handler]
#[instrument(skip(state, body), fields(collection = %body.collection_name, recipe = %body.recipe_name))]
pub async fn add_recipe_to_collection(
    State(state): State<Arc<AppState>>,
    ValidJson(body): ValidJson<AddRecipeToCollectionDTO>,
) -> Result<(StatusCode, Json<MessageDTO>), AppError> {
    debug!("Adding recipe to collection by name");
    // 1. Verificare che entrambi i nomi siano presenti
    // 2. Risolvere il nome della collezione in un id (deve esistere esattamente una riga)
    // 3. Risolvere il nome della ricetta in un id (stessa regola)
    // 4. Inserire la coppia nella tabella di join
    // Le tre operazioni sono round trip indipendenti, senza transazione.
    body.validate().map_err(AppError::invalid(
        "Collection name and recipe name are required.",
    ))?;

    let collection_ids = state
        .collection
        .find_ids_by_name(&body.collection_name, 2)
        .await
        .map_err(AppError::store("Error finding collection."))?;
    let collection_id = single_match(collection_ids, "Error finding collection.")?;

    let recipe_ids = state
        .recipe
        .find_ids_by_name(&body.recipe_name, 2)
        .await
        .map_err(AppError::store("Error finding recipe."))?;
    let recipe_id = single_match(recipe_ids, "Error finding recipe.")?;

    state
        .membership
        .create(&Membership {
            recipe_id,
            collection_id,
        })
        .await
        .map_err(AppError::store(
            "Error adding recipe to collection in the database",
        ))?;

    info!("Recipe {} added to collection {}", recipe_id, collection_id);
    Ok((
        StatusCode::CREATED,
        Json(MessageDTO::new("Recipe added to collection successfully!")),
    ))
}

/// Un lookup per nome deve individuare esattamente una riga. Nessuna riga o
/// più righe con lo stesso nome sono entrambe un 500, come gli errori del database.
fn single_match(ids: Vec<i64>, message: &'static str) -> Result<i64, AppError> {
    match ids.as_slice() {
        [id] => Ok(*id),
        [] => {
            warn!("{} No row with this name", message);
            Err(AppError::internal_server_error(message).with_details("No row matches this name"))
        }
        _ => {
            warn!("{} Name is ambiguous", message);
            Err(AppError::internal_server_error(message)
                .with_details("More than one row matches this name"))
        }
    }
}
