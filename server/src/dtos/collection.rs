//! Collection DTOs - Data Transfer Objects per collezioni

use crate::entities::Recipe;
use super::null_as_empty;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body di `POST /api/collections`
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
#[serde(default)]
pub struct CreateCollectionDTO {
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Collection name is required"))]
    pub name: String,
}

/// Collezione con le ricette associate (vuota se non ha membership)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CollectionDTO {
    pub id: i64,
    pub name: String,
    pub recipes: Vec<Recipe>,
}

/// Risposta di `GET /api/collections`
#[derive(Serialize, Deserialize, Debug)]
pub struct CollectionListDTO {
    pub collections: Vec<CollectionDTO>,
}

/// Body di `POST /api/collections/add-recipe`; le entità sono individuate per nome
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct AddRecipeToCollectionDTO {
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Collection name is required"))]
    pub collection_name: String,

    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Recipe name is required"))]
    pub recipe_name: String,
}
