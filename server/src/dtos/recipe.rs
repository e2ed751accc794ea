//! Recipe DTOs - Data Transfer Objects per ricette

use crate::entities::Recipe;
use super::null_as_empty;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body di `POST /api/recipes` e `PUT /api/recipes/{id}`.
/// I campi assenti o `null` diventano stringhe vuote, così "mancante" e "vuoto" falliscono allo stesso modo.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
#[serde(default)]
pub struct CreateRecipeDTO {
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Recipe name is required"))]
    pub name: String,

    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Ingredients are required"))]
    pub ingredients: String,

    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Instructions are required"))]
    pub instructions: String,
}

/// L'update sostituisce tutti e tre i campi, stesse regole della creazione
pub type UpdateRecipeDTO = CreateRecipeDTO;

/// Risposta di `GET /api/recipes`
#[derive(Serialize, Deserialize, Debug)]
pub struct RecipeListDTO {
    pub recipes: Vec<Recipe>,
}
