//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod collection;
pub mod recipe;
pub mod response;

pub use collection::{AddRecipeToCollectionDTO, CollectionDTO, CollectionListDTO, CreateCollectionDTO};
pub use recipe::{CreateRecipeDTO, RecipeListDTO, UpdateRecipeDTO};
pub use response::{CreatedDTO, MessageDTO};

use serde::{Deserialize, Deserializer};

/// `null` vale come stringa vuota: la validazione lo tratta come un campo mancante
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
