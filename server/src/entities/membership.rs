//! Membership entity - Riga della tabella di join `recipe_collection`

use serde::{Deserialize, Serialize};

/// Coppia (ricetta, collezione); la coppia è la chiave primaria.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, sqlx::FromRow)]
pub struct Membership {
    pub recipe_id: i64,
    pub collection_id: i64,
}
