//! Recipe entity - Entità ricetta

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
}
