//! Response DTOs - Corpi di risposta per le operazioni di scrittura

use serde::{Deserialize, Serialize};

/// `{ "message": ... }`
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageDTO {
    pub message: String,
}

impl MessageDTO {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{ "message": ..., "id": ... }` restituito dalle creazioni
#[derive(Serialize, Deserialize, Debug)]
pub struct CreatedDTO {
    pub message: String,
    pub id: i64,
}

impl CreatedDTO {
    pub fn new(message: impl Into<String>, id: i64) -> Self {
        Self {
            message: message.into(),
            id,
        }
    }
}
