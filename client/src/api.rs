//! API client - Client HTTP tipizzato per gli endpoint `/api`

use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub id: i64,
    pub name: String,
    pub recipes: Vec<Recipe>,
}

/// Campi modificabili di una ricetta, inviati sia in creazione che in update
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFields {
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
}

impl RecipeFields {
    pub fn new(
        name: impl Into<String>,
        ingredients: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into(),
            instructions: instructions.into(),
        }
    }
}

#[derive(Deserialize)]
struct RecipeList {
    recipes: Vec<Recipe>,
}

#[derive(Deserialize)]
struct CollectionList {
    collections: Vec<Collection>,
}

#[derive(Deserialize, Debug, Default)]
struct ReplyBody {
    message: Option<String>,
    error: Option<String>,
    id: Option<i64>,
}

/// Esito di una richiesta di scrittura, successo o errore applicativo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: StatusCode,
    pub message: Option<String>,
    pub error: Option<String>,
    pub id: Option<i64>,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The server message, or `fallback` when the body carried none
    pub fn message_or(&self, fallback: &str) -> String {
        self.message.clone().unwrap_or_else(|| fallback.to_string())
    }
}

pub struct RecipeClient {
    http: Client,
    base_url: String,
}

impl RecipeClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list_recipes(&self) -> Result<Vec<Recipe>, reqwest::Error> {
        let list: RecipeList = self
            .http
            .get(self.url("/api/recipes"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(list.recipes)
    }

    pub async fn list_collections(&self) -> Result<Vec<Collection>, reqwest::Error> {
        let list: CollectionList = self
            .http
            .get(self.url("/api/collections"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(list.collections)
    }

    pub async fn create_recipe(&self, fields: &RecipeFields) -> Result<Reply, reqwest::Error> {
        let response = self
            .http
            .post(self.url("/api/recipes"))
            .json(fields)
            .send()
            .await?;
        read_reply(response).await
    }

    pub async fn update_recipe(&self, id: i64, fields: &RecipeFields) -> Result<Reply, reqwest::Error> {
        let response = self
            .http
            .put(self.url(&format!("/api/recipes/{}", id)))
            .json(fields)
            .send()
            .await?;
        read_reply(response).await
    }

    pub async fn delete_recipe(&self, id: i64) -> Result<Reply, reqwest::Error> {
        let response = self
            .http
            .delete(self.url(&format!("/api/recipes/{}", id)))
            .send()
            .await?;
        read_reply(response).await
    }

    pub async fn create_collection(&self, name: &str) -> Result<Reply, reqwest::Error> {
        let response = self
            .http
            .post(self.url("/api/collections"))
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await?;
        read_reply(response).await
    }

    pub async fn delete_collection(&self, id: i64) -> Result<Reply, reqwest::Error> {
        let response = self
            .http
            .delete(self.url(&format!("/api/collections/{}", id)))
            .send()
            .await?;
        read_reply(response).await
    }

    pub async fn add_recipe_to_collection(
        &self,
        collection_name: &str,
        recipe_name: &str,
    ) -> Result<Reply, reqwest::Error> {
        let response = self
            .http
            .post(self.url("/api/collections/add-recipe"))
            .json(&serde_json::json!({
                "collectionName": collection_name,
                "recipeName": recipe_name,
            }))
            .send()
            .await?;
        read_reply(response).await
    }
}

/// Un body non JSON (es. il rifiuto di un path non valido) diventa un Reply senza messaggio
async fn read_reply(response: Response) -> Result<Reply, reqwest::Error> {
    let status = response.status();
    let text = response.text().await?;
    let body: ReplyBody = serde_json::from_str(&text).unwrap_or_default();
    debug!("{} {:?}", status, body);

    Ok(Reply {
        status,
        message: body.message,
        error: body.error,
        id: body.id,
    })
}
