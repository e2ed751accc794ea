//! Session - Azioni dell'utente sul server
//!
//! Ogni azione che modifica i dati è seguita dal refresh completo di ricette e
//! collezioni: nessun aggiornamento incrementale dello stato locale.

use crate::api::{Collection, Recipe, RecipeClient, RecipeFields, Reply};
use crate::form::{RecipeForm, Submission};
use tracing::{debug, info};

/// Ultime liste lette dal server
#[derive(Debug, Default, Clone)]
pub struct Snapshot {
    pub recipes: Vec<Recipe>,
    pub collections: Vec<Collection>,
}

pub struct Session {
    client: RecipeClient,
    form: RecipeForm,
    snapshot: Snapshot,
}

impl Session {
    pub fn new(client: RecipeClient) -> Self {
        Self {
            client,
            form: RecipeForm::new(),
            snapshot: Snapshot::default(),
        }
    }

    pub fn form(&self) -> &RecipeForm {
        &self.form
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub async fn refresh(&mut self) -> Result<&Snapshot, reqwest::Error> {
        let recipes = self.client.list_recipes().await?;
        let collections = self.client.list_collections().await?;
        debug!(
            "Refreshed {} recipes, {} collections",
            recipes.len(),
            collections.len()
        );
        self.snapshot = Snapshot {
            recipes,
            collections,
        };
        Ok(&self.snapshot)
    }

    /// Carica nel form la ricetta `id` dell'ultimo snapshot.
    /// Ritorna `false` se l'id non è nella lista.
    pub fn start_edit(&mut self, id: i64) -> bool {
        match self.snapshot.recipes.iter().find(|r| r.id == id) {
            Some(recipe) => {
                info!("Editing recipe {}", id);
                self.form.start_edit(recipe);
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.form.reset();
    }

    /// Invia il form: crea o aggiorna in base alla modalità corrente.
    /// `fields` sostituisce il contenuto del form; `None` invia quello già caricato.
    pub async fn submit(&mut self, fields: Option<RecipeFields>) -> Result<String, reqwest::Error> {
        if let Some(fields) = fields {
            self.form.fill(fields);
        }

        // Il form torna in creazione solo quando il server ha risposto
        let message = match self.form.submission() {
            Submission::Create(fields) => self
                .client
                .create_recipe(&fields)
                .await?
                .message_or("Recipe added!"),
            Submission::Update(id, fields) => self
                .client
                .update_recipe(id, &fields)
                .await?
                .message_or("Recipe updated!"),
        };
        self.form.reset();
        self.after_mutation(message).await
    }

    pub async fn delete_recipe(&mut self, id: i64) -> Result<String, reqwest::Error> {
        let reply = self.client.delete_recipe(id).await?;
        self.after_mutation(reply.message_or("Recipe deleted!")).await
    }

    pub async fn create_collection(&mut self, name: &str) -> Result<String, reqwest::Error> {
        let reply = self.client.create_collection(name).await?;
        self.after_mutation(reply.message_or("Collection created!")).await
    }

    pub async fn delete_collection(&mut self, id: i64) -> Result<String, reqwest::Error> {
        let reply = self.client.delete_collection(id).await?;
        self.after_mutation(reply.message_or("Collection deleted!")).await
    }

    pub async fn link(
        &mut self,
        recipe_name: &str,
        collection_name: &str,
    ) -> Result<String, reqwest::Error> {
        let reply: Reply = self
            .client
            .add_recipe_to_collection(collection_name, recipe_name)
            .await?;
        self.after_mutation(reply.message_or("Recipe added to collection!"))
            .await
    }

    async fn after_mutation(&mut self, message: String) -> Result<String, reqwest::Error> {
        self.refresh().await?;
        Ok(message)
    }
}
