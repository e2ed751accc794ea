//! Recipe form - Stato del form ricetta
//!
//! `Create → Editing(id) → Create`: iniziare una modifica carica la ricetta nel
//! form; il primo submit riuscito in modifica produce un update e riporta il form in creazione.

use crate::api::{Recipe, RecipeFields};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Editing(i64),
}

/// Richiesta che il submit deve inviare
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(RecipeFields),
    Update(i64, RecipeFields),
}

#[derive(Debug, Default)]
pub struct RecipeForm {
    mode: FormMode,
    fields: RecipeFields,
}

impl RecipeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn fields(&self) -> &RecipeFields {
        &self.fields
    }

    /// Sostituisce il contenuto del form senza cambiare modalità
    pub fn fill(&mut self, fields: RecipeFields) {
        self.fields = fields;
    }

    pub fn start_edit(&mut self, recipe: &Recipe) {
        self.fields = RecipeFields::new(&recipe.name, &recipe.ingredients, &recipe.instructions);
        self.mode = FormMode::Editing(recipe.id);
    }

    /// Svuota il form e torna in creazione
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Richiesta per il contenuto attuale; il form non cambia finché il
    /// chiamante non ha una risposta e chiama `reset`.
    pub fn submission(&self) -> Submission {
        let fields = self.fields.clone();
        match self.mode {
            FormMode::Create => Submission::Create(fields),
            FormMode::Editing(id) => Submission::Update(id, fields),
        }
    }
}
