//! Terminal client for the recipebook server.
//!
//! Mirrors the browser client: every mutation is followed by a full refresh of
//! recipes and collections, and the recipe form is an explicit
//! [`form::FormMode`] state rather than swapped handlers.

pub mod api;
pub mod command;
pub mod form;
pub mod session;
pub mod view;

pub use api::{Collection, Recipe, RecipeClient, RecipeFields, Reply};
pub use command::{Command, ParseError};
pub use form::{FormMode, RecipeForm, Submission};
pub use session::{Session, Snapshot};

/// Indirizzo del server usato se `RECIPEBOOK_URL` non è impostata
pub const DEFAULT_URL: &str = "http://127.0.0.1:3002";
