//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Ogni repository gestisce le operazioni di database per una specifica tabella.
//!
//! Le query usano le funzioni runtime di sqlx (`sqlx::query`, `query_as`, `query_scalar`)
//! con i parametri passati tramite `.bind(...)`: lo schema viene creato all'avvio
//! da `core::database`, quindi non c'è un database da interrogare a compile time.
//!
//! Number of Rows   Method to Call          Returns
//! None             .execute(...).await     sqlx::Result<SqliteQueryResult>   INSERT/UPDATE/DELETE
//! Zero or One      .fetch_optional(...)    sqlx::Result<Option<T>>
//! Exactly One      .fetch_one(...)         sqlx::Result<T>
//! Multiple         .fetch_all(...)         sqlx::Result<Vec<T>>

pub mod collection;
pub mod membership;
pub mod recipe;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, ReadAll, Update};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use collection::CollectionRepository;
pub use membership::MembershipRepository;
pub use recipe::RecipeRepository;
