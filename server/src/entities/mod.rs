//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene tutte le entità (models) che rappresentano i dati persistiti nel database.
//! Ogni entity corrisponde a una tabella nel database.

pub mod collection;
pub mod membership;
pub mod recipe;

// Re-exports per facilitare l'import
pub use collection::Collection;
pub use membership::Membership;
pub use recipe::Recipe;
