//! MembershipRepository - Repository per la tabella di join recipe_collection

use super::{Create, ReadAll};
use crate::entities::Membership;
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

pub struct MembershipRepository {
    connection_pool: SqlitePool,
}

impl MembershipRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }
}

impl Create<Membership, Membership> for MembershipRepository {
    /// Fallisce se la coppia esiste già (chiave primaria) o se una delle due
    /// righe referenziate non esiste (foreign key).
    #[instrument(skip(self), fields(recipe_id = %data.recipe_id, collection_id = %data.collection_id))]
    async fn create(&self, data: &Membership) -> Result<Membership, Error> {
        debug!("Adding recipe to collection");
        sqlx::query("INSERT INTO recipe_collection (recipe_id, collection_id) VALUES (?, ?)")
            .bind(data.recipe_id)
            .bind(data.collection_id)
            .execute(&self.connection_pool)
            .await?;

        info!("Membership created");
        Ok(*data)
    }
}

impl ReadAll<Membership> for MembershipRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Membership>, Error> {
        sqlx::query_as::<_, Membership>(
            "SELECT recipe_id, collection_id FROM recipe_collection ORDER BY collection_id, recipe_id",
        )
        .fetch_all(&self.connection_pool)
        .await
    }
}
