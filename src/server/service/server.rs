use chrono::Utc;
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, SqlErr};
use serde_json::Value;

use crate::server::{
    data::{
        server::{update::ServerUpdate, ServerRepository},
        switch::SwitchRepository,
        transaction,
    },
    error::AppError,
    model::server::{CreateServerParams, Server, UpdateServerParams},
    service::integrity,
    validation::{pagination::validate_pagination, server as server_validation},
};

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Server with id {} not found", id))
}

/// Maps a foreign key failure raised by the store onto the datacenter it names.
///
/// Covers a datacenter removed between the integrity check and the write.
fn datacenter_violation(err: DbErr, datacenter_id: i32) -> AppError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => AppError::ForeignKeyViolation {
            entity: "Datacenter",
            id: datacenter_id,
        },
        _ => err.into(),
    }
}

pub struct ServerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and stores a new server.
    ///
    /// # Returns
    /// - `Ok(Server)` - The stored server, `created_at == modified_at`
    /// - `Err(AppError::ValidationErr)` - Malformed payload or configuration out of range
    /// - `Err(AppError::ForeignKeyViolation)` - Datacenter does not exist; nothing is written
    /// - `Err(AppError::DbErr)` - Storage failure; the transaction is rolled back
    pub async fn create(&self, payload: &Value) -> Result<Server, AppError> {
        let params = server_validation::validate_create(payload)?;

        tracing::info!(
            "Creating server: hostname={}, datacenter_id={}",
            params.hostname,
            params.datacenter_id
        );

        let txn = transaction::begin(self.db).await?;
        let result = Self::create_in(&txn, params).await;
        let server = transaction::finish(txn, result).await?;

        tracing::info!("Created server {}", server.id);

        Ok(server)
    }

    async fn create_in(
        txn: &DatabaseTransaction,
        params: CreateServerParams,
    ) -> Result<Server, AppError> {
        let datacenter_id = params.datacenter_id;
        integrity::check_datacenter_exists(txn, datacenter_id).await?;

        let model = ServerRepository::new(txn)
            .create(params, Utc::now())
            .await
            .map_err(|err| datacenter_violation(err, datacenter_id))?;

        Ok(Server::from_entity(model))
    }

    /// Gets a server by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Server, AppError> {
        ServerRepository::new(self.db)
            .get_by_id(id)
            .await?
            .map(Server::from_entity)
            .ok_or_else(|| not_found(id))
    }

    /// Lists servers ordered by ID.
    ///
    /// `skip` defaults to 0 and `limit` to 100; limits above 1000 are clamped.
    pub async fn get_page(
        &self,
        skip: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Vec<Server>, AppError> {
        let pagination = validate_pagination(skip, limit)?;

        let servers = ServerRepository::new(self.db)
            .get_page(pagination)
            .await?
            .into_iter()
            .map(Server::from_entity)
            .collect();

        Ok(servers)
    }

    /// Applies a sparse change-set to a server.
    ///
    /// The payload is validated before the server is looked up, so an empty or
    /// malformed change-set is rejected even for an unknown ID. Only the named
    /// fields change; a configuration fragment is merged at its top level.
    ///
    /// # Returns
    /// - `Ok(Server)` - The server as stored after the update
    /// - `Err(AppError::ValidationErr)` - Malformed, out of range or empty change-set
    /// - `Err(AppError::NotFound)` - No server with this ID
    /// - `Err(AppError::ForeignKeyViolation)` - New datacenter does not exist
    /// - `Err(AppError::DbErr)` - Storage failure; nothing is changed
    pub async fn update(&self, id: i32, payload: &Value) -> Result<Server, AppError> {
        let changes = server_validation::validate_update(payload)?;

        tracing::info!("Updating server {}", id);

        let txn = transaction::begin(self.db).await?;
        let result = Self::update_in(&txn, id, &changes).await;
        let server = transaction::finish(txn, result).await?;

        tracing::info!("Updated server {}", server.id);

        Ok(server)
    }

    async fn update_in(
        txn: &DatabaseTransaction,
        id: i32,
        changes: &UpdateServerParams,
    ) -> Result<Server, AppError> {
        let repo = ServerRepository::new(txn);

        let existing = repo.get_by_id_for_update(id).await?.ok_or_else(|| {
            tracing::warn!("Update requested for missing server {}", id);
            not_found(id)
        })?;

        if let Some(datacenter_id) = changes.datacenter_id {
            integrity::check_datacenter_exists(txn, datacenter_id).await?;
        }

        let update = ServerUpdate::build(&existing, changes, Utc::now())?;
        tracing::debug!("Server {} update writes {:?}", id, update.columns());
        let model = match changes.datacenter_id {
            Some(datacenter_id) => repo
                .update(update)
                .await
                .map_err(|err| datacenter_violation(err, datacenter_id))?,
            None => repo.update(update).await?,
        };

        Ok(Server::from_entity(model))
    }

    /// Deletes a server together with its switch associations.
    ///
    /// # Returns
    /// - `Ok(())` - Server and associations removed
    /// - `Err(AppError::NotFound)` - No server with this ID
    /// - `Err(AppError::DbErr)` - Storage failure; nothing is removed
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        tracing::info!("Deleting server {}", id);

        let txn = transaction::begin(self.db).await?;
        let result = Self::delete_in(&txn, id).await;
        transaction::finish(txn, result).await?;

        tracing::info!("Deleted server {}", id);

        Ok(())
    }

    async fn delete_in(txn: &DatabaseTransaction, id: i32) -> Result<(), AppError> {
        let repo = ServerRepository::new(txn);

        if repo.get_by_id_for_update(id).await?.is_none() {
            tracing::warn!("Delete requested for missing server {}", id);
            return Err(not_found(id));
        }

        let detached = SwitchRepository::new(txn).detach_server(id).await?;
        if detached > 0 {
            tracing::debug!("Removed {} switch associations of server {}", detached, id);
        }

        if !repo.delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }
}
