//! Server persistence.
//!
//! Reads go through the pool; writes are expected to run on a
//! `DatabaseTransaction` owned by the service layer.

pub mod update;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbBackend, DbErr, EntityTrait, QueryOrder,
    QuerySelect,
};

use crate::server::model::{pagination::Pagination, server::CreateServerParams};

use self::update::ServerUpdate;

pub struct ServerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ServerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a server with both timestamps set to `now`.
    ///
    /// The caller is responsible for checking that the datacenter exists; the
    /// foreign key constraint is the backstop.
    pub async fn create(
        &self,
        params: CreateServerParams,
        now: DateTime<Utc>,
    ) -> Result<entity::server::Model, DbErr> {
        entity::server::ActiveModel {
            hostname: ActiveValue::Set(params.hostname),
            configuration: ActiveValue::Set(serde_json::Value::Object(params.configuration)),
            datacenter_id: ActiveValue::Set(params.datacenter_id),
            created_at: ActiveValue::Set(now),
            modified_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a server by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::server::Model>, DbErr> {
        entity::prelude::Server::find_by_id(id).one(self.db).await
    }

    /// Gets a server by ID, holding a row lock until the surrounding transaction ends.
    ///
    /// SQLite has no row locks; its writer lock already serializes transactions,
    /// so the plain select is used there.
    pub async fn get_by_id_for_update(
        &self,
        id: i32,
    ) -> Result<Option<entity::server::Model>, DbErr> {
        let query = entity::prelude::Server::find_by_id(id);

        match self.db.get_database_backend() {
            DbBackend::Postgres | DbBackend::MySql => query.lock_exclusive().one(self.db).await,
            _ => query.one(self.db).await,
        }
    }

    /// Gets a window of servers ordered by ID.
    ///
    /// Ordering by primary key keeps windows disjoint between calls.
    pub async fn get_page(
        &self,
        pagination: Pagination,
    ) -> Result<Vec<entity::server::Model>, DbErr> {
        entity::prelude::Server::find()
            .order_by_asc(entity::server::Column::Id)
            .offset(pagination.skip)
            .limit(pagination.limit)
            .all(self.db)
            .await
    }

    /// Executes a prepared partial update and returns the post-update row.
    ///
    /// # Returns
    /// - `Ok(Model)` - The row as stored after the update
    /// - `Err(DbErr::RecordNotFound)` - No row matched the update's ID
    /// - `Err(DbErr)` - Database error during update or re-read
    pub async fn update(&self, update: ServerUpdate) -> Result<entity::server::Model, DbErr> {
        let id = update.id();
        let result = update.into_query().exec(self.db).await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!(
                "Server with id {} not found",
                id
            )));
        }

        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Server with id {} not found", id)))
    }

    /// Deletes a server row, returning whether a row was removed.
    ///
    /// Switch associations must be removed first; see
    /// [`SwitchRepository::detach_server`](crate::server::data::switch::SwitchRepository::detach_server).
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Server::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
