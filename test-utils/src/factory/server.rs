//! Server factory for creating test server entities.
//!
//! Rows are inserted as-is, so tests can arrange configurations the service itself
//! would reject.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test servers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::server::ServerFactory;
///
/// let server = ServerFactory::new(&db, datacenter.id)
///     .hostname("web-01.local.lan")
///     .configuration(serde_json::json!({ "cpu_cores": 4 }))
///     .build()
///     .await?;
/// ```
pub struct ServerFactory<'a> {
    db: &'a DatabaseConnection,
    datacenter_id: i32,
    hostname: String,
    configuration: serde_json::Value,
    timestamp: DateTime<Utc>,
}

impl<'a> ServerFactory<'a> {
    /// Creates a new ServerFactory with default values.
    ///
    /// Defaults:
    /// - hostname: `"server-{id}.local.lan"` where id is auto-incremented
    /// - configuration: `{}`
    /// - created_at / modified_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `datacenter_id` - Datacenter hosting the server
    pub fn new(db: &'a DatabaseConnection, datacenter_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            datacenter_id,
            hostname: format!("server-{}.local.lan", id),
            configuration: serde_json::json!({}),
            timestamp: Utc::now(),
        }
    }

    /// Sets the hostname.
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }

    /// Sets the stored configuration document.
    pub fn configuration(mut self, configuration: serde_json::Value) -> Self {
        self.configuration = configuration;
        self
    }

    /// Sets both creation and modification timestamps.
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Builds and inserts the server entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::server::Model)` - Created server entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::server::Model, DbErr> {
        entity::server::ActiveModel {
            id: ActiveValue::NotSet,
            hostname: ActiveValue::Set(self.hostname),
            configuration: ActiveValue::Set(self.configuration),
            datacenter_id: ActiveValue::Set(self.datacenter_id),
            created_at: ActiveValue::Set(self.timestamp),
            modified_at: ActiveValue::Set(self.timestamp),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a server with default values in the given datacenter.
///
/// Shorthand for `ServerFactory::new(db, datacenter_id).build().await`.
pub async fn create_server(
    db: &DatabaseConnection,
    datacenter_id: i32,
) -> Result<entity::server::Model, DbErr> {
    ServerFactory::new(db, datacenter_id).build().await
}
