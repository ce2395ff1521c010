//! Datacenter factory for creating test datacenter entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test datacenters with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::datacenter::DatacenterFactory;
///
/// let datacenter = DatacenterFactory::new(&db)
///     .name("eu-west-1")
///     .build()
///     .await?;
/// ```
pub struct DatacenterFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> DatacenterFactory<'a> {
    /// Creates a new DatacenterFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Datacenter {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Datacenter {}", id),
        }
    }

    /// Sets the datacenter name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the datacenter entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::datacenter::Model)` - Created datacenter entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::datacenter::Model, DbErr> {
        entity::datacenter::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a datacenter with default values.
///
/// Shorthand for `DatacenterFactory::new(db).build().await`.
pub async fn create_datacenter(
    db: &DatabaseConnection,
) -> Result<entity::datacenter::Model, DbErr> {
    DatacenterFactory::new(db).build().await
}
