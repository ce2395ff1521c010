//! Switch factory for creating test switch entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use std::collections::HashSet;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test switches with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let switch = SwitchFactory::new(&db)
///     .name("core-sw-01")
///     .vlans(vec![10, 20])
///     .build()
///     .await?;
/// ```
pub struct SwitchFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    vlans: Vec<i32>,
}

impl<'a> SwitchFactory<'a> {
    /// Creates a new SwitchFactory with default values.
    ///
    /// Defaults:
    /// - name: `"switch-{id}"` where id is auto-incremented
    /// - vlans: `[1]`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("switch-{}", id),
            vlans: vec![1],
        }
    }

    /// Sets the switch name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the VLAN ids carried by the switch.
    ///
    /// Repeated ids are dropped on build, keeping the first occurrence.
    pub fn vlans(mut self, vlans: Vec<i32>) -> Self {
        self.vlans = vlans;
        self
    }

    /// Builds and inserts the switch entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::switch::Model)` - Created switch entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::switch::Model, DbErr> {
        let now = Utc::now();
        let mut seen = HashSet::new();
        let vlans: Vec<i32> = self
            .vlans
            .into_iter()
            .filter(|vlan| seen.insert(*vlan))
            .collect();

        entity::switch::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            vlans: ActiveValue::Set(serde_json::json!(vlans)),
            created_at: ActiveValue::Set(now),
            modified_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a switch with default values.
pub async fn create_switch(db: &DatabaseConnection) -> Result<entity::switch::Model, DbErr> {
    SwitchFactory::new(db).build().await
}
