//! Partial-update construction for servers.
//!
//! A [`ServerUpdate`] is built from the currently stored row and a validated
//! change-set. It names only the columns that change plus `modified_at`, and
//! every value is carried as a bound parameter. The configuration document is
//! merged at its top level: keys in the fragment overwrite stored keys, stored
//! keys absent from the fragment survive, nested objects are replaced whole.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ColumnTrait, EntityTrait, IdenStatic, QueryFilter, UpdateMany, Value,
};
use serde_json::Value as Json;

use crate::server::{
    error::validation::ValidationError,
    model::server::{configuration_from_json, Configuration, UpdateServerParams},
};

use entity::server::Column;

/// A column-to-value assignment list for a single server row.
#[derive(Debug, Clone)]
pub struct ServerUpdate {
    id: i32,
    assignments: Vec<(Column, Value)>,
}

impl ServerUpdate {
    /// Builds the update for `existing` from `changes`.
    ///
    /// `modified_at` is set to `now`, or left at its stored value when the clock
    /// reads earlier, so it never moves backwards.
    ///
    /// # Returns
    /// - `Ok(ServerUpdate)` - At least one field changes
    /// - `Err(ValidationError::EmptyUpdate)` - The change-set names no field
    pub fn build(
        existing: &entity::server::Model,
        changes: &UpdateServerParams,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        if changes.is_empty() {
            return Err(ValidationError::EmptyUpdate);
        }

        let mut assignments = Vec::with_capacity(4);

        if let Some(hostname) = &changes.hostname {
            assignments.push((Column::Hostname, Value::from(hostname.clone())));
        }

        if let Some(fragment) = &changes.configuration {
            let merged = merge_configuration(&existing.configuration, fragment);
            assignments.push((Column::Configuration, Value::from(Json::Object(merged))));
        }

        if let Some(datacenter_id) = changes.datacenter_id {
            assignments.push((Column::DatacenterId, Value::from(datacenter_id)));
        }

        assignments.push((Column::ModifiedAt, Value::from(now.max(existing.modified_at))));

        Ok(Self {
            id: existing.id,
            assignments,
        })
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    /// Names of the columns this update writes, in assignment order.
    pub fn columns(&self) -> Vec<&'static str> {
        self.assignments
            .iter()
            .map(|(column, _)| column.as_str())
            .collect()
    }

    /// Converts the assignment list into an `UPDATE ... WHERE id = ?` statement.
    pub fn into_query(self) -> UpdateMany<entity::server::Entity> {
        self.assignments.into_iter().fold(
            entity::prelude::Server::update_many().filter(Column::Id.eq(self.id)),
            |query, (column, value)| query.col_expr(column, Expr::value(value)),
        )
    }
}

/// Shallow-merges `fragment` onto the stored configuration document.
///
/// A stored value that is not an object is treated as empty.
pub fn merge_configuration(stored: &Json, fragment: &Configuration) -> Configuration {
    let mut merged = configuration_from_json(stored.clone());
    for (key, value) in fragment {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
