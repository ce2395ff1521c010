//! Server domain models and parameters.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::model::server::ServerDto;

/// Configuration document as stored on a server.
pub type Configuration = Map<String, Value>;

/// A server record at the service boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub id: i32,
    pub hostname: String,
    pub configuration: Configuration,
    pub datacenter_id: i32,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Server {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// A stored configuration that is not an object (legacy `null` rows) is read
    /// as an empty document.
    pub fn from_entity(entity: entity::server::Model) -> Self {
        Self {
            id: entity.id,
            hostname: entity.hostname,
            configuration: configuration_from_json(entity.configuration),
            datacenter_id: entity.datacenter_id,
            created_at: entity.created_at,
            modified_at: entity.modified_at,
        }
    }

    pub fn into_dto(self) -> ServerDto {
        ServerDto {
            id: self.id,
            hostname: self.hostname,
            configuration: Value::Object(self.configuration),
            datacenter_id: self.datacenter_id,
            created_at: self.created_at,
            modified_at: self.modified_at,
        }
    }
}

/// Reads a stored JSON column as a configuration document.
pub fn configuration_from_json(value: Value) -> Configuration {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Validated input for creating a server.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateServerParams {
    pub hostname: String,
    pub configuration: Configuration,
    pub datacenter_id: i32,
}

/// Validated sparse change-set for a server.
///
/// `None` means "leave untouched". `configuration` is a fragment merged onto the
/// stored document, not a replacement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateServerParams {
    pub hostname: Option<String>,
    pub configuration: Option<Configuration>,
    pub datacenter_id: Option<i32>,
}

impl UpdateServerParams {
    pub fn is_empty(&self) -> bool {
        self.hostname.is_none() && self.configuration.is_none() && self.datacenter_id.is_none()
    }
}
