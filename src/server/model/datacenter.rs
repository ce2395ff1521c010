//! Datacenter domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::datacenter::DatacenterDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Datacenter {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Datacenter {
    pub fn from_entity(entity: entity::datacenter::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> DatacenterDto {
        DatacenterDto {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateDatacenterParams {
    pub name: String,
}
