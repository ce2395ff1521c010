use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::server::{
    data::datacenter::DatacenterRepository,
    error::AppError,
    model::datacenter::Datacenter,
    validation::{datacenter as datacenter_validation, pagination::validate_pagination},
};

pub struct DatacenterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DatacenterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and stores a new datacenter
    pub async fn create(&self, payload: &Value) -> Result<Datacenter, AppError> {
        let params = datacenter_validation::validate_create(payload)?;

        tracing::info!("Creating datacenter: name={}", params.name);

        let model = DatacenterRepository::new(self.db)
            .create(params, Utc::now())
            .await?;

        Ok(Datacenter::from_entity(model))
    }

    /// Gets a datacenter by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Datacenter, AppError> {
        DatacenterRepository::new(self.db)
            .get_by_id(id)
            .await?
            .map(Datacenter::from_entity)
            .ok_or_else(|| AppError::NotFound(format!("Datacenter with id {} not found", id)))
    }

    /// Lists datacenters ordered by ID
    pub async fn get_page(
        &self,
        skip: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Vec<Datacenter>, AppError> {
        let pagination = validate_pagination(skip, limit)?;

        let datacenters = DatacenterRepository::new(self.db)
            .get_page(pagination)
            .await?
            .into_iter()
            .map(Datacenter::from_entity)
            .collect();

        Ok(datacenters)
    }
}
