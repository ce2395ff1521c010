use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{datacenter::CreateDatacenterParams, pagination::Pagination};

pub struct DatacenterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DatacenterRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new datacenter with its creation timestamp set to `now`
    pub async fn create(
        &self,
        params: CreateDatacenterParams,
        now: DateTime<Utc>,
    ) -> Result<entity::datacenter::Model, DbErr> {
        entity::datacenter::ActiveModel {
            name: ActiveValue::Set(params.name),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a datacenter by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::datacenter::Model>, DbErr> {
        entity::prelude::Datacenter::find_by_id(id).one(self.db).await
    }

    /// Checks whether a datacenter with the given ID exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Datacenter::find()
            .filter(entity::datacenter::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a window of datacenters ordered by ID
    pub async fn get_page(
        &self,
        pagination: Pagination,
    ) -> Result<Vec<entity::datacenter::Model>, DbErr> {
        entity::prelude::Datacenter::find()
            .order_by_asc(entity::datacenter::Column::Id)
            .offset(pagination.skip)
            .limit(pagination.limit)
            .all(self.db)
            .await
    }
}
