use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "server")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hostname: String,
    /// Free-form configuration document; only `cpu_cores` and `ram_gb` carry
    /// validated meaning.
    pub configuration: Json,
    pub datacenter_id: i32,
    pub created_at: DateTimeUtc,
    pub modified_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::datacenter::Entity",
        from = "Column::DatacenterId",
        to = "super::datacenter::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Datacenter,
    #[sea_orm(has_many = "super::switch_to_server::Entity")]
    SwitchToServer,
}

impl Related<super::datacenter::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Datacenter.def()
    }
}

impl Related<super::switch_to_server::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SwitchToServer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
