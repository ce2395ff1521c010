use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "switch")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Ordered VLAN ids stored as a JSON array of integers.
    pub vlans: Json,
    pub created_at: DateTimeUtc,
    pub modified_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::switch_to_server::Entity")]
    SwitchToServer,
}

impl Related<super::switch_to_server::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SwitchToServer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
