use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "switch_to_server")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub switch_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub server_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::switch::Entity",
        from = "Column::SwitchId",
        to = "super::switch::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Switch,
    #[sea_orm(
        belongs_to = "super::server::Entity",
        from = "Column::ServerId",
        to = "super::server::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Server,
}

impl Related<super::switch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Switch.def()
    }
}

impl Related<super::server::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Server.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
