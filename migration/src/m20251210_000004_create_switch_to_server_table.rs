use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251210_000002_create_switch_table::Switch, m20251210_000003_create_server_table::Server,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SwitchToServer::Table)
                    .if_not_exists()
                    .col(integer(SwitchToServer::SwitchId))
                    .col(integer(SwitchToServer::ServerId))
                    .primary_key(
                        Index::create()
                            .col(SwitchToServer::SwitchId)
                            .col(SwitchToServer::ServerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_switch_to_server_switch_id")
                            .from(SwitchToServer::Table, SwitchToServer::SwitchId)
                            .to(Switch::Table, Switch::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_switch_to_server_server_id")
                            .from(SwitchToServer::Table, SwitchToServer::ServerId)
                            .to(Server::Table, Server::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SwitchToServer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SwitchToServer {
    Table,
    SwitchId,
    ServerId,
}
