use sea_orm_migration::{prelude::*, schema::*};

use super::m20251210_000001_create_datacenter_table::Datacenter;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Server::Table)
                    .if_not_exists()
                    .col(pk_auto(Server::Id))
                    .col(string_len(Server::Hostname, 255))
                    .col(json_binary(Server::Configuration))
                    .col(integer(Server::DatacenterId))
                    .col(
                        timestamp_with_time_zone(Server::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Server::ModifiedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_server_datacenter_id")
                            .from(Server::Table, Server::DatacenterId)
                            .to(Datacenter::Table, Datacenter::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_server_datacenter_id")
                    .table(Server::Table)
                    .col(Server::DatacenterId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Server::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Server {
    Table,
    Id,
    Hostname,
    Configuration,
    DatacenterId,
    CreatedAt,
    ModifiedAt,
}
