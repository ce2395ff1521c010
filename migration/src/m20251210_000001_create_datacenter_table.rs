use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Datacenter::Table)
                    .if_not_exists()
                    .col(pk_auto(Datacenter::Id))
                    .col(string_len(Datacenter::Name, 255))
                    .col(
                        timestamp_with_time_zone(Datacenter::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Datacenter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Datacenter {
    Table,
    Id,
    Name,
    CreatedAt,
}
