use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Switch::Table)
                    .if_not_exists()
                    .col(pk_auto(Switch::Id))
                    .col(string_len(Switch::Name, 255))
                    .col(json_binary(Switch::Vlans))
                    .col(
                        timestamp_with_time_zone(Switch::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Switch::ModifiedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Switch::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Switch {
    Table,
    Id,
    Name,
    Vlans,
    CreatedAt,
    ModifiedAt,
}
