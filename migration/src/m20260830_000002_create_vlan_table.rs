use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vlan::Table)
                    .if_not_exists()
                    .col(pk_auto(Vlan::Id))
                    .col(integer(Vlan::VlanId))
                    .col(string_len_null(Vlan::Name, 255))
                    .col(string_len_null(Vlan::Description, 255))
                    .col(timestamp(Vlan::Created))
                    .col(timestamp_null(Vlan::Updated))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vlan::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Vlan {
    Table,
    Id,
    VlanId,
    Name,
    Description,
    Created,
    Updated,
}
