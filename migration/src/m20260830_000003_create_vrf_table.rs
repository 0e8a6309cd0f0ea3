use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vrf::Table)
                    .if_not_exists()
                    .col(pk_auto(Vrf::Id))
                    .col(string_len(Vrf::Name, 255))
                    .col(string_len_null(Vrf::Rd, 255))
                    .col(timestamp(Vrf::Created))
                    .col(timestamp_null(Vrf::Updated))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vrf::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Vrf {
    Table,
    Id,
    Name,
    Rd,
    Created,
    Updated,
}
