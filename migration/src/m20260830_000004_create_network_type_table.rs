use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NetworkType::Table)
                    .if_not_exists()
                    .col(pk_auto(NetworkType::Id))
                    .col(string_len(NetworkType::NetworkType, 255))
                    .col(string_len_null(NetworkType::Description, 255))
                    .col(timestamp(NetworkType::Created))
                    .col(timestamp_null(NetworkType::Updated))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NetworkType::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum NetworkType {
    Table,
    Id,
    NetworkType,
    Description,
    Created,
    Updated,
}
