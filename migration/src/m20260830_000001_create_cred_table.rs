use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cred::Table)
                    .if_not_exists()
                    .col(pk_auto(Cred::Id))
                    .col(string_len(Cred::Username, 255))
                    .col(string_len(Cred::Password, 255))
                    .col(string_len_null(Cred::EnablePass, 255))
                    .col(string_len_null(Cred::NetmikoDevice, 255))
                    .col(string_len_null(Cred::ScrapliDriver, 255))
                    .col(string_len_null(Cred::ScrapliTransport, 255))
                    .col(timestamp(Cred::Created))
                    .col(timestamp_null(Cred::Updated))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cred::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Cred {
    Table,
    Id,
    Username,
    Password,
    EnablePass,
    NetmikoDevice,
    ScrapliDriver,
    ScrapliTransport,
    Created,
    Updated,
}
