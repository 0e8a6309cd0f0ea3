use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260830_000001_create_cred_table::Cred;

static IDX_DEVICE_CRED_ID: &str = "idx_device_cred_id";
static FK_DEVICE_CRED_ID: &str = "fk_device_cred_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline so the migration also runs on
        // SQLite, which cannot add constraints to an existing table.
        manager
            .create_table(
                Table::create()
                    .table(Device::Table)
                    .if_not_exists()
                    .col(pk_auto(Device::Id))
                    .col(string_len_null(Device::Name, 255))
                    .col(integer(Device::CredId))
                    .col(string_len_null(Device::Description, 255))
                    .col(timestamp(Device::Created))
                    .col(timestamp_null(Device::Updated))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DEVICE_CRED_ID)
                            .from(Device::Table, Device::CredId)
                            .to(Cred::Table, Cred::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DEVICE_CRED_ID)
                    .table(Device::Table)
                    .col(Device::CredId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DEVICE_CRED_ID)
                    .table(Device::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Device::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Device {
    Table,
    Id,
    Name,
    CredId,
    Description,
    Created,
    Updated,
}
