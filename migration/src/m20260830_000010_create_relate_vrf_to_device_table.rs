use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260830_000003_create_vrf_table::Vrf, m20260830_000005_create_device_table::Device,
};

static FK_RELATE_VRF_TO_DEVICE_VRF_ID: &str = "fk_relate_vrf_to_device_vrf_id";
static FK_RELATE_VRF_TO_DEVICE_DEVICE_ID: &str = "fk_relate_vrf_to_device_device_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RelateVrfToDevice::Table)
                    .if_not_exists()
                    .col(integer(RelateVrfToDevice::VrfId))
                    .col(integer(RelateVrfToDevice::DeviceId))
                    .col(timestamp(RelateVrfToDevice::Created))
                    .col(timestamp_null(RelateVrfToDevice::Updated))
                    .primary_key(
                        Index::create()
                            .col(RelateVrfToDevice::VrfId)
                            .col(RelateVrfToDevice::DeviceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RELATE_VRF_TO_DEVICE_VRF_ID)
                            .from(RelateVrfToDevice::Table, RelateVrfToDevice::VrfId)
                            .to(Vrf::Table, Vrf::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RELATE_VRF_TO_DEVICE_DEVICE_ID)
                            .from(RelateVrfToDevice::Table, RelateVrfToDevice::DeviceId)
                            .to(Device::Table, Device::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RelateVrfToDevice::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RelateVrfToDevice {
    Table,
    VrfId,
    DeviceId,
    Created,
    Updated,
}
