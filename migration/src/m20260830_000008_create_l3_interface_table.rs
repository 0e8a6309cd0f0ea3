use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260830_000003_create_vrf_table::Vrf, m20260830_000005_create_device_table::Device,
    m20260830_000007_create_ip_address_table::IpAddress,
};

static IDX_L3_INTERFACE_DEVICE_ID: &str = "idx_l3_interface_device_id";
static FK_L3_INTERFACE_IP_ADDRESS_ID: &str = "fk_l3_interface_ip_address_id";
static FK_L3_INTERFACE_VRF_ID: &str = "fk_l3_interface_vrf_id";
static FK_L3_INTERFACE_DEVICE_ID: &str = "fk_l3_interface_device_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(L3Interface::Table)
                    .if_not_exists()
                    .col(pk_auto(L3Interface::Id))
                    .col(string_len(L3Interface::Name, 255))
                    .col(integer_null(L3Interface::IpAddressId))
                    .col(integer_null(L3Interface::VrfId))
                    .col(integer(L3Interface::DeviceId))
                    .col(timestamp(L3Interface::Created))
                    .col(timestamp_null(L3Interface::Updated))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_L3_INTERFACE_IP_ADDRESS_ID)
                            .from(L3Interface::Table, L3Interface::IpAddressId)
                            .to(IpAddress::Table, IpAddress::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_L3_INTERFACE_VRF_ID)
                            .from(L3Interface::Table, L3Interface::VrfId)
                            .to(Vrf::Table, Vrf::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_L3_INTERFACE_DEVICE_ID)
                            .from(L3Interface::Table, L3Interface::DeviceId)
                            .to(Device::Table, Device::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_L3_INTERFACE_DEVICE_ID)
                    .table(L3Interface::Table)
                    .col(L3Interface::DeviceId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_L3_INTERFACE_DEVICE_ID)
                    .table(L3Interface::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(L3Interface::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum L3Interface {
    Table,
    Id,
    Name,
    IpAddressId,
    VrfId,
    DeviceId,
    Created,
    Updated,
}
