use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260830_000005_create_device_table::Device, m20260830_000006_create_network_table::Network,
};

static IDX_IP_ADDRESS_NETWORK_ID: &str = "idx_ip_address_network_id";
static IDX_IP_ADDRESS_DEVICE_ID: &str = "idx_ip_address_device_id";
static UDX_IP_ADDRESS_ADDRESS_DEVICE: &str = "udx_ip_address_ip_address_device_id";
static FK_IP_ADDRESS_NETWORK_ID: &str = "fk_ip_address_network_id";
static FK_IP_ADDRESS_DEVICE_ID: &str = "fk_ip_address_device_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(IpAddress::Table)
                    .if_not_exists()
                    .col(pk_auto(IpAddress::Id))
                    .col(string_len(IpAddress::IpAddress, 255))
                    .col(integer_null(IpAddress::NetworkId))
                    .col(integer_null(IpAddress::DeviceId))
                    .col(boolean(IpAddress::IsMgmt).default(false))
                    .col(string_len_null(IpAddress::Description, 255))
                    .col(timestamp(IpAddress::Created))
                    .col(timestamp_null(IpAddress::Updated))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_IP_ADDRESS_NETWORK_ID)
                            .from(IpAddress::Table, IpAddress::NetworkId)
                            .to(Network::Table, Network::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_IP_ADDRESS_DEVICE_ID)
                            .from(IpAddress::Table, IpAddress::DeviceId)
                            .to(Device::Table, Device::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_IP_ADDRESS_NETWORK_ID)
                    .table(IpAddress::Table)
                    .col(IpAddress::NetworkId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_IP_ADDRESS_DEVICE_ID)
                    .table(IpAddress::Table)
                    .col(IpAddress::DeviceId)
                    .to_owned(),
            )
            .await?;

        // A device may not register the same address twice.
        manager
            .create_index(
                Index::create()
                    .name(UDX_IP_ADDRESS_ADDRESS_DEVICE)
                    .table(IpAddress::Table)
                    .col(IpAddress::IpAddress)
                    .col(IpAddress::DeviceId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(UDX_IP_ADDRESS_ADDRESS_DEVICE)
                    .table(IpAddress::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_IP_ADDRESS_DEVICE_ID)
                    .table(IpAddress::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_IP_ADDRESS_NETWORK_ID)
                    .table(IpAddress::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(IpAddress::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum IpAddress {
    Table,
    Id,
    IpAddress,
    NetworkId,
    DeviceId,
    IsMgmt,
    Description,
    Created,
    Updated,
}
