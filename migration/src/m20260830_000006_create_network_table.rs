use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260830_000002_create_vlan_table::Vlan;

static IDX_NETWORK_PARENT_NETWORK_ID: &str = "idx_network_parent_network_id";
static IDX_NETWORK_VLAN_ID: &str = "idx_network_vlan_id";
static FK_NETWORK_PARENT_NETWORK_ID: &str = "fk_network_parent_network_id";
static FK_NETWORK_VLAN_ID: &str = "fk_network_vlan_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The parent reference points back into this table. Nothing at the
        // schema level prevents a reference cycle; callers are trusted to
        // keep the parent relation a forest.
        manager
            .create_table(
                Table::create()
                    .table(Network::Table)
                    .if_not_exists()
                    .col(pk_auto(Network::Id))
                    .col(string_len(Network::Network, 255))
                    .col(string_len_null(Network::NetAddr, 255))
                    .col(string_len_null(Network::NetMask, 255))
                    .col(integer_null(Network::MaskLength))
                    .col(string_len_null(Network::Wildcard, 255))
                    .col(integer_null(Network::ParentNetworkId))
                    .col(integer_null(Network::VlanId))
                    .col(string_len_null(Network::Description, 255))
                    .col(timestamp(Network::Created))
                    .col(timestamp_null(Network::Updated))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_NETWORK_PARENT_NETWORK_ID)
                            .from(Network::Table, Network::ParentNetworkId)
                            .to(Network::Table, Network::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_NETWORK_VLAN_ID)
                            .from(Network::Table, Network::VlanId)
                            .to(Vlan::Table, Vlan::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_NETWORK_PARENT_NETWORK_ID)
                    .table(Network::Table)
                    .col(Network::ParentNetworkId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_NETWORK_VLAN_ID)
                    .table(Network::Table)
                    .col(Network::VlanId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_NETWORK_VLAN_ID)
                    .table(Network::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_NETWORK_PARENT_NETWORK_ID)
                    .table(Network::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Network::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Network {
    Table,
    Id,
    Network,
    NetAddr,
    NetMask,
    MaskLength,
    Wildcard,
    ParentNetworkId,
    VlanId,
    Description,
    Created,
    Updated,
}
