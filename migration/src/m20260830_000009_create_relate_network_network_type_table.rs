use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260830_000004_create_network_type_table::NetworkType,
    m20260830_000006_create_network_table::Network,
};

static FK_RELATE_NETWORK_NETWORK_TYPE_NETWORK_ID: &str =
    "fk_relate_network_network_type_network_id";
static FK_RELATE_NETWORK_NETWORK_TYPE_NETWORK_TYPE_ID: &str =
    "fk_relate_network_network_type_network_type_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RelateNetworkNetworkType::Table)
                    .if_not_exists()
                    .col(integer(RelateNetworkNetworkType::NetworkId))
                    .col(integer(RelateNetworkNetworkType::NetworkTypeId))
                    .col(timestamp(RelateNetworkNetworkType::Created))
                    .col(timestamp_null(RelateNetworkNetworkType::Updated))
                    .primary_key(
                        Index::create()
                            .col(RelateNetworkNetworkType::NetworkId)
                            .col(RelateNetworkNetworkType::NetworkTypeId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RELATE_NETWORK_NETWORK_TYPE_NETWORK_ID)
                            .from(
                                RelateNetworkNetworkType::Table,
                                RelateNetworkNetworkType::NetworkId,
                            )
                            .to(Network::Table, Network::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RELATE_NETWORK_NETWORK_TYPE_NETWORK_TYPE_ID)
                            .from(
                                RelateNetworkNetworkType::Table,
                                RelateNetworkNetworkType::NetworkTypeId,
                            )
                            .to(NetworkType::Table, NetworkType::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(RelateNetworkNetworkType::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RelateNetworkNetworkType {
    Table,
    NetworkId,
    NetworkTypeId,
    Created,
    Updated,
}
