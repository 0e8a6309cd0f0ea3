use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use chrono::Utc;
use ipnetwork::IpNetwork;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter,
};

pub struct NetworkRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NetworkRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a network from a prefix
    ///
    /// The stored `network` column is the canonical rendering of the
    /// prefix (host bits cleared), and the address, mask, length, and
    /// wildcard columns are derived from it rather than taken from the
    /// caller.
    pub async fn create(
        &self,
        prefix: IpNetwork,
        parent_network_id: Option<i32>,
        vlan_id: Option<i32>,
        description: Option<String>,
    ) -> Result<entity::network::Model, DbErr> {
        let net_addr = prefix.network();
        let net_mask = prefix.mask();

        let network = entity::network::ActiveModel {
            network: ActiveValue::Set(format!("{}/{}", net_addr, prefix.prefix())),
            net_addr: ActiveValue::Set(Some(net_addr.to_string())),
            net_mask: ActiveValue::Set(Some(net_mask.to_string())),
            mask_length: ActiveValue::Set(Some(i32::from(prefix.prefix()))),
            wildcard: ActiveValue::Set(Some(wildcard(net_mask).to_string())),
            parent_network_id: ActiveValue::Set(parent_network_id),
            vlan_id: ActiveValue::Set(vlan_id),
            description: ActiveValue::Set(description),
            created: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        network.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        network_id: i32,
    ) -> Result<Option<entity::network::Model>, DbErr> {
        entity::prelude::Network::find_by_id(network_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::network::Model>, DbErr> {
        entity::prelude::Network::find().all(self.db).await
    }

    /// Direct children of a network in the parent tree
    pub async fn get_subnets(
        &self,
        parent_network_id: i32,
    ) -> Result<Vec<entity::network::Model>, DbErr> {
        entity::prelude::Network::find()
            .filter(entity::network::Column::ParentNetworkId.eq(parent_network_id))
            .all(self.db)
            .await
    }

    /// Re-parents a network and stamps `updated`
    ///
    /// The schema does not guard against reference cycles here; the
    /// caller is trusted to keep the parent relation a forest.
    pub async fn set_parent(
        &self,
        network_id: i32,
        parent_network_id: Option<i32>,
    ) -> Result<entity::network::Model, DbErr> {
        let Some(network) = self.get_by_id(network_id).await? else {
            return Err(DbErr::RecordNotFound(format!(
                "network {network_id} not found"
            )));
        };

        let mut network: entity::network::ActiveModel = network.into();
        network.parent_network_id = ActiveValue::Set(parent_network_id);
        network.updated = ActiveValue::Set(Some(Utc::now().naive_utc()));

        network.update(self.db).await
    }

    pub async fn update_description(
        &self,
        network_id: i32,
        description: Option<String>,
    ) -> Result<entity::network::Model, DbErr> {
        let Some(network) = self.get_by_id(network_id).await? else {
            return Err(DbErr::RecordNotFound(format!(
                "network {network_id} not found"
            )));
        };

        let mut network: entity::network::ActiveModel = network.into();
        network.description = ActiveValue::Set(description);
        network.updated = ActiveValue::Set(Some(Utc::now().naive_utc()));

        network.update(self.db).await
    }

    /// Labels a network with a type through the join table
    pub async fn assign_type(
        &self,
        network_id: i32,
        network_type_id: i32,
    ) -> Result<entity::relate_network_network_type::Model, DbErr> {
        let label = entity::relate_network_network_type::ActiveModel {
            network_id: ActiveValue::Set(network_id),
            network_type_id: ActiveValue::Set(network_type_id),
            created: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        label.insert(self.db).await
    }

    pub async fn get_types(
        &self,
        network: &entity::network::Model,
    ) -> Result<Vec<entity::network_type::Model>, DbErr> {
        network
            .find_related(entity::prelude::NetworkType)
            .all(self.db)
            .await
    }
}

/// Host bits of a netmask, e.g. 255.255.255.0 -> 0.0.0.255.
fn wildcard(mask: IpAddr) -> IpAddr {
    match mask {
        IpAddr::V4(mask) => IpAddr::V4(Ipv4Addr::from(!u32::from(mask))),
        IpAddr::V6(mask) => IpAddr::V6(Ipv6Addr::from(!u128::from(mask))),
    }
}
