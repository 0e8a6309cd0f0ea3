pub use sea_orm_migration::prelude::*;

mod m20260830_000001_create_cred_table;
mod m20260830_000002_create_vlan_table;
mod m20260830_000003_create_vrf_table;
mod m20260830_000004_create_network_type_table;
mod m20260830_000005_create_device_table;
mod m20260830_000006_create_network_table;
mod m20260830_000007_create_ip_address_table;
mod m20260830_000008_create_l3_interface_table;
mod m20260830_000009_create_relate_network_network_type_table;
mod m20260830_000010_create_relate_vrf_to_device_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260830_000001_create_cred_table::Migration),
            Box::new(m20260830_000002_create_vlan_table::Migration),
            Box::new(m20260830_000003_create_vrf_table::Migration),
            Box::new(m20260830_000004_create_network_type_table::Migration),
            Box::new(m20260830_000005_create_device_table::Migration),
            Box::new(m20260830_000006_create_network_table::Migration),
            Box::new(m20260830_000007_create_ip_address_table::Migration),
            Box::new(m20260830_000008_create_l3_interface_table::Migration),
            Box::new(m20260830_000009_create_relate_network_network_type_table::Migration),
            Box::new(m20260830_000010_create_relate_vrf_to_device_table::Migration),
        ]
    }
}
