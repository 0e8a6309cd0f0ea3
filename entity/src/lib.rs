//! SeaORM entity definitions for the IPAM schema.

pub mod prelude;

pub mod cred;
pub mod device;
pub mod ip_address;
pub mod l3_interface;
pub mod network;
pub mod network_type;
pub mod relate_network_network_type;
pub mod relate_vrf_to_device;
pub mod vlan;
pub mod vrf;
