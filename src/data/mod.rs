//! Data access layer: one repository per entity, each borrowing the
//! caller's [`sea_orm::DatabaseConnection`].

pub mod cred;
pub mod device;
pub mod ip_address;
pub mod l3_interface;
pub mod network;
pub mod network_type;
pub mod vlan;
pub mod vrf;
