pub use super::cred::Entity as Cred;
pub use super::device::Entity as Device;
pub use super::ip_address::Entity as IpAddress;
pub use super::l3_interface::Entity as L3Interface;
pub use super::network::Entity as Network;
pub use super::network_type::Entity as NetworkType;
pub use super::relate_network_network_type::Entity as RelateNetworkNetworkType;
pub use super::relate_vrf_to_device::Entity as RelateVrfToDevice;
pub use super::vlan::Entity as Vlan;
pub use super::vrf::Entity as Vrf;
