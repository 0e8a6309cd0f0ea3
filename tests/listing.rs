use ipam::data::{
    cred::{CredRepository, NewCred},
    device::DeviceRepository,
    ip_address::IpAddressRepository,
    network::NetworkRepository,
};
use ipam_test_utils::prelude::*;

/// One credential, one device, one network, one registered address:
/// listing networks returns exactly one row whose printed form carries
/// the CIDR value.
#[tokio::test]
async fn list_networks_end_to_end() {
    let setup = TestSetup::new().await.unwrap();

    let cred = CredRepository::new(&setup.db)
        .create(NewCred {
            username: TEST_USERNAME.to_string(),
            password: TEST_PASSWORD.to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let device = DeviceRepository::new(&setup.db)
        .create(Some(TEST_DEVICE_NAME.to_string()), cred.id, None)
        .await
        .unwrap();

    let network_repo = NetworkRepository::new(&setup.db);
    let network = network_repo
        .create(TEST_PREFIX.parse().unwrap(), None, None, None)
        .await
        .unwrap();

    IpAddressRepository::new(&setup.db)
        .create(
            TEST_ADDRESS.parse().unwrap(),
            Some(network.id),
            Some(device.id),
            true,
            None,
        )
        .await
        .unwrap();

    let networks = network_repo.get_all().await.unwrap();

    assert_eq!(networks.len(), 1);
    assert!(networks[0].to_string().contains(TEST_PREFIX));
    assert!(!format!("{networks:?}").is_empty());
}

/// A prefix written through the repository reads back in canonical form.
#[tokio::test]
async fn prefix_round_trip() {
    let setup = TestSetup::new().await.unwrap();
    let network_repo = NetworkRepository::new(&setup.db);

    let created = network_repo
        .create(TEST_PREFIX.parse().unwrap(), None, None, None)
        .await
        .unwrap();

    let fetched = network_repo.get_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(fetched.network, TEST_PREFIX);
    assert_eq!(
        fetched.network.parse::<ipnetwork::IpNetwork>().unwrap(),
        TEST_PREFIX.parse::<ipnetwork::IpNetwork>().unwrap()
    );
}
