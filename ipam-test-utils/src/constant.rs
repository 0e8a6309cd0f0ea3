pub static TEST_USERNAME: &str = "admin";
pub static TEST_PASSWORD: &str = "x";
pub static TEST_DEVICE_NAME: &str = "r1";
pub static TEST_PREFIX: &str = "10.0.0.0/24";
pub static TEST_ADDRESS: &str = "10.0.0.1";
