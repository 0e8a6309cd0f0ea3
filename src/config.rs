use crate::error::config::ConfigError;

/// Environment variable holding the database connection string.
pub static IPAM_DATABASE_VAR: &str = "IPAM_DATABASE";

pub struct Config {
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = match std::env::var(IPAM_DATABASE_VAR) {
            Ok(url) => url,
            Err(std::env::VarError::NotPresent) => {
                return Err(ConfigError::MissingEnvVar(IPAM_DATABASE_VAR.to_string()))
            }
            Err(std::env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::InvalidEnvValue {
                    var: IPAM_DATABASE_VAR.to_string(),
                    reason: "value is not valid UTF-8".to_string(),
                })
            }
        };

        Ok(Self { database_url })
    }
}
