use std::{net::SocketAddr, path::PathBuf, time::Duration};

use resqme_ors::{ApiKey, OrsClientParams, directions_client::ORS_API_URL};
use thiserror::Error;

use crate::fallback::FallbackPolicy;

pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_HAZARD_FILE: &str = "tmp_rect_coord.txt";
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value '{value}' for {name}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug)]
pub struct Config {
    pub ors: OrsClientParams,
    pub hazard_file: PathBuf,
    pub bind_address: SocketAddr,
    pub fallback: FallbackPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::Missing("API_KEY"))?;

        let base_url = lookup("ORS_BASE_URL").unwrap_or_else(|| ORS_API_URL.to_string());

        let timeout = match lookup("ORS_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(seconds) if seconds > 0 => Duration::from_secs(seconds),
                Ok(_) => {
                    return Err(invalid("ORS_TIMEOUT_SECS", value, "must be positive"));
                }
                Err(error) => return Err(invalid("ORS_TIMEOUT_SECS", value, error)),
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let hazard_file = lookup("RESQME_HAZARD_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HAZARD_FILE));

        let bind_address = lookup("RESQME_BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address
            .parse::<SocketAddr>()
            .map_err(|error| invalid("RESQME_BIND_ADDRESS", bind_address.clone(), error))?;

        let fallback = match lookup("RESQME_FALLBACK") {
            Some(value) => value
                .parse::<FallbackPolicy>()
                .map_err(|error| invalid("RESQME_FALLBACK", value.clone(), error))?,
            None => FallbackPolicy::default(),
        };

        Ok(Config {
            ors: OrsClientParams {
                api_key: ApiKey::new(api_key),
                base_url,
                timeout,
            },
            hazard_file,
            bind_address,
            fallback,
        })
    }
}

fn invalid(name: &'static str, value: String, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        name,
        value,
        reason: reason.to_string(),
    }
}
