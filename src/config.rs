use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

/// Which storage backend to wire in at start-up. Picked once; nothing
/// switches backends at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    Memory,
    Database,
}

impl FromStr for StorageMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "memory" => Ok(StorageMode::Memory),
            "database" => Ok(StorageMode::Database),
            other => Err(format!("unknown storage mode: {other}")),
        }
    }
}

pub struct Config {
    pub port: u16,
    pub storage_mode: StorageMode,
    pub database_url: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("ECORAHI_PORT", "5000"),
            storage_mode: try_load("ECORAHI_STORAGE", "memory"),
            database_url: try_load("DATABASE_URL", "sqlite://ecorahi.db"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_mode_parsing() {
        assert_eq!("memory".parse::<StorageMode>().unwrap(), StorageMode::Memory);
        assert_eq!(
            "database".parse::<StorageMode>().unwrap(),
            StorageMode::Database
        );
        assert!("redis".parse::<StorageMode>().is_err());
    }
}
