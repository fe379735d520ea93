//! Configuration for the products API

use core_config::{server::ServerConfig, Environment, FromEnv};

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;

        Ok(Self {
            server,
            environment,
        })
    }
}
