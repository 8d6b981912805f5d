//! Server configuration from the environment

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tracing::info;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    /// Load the demo customers, employees and tickets at startup
    pub seed_data: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment...");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, e.g. a map in tests
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address
            .parse()
            .with_context(|| format!("Failed to parse bind address {:?}", bind_address))?;

        let seed_data = lookup("SEED_DATA")
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no"))
            .unwrap_or(true);

        Ok(Self {
            bind_address,
            seed_data,
        })
    }
}
